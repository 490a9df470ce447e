//! Blue Pill wiring for the blinker
//!
//! - PC13: on-board LED (active low)
//! - PA0: push button to ground, internal pull-up

use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::peripherals::{PA0, PC13};
use embassy_stm32::Peri;
use lumen_hal_stm32f1::{InputLine, OutputLine};

/// Status LED, starting off
pub fn led(pin: Peri<'static, PC13>) -> OutputLine<'static> {
    OutputLine::new(Output::new(pin, Level::High, Speed::Low))
}

/// Rate-select button (pressed = low)
pub fn button(pin: Peri<'static, PA0>) -> InputLine<'static> {
    InputLine::new(Input::new(pin, Pull::Up))
}
