//! Lumen Display Firmware
//!
//! Brings up an SSD1306 128x64 OLED on SPI1 of a Blue Pill (STM32F103C8),
//! clears it and draws a checkerboard.

#![no_std]
#![no_main]

mod board;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use lumen_core::config::DisplayConfig;
use lumen_core::pattern::Checker;
use lumen_drivers::ssd1306::Ssd1306;

/// Bring-up attempts before giving up
const INIT_ATTEMPTS: u8 = 3;

/// Pause between bring-up attempts
const RETRY_DELAY_MS: u64 = 100;

/// Heartbeat interval
const HEARTBEAT_MS: u64 = 1000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lumen Display Firmware starting...");

    let p = embassy_stm32::init(lumen_hal_stm32f1::clocks::config());
    let lines = board::display_lines(p);

    let mut display = Ssd1306::new(
        lines.bus,
        lines.cs,
        lines.dc,
        lines.rst,
        DisplayConfig::default(),
    );

    let mut delay = Delay;
    let mut attempt = 0;
    while let Err(e) = display.init(&mut delay) {
        attempt += 1;
        warn!("Display bring-up attempt {} failed: {:?}", attempt, e);
        if attempt >= INIT_ATTEMPTS {
            break;
        }
        Timer::after(Duration::from_millis(RETRY_DELAY_MS)).await;
    }

    if display.state().is_ready() {
        info!("OLED initialized");
        if let Err(e) = display.clear() {
            error!("Clear failed: {:?}", e);
        }
        match display.fill_pattern(&Checker::default()) {
            Ok(()) => info!("Checkerboard drawn"),
            Err(e) => error!("Pattern fill failed: {:?}", e),
        }
    } else {
        error!("Display unavailable after {} attempts", INIT_ATTEMPTS);
    }

    let mut heartbeat = Ticker::every(Duration::from_millis(HEARTBEAT_MS));
    loop {
        heartbeat.next().await;
        trace!("Display state: {:?}", display.state());
    }
}
