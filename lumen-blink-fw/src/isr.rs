//! TIM2 update interrupt
//!
//! The handler state is parked in a critical-section mutex before the
//! interrupt is unmasked, so the handler never runs without it.

use core::cell::RefCell;

use embassy_stm32::interrupt;
use embassy_stm32::interrupt::InterruptExt;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use lumen_drivers::blink::LedBlinker;
use lumen_hal_stm32f1::{OutputLine, Tim2Update};

type Blinker = LedBlinker<Tim2Update, OutputLine<'static>>;

static BLINKER: Mutex<CriticalSectionRawMutex, RefCell<Option<Blinker>>> =
    Mutex::new(RefCell::new(None));

/// Hand the blinker to the interrupt and unmask TIM2
pub fn install(blinker: Blinker) {
    BLINKER.lock(|cell| cell.replace(Some(blinker)));
    interrupt::TIM2.unpend();
    // SAFETY: the handler only touches state installed above
    unsafe { interrupt::TIM2.enable() };
}

#[interrupt]
fn TIM2() {
    BLINKER.lock(|cell| {
        if let Some(blinker) = cell.borrow_mut().as_mut() {
            blinker.on_update();
        }
    });
}
