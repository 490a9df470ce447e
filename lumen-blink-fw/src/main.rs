//! Lumen Blink Firmware
//!
//! Blinks the Blue Pill LED from the TIM2 update interrupt. Each press of
//! the button selects the next blink period from the configured table.

#![no_std]
#![no_main]

mod board;
mod isr;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use lumen_core::config::BlinkConfig;
use lumen_drivers::blink::{BlinkControl, LedBlinker};
use lumen_hal_stm32f1::start_tim2;

/// Button sampling interval
const POLL_INTERVAL_MS: u64 = 1;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lumen Blink Firmware starting...");

    let p = embassy_stm32::init(lumen_hal_stm32f1::clocks::config());

    let config = BlinkConfig::default();
    unwrap!(config.validate());
    info!("Blink periods: {:?}", config.periods.as_slice());

    let led = board::led(p.PC13);
    let button = board::button(p.PA0);

    let first_reload = config.periods[0] - 1;
    let (update, reload) = start_tim2(p.TIM2, config.prescaler_register(), first_reload);

    isr::install(LedBlinker::new(update, led));
    let mut control = unwrap!(BlinkControl::new(&config, reload));

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        ticker.next().await;
        if control.poll(&button, Instant::now().as_millis()) {
            info!("Blink period {}", control.index());
        }
    }
}
