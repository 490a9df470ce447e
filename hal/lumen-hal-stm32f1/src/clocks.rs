//! Clock tree for the Blue Pill boards
//!
//! HSI/2 through the PLL at x16 gives a 64 MHz system clock without relying
//! on the external crystal. APB1 runs at 32 MHz, so the APB1 timers
//! (TIM2-TIM4) are clocked at 64 MHz and a prescaler of 64000 yields a
//! 1 ms tick.

use embassy_stm32::rcc::{AHBPrescaler, APBPrescaler, Pll, PllMul, PllPreDiv, PllSource, Sysclk};
use embassy_stm32::Config;

/// embassy-stm32 init configuration for a 64 MHz system clock
pub fn config() -> Config {
    let mut config = Config::default();
    config.rcc.pll = Some(Pll {
        src: PllSource::HSI,
        prediv: PllPreDiv::DIV2,
        mul: PllMul::MUL16,
    });
    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV2;
    config.rcc.apb2_pre = APBPrescaler::DIV1;
    config
}
