//! TIM2 periodic update timer for STM32F1
//!
//! The timer is started once and split into its interrupt half
//! ([`Tim2Update`]) and its main-loop half ([`Tim2Reload`]). Both halves
//! only exist after [`start_tim2`] consumed the peripheral, so each
//! register is written from exactly one context.

use embassy_stm32::pac;
use embassy_stm32::peripherals::TIM2;
use embassy_stm32::{rcc, Peri};
use lumen_hal::{PeriodControl, UpdateEvent};

/// Interrupt-side half of TIM2
pub struct Tim2Update {
    _private: (),
}

/// Main-loop half of TIM2
pub struct Tim2Reload {
    _private: (),
}

/// Enable TIM2 and start it counting with update interrupts enabled
///
/// `prescaler` is the raw register value (divider minus one); `reload`
/// is the initial auto-reload value. The NVIC line is left for the
/// firmware to unmask once its handler state is in place.
pub fn start_tim2(_tim: Peri<'static, TIM2>, prescaler: u16, reload: u16) -> (Tim2Update, Tim2Reload) {
    rcc::enable_and_reset::<TIM2>();

    let regs = pac::TIM2;
    regs.cr1().modify(|w| w.set_cen(false));
    regs.psc().write_value(prescaler);
    regs.arr().write(|w| w.set_arr(reload));
    regs.cr1().modify(|w| w.set_arpe(true));
    // Load prescaler and reload now, then drop the update this raised
    regs.egr().write(|w| w.set_ug(true));
    regs.sr().modify(|w| w.set_uif(false));
    regs.dier().modify(|w| w.set_uie(true));
    regs.cr1().modify(|w| w.set_cen(true));

    #[cfg(feature = "defmt")]
    defmt::debug!("TIM2 started: psc={} arr={}", prescaler, reload);

    (Tim2Update { _private: () }, Tim2Reload { _private: () })
}

impl UpdateEvent for Tim2Update {
    fn is_update_pending(&self) -> bool {
        pac::TIM2.sr().read().uif()
    }

    fn clear_update(&mut self) {
        pac::TIM2.sr().modify(|w| w.set_uif(false));
    }
}

impl PeriodControl for Tim2Reload {
    /// Latches immediately: the forced update restarts the count and
    /// raises one update interrupt
    fn set_reload(&mut self, reload: u16) {
        let regs = pac::TIM2;
        regs.arr().write(|w| w.set_arr(reload));
        regs.egr().write(|w| w.set_ug(true));
    }

    fn reload(&self) -> u16 {
        pac::TIM2.arr().read().arr()
    }
}
