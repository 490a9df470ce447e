//! Main-loop blink period control

use lumen_core::blink::BlinkLoop;
use lumen_core::config::{BlinkConfig, ConfigError};
use lumen_hal::{InputPin, PeriodControl};

/// Main-loop side of the blinker
///
/// Owns the reload half of the timer and the period index; the interrupt
/// handler reads neither.
pub struct BlinkControl<P> {
    timer: P,
    state: BlinkLoop,
}

impl<P: PeriodControl> BlinkControl<P> {
    /// Create the control and program the first period
    pub fn new(config: &BlinkConfig, mut timer: P) -> Result<Self, ConfigError> {
        let state = BlinkLoop::new(config)?;
        timer.set_reload(state.reload_value());
        Ok(Self { timer, state })
    }

    /// Current period index
    pub fn index(&self) -> usize {
        self.state.index()
    }

    /// Sample the button once
    ///
    /// On an accepted press the next period is programmed into the timer.
    /// Returns true if the period changed.
    pub fn poll<B: InputPin>(&mut self, button: &B, now_ms: u64) -> bool {
        match self.state.poll(button.is_high(), now_ms) {
            Some(reload) => {
                self.timer.set_reload(reload);
                #[cfg(feature = "defmt")]
                defmt::debug!("blink period {} -> reload {}", self.state.index(), reload);
                true
            }
            None => false,
        }
    }

    /// Get access to the reload half of the timer
    pub fn timer(&self) -> &P {
        &self.timer
    }
}
