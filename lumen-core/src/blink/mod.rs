//! Blink rate cycling with a polled button
//!
//! The main loop samples the button once per iteration. A falling edge
//! (released → pressed, the button pulls the line to ground) advances the
//! period index and yields the new timer reload value. After an accepted
//! press the button is ignored for a settle window so contact bounce does
//! not register as extra presses.
//!
//! This is a two-state edge detector, not a filtering debounce: bounce
//! that ends before the settle window closes is dropped, bounce that
//! outlasts it is seen as a new press.

pub mod edge;
pub mod period;

pub use edge::ButtonEdge;
pub use period::PeriodSelector;

use crate::config::{BlinkConfig, ConfigError};

/// Main-loop half of the blink firmware
#[derive(Debug, Clone)]
pub struct BlinkLoop {
    periods: PeriodSelector,
    button: ButtonEdge,
}

impl BlinkLoop {
    /// Create the loop state from a configuration
    pub fn new(config: &BlinkConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            periods: PeriodSelector::new(config)?,
            button: ButtonEdge::new(config.settle_ms),
        })
    }

    /// Reload value for the current period
    pub fn reload_value(&self) -> u16 {
        self.periods.reload_value()
    }

    /// Current period index
    pub fn index(&self) -> usize {
        self.periods.index()
    }

    /// Feed one button sample
    ///
    /// - `level_high`: raw line level (high = released)
    /// - `now_ms`: monotonic time of the sample
    ///
    /// Returns the reload value to program when a press was accepted.
    pub fn poll(&mut self, level_high: bool, now_ms: u64) -> Option<u16> {
        if self.button.sample(level_high, now_ms) {
            self.periods.advance();
            Some(self.periods.reload_value())
        } else {
            None
        }
    }
}
