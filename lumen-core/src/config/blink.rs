//! Blink firmware configuration

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum entries in the blink period table
pub const MAX_PERIODS: usize = 8;

/// Default blink periods in timer ticks, fastest first
///
/// Only the ratios matter; with the default prescaler one tick is 1 ms.
pub const DEFAULT_PERIODS: [u16; 4] = [250, 500, 1000, 2000];

/// Default prescaler: 64 MHz timer clock divided down to 1 kHz
pub const DEFAULT_PRESCALER: u16 = 64_000;

/// Default settle window after an accepted button press
pub const DEFAULT_SETTLE_MS: u32 = 50;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Period table has no entries
    EmptyPeriodTable,
    /// A period of zero ticks cannot be programmed (reload is period - 1)
    ZeroPeriod,
    /// More periods than the table holds
    TooManyPeriods,
}

/// Blink/debounce loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlinkConfig {
    /// Ordered period table in timer ticks
    pub periods: Vec<u16, MAX_PERIODS>,
    /// Timer prescaler (divider, not the register value)
    pub prescaler: u16,
    /// Window after a press during which the button is not sampled
    pub settle_ms: u32,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        let mut periods = Vec::new();
        // DEFAULT_PERIODS is shorter than MAX_PERIODS
        let _ = periods.extend_from_slice(&DEFAULT_PERIODS);
        Self {
            periods,
            prescaler: DEFAULT_PRESCALER,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

impl BlinkConfig {
    /// Build a configuration from a period slice
    pub fn with_periods(periods: &[u16]) -> Result<Self, ConfigError> {
        let mut table = Vec::new();
        table
            .extend_from_slice(periods)
            .map_err(|_| ConfigError::TooManyPeriods)?;
        let config = Self {
            periods: table,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every entry can be programmed into the timer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.periods.is_empty() {
            return Err(ConfigError::EmptyPeriodTable);
        }
        if self.periods.contains(&0) {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }

    /// Prescaler register value (divider minus one)
    pub fn prescaler_register(&self) -> u16 {
        self.prescaler.saturating_sub(1)
    }
}
