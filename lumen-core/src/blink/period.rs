//! Blink period table and index

use heapless::Vec;

use crate::config::{BlinkConfig, ConfigError, MAX_PERIODS};

/// Selects one entry of a fixed ordered period table
///
/// The index only moves forward and wraps to 0 past the end.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodSelector {
    periods: Vec<u16, MAX_PERIODS>,
    index: usize,
}

impl PeriodSelector {
    /// Create a selector at index 0
    pub fn new(config: &BlinkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            periods: config.periods.clone(),
            index: 0,
        })
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of table entries
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false; an empty table is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Current period in timer ticks
    pub fn period(&self) -> u16 {
        self.periods[self.index]
    }

    /// Auto-reload register value for the current period
    pub fn reload_value(&self) -> u16 {
        self.period() - 1
    }

    /// Step to the next period, wrapping to the first
    pub fn advance(&mut self) -> u16 {
        self.index += 1;
        if self.index >= self.periods.len() {
            self.index = 0;
        }
        self.period()
    }
}
