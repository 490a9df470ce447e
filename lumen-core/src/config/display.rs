//! Display controller configuration
//!
//! Geometry and bring-up parameters for a 128x64 SSD1306-class controller
//! on a 4-wire serial interface.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of 8-pixel horizontal bands (pages)
pub const PAGE_COUNT: u8 = 8;

/// Number of columns per page
pub const COLUMN_COUNT: usize = 128;

/// Highest column address
pub const LAST_COLUMN: u8 = (COLUMN_COUNT - 1) as u8;

/// Highest page address
pub const LAST_PAGE: u8 = PAGE_COUNT - 1;

/// Columns per pattern group (the pattern rule sees `column >> 3`)
pub const COLUMNS_PER_GROUP: usize = 8;

/// How chip-select is sequenced around bytes
///
/// Both strategies only ever change mode-select while chip-select is
/// deasserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FramingStrategy {
    /// Assert and release chip-select around every byte
    #[default]
    PerByte,
    /// Keep chip-select asserted across a burst of same-mode bytes
    HoldSelect,
}

/// How the addressing window is issued for framebuffer writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressingStrategy {
    /// Re-issue page and column window before every page
    #[default]
    PerPage,
    /// Issue the full window once and stream every page back to back
    SingleWindow,
}

/// Display controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Contrast (0x81 argument)
    pub contrast: u8,
    /// Charge pump setting (0x8D argument, 0x14 = enabled)
    pub charge_pump: u8,
    /// COM pin hardware configuration (0xDA argument)
    pub com_pins: u8,
    /// Pre-charge period (0xD9 argument)
    pub precharge: u8,
    /// VCOMH deselect level (0xDB argument)
    pub vcomh: u8,
    /// Minimum time the reset line is held low
    pub reset_pulse_ms: u32,
    /// Minimum time after reset release before the first command
    pub reset_settle_ms: u32,
    /// Chip-select sequencing
    pub framing: FramingStrategy,
    /// Window issue strategy for framebuffer writes
    pub addressing: AddressingStrategy,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contrast: 0xCF,
            charge_pump: 0x14,
            com_pins: 0x12,
            precharge: 0xF1,
            vcomh: 0x40,
            reset_pulse_ms: 10,
            reset_settle_ms: 10,
            framing: FramingStrategy::PerByte,
            addressing: AddressingStrategy::PerPage,
        }
    }
}

impl DisplayConfig {
    /// Same configuration with a different framing strategy
    pub fn with_framing(mut self, framing: FramingStrategy) -> Self {
        self.framing = framing;
        self
    }

    /// Same configuration with a different addressing strategy
    pub fn with_addressing(mut self, addressing: AddressingStrategy) -> Self {
        self.addressing = addressing;
        self
    }
}
