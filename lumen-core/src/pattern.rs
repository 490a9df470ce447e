//! Framebuffer pattern rules
//!
//! The display driver holds no framebuffer; pattern bytes are computed on
//! the fly from the page and the column group (`column >> 3`, 16 groups of
//! 8 columns). Each byte covers 8 vertically stacked pixels.

use crate::config::COLUMNS_PER_GROUP;

/// Rule that yields the byte to write at a page and column group
///
/// Rules must be pure: the same `(page, group)` always yields the same
/// byte, so redrawing with an unchanged rule is idempotent.
pub trait PatternRule {
    /// Byte for `page` (0-7) and column `group` (0-15)
    fn byte_at(&self, page: u8, group: u8) -> u8;

    /// Byte for `page` and absolute `column` (0-127)
    fn byte_at_column(&self, page: u8, column: u8) -> u8 {
        self.byte_at(page, column / COLUMNS_PER_GROUP as u8)
    }
}

impl<F> PatternRule for F
where
    F: Fn(u8, u8) -> u8,
{
    fn byte_at(&self, page: u8, group: u8) -> u8 {
        self(page, group)
    }
}

/// 8x8 checkerboard: alternates two bytes on the parity of `page + group`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Checker {
    /// Byte for cells where `page + group` is even
    pub even: u8,
    /// Byte for cells where `page + group` is odd
    pub odd: u8,
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            even: 0xFF,
            odd: 0x00,
        }
    }
}

impl PatternRule for Checker {
    fn byte_at(&self, page: u8, group: u8) -> u8 {
        if (page as u16 + group as u16) % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Same byte everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Solid(pub u8);

impl PatternRule for Solid {
    fn byte_at(&self, _page: u8, _group: u8) -> u8 {
        self.0
    }
}
