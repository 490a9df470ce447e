//! SSD1306-class OLED controller driver
//!
//! Driver for 128x64 monochrome OLED controllers on a write-only 4-wire
//! serial interface (clock, data, chip-select, data/command, reset).
//!
//! # Layers
//!
//! - [`cmd`]: opcode constants and the fixed bring-up byte sequence
//! - [`framer`]: chip-select and data/command sequencing around bytes
//! - [`driver`]: reset, bring-up, and page-addressed framebuffer writes
//!
//! Display memory is 8 pages × 128 columns; each data byte covers 8
//! vertically stacked pixels of one column. The driver keeps no
//! framebuffer; bytes are produced on the fly.

pub mod cmd;
pub mod driver;
pub mod error;
pub mod framer;

pub use driver::Ssd1306;
pub use error::DisplayError;
pub use framer::{ByteMode, Framer};
