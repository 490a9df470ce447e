//! Hardware driver implementations
//!
//! This crate provides concrete drivers written against the `lumen-hal`
//! traits and the logic in `lumen-core`:
//!
//! - SSD1306-class OLED controller on a 4-wire serial bus (framer,
//!   bring-up sequence, page-addressed framebuffer writes)
//! - Timer-driven LED blinker and its button-driven period control

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod ssd1306;
