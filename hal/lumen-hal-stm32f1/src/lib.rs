//! STM32F1-specific HAL for the Lumen firmware
//!
//! This crate implements the `lumen-hal` traits on top of embassy-stm32
//! for the STM32F103 family:
//!
//! - STM32F103C8 (Blue Pill)
//!
//! # Features
//!
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Firmware initialises embassy with [`clocks::config`], then wraps pins in
//! [`gpio::OutputLine`]/[`gpio::InputLine`] and the SPI peripheral in
//! [`spi::SpiTx`], which drives the data register directly. TIM2 is
//! started and split by [`timer::start_tim2`].

#![no_std]
#![deny(unsafe_code)]

pub mod clocks;
pub mod gpio;
pub mod spi;
pub mod timer;

pub use gpio::{InputLine, OutputLine};
pub use spi::SpiTx;
pub use timer::{start_tim2, Tim2Reload, Tim2Update};
