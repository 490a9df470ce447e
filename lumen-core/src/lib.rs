//! Board-agnostic core logic for the Lumen firmware
//!
//! This crate contains the logic that does not depend on specific
//! hardware implementations:
//!
//! - Display bring-up state machine
//! - Framebuffer pattern rules
//! - Blink period selection and button edge detection
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod blink;
pub mod config;
pub mod pattern;
pub mod state;
