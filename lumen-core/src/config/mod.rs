//! Configuration types
//!
//! Board-agnostic configuration structures. Defaults carry the values the
//! reference board ships with; firmware overrides individual fields.

pub mod blink;
pub mod display;

pub use blink::*;
pub use display::*;
