//! LED blinker driven by a periodic timer
//!
//! The blink firmware has two execution contexts:
//!
//! - The timer interrupt, which owns [`LedBlinker`]: it acknowledges the
//!   update flag and toggles the LED, nothing else.
//! - The main loop, which owns [`BlinkControl`]: it samples the button and
//!   reprograms the timer period on a press.
//!
//! The two halves of the timer are separate handles, so neither context
//! can touch the other's registers.

pub mod control;
pub mod handler;

pub use control::BlinkControl;
pub use handler::LedBlinker;
