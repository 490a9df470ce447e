//! Display bring-up state machine
//!
//! Tracks where the controller is in its power-up sequence. The driver
//! feeds events as each phase completes; writes are only legal once the
//! machine reaches [`InitState::DisplayOn`].

pub mod events;
pub mod machine;

pub use events::InitEvent;
pub use machine::InitState;
