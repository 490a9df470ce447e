//! Periodic timer abstractions
//!
//! A periodic timer is split into two single-owner halves so the
//! single-writer rule is enforced by ownership:
//!
//! - [`UpdateEvent`] lives in the interrupt handler. It only observes and
//!   acknowledges the update (overflow) flag.
//! - [`PeriodControl`] lives in the main loop. It only reprograms the
//!   reload value.
//!
//! A reload written while a period is in flight takes effect at the next
//! update event unless the implementation forces one.

/// Interrupt-side half of a periodic timer
pub trait UpdateEvent {
    /// Check whether the update flag is pending
    fn is_update_pending(&self) -> bool;

    /// Acknowledge the update flag
    ///
    /// Must be called before the handler does any other work, otherwise
    /// the interrupt re-fires as soon as the handler returns.
    fn clear_update(&mut self);
}

/// Main-loop half of a periodic timer
pub trait PeriodControl {
    /// Program the auto-reload register (counter period minus one)
    fn set_reload(&mut self, reload: u16);

    /// Current auto-reload value
    fn reload(&self) -> u16;
}
