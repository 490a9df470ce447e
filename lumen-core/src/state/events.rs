//! Bring-up events

/// Events that drive the bring-up state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitEvent {
    /// Caller requested bring-up; reset line driven low
    PowerUp,
    /// Reset pulse and settle time elapsed
    ResetReleased,
    /// Configuration sequence and display-on command transmitted
    SequenceSent,
    /// A transfer failed during bring-up
    Fault,
}
