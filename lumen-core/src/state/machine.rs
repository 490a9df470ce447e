//! Bring-up state definition

use super::events::InitEvent;

/// Controller bring-up states
///
/// ```text
/// PoweredOff ──PowerUp──▶ Resetting ──ResetReleased──▶ Configuring
///      ▲                                                   │
///      │                                             SequenceSent
///      │                                                   ▼
///      └───────────── Fault (any state) ◀──────────── DisplayOn
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    /// Not brought up, or bring-up failed
    #[default]
    PoweredOff,
    /// Reset line pulsed, waiting for the controller to settle
    Resetting,
    /// Configuration command sequence in progress
    Configuring,
    /// Display running; terminal state of bring-up
    DisplayOn,
}

impl InitState {
    /// Check if framebuffer writes are allowed
    pub fn is_ready(&self) -> bool {
        matches!(self, InitState::DisplayOn)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: InitEvent) -> Self {
        use InitEvent::*;
        use InitState::*;

        match (self, event) {
            // A fault anywhere abandons bring-up
            (_, Fault) => PoweredOff,

            // Bring-up can be re-invoked from any state
            (_, PowerUp) => Resetting,

            (Resetting, ResetReleased) => Configuring,
            (Configuring, SequenceSent) => DisplayOn,

            // Out-of-order events leave the state unchanged
            _ => self,
        }
    }
}
