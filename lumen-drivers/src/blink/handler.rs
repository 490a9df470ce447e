//! Timer update interrupt handler

use lumen_hal::{OutputPin, UpdateEvent};

/// Interrupt-side LED toggler
///
/// Bounded and non-blocking: one flag check, one flag clear, one toggle.
pub struct LedBlinker<T, L> {
    timer: T,
    led: L,
}

impl<T: UpdateEvent, L: OutputPin> LedBlinker<T, L> {
    /// Create a new blinker from the interrupt half of the timer
    pub fn new(timer: T, led: L) -> Self {
        Self { timer, led }
    }

    /// Handle a timer interrupt
    ///
    /// Clears the update flag before touching the LED so the interrupt
    /// cannot re-enter, then toggles once. However many update events
    /// piled up since the last call, the LED toggles at most once.
    ///
    /// Returns true if the update flag was pending.
    pub fn on_update(&mut self) -> bool {
        if !self.timer.is_update_pending() {
            return false;
        }
        self.timer.clear_update();
        self.led.toggle();
        true
    }

    /// Get access to the LED
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Give back the timer half and the LED
    pub fn release(self) -> (T, L) {
        (self.timer, self.led)
    }
}
