//! Button falling-edge detector with a settle window

/// Falling-edge detector for an active-low button on a pulled-up line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    /// Level seen at the previous accepted sample (true = released)
    previous_high: bool,
    /// Settle window length after a press
    settle_ms: u32,
    /// Samples before this instant are ignored
    settle_until: Option<u64>,
}

impl ButtonEdge {
    /// Create a detector; the button is assumed released at start
    pub fn new(settle_ms: u32) -> Self {
        Self {
            previous_high: true,
            settle_ms,
            settle_until: None,
        }
    }

    /// Check if `now_ms` falls inside the settle window
    pub fn is_settling(&self, now_ms: u64) -> bool {
        matches!(self.settle_until, Some(until) if now_ms < until)
    }

    /// Feed one sample; returns true on an accepted press edge
    ///
    /// Samples inside the settle window are dropped without updating the
    /// previous level, as if the loop had been blocked in a delay.
    pub fn sample(&mut self, level_high: bool, now_ms: u64) -> bool {
        if self.is_settling(now_ms) {
            return false;
        }
        self.settle_until = None;

        let pressed = self.previous_high && !level_high;
        self.previous_high = level_high;

        if pressed {
            self.settle_until = Some(now_ms.saturating_add(self.settle_ms as u64));
        }

        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falling_edge_only() {
        let mut edge = ButtonEdge::new(0);
        assert!(!edge.sample(true, 0));
        assert!(edge.sample(false, 1));
        // Still held
        assert!(!edge.sample(false, 2));
        // Rising edge is not a press
        assert!(!edge.sample(true, 3));
        assert!(edge.sample(false, 4));
    }

    #[test]
    fn test_pressed_at_boot_is_a_press() {
        // Previous level starts released, so a held button registers once
        let mut edge = ButtonEdge::new(50);
        assert!(edge.sample(false, 0));
        assert!(!edge.sample(false, 100));
    }

    #[test]
    fn test_settle_window() {
        let mut edge = ButtonEdge::new(50);
        assert!(edge.sample(false, 1000));
        assert!(edge.is_settling(1049));
        assert!(!edge.sample(true, 1010));
        assert!(!edge.sample(false, 1040));
        assert!(!edge.is_settling(1050));

        // Bounce outlasting the window is a new press
        assert!(!edge.sample(true, 1050));
        assert!(edge.sample(false, 1060));
    }
}
