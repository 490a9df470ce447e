//! Display driver errors

use lumen_hal::BusError;

/// Errors from the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Transmit-ready flag never asserted; the transfer was abandoned
    BusTimeout,
    /// Any other bus fault
    Bus(BusError),
    /// Bring-up did not complete; the controller is left powered off
    InitializationFailed(BusError),
    /// Framebuffer access before bring-up completed
    NotInitialized,
    /// Page index outside 0-7
    InvalidPage,
}

impl DisplayError {
    /// Check if the error left the controller in an unknown state
    pub fn is_fatal(&self) -> bool {
        matches!(self, DisplayError::InitializationFailed(_))
    }
}

impl From<BusError> for DisplayError {
    fn from(e: BusError) -> Self {
        match e {
            BusError::Timeout => DisplayError::BusTimeout,
            other => DisplayError::Bus(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_bus_timeout() {
        assert_eq!(DisplayError::from(BusError::Timeout), DisplayError::BusTimeout);
        assert_eq!(
            DisplayError::from(BusError::Overrun),
            DisplayError::Bus(BusError::Overrun)
        );
    }

    #[test]
    fn test_only_bring_up_failure_is_fatal() {
        assert!(DisplayError::InitializationFailed(BusError::Timeout).is_fatal());
        assert!(!DisplayError::BusTimeout.is_fatal());
        assert!(!DisplayError::NotInitialized.is_fatal());
    }
}
