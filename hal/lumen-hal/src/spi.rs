//! Synchronous serial bus abstractions
//!
//! The display path only ever clocks bytes out, so the bus is modelled as
//! a byte transmitter. Select and mode lines are plain GPIO owned by the
//! framer, never by the bus.

/// Errors from a serial transmit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Transfer did not complete within the configured wait
    Timeout,
    /// Peripheral dropped out of master mode
    ModeFault,
    /// Data register written while still full
    Overrun,
}

/// Byte-wise serial transmitter (bus master, transmit only)
pub trait SerialTx {
    /// Transmit one byte
    ///
    /// Blocks until the byte has been clocked out. The wait is bounded;
    /// implementations return [`BusError::Timeout`] instead of spinning
    /// forever.
    fn transmit(&mut self, byte: u8) -> Result<(), BusError>;

    /// Transmit a run of bytes, stopping at the first failure
    fn transmit_all(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        for &byte in bytes {
            self.transmit(byte)?;
        }
        Ok(())
    }
}

impl<T: SerialTx + ?Sized> SerialTx for &mut T {
    fn transmit(&mut self, byte: u8) -> Result<(), BusError> {
        (**self).transmit(byte)
    }
}

/// Snapshot of a full-duplex SPI status register
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiStatus {
    /// Transmit buffer empty (TXE)
    pub tx_empty: bool,
    /// Receive buffer holds a word (RXNE)
    pub rx_ready: bool,
    /// Overrun (OVR)
    pub overrun: bool,
    /// Mode fault (MODF)
    pub mode_fault: bool,
}

impl SpiStatus {
    fn fault(&self) -> Option<BusError> {
        if self.mode_fault {
            Some(BusError::ModeFault)
        } else if self.overrun {
            Some(BusError::Overrun)
        } else {
            None
        }
    }
}

/// Register-level access to a full-duplex SPI peripheral
pub trait SpiRegisters {
    /// Read the status flags
    fn status(&self) -> SpiStatus;

    /// Write a word to the data register
    fn write_data(&mut self, byte: u8);

    /// Read a word from the data register
    fn read_data(&mut self) -> u8;
}

/// Clock one byte out, bounding every wait by `expired`
///
/// Waits for the transmit buffer, writes the byte, then waits for the
/// received word that marks the end of the frame and drains it. `expired`
/// is polled between status reads and should report a single deadline
/// covering the whole byte.
pub fn transmit_bounded<R, E>(regs: &mut R, byte: u8, mut expired: E) -> Result<(), BusError>
where
    R: SpiRegisters + ?Sized,
    E: FnMut() -> bool,
{
    wait_for(regs, |s| s.tx_empty, &mut expired)?;
    regs.write_data(byte);
    wait_for(regs, |s| s.rx_ready, &mut expired)?;
    // The received word is meaningless on a write-only bus
    let _ = regs.read_data();
    Ok(())
}

fn wait_for<R, F, E>(regs: &R, ready: F, expired: &mut E) -> Result<(), BusError>
where
    R: SpiRegisters + ?Sized,
    F: Fn(&SpiStatus) -> bool,
    E: FnMut() -> bool,
{
    loop {
        let status = regs.status();
        if let Some(err) = status.fault() {
            return Err(err);
        }
        if ready(&status) {
            return Ok(());
        }
        if expired() {
            return Err(BusError::Timeout);
        }
    }
}

/// Serial bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Bit order on the data line
    pub bit_order: BitOrder,
    /// Upper bound on one byte transfer, in microseconds
    pub tx_timeout_us: u32,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode3,
            bit_order: BitOrder::MsbFirst,
            tx_timeout_us: 2_000,
        }
    }
}

impl SpiConfig {
    /// Maximum serial clock accepted by SSD1306-class controllers
    pub const DISPLAY_MAX_FREQUENCY: u32 = 10_000_000;

    /// Display bus: mode 3, MSB first, 8 MHz
    pub fn display() -> Self {
        Self {
            frequency: 8_000_000,
            ..Self::default()
        }
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// Bit order on the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Counting {
        sent: usize,
        fail_at: Option<usize>,
    }

    impl SerialTx for Counting {
        fn transmit(&mut self, _byte: u8) -> Result<(), BusError> {
            if Some(self.sent) == self.fail_at {
                return Err(BusError::Timeout);
            }
            self.sent += 1;
            Ok(())
        }
    }

    /// Peripheral model: a written byte completes after `frame_polls`
    /// status reads, or never if `stalled`
    struct MockRegs {
        status: Cell<SpiStatus>,
        in_flight: Cell<Option<u32>>,
        frame_polls: u32,
        stalled: bool,
        written: Option<u8>,
        reads: u8,
    }

    impl MockRegs {
        fn new(frame_polls: u32) -> Self {
            Self {
                status: Cell::new(SpiStatus {
                    tx_empty: true,
                    ..SpiStatus::default()
                }),
                in_flight: Cell::new(None),
                frame_polls,
                stalled: false,
                written: None,
                reads: 0,
            }
        }

        fn stalled() -> Self {
            Self {
                stalled: true,
                ..Self::new(0)
            }
        }
    }

    impl SpiRegisters for MockRegs {
        fn status(&self) -> SpiStatus {
            if let Some(left) = self.in_flight.get() {
                let mut status = self.status.get();
                if left == 0 {
                    status.tx_empty = true;
                    status.rx_ready = true;
                    self.in_flight.set(None);
                } else {
                    self.in_flight.set(Some(left - 1));
                }
                self.status.set(status);
            }
            self.status.get()
        }

        fn write_data(&mut self, byte: u8) {
            self.written = Some(byte);
            let mut status = self.status.get();
            status.tx_empty = false;
            self.status.set(status);
            if !self.stalled {
                self.in_flight.set(Some(self.frame_polls));
            }
        }

        fn read_data(&mut self) -> u8 {
            self.reads += 1;
            let mut status = self.status.get();
            status.rx_ready = false;
            self.status.set(status);
            0
        }
    }

    /// Deadline that expires after `polls` checks
    fn after(polls: u32) -> impl FnMut() -> bool {
        let mut left = polls;
        move || {
            if left == 0 {
                true
            } else {
                left -= 1;
                false
            }
        }
    }

    #[test]
    fn test_display_config_is_mode3_within_limit() {
        let config = SpiConfig::display();
        assert_eq!(config.mode, Mode::Mode3);
        assert_eq!(config.bit_order, BitOrder::MsbFirst);
        assert!(config.frequency <= SpiConfig::DISPLAY_MAX_FREQUENCY);
    }

    #[test]
    fn test_transmit_all_stops_at_first_error() {
        let mut bus = Counting {
            sent: 0,
            fail_at: Some(2),
        };
        assert_eq!(bus.transmit_all(&[1, 2, 3, 4]), Err(BusError::Timeout));
        assert_eq!(bus.sent, 2);
    }

    #[test]
    fn test_transmit_through_mut_ref() {
        let mut bus = Counting {
            sent: 0,
            fail_at: None,
        };
        {
            let mut by_ref = &mut bus;
            by_ref.transmit_all(&[0; 5]).unwrap();
        }
        assert_eq!(bus.sent, 5);
    }

    #[test]
    fn test_bounded_transmit_completes_and_drains() {
        let mut regs = MockRegs::new(3);
        assert_eq!(transmit_bounded(&mut regs, 0xA5, after(10)), Ok(()));
        assert_eq!(regs.written, Some(0xA5));
        assert_eq!(regs.reads, 1);
        assert!(!regs.status().rx_ready);
    }

    #[test]
    fn test_stall_mid_byte_times_out() {
        // Byte accepted into the data register, frame never finishes
        let mut regs = MockRegs::stalled();
        assert_eq!(
            transmit_bounded(&mut regs, 0x42, after(50)),
            Err(BusError::Timeout)
        );
        assert_eq!(regs.written, Some(0x42));
        assert_eq!(regs.reads, 0);
    }

    #[test]
    fn test_full_tx_buffer_times_out_without_writing() {
        let mut regs = MockRegs::stalled();
        regs.status.set(SpiStatus::default());
        assert_eq!(
            transmit_bounded(&mut regs, 0x42, after(5)),
            Err(BusError::Timeout)
        );
        assert_eq!(regs.written, None);
    }

    #[test]
    fn test_slow_frame_within_deadline() {
        let mut regs = MockRegs::new(20);
        assert_eq!(
            transmit_bounded(&mut regs, 0x01, after(19)),
            Err(BusError::Timeout)
        );

        let mut regs = MockRegs::new(20);
        assert_eq!(transmit_bounded(&mut regs, 0x01, after(21)), Ok(()));
    }

    #[test]
    fn test_status_faults_are_reported() {
        let mut regs = MockRegs::new(0);
        regs.status.set(SpiStatus {
            tx_empty: true,
            mode_fault: true,
            ..SpiStatus::default()
        });
        assert_eq!(
            transmit_bounded(&mut regs, 0x00, after(5)),
            Err(BusError::ModeFault)
        );
        assert_eq!(regs.written, None);

        let mut regs = MockRegs::new(0);
        regs.status.set(SpiStatus {
            tx_empty: true,
            overrun: true,
            ..SpiStatus::default()
        });
        assert_eq!(
            transmit_bounded(&mut regs, 0x00, after(5)),
            Err(BusError::Overrun)
        );
    }
}
