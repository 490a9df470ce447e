//! Command/data framing
//!
//! Wraps the byte transmitter with chip-select (active low) and
//! data/command select (low = command, high = data). The data/command line
//! is only ever written while chip-select is released, so it is stable for
//! the whole time the controller is listening.

use lumen_core::config::FramingStrategy;
use lumen_hal::{BusError, OutputPin, SerialTx};

/// How the controller interprets a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteMode {
    /// Opcode or opcode argument (D/C low)
    Command,
    /// Display memory contents (D/C high)
    Data,
}

/// Chip-select and data/command sequencing around a serial bus
pub struct Framer<BUS, CS, DC> {
    bus: BUS,
    cs: CS,
    dc: DC,
    strategy: FramingStrategy,
}

impl<BUS, CS, DC> Framer<BUS, CS, DC>
where
    BUS: SerialTx,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Create a framer; chip-select starts released
    pub fn new(bus: BUS, mut cs: CS, dc: DC, strategy: FramingStrategy) -> Self {
        cs.set_high();
        Self {
            bus,
            cs,
            dc,
            strategy,
        }
    }

    /// Give back the bus and lines
    pub fn release(self) -> (BUS, CS, DC) {
        (self.bus, self.cs, self.dc)
    }

    /// Send one command byte as its own transaction
    pub fn send_command(&mut self, byte: u8) -> Result<(), BusError> {
        self.transaction(ByteMode::Command, byte)
    }

    /// Send one data byte as its own transaction
    pub fn send_data(&mut self, byte: u8) -> Result<(), BusError> {
        self.transaction(ByteMode::Data, byte)
    }

    /// Send an opcode with its arguments
    pub fn send_commands(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        self.burst(ByteMode::Command, bytes.len(), |i| bytes[i])
    }

    /// Send a run of data bytes
    pub fn send_data_burst(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        self.burst(ByteMode::Data, bytes.len(), |i| bytes[i])
    }

    /// Send `count` data bytes produced by `next(i)`
    pub fn send_data_with<F>(&mut self, count: usize, next: F) -> Result<(), BusError>
    where
        F: FnMut(usize) -> u8,
    {
        self.burst(ByteMode::Data, count, next)
    }

    /// Send `count` bytes of one mode under the configured strategy
    fn burst<F>(&mut self, mode: ByteMode, count: usize, mut next: F) -> Result<(), BusError>
    where
        F: FnMut(usize) -> u8,
    {
        match self.strategy {
            FramingStrategy::PerByte => {
                for i in 0..count {
                    self.transaction(mode, next(i))?;
                }
                Ok(())
            }
            FramingStrategy::HoldSelect => {
                if count == 0 {
                    return Ok(());
                }
                self.select(mode);
                let mut result = Ok(());
                for i in 0..count {
                    result = self.bus.transmit(next(i));
                    if result.is_err() {
                        break;
                    }
                }
                self.cs.set_high();
                result
            }
        }
    }

    /// One byte framed by its own chip-select assertion
    fn transaction(&mut self, mode: ByteMode, byte: u8) -> Result<(), BusError> {
        self.select(mode);
        let result = self.bus.transmit(byte);
        self.cs.set_high();
        result
    }

    /// Latch the mode line, then assert chip-select
    fn select(&mut self, mode: ByteMode) {
        // Chip-select is released between transactions, so D/C may move
        match mode {
            ByteMode::Command => self.dc.set_low(),
            ByteMode::Data => self.dc.set_high(),
        }
        self.cs.set_low();
    }
}
