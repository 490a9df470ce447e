//! SPI transmitter for STM32F1
//!
//! The embassy driver only sets the peripheral up (clock, pins, mode,
//! enable) and is kept alive so it stays that way. Bytes go straight
//! through the data register, with every status wait bounded by one
//! embassy-time deadline per byte.

use embassy_stm32::pac;
use embassy_stm32::spi::{self, BitOrder as SpiBitOrder, MODE_0, MODE_1, MODE_2, MODE_3};
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Instant};
use lumen_hal::spi::{transmit_bounded, BitOrder, Mode, SpiConfig, SpiRegisters, SpiStatus};
use lumen_hal::{BusError, SerialTx};

/// Build the embassy bus configuration for a Lumen [`SpiConfig`]
pub fn embassy_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = Hertz(config.frequency);
    out.mode = match config.mode {
        Mode::Mode0 => MODE_0,
        Mode::Mode1 => MODE_1,
        Mode::Mode2 => MODE_2,
        Mode::Mode3 => MODE_3,
    };
    out.bit_order = match config.bit_order {
        BitOrder::MsbFirst => SpiBitOrder::MsbFirst,
        BitOrder::LsbFirst => SpiBitOrder::LsbFirst,
    };
    out
}

/// SPI register block (spi_v1, 8-bit frames)
struct Registers(pac::spi::Spi);

impl SpiRegisters for Registers {
    fn status(&self) -> SpiStatus {
        let sr = self.0.sr().read();
        SpiStatus {
            tx_empty: sr.txe(),
            rx_ready: sr.rxne(),
            overrun: sr.ovr(),
            mode_fault: sr.modf(),
        }
    }

    fn write_data(&mut self, byte: u8) {
        self.0.dr().write(|w| w.set_dr(byte as u16));
    }

    fn read_data(&mut self) -> u8 {
        self.0.dr().read().dr() as u8
    }
}

/// Byte transmitter with a bounded transfer
pub struct SpiTx<S> {
    spi: S,
    regs: Registers,
    timeout: Duration,
}

impl<S> SpiTx<S> {
    /// Wrap a configured and enabled SPI peripheral
    ///
    /// `regs` must be the register block of the peripheral behind `spi`
    /// (e.g. `pac::SPI1`).
    pub fn new(spi: S, regs: pac::spi::Spi, config: &SpiConfig) -> Self {
        Self {
            spi,
            regs: Registers(regs),
            timeout: Duration::from_micros(config.tx_timeout_us as u64),
        }
    }

    /// Give back the embassy driver
    pub fn release(self) -> S {
        self.spi
    }
}

impl<S> SerialTx for SpiTx<S> {
    fn transmit(&mut self, byte: u8) -> Result<(), BusError> {
        let deadline = Instant::now() + self.timeout;
        transmit_bounded(&mut self.regs, byte, || Instant::now() >= deadline).map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("SPI transmit failed: {:?}", err);
            err
        })
    }
}
