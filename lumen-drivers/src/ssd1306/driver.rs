//! SSD1306 controller driver
//!
//! Owns the reset line and the framer. Bring-up runs the fixed sequence
//! from [`cmd::init_sequence`]; framebuffer writes set the addressing
//! window and stream bytes straight from a [`PatternRule`].

use embedded_hal::delay::DelayNs;

use lumen_core::config::{AddressingStrategy, DisplayConfig, COLUMN_COUNT, PAGE_COUNT};
use lumen_core::pattern::{PatternRule, Solid};
use lumen_core::state::{InitEvent, InitState};
use lumen_hal::{BusError, OutputPin, SerialTx};

use super::cmd;
use super::error::DisplayError;
use super::framer::Framer;

/// SSD1306 OLED driver (128x64, 4-wire serial)
pub struct Ssd1306<BUS, CS, DC, RST> {
    framer: Framer<BUS, CS, DC>,
    rst: RST,
    config: DisplayConfig,
    state: InitState,
}

impl<BUS, CS, DC, RST> Ssd1306<BUS, CS, DC, RST>
where
    BUS: SerialTx,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver; the controller is assumed powered off
    ///
    /// All four lines must already be configured as outputs.
    pub fn new(bus: BUS, cs: CS, dc: DC, rst: RST, config: DisplayConfig) -> Self {
        Self {
            framer: Framer::new(bus, cs, dc, config.framing),
            rst,
            config,
            state: InitState::PoweredOff,
        }
    }

    /// Current bring-up state
    pub fn state(&self) -> InitState {
        self.state
    }

    /// Get the configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the bus and lines
    pub fn release(self) -> (BUS, CS, DC, RST) {
        let (bus, cs, dc) = self.framer.release();
        (bus, cs, dc, self.rst)
    }

    /// Reset and configure the controller, then switch the panel on
    ///
    /// Any transfer failure abandons bring-up and leaves the driver in
    /// [`InitState::PoweredOff`]; no partial recovery is attempted. Calling
    /// this again restarts from the reset pulse.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.apply(InitEvent::PowerUp);

        self.rst.set_low();
        delay.delay_ms(self.config.reset_pulse_ms);
        self.rst.set_high();
        delay.delay_ms(self.config.reset_settle_ms);
        self.apply(InitEvent::ResetReleased);

        match self.configure() {
            Ok(()) => {
                self.apply(InitEvent::SequenceSent);
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("SSD1306 bring-up failed: {:?}", e);
                self.apply(InitEvent::Fault);
                Err(DisplayError::InitializationFailed(e))
            }
        }
    }

    /// Write zeros to every page
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.fill_pattern(&Solid(0x00))
    }

    /// Write `rule(page, column >> 3)` to every column of every page
    pub fn fill_pattern<R: PatternRule + ?Sized>(&mut self, rule: &R) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.write_pages(|framer, page| {
            framer.send_data_with(COLUMN_COUNT, |column| rule.byte_at_column(page, column as u8))
        })?;
        Ok(())
    }

    /// Write one full page from a caller-owned buffer
    pub fn write_page(&mut self, page: u8, bytes: &[u8; COLUMN_COUNT]) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        if page >= PAGE_COUNT {
            return Err(DisplayError::InvalidPage);
        }

        self.set_window(page)?;
        self.framer.send_data_burst(bytes)?;
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.framer.send_commands(&[cmd::SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Turn the panel on/off (display memory is retained)
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let op = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.framer.send_command(op)?;
        Ok(())
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let op = if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        };
        self.framer.send_command(op)?;
        Ok(())
    }

    /// Send the configuration sequence and display-on
    fn configure(&mut self) -> Result<(), BusError> {
        self.framer.send_commands(&cmd::init_sequence(&self.config))?;
        self.framer.send_command(cmd::DISPLAY_ON)
    }

    /// Page select and full column range, re-issued for every page
    fn set_window(&mut self, page: u8) -> Result<(), BusError> {
        self.framer.send_commands(&cmd::page_window(page))
    }

    /// Address every page in order and let `stream` send its 128 bytes
    fn write_pages<F>(&mut self, mut stream: F) -> Result<(), BusError>
    where
        F: FnMut(&mut Framer<BUS, CS, DC>, u8) -> Result<(), BusError>,
    {
        match self.config.addressing {
            AddressingStrategy::PerPage => {
                for page in 0..PAGE_COUNT {
                    self.set_window(page)?;
                    stream(&mut self.framer, page)?;
                }
            }
            AddressingStrategy::SingleWindow => {
                self.framer.send_commands(&cmd::full_window())?;
                for page in 0..PAGE_COUNT {
                    stream(&mut self.framer, page)?;
                }
            }
        }
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), DisplayError> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    fn apply(&mut self, event: InitEvent) {
        let next = self.state.transition(event);
        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 {:?} --{:?}--> {:?}", self.state, event, next);
        self.state = next;
    }
}
