//! Blue Pill wiring for the SSD1306 module
//!
//! ```text
//! SSD1306      Blue Pill
//!   D0 (SCK) -> PA5  (SPI1 SCK)
//!   D1 (SDI) -> PA7  (SPI1 MOSI)
//!   CS       -> PA4
//!   DC       -> PA3
//!   RES      -> PA2
//! ```

use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::pac;
use embassy_stm32::spi::Spi;
use embassy_stm32::Peripherals;
use lumen_hal::spi::SpiConfig;
use lumen_hal_stm32f1::{OutputLine, SpiTx};

/// Display bus and control lines
pub struct DisplayLines<S> {
    pub bus: SpiTx<S>,
    pub cs: OutputLine<'static>,
    pub dc: OutputLine<'static>,
    pub rst: OutputLine<'static>,
}

/// Configure SPI1 and the three control lines
///
/// Select idles high and reset is held low until the driver pulses it.
pub fn display_lines(p: Peripherals) -> DisplayLines<impl Sized> {
    let bus_config = SpiConfig::display();
    let spi = Spi::new_blocking_txonly(
        p.SPI1,
        p.PA5,
        p.PA7,
        lumen_hal_stm32f1::spi::embassy_config(&bus_config),
    );

    DisplayLines {
        bus: SpiTx::new(spi, pac::SPI1, &bus_config),
        cs: OutputLine::new(Output::new(p.PA4, Level::High, Speed::VeryHigh)),
        dc: OutputLine::new(Output::new(p.PA3, Level::Low, Speed::VeryHigh)),
        rst: OutputLine::new(Output::new(p.PA2, Level::Low, Speed::Low)),
    }
}
