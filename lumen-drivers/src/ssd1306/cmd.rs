//! SSD1306 command set
//!
//! Every byte here travels in command mode, including the argument bytes
//! that follow an opcode: the controller tells opcodes and arguments apart
//! by position, not by the data/command line.

use lumen_core::config::{DisplayConfig, LAST_COLUMN, LAST_PAGE};

pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_ADDRESSING_MODE: u8 = 0x20;
pub const SET_COLUMN_RANGE: u8 = 0x21;
pub const SET_PAGE_RANGE: u8 = 0x22;
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_CHARGE_PUMP: u8 = 0x8D;
pub const SET_SEG_REMAP: u8 = 0xA1;
pub const RESUME_FROM_RAM: u8 = 0xA4;
pub const SET_NORMAL: u8 = 0xA6;
pub const SET_INVERSE: u8 = 0xA7;
pub const SET_PAGE_START: u8 = 0xB0;
pub const SET_COM_SCAN_DEC: u8 = 0xC8;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOMH: u8 = 0xDB;

/// Addressing mode argument: horizontal increment with page wrap
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Length of the configuration sequence (everything before display-on)
pub const INIT_SEQUENCE_LEN: usize = 23;

/// Configuration sequence issued between reset and display-on
///
/// Order is fixed; the controller is configured while the panel is off.
pub fn init_sequence(config: &DisplayConfig) -> [u8; INIT_SEQUENCE_LEN] {
    [
        DISPLAY_OFF,
        SET_ADDRESSING_MODE,
        HORIZONTAL_ADDRESSING,
        SET_COLUMN_RANGE,
        0x00,
        LAST_COLUMN,
        SET_PAGE_RANGE,
        0x00,
        LAST_PAGE,
        SET_CHARGE_PUMP,
        config.charge_pump,
        SET_SEG_REMAP,    // Mirror horizontally
        SET_COM_SCAN_DEC, // Mirror vertically
        SET_COM_PINS,
        config.com_pins,
        SET_CONTRAST,
        config.contrast,
        SET_PRECHARGE,
        config.precharge,
        SET_VCOMH,
        config.vcomh,
        RESUME_FROM_RAM,
        SET_NORMAL,
    ]
}

/// Window for one full page: page select then the whole column range
pub fn page_window(page: u8) -> [u8; 4] {
    [
        SET_PAGE_START | (page & 0x07),
        SET_COLUMN_RANGE,
        0x00,
        LAST_COLUMN,
    ]
}

/// Window covering the whole display memory
pub fn full_window() -> [u8; 6] {
    [
        SET_COLUMN_RANGE,
        0x00,
        LAST_COLUMN,
        SET_PAGE_RANGE,
        0x00,
        LAST_PAGE,
    ]
}
