//! Recording mocks shared by the integration tests
//!
//! Every pin, bus and delay handle writes into one shared trace so tests
//! can check ordering across lines.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use lumen_drivers::ssd1306::ByteMode;
use lumen_hal::{BusError, OutputPin, SerialTx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Line driven to a level (true = high)
    Set(Line, bool),
    /// Byte handed to the bus with the line levels at that instant
    Byte { value: u8, cs_low: bool, dc_high: bool },
    /// Delay in nanoseconds
    Delay(u32),
}

#[derive(Debug, Default)]
pub struct Trace {
    pub events: Vec<Event>,
    cs_high: bool,
    dc_high: bool,
    rst_high: bool,
    sent: usize,
    /// Fail the transfer with this index (0-based, counted across the trace)
    pub fail_at: Option<usize>,
}

pub type Shared = Rc<RefCell<Trace>>;

pub fn shared() -> Shared {
    Rc::new(RefCell::new(Trace::default()))
}

impl Trace {
    /// Bytes with their mode, in order
    pub fn bytes(&self) -> Vec<(u8, ByteMode)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                Event::Byte { value, dc_high, .. } => Some((
                    value,
                    if dc_high {
                        ByteMode::Data
                    } else {
                        ByteMode::Command
                    },
                )),
                _ => None,
            })
            .collect()
    }

    /// Bytes sent with chip-select released
    pub fn unselected_bytes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Byte { cs_low: false, .. }))
            .count()
    }

    /// Number of bytes inside each chip-select assertion
    pub fn bytes_per_selection(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut current = None;
        for e in &self.events {
            match *e {
                Event::Set(Line::Cs, false) => current = Some(0),
                Event::Set(Line::Cs, true) => {
                    if let Some(n) = current.take() {
                        out.push(n);
                    }
                }
                Event::Byte { .. } => {
                    if let Some(n) = current.as_mut() {
                        *n += 1;
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// True if D/C was ever written while chip-select was asserted
    pub fn dc_moved_while_selected(&self) -> bool {
        let mut cs_low = false;
        for e in &self.events {
            match *e {
                Event::Set(Line::Cs, high) => cs_low = !high,
                Event::Set(Line::Dc, _) if cs_low => return true,
                _ => {}
            }
        }
        false
    }

    pub fn cs_is_high(&self) -> bool {
        self.cs_high
    }

    pub fn rst_is_high(&self) -> bool {
        self.rst_high
    }

    pub fn reset(&mut self) {
        self.events.clear();
        self.sent = 0;
        self.fail_at = None;
    }
}

pub struct MockPin {
    line: Line,
    trace: Shared,
}

impl MockPin {
    pub fn new(line: Line, trace: &Shared) -> Self {
        Self {
            line,
            trace: trace.clone(),
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        let mut t = self.trace.borrow_mut();
        match self.line {
            Line::Cs => t.cs_high = true,
            Line::Dc => t.dc_high = true,
            Line::Rst => t.rst_high = true,
        }
        t.events.push(Event::Set(self.line, true));
    }

    fn set_low(&mut self) {
        let mut t = self.trace.borrow_mut();
        match self.line {
            Line::Cs => t.cs_high = false,
            Line::Dc => t.dc_high = false,
            Line::Rst => t.rst_high = false,
        }
        t.events.push(Event::Set(self.line, false));
    }

    fn is_set_high(&self) -> bool {
        let t = self.trace.borrow();
        match self.line {
            Line::Cs => t.cs_high,
            Line::Dc => t.dc_high,
            Line::Rst => t.rst_high,
        }
    }
}

pub struct MockBus {
    trace: Shared,
}

impl MockBus {
    pub fn new(trace: &Shared) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl SerialTx for MockBus {
    fn transmit(&mut self, byte: u8) -> Result<(), BusError> {
        let mut t = self.trace.borrow_mut();
        if t.fail_at == Some(t.sent) {
            return Err(BusError::Timeout);
        }
        t.sent += 1;
        let (cs_low, dc_high) = (!t.cs_high, t.dc_high);
        t.events.push(Event::Byte {
            value: byte,
            cs_low,
            dc_high,
        });
        Ok(())
    }
}

pub struct MockDelay {
    trace: Shared,
}

impl MockDelay {
    pub fn new(trace: &Shared) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.borrow_mut().events.push(Event::Delay(ns));
    }
}
