//! Hardware shift register (MB14241).
//!
//! Writing to port 4 pushes a byte into the top of a 16-bit register, moving the previous top byte
//! to the bottom. Port 2 selects an offset of 0-7 bits. Reading port 3 returns the 8 bits found
//! `offset` bits below the top of the register, which lets the game align sprites on any pixel
//! without a software shift loop.

use crate::ports::{Peripheral, SHFT_DATA, SHFT_IN, SHFTAMNT};

/// 16-bit shift register with a 3-bit read offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftRegister {
    pub high: u8,
    pub low: u8,
    /// Always 0..=7.
    pub amount: u8,
}

impl ShiftRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port 4: previous high byte drops to low, new byte becomes high.
    pub fn load(&mut self, data: u8) {
        self.low = self.high;
        self.high = data;
    }

    /// Port 2: only the low three bits are wired.
    pub fn set_amount(&mut self, data: u8) {
        self.amount = data & 0b111;
    }

    /// Port 3: `((high:low) << amount) >> 8`, truncated to a byte.
    pub fn result(&self) -> u8 {
        let value = u16::from_be_bytes([self.high, self.low]);
        ((value << self.amount) >> 8) as u8
    }
}

impl Peripheral for ShiftRegister {
    fn on_read(&mut self, port: u8) -> Option<u8> {
        (port == SHFT_IN).then(|| self.result())
    }

    fn on_after_write(&mut self, port: u8, value: u8) {
        match port {
            SHFT_DATA => self.load(value),
            SHFTAMNT => self.set_amount(value),
            _ => {}
        }
    }
}
