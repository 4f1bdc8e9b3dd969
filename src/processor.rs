//! Interface to the 8080 core that sits on the board.
//!
//! The core itself lives outside this crate. The board only needs to power it, reset it, post
//! interrupt requests, and hand it a cycle budget together with the [`Bus`] it executes against.

use crate::{bus::Bus, error::Result};

/// `RST 0`: restart at $0000, the reset vector.
pub const RST_0: u8 = 0xC7;
/// `RST 1`: restart at $0008, the mid-screen handler.
pub const RST_1: u8 = 0xCF;
/// `RST 2`: restart at $0010, the end-of-screen handler.
pub const RST_2: u8 = 0xD7;

pub trait Processor {
    fn power_on(&mut self);

    fn power_off(&mut self);

    fn reset(&mut self);

    /// Assert the interrupt request line. `vector` is also latched on the bus data lines; the core
    /// executes it as the next opcode if it is powered and has interrupts enabled. The request is
    /// not held: a core that ignores it never sees it again.
    fn request_interrupt(&mut self, vector: u8);

    /// Execute whole instructions until at least `max_cycles` have elapsed and return the cycles
    /// actually used. The final instruction is never cut short, so the result may exceed
    /// `max_cycles`; a budget of zero or less executes nothing.
    fn run<B: Bus>(&mut self, bus: &mut B, max_cycles: i32) -> Result<i32>;
}
