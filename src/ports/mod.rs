//! Port-mapped I/O: the 8-bit `IN`/`OUT` address space.
//!
//! Input and output ports are separate 256-entry tables. Each routed port belongs to exactly one
//! peripheral, which sees the access through the [`Peripheral`] hooks; unrouted ports are inert.
//!
//! | Port | Input            | Output                |
//! |------|------------------|-----------------------|
//! | 0    | (unused)         |                       |
//! | 1    | controls, P1     |                       |
//! | 2    | controls, P2/DIP | shift amount          |
//! | 3    | shift result     | sound latch 1         |
//! | 4    |                  | shift data            |
//! | 5    |                  | sound latch 2         |
//! | 6    |                  | watchdog              |

pub mod port_bus;

pub use port_bus::{Device, Direction, PortBus};

pub const INP0: u8 = 0;
pub const INP1: u8 = 1;
pub const INP2: u8 = 2;
pub const SHFT_IN: u8 = 3;

pub const SHFTAMNT: u8 = 2;
pub const SOUND1: u8 = 3;
pub const SHFT_DATA: u8 = 4;
pub const SOUND2: u8 = 5;
pub const WATCHDOG: u8 = 6;

/// Hooks a peripheral implements for the ports routed to it. All default to doing nothing.
pub trait Peripheral {
    /// Input port is about to be read. Returning a value stashes it as the port's contents.
    fn on_read(&mut self, _port: u8) -> Option<u8> {
        None
    }

    /// Output port is about to be overwritten; `previous` is the value it still holds.
    fn on_before_write(&mut self, _port: u8, _previous: u8) {}

    /// Output port now holds `value`.
    fn on_after_write(&mut self, _port: u8, _value: u8) {}
}
