//! Watchdog port (6).
//!
//! The game writes here to keep the watchdog from resetting the board. The values it writes are
//! character codes from the game's own font, so decoding them gives a crude text trace of what the
//! program is drawing. Purely diagnostic: nothing in the emulation depends on it.

use std::io::Write;

use ansi_term::Colour::Yellow;
use log::warn;

use crate::ports::{Peripheral, WATCHDOG};

/// Game font order; codes past the table render as `_`.
const CHARACTER_SET: [char; 64] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '<', '>',
    ' ', '=', '*', '^', '_', '_', '_', '_', '_', '_', 'Y', '%', '_', '_', '_', '_', 'Y', '&', '?',
    '_', '_', '_', '_', '_', '_', '-',
];

pub fn character(code: u8) -> char {
    CHARACTER_SET.get(code as usize).copied().unwrap_or('_')
}

pub struct Watchdog {
    echo: bool,
    last: Option<char>,
    writes: u64,
}

impl Watchdog {
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            last: None,
            writes: 0,
        }
    }

    /// Most recent character written, if any.
    pub fn last_character(&self) -> Option<char> {
        self.last
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Peripheral for Watchdog {
    fn on_after_write(&mut self, port: u8, value: u8) {
        if port != WATCHDOG {
            return;
        }
        let ch = character(value);
        self.last = Some(ch);
        self.writes += 1;
        if self.echo {
            print!("{}", Yellow.paint(ch.to_string()));
            if let Err(error) = std::io::stdout().flush() {
                warn!("Cannot flush watchdog echo: {}", error);
            }
        }
    }
}
