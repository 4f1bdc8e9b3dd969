//! Overlay colours, 0x00RRGGBB as minifb expects.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Black,
    White,
    Red,
    Green,
}

impl Colour {
    pub const fn rgb(self) -> u32 {
        match self {
            Colour::Black => 0x00_00_00,
            Colour::White => 0xFF_FF_FF,
            Colour::Red => 0xFF_00_00,
            Colour::Green => 0x00_FF_00,
        }
    }
}

/// Colour of a lit pixel at display position (`x`, `y`), origin top left.
///
/// Top to bottom: score area (white), UFO strip (red), play field (white), shields and base
/// (green). The bottom strip holding the spare bases is green except for the ends.
pub fn overlay(x: usize, y: usize) -> Colour {
    match y {
        0..32 => Colour::White,
        32..64 => Colour::Red,
        64..184 => Colour::White,
        184..240 => Colour::Green,
        _ => match x {
            0..16 => Colour::White,
            16..134 => Colour::Green,
            _ => Colour::White,
        },
    }
}
