//! The cabinet around the board: monitor, colour overlay, and control panel.
//!
//! The monitor is mounted on its side, so the 256×224 raster the board draws appears as a
//! 224×256 portrait picture. Colour comes from strips of cellophane stuck over the tube.
//!
//! - **palette**: the four overlay colours and where each strip sits.
//! - **cabinet**: frame rotation, key map, and the display window (minifb).

pub mod cabinet;
pub mod palette;

pub use cabinet::{Cabinet, DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_MAP, play, render};
pub use palette::{Colour, overlay};

#[cfg(test)]
mod tests;
