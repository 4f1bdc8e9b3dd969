//! The Space Invaders main board: CPU, memory, port peripherals and raster timing wired together.

pub mod board;

pub use board::{Board, ROM_FILES};
