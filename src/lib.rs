//! Invaders: the Taito/Midway Space Invaders main board, written in Rust.
//!
//! Models everything on the board except the Intel 8080 itself: the address decoder, the port
//! peripherals (hardware shifter, input latches, sound latches, watchdog) and the raster timing
//! that slices CPU execution into scanlines. A core plugs in through [`processor::Processor`] and
//! executes against [`bus::Bus`].
//!
//! ## Modules
//!
//! - **audio** – sample playback of the ten sound effects (rodio)
//! - **board** – composition root: power lifecycle, ROM loading, frame driving
//! - **bus** – memory map and port dispatch as the CPU sees them
//! - **cabinet** – colour overlay, 90° monitor rotation, key map, display window (minifb)
//! - **config** – clock rates, DIP switches, cabinet options
//! - **controls** – input ports 1 and 2: coin, start, fire, movement, tilt
//! - **memory** – ROM banks H/G/F/E, work RAM, video RAM; 14-bit address decoding
//! - **ports** – port routing, `IN`/`OUT` hooks
//! - **processor** – interface to an external 8080 core; `RST` vectors
//! - **scheduler** – scanline budgets, overshoot carry, raster interrupts at lines 96 and 224
//! - **shifter** – the MB14241 barrel shifter on ports 2, 3 and 4
//! - **sound** – sound latch edge detection and events
//! - **watchdog** – port 6 character trace

pub mod audio;
pub mod board;
pub mod bus;
pub mod cabinet;
pub mod config;
pub mod controls;
pub mod error;
pub mod memory;
pub mod ports;
pub mod processor;
pub mod scheduler;
pub mod shifter;
pub mod sound;
pub mod watchdog;

#[cfg(test)]
mod test_support;
