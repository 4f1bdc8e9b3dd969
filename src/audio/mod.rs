//! Speakers: plays the recorded sound effects when the board's sound latches fire.
//!
//! The real boards synthesise each effect with discrete analog circuits; here each one is a WAV
//! sample loaded from the sound directory.

pub mod effects;

pub use effects::{SoundEffects, sample_name};
