//! Board error taxonomy.
//!
//! Only a decode miss is fatal to emulation. Unmapped ports are defined behaviour (inert, read as
//! zero) and never surface here.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    /// Address decode found no region after masking to 14 bits.
    #[error("invalid memory mapping for address {0:#06x}")]
    InvalidAddress(u16),
    /// Region table handed to the decoder is unordered or overlapping.
    #[error("invalid memory map: {0}")]
    InvalidMemoryMap(String),
    #[error("ROM image {name} is {actual} bytes, expected {expected}")]
    RomSize {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
    /// Clock settings that leave a scanline without any cycles.
    #[error("invalid timing: {0}")]
    InvalidTiming(String),
    /// Fault raised by the processor core; passed through untouched.
    #[error("processor fault: {0}")]
    Processor(String),
    #[error("window error: {0}")]
    Window(String),
    #[error("audio error: {0}")]
    Audio(String),
}
