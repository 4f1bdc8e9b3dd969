//! Fixed-size backing stores.
//!
//! Offsets handed to these stores are already relative to the store base (the decoder subtracts
//! the region's bound), so indexing is direct.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::{BoardError, Result};

/// Size of each program ROM chip (E, F, G, H).
pub const ROM_SIZE: usize = 0x800;
/// Work RAM at $2000-$23FF.
pub const WORK_RAM_SIZE: usize = 0x400;
/// Video RAM at $2400-$3FFF: 224 scanlines × 32 bytes.
pub const VIDEO_RAM_SIZE: usize = 0x1C00;

/// A 2KB program ROM chip. Contents are zero until an image is loaded.
pub struct Rom {
    bytes: Box<[u8; ROM_SIZE]>,
}

impl Rom {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; ROM_SIZE]),
        }
    }

    /// Build a ROM from an in-memory image. The image must be exactly [`ROM_SIZE`] bytes.
    pub fn from_bytes(name: &str, image: &[u8]) -> Result<Self> {
        let mut rom = Self::new();
        rom.load_bytes(name, image)?;
        Ok(rom)
    }

    /// Read a ROM image from disk into this chip.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let image = fs::read(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_bytes(&path.display().to_string(), &image)
    }

    fn load_bytes(&mut self, name: &str, image: &[u8]) -> Result<()> {
        if image.len() != ROM_SIZE {
            return Err(BoardError::RomSize {
                name: name.to_string(),
                expected: ROM_SIZE,
                actual: image.len(),
            });
        }
        self.bytes.copy_from_slice(image);
        Ok(())
    }

    pub fn peek(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// Program ROM ignores bus writes.
    pub fn poke(&mut self, offset: usize, data: u8) {
        warn!("Ignoring write of {:#04x} to ROM offset {:#06x}", data, offset);
    }
}

impl Default for Rom {
    fn default() -> Self {
        Self::new()
    }
}

/// Static RAM of a fixed size (work RAM or the video frame buffer).
pub struct Ram {
    bytes: Vec<u8>,
}

impl Ram {
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    pub fn peek(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    pub fn poke(&mut self, offset: usize, data: u8) {
        self.bytes[offset] = data;
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whole store, for the renderer.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
