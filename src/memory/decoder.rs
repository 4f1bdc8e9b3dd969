//! Address decoding for the board.
//!
//! Only address lines A0-A13 are wired, so every address is masked to 14 bits before lookup and
//! $4000-$FFFF mirror $0000-$3FFF. The decoder classifies; enforcing read-only access is left to
//! whoever performs the access.

use crate::error::{BoardError, Result};
use crate::memory::memory::{ROM_SIZE, VIDEO_RAM_SIZE, WORK_RAM_SIZE};

/// Address lines decoded by the board.
pub const ADDRESS_MASK: u16 = 0x3FFF;

/// Backing stores owned by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreId {
    /// invaders.h, $0000-$07FF
    RomH,
    /// invaders.g, $0800-$0FFF
    RomG,
    /// invaders.f, $1000-$17FF
    RomF,
    /// invaders.e, $1800-$1FFF
    RomE,
    WorkRam,
    VideoRam,
}

impl StoreId {
    /// Index into the board's ROM bank array, for ROM stores.
    pub const fn rom_bank(self) -> Option<usize> {
        match self {
            StoreId::RomH => Some(0),
            StoreId::RomG => Some(1),
            StoreId::RomF => Some(2),
            StoreId::RomE => Some(3),
            StoreId::WorkRam | StoreId::VideoRam => None,
        }
    }

    /// Bytes in the backing store.
    pub const fn size(self) -> usize {
        match self {
            StoreId::RomH | StoreId::RomG | StoreId::RomF | StoreId::RomE => ROM_SIZE,
            StoreId::WorkRam => WORK_RAM_SIZE,
            StoreId::VideoRam => VIDEO_RAM_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    ReadOnly,
    ReadWrite,
}

/// One decoded range: `[low, high]` inclusive, backed by `store` starting at `low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub low: u16,
    pub high: u16,
    pub store: StoreId,
    pub access: AccessLevel,
}

impl Region {
    const fn new(low: u16, size: usize, store: StoreId, access: AccessLevel) -> Self {
        Self {
            low,
            high: low + (size as u16 - 1),
            store,
            access,
        }
    }

    /// Addresses covered, `high - low + 1`.
    pub fn span(&self) -> usize {
        usize::from(self.high) - usize::from(self.low) + 1
    }

    fn contains(&self, address: u16) -> bool {
        (self.low..=self.high).contains(&address)
    }
}

/// Result of decoding one address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub store: StoreId,
    /// Offset within `store`.
    pub offset: usize,
    pub access: AccessLevel,
}

/// Board memory map, in ascending address order.
pub const INVADERS_MAP: [Region; 6] = [
    Region::new(0x0000, ROM_SIZE, StoreId::RomH, AccessLevel::ReadOnly),
    Region::new(0x0800, ROM_SIZE, StoreId::RomG, AccessLevel::ReadOnly),
    Region::new(0x1000, ROM_SIZE, StoreId::RomF, AccessLevel::ReadOnly),
    Region::new(0x1800, ROM_SIZE, StoreId::RomE, AccessLevel::ReadOnly),
    Region::new(0x2000, WORK_RAM_SIZE, StoreId::WorkRam, AccessLevel::ReadWrite),
    Region::new(0x2400, VIDEO_RAM_SIZE, StoreId::VideoRam, AccessLevel::ReadWrite),
];

pub struct AddressDecoder {
    regions: Vec<Region>,
}

impl AddressDecoder {
    /// Decoder over an arbitrary table. Regions must be ascending, must not overlap, and must fit
    /// their backing store; a gap is accepted here but any address falling into it fails to
    /// resolve.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        for region in &regions {
            if region.low > region.high {
                return Err(BoardError::InvalidMemoryMap(format!(
                    "region {:?} ends before it starts",
                    region.store
                )));
            }
            if region.span() > region.store.size() {
                return Err(BoardError::InvalidMemoryMap(format!(
                    "region {:#06x}-{:#06x} spans {} bytes but {:?} holds {}",
                    region.low,
                    region.high,
                    region.span(),
                    region.store,
                    region.store.size()
                )));
            }
        }
        for pair in regions.windows(2) {
            if pair[1].low <= pair[0].high {
                return Err(BoardError::InvalidMemoryMap(format!(
                    "{:?} at {:#06x} overlaps or precedes {:?} ending at {:#06x}",
                    pair[1].store, pair[1].low, pair[0].store, pair[0].high
                )));
            }
        }
        Ok(Self { regions })
    }

    /// The board's own map: total over $0000-$3FFF.
    pub fn invaders() -> Self {
        Self {
            regions: INVADERS_MAP.to_vec(),
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Mask to 14 bits and find the owning region; first match wins.
    pub fn resolve(&self, address: u16) -> Result<Mapping> {
        let absolute = address & ADDRESS_MASK;
        self.regions
            .iter()
            .find(|region| region.contains(absolute))
            .map(|region| Mapping {
                store: region.store,
                offset: (absolute - region.low) as usize,
                access: region.access,
            })
            .ok_or(BoardError::InvalidAddress(absolute))
    }
}

impl Default for AddressDecoder {
    fn default() -> Self {
        Self::invaders()
    }
}
