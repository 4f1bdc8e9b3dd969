//! Board memory: four 2KB program ROMs, 1KB work RAM, 7KB video RAM.
//!
//! - **memory**: backing stores ([`Rom`], [`Ram`]) and ROM image loading.
//! - **decoder**: 14-bit address decoding onto those stores.

pub mod decoder;
pub mod memory;

pub use decoder::{AccessLevel, AddressDecoder, Mapping, Region, StoreId};
pub use memory::{Ram, Rom};
