//! Memory and I/O bus for the board.
//!
//! Routes processor memory accesses through the address decoder to ROM, work RAM and video RAM,
//! and `IN`/`OUT` instructions to the port peripherals.

use log::warn;

use crate::{
    config::Configuration,
    error::Result,
    memory::{
        AccessLevel, AddressDecoder, Mapping, Ram, Rom, StoreId,
        memory::{VIDEO_RAM_SIZE, WORK_RAM_SIZE},
    },
    ports::PortBus,
};

/// What a processor core sees of the board.
pub trait Bus {
    /// Memory read. Fails only if the address cannot be decoded.
    fn read(&mut self, address: u16) -> Result<u8>;
    /// Memory write. Writes into read-only regions are dropped.
    fn write(&mut self, address: u16, data: u8) -> Result<()>;
    /// `IN port`.
    fn read_port(&mut self, port: u8) -> u8;
    /// `OUT port`.
    fn write_port(&mut self, port: u8, data: u8);
    /// Byte the board is driving onto the data bus, fetched as the opcode when an interrupt is
    /// acknowledged.
    fn data(&self) -> u8;
}

/// Board bus: program ROMs, RAM, and the port peripherals.
pub struct BoardBus {
    pub decoder: AddressDecoder,
    /// Indexed by [`StoreId::rom_bank`]: H, G, F, E.
    pub roms: [Rom; 4],
    pub work_ram: Ram,
    pub video_ram: Ram,
    pub ports: PortBus,
    data: u8,
}

impl BoardBus {
    pub fn new(config: &Configuration) -> Self {
        Self {
            decoder: AddressDecoder::invaders(),
            roms: [Rom::new(), Rom::new(), Rom::new(), Rom::new()],
            work_ram: Ram::new(WORK_RAM_SIZE),
            video_ram: Ram::new(VIDEO_RAM_SIZE),
            ports: PortBus::new(config),
            data: 0,
        }
    }

    pub fn map_address(&self, address: u16) -> Result<Mapping> {
        self.decoder.resolve(address)
    }

    /// Latch a byte onto the data bus.
    pub fn set_data(&mut self, data: u8) {
        self.data = data;
    }

    fn store(&self, store: StoreId, offset: usize) -> u8 {
        match store {
            StoreId::WorkRam => self.work_ram.peek(offset),
            StoreId::VideoRam => self.video_ram.peek(offset),
            rom => match rom.rom_bank() {
                Some(bank) => self.roms[bank].peek(offset),
                None => 0,
            },
        }
    }
}

impl Bus for BoardBus {
    fn read(&mut self, address: u16) -> Result<u8> {
        let mapping = self.decoder.resolve(address)?;
        Ok(self.store(mapping.store, mapping.offset))
    }

    fn write(&mut self, address: u16, data: u8) -> Result<()> {
        let mapping = self.decoder.resolve(address)?;
        match (mapping.access, mapping.store) {
            (AccessLevel::ReadWrite, StoreId::WorkRam) => self.work_ram.poke(mapping.offset, data),
            (AccessLevel::ReadWrite, StoreId::VideoRam) => {
                self.video_ram.poke(mapping.offset, data)
            }
            (_, store) => match store.rom_bank() {
                Some(bank) => self.roms[bank].poke(mapping.offset, data),
                None => warn!(
                    "Dropping write of {:#04x} to read-only {:?} at {:#06x}",
                    data, store, address
                ),
            },
        }
        Ok(())
    }

    fn read_port(&mut self, port: u8) -> u8 {
        self.ports.read_input(port)
    }

    fn write_port(&mut self, port: u8, data: u8) {
        self.ports.write_output(port, data);
    }

    fn data(&self) -> u8 {
        self.data
    }
}
