//! Board composition and power lifecycle.
//!
//! The render loop drives the board one scanline at a time. At the start of scanline 96 it asks
//! for the mid-screen interrupt, after scanline 223 for the end-of-screen interrupt, and then runs
//! the vertical blank. [`Board::run_frame_scanlines`] does exactly that for callers that do not
//! need to interleave their own work.

use log::{debug, info};

use crate::{
    bus::BoardBus,
    config::{Configuration, RASTER_HEIGHT},
    controls::InputLatches,
    error::Result,
    memory::{Mapping, Rom},
    ports::{Device, Direction},
    processor::{Processor, RST_0},
    scheduler::{RasterInterrupt, ScanScheduler},
    sound::SoundListener,
};

/// ROM image file names, in bank order ($0000, $0800, $1000, $1800).
pub const ROM_FILES: [&str; 4] = ["invaders.h", "invaders.g", "invaders.f", "invaders.e"];

pub struct Board<P: Processor> {
    config: Configuration,
    cpu: P,
    bus: BoardBus,
    scheduler: ScanScheduler,
    powered: bool,
}

impl<P: Processor> Board<P> {
    pub fn new(config: Configuration, cpu: P) -> Self {
        let bus = BoardBus::new(&config);
        let scheduler = ScanScheduler::new(&config);
        Self {
            config,
            cpu,
            bus,
            scheduler,
            powered: false,
        }
    }

    /// Load the four program ROMs from the configured directory.
    pub fn load_roms(&mut self) -> Result<()> {
        for (bank, name) in ROM_FILES.iter().enumerate() {
            let path = self.config.rom_directory.join(name);
            self.bus.roms[bank].load(&path)?;
            info!("Loaded {}", path.display());
        }
        Ok(())
    }

    /// Install ROM images already in memory, in [`ROM_FILES`] order.
    pub fn load_rom_images(&mut self, images: [&[u8]; 4]) -> Result<()> {
        for (bank, image) in images.iter().enumerate() {
            self.bus.roms[bank] = Rom::from_bytes(ROM_FILES[bank], image)?;
        }
        Ok(())
    }

    /// Power the CPU, reset it, and post the start-up interrupt (`RST 0`, the reset vector).
    pub fn power_on(&mut self) {
        debug!("Power on");
        self.bus.ports.reset();
        self.scheduler.clear();
        self.powered = true;
        self.cpu.power_on();
        self.cpu.reset();
        self.request_interrupt(RST_0);
    }

    pub fn power_off(&mut self) {
        debug!("Power off");
        self.cpu.power_off();
        self.powered = false;
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn map_address(&self, address: u16) -> Result<Mapping> {
        self.bus.map_address(address)
    }

    pub fn map_port(&self, direction: Direction, port: u8) -> Option<Device> {
        self.bus.ports.route(direction, port)
    }

    /// Beam is entering scanline 96.
    pub fn trigger_interrupt_scanline_96(&mut self) {
        self.raster_interrupt(RasterInterrupt::MidScreen);
    }

    /// Beam has left scanline 223.
    pub fn trigger_interrupt_scanline_224(&mut self) {
        self.raster_interrupt(RasterInterrupt::EndOfScreen);
    }

    pub fn raster_interrupt(&mut self, interrupt: RasterInterrupt) {
        self.request_interrupt(interrupt.vector());
    }

    fn request_interrupt(&mut self, vector: u8) {
        debug!("Interrupt request {:#04x}", vector);
        self.bus.set_data(vector);
        self.cpu.request_interrupt(vector);
    }

    /// Run one scanline's worth of cycles. Returns cycles consumed.
    pub fn run_scanline(&mut self) -> Result<i32> {
        self.scheduler.run_scanline(&mut self.cpu, &mut self.bus)
    }

    /// Run the whole visible raster as one slice, without raster interrupts.
    pub fn run_raster_scan(&mut self) -> Result<i32> {
        self.scheduler.run_raster_scan(&mut self.cpu, &mut self.bus)
    }

    pub fn run_vertical_blank(&mut self) -> Result<i32> {
        self.scheduler.run_vertical_blank(&mut self.cpu, &mut self.bus)
    }

    /// Raster then vertical blank, two slices, no interrupts.
    pub fn run_frame(&mut self) -> Result<i32> {
        Ok(self.run_raster_scan()? + self.run_vertical_blank()?)
    }

    /// A full frame the way the video hardware paces it: 224 scanline slices with `RST 1` before
    /// scanline 96 and `RST 2` after scanline 223, then the vertical blank.
    pub fn run_frame_scanlines(&mut self) -> Result<i32> {
        let mut consumed = 0;
        for scanline in 0..RASTER_HEIGHT {
            if scanline == RasterInterrupt::MidScreen.scanline() {
                self.trigger_interrupt_scanline_96();
            }
            consumed += self.run_scanline()?;
        }
        self.trigger_interrupt_scanline_224();
        consumed += self.run_vertical_blank()?;
        Ok(consumed)
    }

    /// Cycles the last slice ran past its budget.
    pub fn banked_cycles(&self) -> i32 {
        self.scheduler.banked()
    }

    /// Video RAM: 224 scanlines of 32 bytes, least significant bit leftmost.
    pub fn video_ram(&self) -> &[u8] {
        self.bus.video_ram.as_slice()
    }

    pub fn controls(&self) -> &InputLatches {
        &self.bus.ports.controls
    }

    pub fn controls_mut(&mut self) -> &mut InputLatches {
        &mut self.bus.ports.controls
    }

    pub fn subscribe_sound(&mut self, listener: Box<dyn SoundListener>) {
        self.bus.ports.sound.subscribe(listener);
    }

    pub fn amplifier_enabled(&self) -> bool {
        self.bus.ports.sound.amplifier_enabled()
    }

    /// Flip request from the game (player 2's turn on a cocktail table).
    pub fn cocktail_mode_control(&self) -> bool {
        self.bus.ports.sound.flip()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn cpu(&self) -> &P {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut P {
        &mut self.cpu
    }

    pub fn bus(&self) -> &BoardBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut BoardBus {
        &mut self.bus
    }
}
