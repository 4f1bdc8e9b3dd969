//! Raster-synchronised execution.
//!
//! The video hardware raises two interrupts per frame: `RST 1` when the beam reaches scanline 96
//! and `RST 2` when it leaves the last visible line. The CPU runs in slices sized to one scanline
//! and the vertical blank is a single slice. An instruction is never split, so every slice
//! overshoots a little; the overshoot is banked and taken off the next slice so the long-run rate
//! matches the crystal exactly.

use crate::{
    bus::Bus,
    config::{Configuration, RASTER_HEIGHT},
    error::Result,
    processor::{Processor, RST_1, RST_2},
};

/// The two raster interrupts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterInterrupt {
    /// Beam at scanline 96.
    MidScreen,
    /// Beam past scanline 223.
    EndOfScreen,
}

impl RasterInterrupt {
    pub const fn vector(self) -> u8 {
        match self {
            RasterInterrupt::MidScreen => RST_1,
            RasterInterrupt::EndOfScreen => RST_2,
        }
    }

    /// Scanline about to start when the interrupt is raised.
    pub const fn scanline(self) -> usize {
        match self {
            RasterInterrupt::MidScreen => 96,
            RasterInterrupt::EndOfScreen => RASTER_HEIGHT,
        }
    }
}

/// Hands out cycle budgets and carries the overshoot between them.
pub struct ScanScheduler {
    /// Cycles already run beyond what was asked for, owed back by the next slice.
    banked: i32,
    cycles_per_scanline: i32,
    cycles_per_raster_scan: i32,
    cycles_per_vertical_blank: i32,
}

impl ScanScheduler {
    pub fn new(config: &Configuration) -> Self {
        Self {
            banked: 0,
            cycles_per_scanline: config.cycles_per_scanline(),
            cycles_per_raster_scan: config.cycles_per_raster_scan(),
            cycles_per_vertical_blank: config.cycles_per_vertical_blank(),
        }
    }

    pub fn banked(&self) -> i32 {
        self.banked
    }

    pub fn clear(&mut self) {
        self.banked = 0;
    }

    pub fn cycles_per_scanline(&self) -> i32 {
        self.cycles_per_scanline
    }

    /// Run one slice of `budget` cycles, less whatever the previous slice overshot.
    pub fn run<P: Processor, B: Bus>(
        &mut self,
        cpu: &mut P,
        bus: &mut B,
        budget: i32,
    ) -> Result<i32> {
        let request = budget - self.banked;
        let consumed = cpu.run(bus, request)?;
        self.banked = consumed - request;
        Ok(consumed)
    }

    pub fn run_scanline<P: Processor, B: Bus>(&mut self, cpu: &mut P, bus: &mut B) -> Result<i32> {
        self.run(cpu, bus, self.cycles_per_scanline)
    }

    /// Every visible line as one slice.
    pub fn run_raster_scan<P: Processor, B: Bus>(
        &mut self,
        cpu: &mut P,
        bus: &mut B,
    ) -> Result<i32> {
        self.run(cpu, bus, self.cycles_per_raster_scan)
    }

    pub fn run_vertical_blank<P: Processor, B: Bus>(
        &mut self,
        cpu: &mut P,
        bus: &mut B,
    ) -> Result<i32> {
        self.run(cpu, bus, self.cycles_per_vertical_blank)
    }
}
