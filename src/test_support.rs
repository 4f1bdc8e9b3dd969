//! Fake processor for exercising the board without an 8080 core.

use std::collections::VecDeque;

use crate::{bus::Bus, error::Result, processor::Processor};

/// Bus access performed by a scripted instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    None,
    Read(u16),
    Write(u16, u8),
    Out(u8, u8),
    In(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub cycles: i32,
    pub access: Access,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CpuEvent {
    PowerOn,
    PowerOff,
    Reset,
    Interrupt(u8),
    /// Data bus byte fetched when a pending interrupt was taken.
    Acknowledge(u8),
    Run { budget: i32, consumed: i32 },
}

pub struct ScriptedCpu {
    program: VecDeque<Instruction>,
    /// Length of every instruction once the program runs out.
    repeat: Option<i32>,
    powered: bool,
    pending: bool,
    pub events: Vec<CpuEvent>,
    /// Values returned by `In` and `Read` accesses.
    pub inputs: Vec<u8>,
}

impl ScriptedCpu {
    pub fn new(program: Vec<Instruction>, repeat: Option<i32>) -> Self {
        Self {
            program: program.into(),
            repeat,
            powered: true,
            pending: false,
            events: Vec::new(),
            inputs: Vec::new(),
        }
    }

    pub fn with_cycles(cycles: &[i32]) -> Self {
        let program = cycles
            .iter()
            .map(|&cycles| Instruction {
                cycles,
                access: Access::None,
            })
            .collect();
        Self::new(program, None)
    }

    pub fn repeating(cycles: i32) -> Self {
        Self::new(Vec::new(), Some(cycles))
    }

    pub fn budgets(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                CpuEvent::Run { budget, .. } => Some(*budget),
                _ => None,
            })
            .collect()
    }

    pub fn interrupts(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                CpuEvent::Interrupt(vector) => Some(*vector),
                _ => None,
            })
            .collect()
    }

    fn next_instruction(&mut self) -> Option<Instruction> {
        self.program.pop_front().or(self.repeat.map(|cycles| Instruction {
            cycles,
            access: Access::None,
        }))
    }
}

impl Processor for ScriptedCpu {
    fn power_on(&mut self) {
        self.powered = true;
        self.events.push(CpuEvent::PowerOn);
    }

    fn power_off(&mut self) {
        self.powered = false;
        self.events.push(CpuEvent::PowerOff);
    }

    fn reset(&mut self) {
        self.pending = false;
        self.events.push(CpuEvent::Reset);
    }

    fn request_interrupt(&mut self, vector: u8) {
        self.pending = true;
        self.events.push(CpuEvent::Interrupt(vector));
    }

    fn run<B: Bus>(&mut self, bus: &mut B, max_cycles: i32) -> Result<i32> {
        let mut current = 0;
        while self.powered && current < max_cycles {
            if self.pending {
                self.pending = false;
                self.events.push(CpuEvent::Acknowledge(bus.data()));
                current += 11;
                continue;
            }
            let Some(instruction) = self.next_instruction() else {
                break;
            };
            match instruction.access {
                Access::None => {}
                Access::Read(address) => {
                    let value = bus.read(address)?;
                    self.inputs.push(value);
                }
                Access::Write(address, data) => bus.write(address, data)?,
                Access::Out(port, data) => bus.write_port(port, data),
                Access::In(port) => {
                    let value = bus.read_port(port);
                    self.inputs.push(value);
                }
            }
            current += instruction.cycles;
        }
        self.events.push(CpuEvent::Run {
            budget: max_cycles,
            consumed: current,
        });
        Ok(current)
    }
}
