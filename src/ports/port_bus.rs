//! Port table and dispatch to the board's peripherals.

use log::trace;

use crate::{
    config::Configuration,
    controls::InputLatches,
    ports::{INP1, INP2, Peripheral, SHFT_DATA, SHFT_IN, SHFTAMNT, SOUND1, SOUND2, WATCHDOG},
    shifter::ShiftRegister,
    sound::SoundTrigger,
    watchdog::Watchdog,
};

const PORT_COUNT: usize = 256;

/// Peripheral that owns a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Controls,
    Shifter,
    Sound,
    Watchdog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Port table plus the peripherals that back it.
pub struct PortBus {
    input_ports: [u8; PORT_COUNT],
    output_ports: [u8; PORT_COUNT],
    readers: [Option<Device>; PORT_COUNT],
    writers: [Option<Device>; PORT_COUNT],
    pub controls: InputLatches,
    pub shifter: ShiftRegister,
    pub sound: SoundTrigger,
    pub watchdog: Watchdog,
    trace: bool,
}

impl PortBus {
    /// Port bus wired the way the board is.
    pub fn new(config: &Configuration) -> Self {
        let mut bus = Self {
            input_ports: [0; PORT_COUNT],
            output_ports: [0; PORT_COUNT],
            readers: [None; PORT_COUNT],
            writers: [None; PORT_COUNT],
            controls: InputLatches::new(config.ships, config.extra_life, config.demo_coin_info),
            shifter: ShiftRegister::new(),
            sound: SoundTrigger::new(),
            watchdog: Watchdog::new(config.show_watchdog_output),
            trace: config.debug_mode,
        };
        bus.connect(Direction::Input, INP1, Device::Controls);
        bus.connect(Direction::Input, INP2, Device::Controls);
        bus.connect(Direction::Input, SHFT_IN, Device::Shifter);
        bus.connect(Direction::Output, SHFTAMNT, Device::Shifter);
        bus.connect(Direction::Output, SHFT_DATA, Device::Shifter);
        bus.connect(Direction::Output, SOUND1, Device::Sound);
        bus.connect(Direction::Output, SOUND2, Device::Sound);
        bus.connect(Direction::Output, WATCHDOG, Device::Watchdog);
        bus
    }

    /// Route `port` in `direction` to `device`, replacing any previous owner.
    pub fn connect(&mut self, direction: Direction, port: u8, device: Device) {
        match direction {
            Direction::Input => self.readers[port as usize] = Some(device),
            Direction::Output => self.writers[port as usize] = Some(device),
        }
    }

    pub fn disconnect(&mut self, direction: Direction, port: u8) {
        match direction {
            Direction::Input => self.readers[port as usize] = None,
            Direction::Output => self.writers[port as usize] = None,
        }
    }

    /// Which peripheral, if any, owns `port`.
    pub fn route(&self, direction: Direction, port: u8) -> Option<Device> {
        match direction {
            Direction::Input => self.readers[port as usize],
            Direction::Output => self.writers[port as usize],
        }
    }

    /// `IN port`: let the owner materialise the value, then return what the port holds.
    /// Unrouted ports are never written, so they read as zero.
    pub fn read_input(&mut self, port: u8) -> u8 {
        let index = port as usize;
        if let Some(device) = self.readers[index] {
            if let Some(value) = self.device_mut(device).on_read(port) {
                self.input_ports[index] = value;
            }
        }
        let value = self.input_ports[index];
        if self.trace {
            trace!("IN  {:#04x} -> {:#04x}", port, value);
        }
        value
    }

    /// `OUT port`: owner sees the old value, the port latches the new one, owner sees the new one.
    pub fn write_output(&mut self, port: u8, value: u8) {
        if self.trace {
            trace!("OUT {:#04x} <- {:#04x}", port, value);
        }
        let index = port as usize;
        let Some(device) = self.writers[index] else {
            return;
        };
        let previous = self.output_ports[index];
        self.device_mut(device).on_before_write(port, previous);
        self.output_ports[index] = value;
        self.device_mut(device).on_after_write(port, value);
    }

    /// Last value latched on an output port.
    pub fn output_port(&self, port: u8) -> u8 {
        self.output_ports[port as usize]
    }

    /// Return every latch and peripheral to its power-up state. Listeners stay attached.
    pub fn reset(&mut self) {
        self.input_ports = [0; PORT_COUNT];
        self.output_ports = [0; PORT_COUNT];
        self.shifter = ShiftRegister::new();
        self.sound.reset();
    }

    fn device_mut(&mut self, device: Device) -> &mut dyn Peripheral {
        match device {
            Device::Controls => &mut self.controls,
            Device::Shifter => &mut self.shifter,
            Device::Sound => &mut self.sound,
            Device::Watchdog => &mut self.watchdog,
        }
    }
}
