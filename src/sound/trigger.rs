//! Edge detector over the two sound latches.

use log::debug;

use crate::{
    ports::{Peripheral, SOUND1, SOUND2},
    sound::{SoundEvent, SoundListener},
};

/// Amplifier enable on port 3; cabinet flip on port 5.
const LEVEL_BIT: u8 = 0x20;

/// One-shot effects on port 3, by bit.
const SOUND1_EFFECTS: [SoundEvent; 5] = [
    SoundEvent::Ufo,
    SoundEvent::Shot,
    SoundEvent::PlayerDie,
    SoundEvent::InvaderDie,
    SoundEvent::Extend,
];

/// One-shot effects on port 5, by bit.
const SOUND2_EFFECTS: [SoundEvent; 5] = [
    SoundEvent::Walk1,
    SoundEvent::Walk2,
    SoundEvent::Walk3,
    SoundEvent::Walk4,
    SoundEvent::UfoDie,
];

pub struct SoundTrigger {
    /// Value of each latch before the write in progress (port 3, port 5).
    previous: [u8; 2],
    amplifier_enabled: bool,
    flip: bool,
    listeners: Vec<Box<dyn SoundListener>>,
}

impl SoundTrigger {
    pub fn new() -> Self {
        Self {
            previous: [0; 2],
            amplifier_enabled: false,
            flip: false,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn SoundListener>) {
        self.listeners.push(listener);
    }

    pub fn amplifier_enabled(&self) -> bool {
        self.amplifier_enabled
    }

    /// Cocktail flip request, port 5 bit 5.
    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Forget latch history without notifying anyone.
    pub fn reset(&mut self) {
        self.previous = [0; 2];
        self.amplifier_enabled = false;
        self.flip = false;
    }

    fn shadow(port: u8) -> Option<usize> {
        match port {
            SOUND1 => Some(0),
            SOUND2 => Some(1),
            _ => None,
        }
    }

    fn emit(&mut self, event: SoundEvent) {
        debug!("Sound {:?}", event);
        for listener in &mut self.listeners {
            listener.on_sound(event);
        }
    }

    fn fire_rising(&mut self, effects: &[SoundEvent; 5], previous: u8, value: u8) {
        let rising = value & !previous;
        for (bit, &event) in effects.iter().enumerate() {
            if rising & (1 << bit) != 0 {
                self.emit(event);
            }
        }
    }

    fn latch_sound1(&mut self, previous: u8, value: u8) {
        self.fire_rising(&SOUND1_EFFECTS, previous, value);

        let was = previous & LEVEL_BIT != 0;
        let now = value & LEVEL_BIT != 0;
        if now && !was {
            self.amplifier_enabled = true;
            self.emit(SoundEvent::AmplifierEnabled);
        } else if was && !now {
            self.amplifier_enabled = false;
            self.emit(SoundEvent::AmplifierDisabled);
        }
    }

    fn latch_sound2(&mut self, previous: u8, value: u8) {
        self.fire_rising(&SOUND2_EFFECTS, previous, value);
        self.flip = value & LEVEL_BIT != 0;
    }
}

impl Default for SoundTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Peripheral for SoundTrigger {
    fn on_before_write(&mut self, port: u8, previous: u8) {
        if let Some(index) = Self::shadow(port) {
            self.previous[index] = previous;
        }
    }

    fn on_after_write(&mut self, port: u8, value: u8) {
        let Some(index) = Self::shadow(port) else {
            return;
        };
        let previous = self.previous[index];
        match port {
            SOUND1 => self.latch_sound1(previous, value),
            _ => self.latch_sound2(previous, value),
        }
        self.previous[index] = value;
    }
}
