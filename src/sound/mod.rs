//! Discrete sound circuitry, as seen from the CPU.
//!
//! Two write-only latches (ports 3 and 5) drive the analog sound boards. Each effect is started by a
//! rising edge on its latch bit; the amplifier enable bit is a level and reports both edges.
//!
//! - **trigger**: edge detection and listener dispatch.

pub mod trigger;

pub use trigger::SoundTrigger;

/// Something the sound boards were told to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Port 3 bit 0
    Ufo,
    /// Port 3 bit 1
    Shot,
    /// Port 3 bit 2
    PlayerDie,
    /// Port 3 bit 3
    InvaderDie,
    /// Port 3 bit 4
    Extend,
    /// Port 5 bits 0-3: the four fleet movement notes
    Walk1,
    Walk2,
    Walk3,
    Walk4,
    /// Port 5 bit 4
    UfoDie,
    /// Port 3 bit 5 rising
    AmplifierEnabled,
    /// Port 3 bit 5 falling
    AmplifierDisabled,
}

impl SoundEvent {
    /// The ten one-shot effects, in latch bit order (port 3 then port 5).
    pub const EFFECTS: [SoundEvent; 10] = [
        SoundEvent::Ufo,
        SoundEvent::Shot,
        SoundEvent::PlayerDie,
        SoundEvent::InvaderDie,
        SoundEvent::Extend,
        SoundEvent::Walk1,
        SoundEvent::Walk2,
        SoundEvent::Walk3,
        SoundEvent::Walk4,
        SoundEvent::UfoDie,
    ];
}

/// Receiver of sound events, called synchronously from the `OUT` that caused them.
pub trait SoundListener {
    fn on_sound(&mut self, event: SoundEvent);
}

impl<F: FnMut(SoundEvent)> SoundListener for F {
    fn on_sound(&mut self, event: SoundEvent) {
        self(event)
    }
}
