//! Sample playback through the default output device.

use std::{collections::HashMap, fs, io::Cursor, path::Path, sync::Arc};

use log::{debug, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use crate::{
    error::{BoardError, Result},
    sound::{SoundEvent, SoundListener},
};

/// File stem of the sample recorded for `event`; `None` for amplifier events.
pub fn sample_name(event: SoundEvent) -> Option<&'static str> {
    match event {
        SoundEvent::Ufo => Some("Ufo"),
        SoundEvent::Shot => Some("Shot"),
        SoundEvent::PlayerDie => Some("BaseHit"),
        SoundEvent::InvaderDie => Some("InvHit"),
        SoundEvent::Extend => Some("Extend"),
        SoundEvent::Walk1 => Some("Walk1"),
        SoundEvent::Walk2 => Some("Walk2"),
        SoundEvent::Walk3 => Some("Walk3"),
        SoundEvent::Walk4 => Some("Walk4"),
        SoundEvent::UfoDie => Some("UfoHit"),
        SoundEvent::AmplifierEnabled | SoundEvent::AmplifierDisabled => None,
    }
}

/// Plays one sample per effect event while the amplifier is on. Samples overlap freely.
pub struct SoundEffects {
    // Dropping the stream silences the handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: HashMap<SoundEvent, Arc<[u8]>>,
    enabled: bool,
}

impl SoundEffects {
    /// Open the default output device and read `<name>.wav` for every effect from `directory`.
    pub fn load(directory: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|error| BoardError::Audio(error.to_string()))?;

        let mut samples: HashMap<SoundEvent, Arc<[u8]>> = HashMap::new();
        for event in SoundEvent::EFFECTS {
            let Some(name) = sample_name(event) else {
                continue;
            };
            let path = directory.join(format!("{name}.wav"));
            let bytes = fs::read(&path).map_err(|source| BoardError::Io {
                path: path.clone(),
                source,
            })?;
            debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
            samples.insert(event, Arc::from(bytes));
        }

        Ok(Self {
            _stream: stream,
            handle,
            samples,
            enabled: false,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn play(&self, event: SoundEvent) -> Result<()> {
        let Some(sample) = self.samples.get(&event) else {
            return Ok(());
        };
        let source = Decoder::new(Cursor::new(Arc::clone(sample)))
            .map_err(|error| BoardError::Audio(error.to_string()))?;
        self.handle
            .play_raw(source.convert_samples())
            .map_err(|error| BoardError::Audio(error.to_string()))
    }
}

impl SoundListener for SoundEffects {
    fn on_sound(&mut self, event: SoundEvent) {
        match event {
            SoundEvent::AmplifierEnabled => self.enabled = true,
            SoundEvent::AmplifierDisabled => self.enabled = false,
            effect if self.enabled => {
                if let Err(error) = self.play(effect) {
                    warn!("Cannot play {:?}: {}", effect, error);
                }
            }
            _ => {}
        }
    }
}
