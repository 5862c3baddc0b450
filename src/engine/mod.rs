//! Audio engine
//!
//! Owns the audition voice and a sample-accurate note scheduler built
//! from the configured note list. Each `process()` call fires any due
//! note events, then renders one sample.

mod player;
mod recorder;

pub use player::{list_output_devices, Player};
pub use recorder::Recorder;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::WobbleConfig;
use crate::synth::{AuditionVoice, Lfo, ModOutput};

/// A scheduled note-on or note-off
#[derive(Debug, Clone, Copy)]
struct NoteEvent {
    at_sample: u64,
    note: u8,
    /// Some(velocity) for note-on, None for note-off
    velocity: Option<u8>,
}

/// The main audio engine
pub struct Engine {
    voice: AuditionVoice,
    sample_rate: f64,
    clock: u64,
    events: Vec<NoteEvent>,
    next_event: usize,
}

impl Engine {
    /// Create a new engine from a validated configuration
    pub fn new(config: WobbleConfig) -> Self {
        let sample_rate = f64::from(config.audio.sample_rate);

        // Seeding stays at this boundary: explicit seed from the config,
        // otherwise derived from the clock
        let seed = config.lfo.seed.unwrap_or_else(time_derived_seed);
        let lfo = Lfo::with_seed(config.lfo.to_parameters(), seed);

        let mut voice = AuditionVoice::new(sample_rate, config.audition.carrier.into(), lfo);
        voice.set_vibrato_semitones(config.audition.vibrato_semitones);
        voice.set_tremolo_depth(config.audition.tremolo_depth);
        voice.set_volume(config.audition.volume);

        let mut events = Vec::with_capacity(config.notes.len() * 2);
        for note in &config.notes {
            let on = (note.at * sample_rate) as u64;
            let off = ((note.at + note.duration) * sample_rate) as u64;
            events.push(NoteEvent {
                at_sample: on,
                note: note.note,
                velocity: Some(note.velocity),
            });
            events.push(NoteEvent {
                at_sample: off,
                note: note.note,
                velocity: None,
            });
        }
        events.sort_by_key(|e| e.at_sample);

        Self {
            voice,
            sample_rate,
            clock: 0,
            events,
            next_event: 0,
        }
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Samples rendered so far
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// True while scheduled notes remain or a note is sounding
    pub fn has_work(&self) -> bool {
        self.next_event < self.events.len() || self.voice.is_active()
    }

    fn fire_due_events(&mut self) {
        while let Some(event) = self.events.get(self.next_event) {
            if event.at_sample > self.clock {
                break;
            }
            match event.velocity {
                Some(velocity) => self.voice.note_on(event.note, velocity),
                None => self.voice.note_off(event.note),
            }
            self.next_event += 1;
        }
    }

    /// Generate the next audio sample
    pub fn process(&mut self) -> f64 {
        self.fire_due_events();
        let sample = self.voice.process();
        self.clock += 1;
        sample
    }

    /// Render the raw LFO channels for the current sample, without
    /// carrier audio. Advances the same clock `process()` does.
    pub fn render_modulation(&mut self) -> ModOutput {
        self.fire_due_events();
        let output = self.voice.render_modulation();
        self.clock += 1;
        output
    }

    /// Fill a buffer with audio samples
    pub fn fill_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process() as f32;
        }
    }
}

/// Clock-derived fallback seed
fn time_derived_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() | 1)
        .unwrap_or(0x5EED)
}
