//! Audition voice: a carrier tone with the LFO wired to pitch and level
//!
//! Stands in for the host synthesizer's voice context. It owns the LFO,
//! forwards note events to it, and applies two of the six channels as
//! vibrato (normal output) and tremolo (unipolar-from-max output) so the
//! modulation can be heard.

use super::lfo::Lfo;
use super::modulation::{ModOutput, ModulationSource};
use super::oscillator::{CarrierWaveform, Oscillator};
use crate::midi::note_to_frequency;

/// A single audition voice
pub struct AuditionVoice {
    carrier: Oscillator,
    lfo: Lfo,
    base_frequency: f64,
    /// Vibrato depth in semitones at full LFO swing
    vibrato_semitones: f64,
    /// Tremolo depth, 0.0..=1.0
    tremolo_depth: f64,
    volume: f64,
    velocity_gain: f64,
    active: bool,
}

impl AuditionVoice {
    /// Create a voice; the LFO is constructed by the caller so seeding
    /// stays at the boundary
    pub fn new(sample_rate: f64, waveform: CarrierWaveform, mut lfo: Lfo) -> Self {
        lfo.reset(sample_rate);
        Self {
            carrier: Oscillator::new(waveform, 220.0, sample_rate),
            lfo,
            base_frequency: 220.0,
            vibrato_semitones: 0.5,
            tremolo_depth: 0.0,
            volume: 0.7,
            velocity_gain: 1.0,
            active: false,
        }
    }

    /// Set vibrato depth in semitones
    pub fn set_vibrato_semitones(&mut self, semitones: f64) {
        self.vibrato_semitones = semitones;
    }

    /// Set tremolo depth (0.0 disables)
    pub fn set_tremolo_depth(&mut self, depth: f64) {
        self.tremolo_depth = depth.clamp(0.0, 1.0);
    }

    /// Set the voice volume
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Access the LFO, e.g. to change its parameters
    pub fn lfo_mut(&mut self) -> &mut Lfo {
        &mut self.lfo
    }

    /// Whether a note is currently sounding
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a note
    pub fn note_on(&mut self, note_number: u8, velocity: u8) {
        let pitch = note_to_frequency(note_number);
        self.base_frequency = pitch;
        self.velocity_gain = f64::from(velocity) / 127.0;
        self.active = true;
        self.lfo.note_on(pitch, note_number, velocity);
    }

    /// End a note
    pub fn note_off(&mut self, note_number: u8) {
        let pitch = note_to_frequency(note_number);
        self.active = false;
        self.lfo.note_off(pitch, note_number, 0);
    }

    /// Render the LFO only, without generating carrier audio.
    ///
    /// Used when capturing the raw modulation channels; advances the same
    /// timebase `process()` would.
    pub fn render_modulation(&mut self) -> ModOutput {
        self.lfo.render()
    }

    /// Generate the next audio sample with modulation applied
    pub fn process(&mut self) -> f64 {
        let m = self.lfo.render();

        if !self.active {
            return 0.0;
        }

        // Pitch: scale by 2^(semitones/12), driven by the normal output
        let freq = self.base_frequency * (2.0_f64).powf(self.vibrato_semitones * m.normal / 12.0);
        self.carrier.set_frequency(freq);
        let sample = self.carrier.generate();

        // Level: the unipolar-from-max channel dips from full level and
        // returns, which is the classic tremolo contour
        let tremolo = 1.0 - self.tremolo_depth * (1.0 - m.unipolar_from_max);

        sample * tremolo * self.velocity_gain * self.volume
    }
}
