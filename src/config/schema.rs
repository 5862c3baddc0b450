//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::synth::{CarrierWaveform, LfoMode, LfoParameters, LfoWaveform};

/// Main configuration for Wobble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WobbleConfig {
    /// Audio output settings
    pub audio: AudioConfig,

    /// LFO settings
    pub lfo: LfoConfig,

    /// Audition voice settings
    #[serde(default)]
    pub audition: AuditionConfig,

    /// Scheduled note events
    #[serde(default)]
    pub notes: Vec<NoteConfig>,
}

impl WobbleConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.audio.sample_rate < 8000 || self.audio.sample_rate > 192000 {
            bail!("Sample rate must be between 8000 and 192000");
        }
        if self.audio.buffer_size < 64 || self.audio.buffer_size > 8192 {
            bail!("Buffer size must be between 64 and 8192");
        }

        if self.lfo.frequency_hz.abs() > 20.0 {
            bail!("LFO frequency must be between -20 and 20 Hz");
        }
        if self.lfo.amplitude < 0.0 || self.lfo.amplitude > 1.0 {
            bail!("LFO amplitude must be between 0.0 and 1.0");
        }
        if self.lfo.delay_ms < 0.0 || self.lfo.delay_ms > 2000.0 {
            bail!("LFO delay must be between 0 and 2000 ms");
        }
        if self.lfo.ramp_ms < 0.0 || self.lfo.ramp_ms > 2000.0 {
            bail!("LFO ramp must be between 0 and 2000 ms");
        }

        if self.audition.volume < 0.0 || self.audition.volume > 1.0 {
            bail!("Audition volume must be between 0.0 and 1.0");
        }
        if self.audition.tremolo_depth < 0.0 || self.audition.tremolo_depth > 1.0 {
            bail!("Tremolo depth must be between 0.0 and 1.0");
        }
        if self.audition.vibrato_semitones < 0.0 || self.audition.vibrato_semitones > 12.0 {
            bail!("Vibrato depth must be between 0 and 12 semitones");
        }

        for note in &self.notes {
            if note.at < 0.0 {
                bail!("Note start time must not be negative");
            }
            if note.duration <= 0.0 {
                bail!("Note duration must be positive");
            }
            if note.note > 127 {
                bail!("Note number must be 0-127");
            }
            if note.velocity > 127 {
                bail!("Note velocity must be 0-127");
            }
        }

        Ok(())
    }
}

/// Audio output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz (default: 44100)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Buffer size in samples (default: 512)
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Output device name (None = default device)
    pub device: Option<String>,
}

fn default_sample_rate() -> u32 {
    44100
}
fn default_buffer_size() -> usize {
    512
}

/// LFO waveform selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaveformKind {
    #[default]
    Triangle,
    Sine,
    Saw,
    RandomSampleHold,
    QuasiRandomSampleHold,
    Noise,
    QuasiRandomNoise,
}

impl From<WaveformKind> for LfoWaveform {
    fn from(kind: WaveformKind) -> Self {
        match kind {
            WaveformKind::Triangle => LfoWaveform::Triangle,
            WaveformKind::Sine => LfoWaveform::Sine,
            WaveformKind::Saw => LfoWaveform::Saw,
            WaveformKind::RandomSampleHold => LfoWaveform::RandomSampleHold,
            WaveformKind::QuasiRandomSampleHold => LfoWaveform::QuasiRandomSampleHold,
            WaveformKind::Noise => LfoWaveform::Noise,
            WaveformKind::QuasiRandomNoise => LfoWaveform::QuasiRandomNoise,
        }
    }
}

/// LFO mode selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    #[default]
    Sync,
    OneShot,
    FreeRun,
}

impl From<ModeKind> for LfoMode {
    fn from(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Sync => LfoMode::Sync,
            ModeKind::OneShot => LfoMode::OneShot,
            ModeKind::FreeRun => LfoMode::FreeRun,
        }
    }
}

/// LFO configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LfoConfig {
    /// Waveform shape (default: triangle)
    #[serde(default)]
    pub waveform: WaveformKind,

    /// Note-event behavior (default: sync)
    #[serde(default)]
    pub mode: ModeKind,

    /// Rate in Hz, -20 to 20 (default: 2.0)
    #[serde(default = "default_frequency")]
    pub frequency_hz: f64,

    /// Output amplitude 0.0-1.0 (default: 1.0)
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Delay after note-on in ms, 0-2000 (default: 0)
    #[serde(default)]
    pub delay_ms: f64,

    /// Fade-in after the delay in ms, 0-2000 (default: 0)
    #[serde(default)]
    pub ramp_ms: f64,

    /// Random seed for sample-and-hold (None = time-derived)
    pub seed: Option<u32>,
}

fn default_frequency() -> f64 {
    2.0
}
fn default_amplitude() -> f64 {
    1.0
}

impl Default for LfoConfig {
    fn default() -> Self {
        Self {
            waveform: WaveformKind::default(),
            mode: ModeKind::default(),
            frequency_hz: default_frequency(),
            amplitude: default_amplitude(),
            delay_ms: 0.0,
            ramp_ms: 0.0,
            seed: None,
        }
    }
}

impl LfoConfig {
    /// Build the runtime parameter block
    pub fn to_parameters(&self) -> LfoParameters {
        LfoParameters {
            waveform: self.waveform.into(),
            mode: self.mode.into(),
            frequency_hz: self.frequency_hz,
            output_amplitude: self.amplitude,
            delay_ms: self.delay_ms,
            ramp_ms: self.ramp_ms,
        }
    }
}

/// Carrier waveform selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CarrierKind {
    #[default]
    Sine,
    Triangle,
    Saw,
}

impl From<CarrierKind> for CarrierWaveform {
    fn from(kind: CarrierKind) -> Self {
        match kind {
            CarrierKind::Sine => CarrierWaveform::Sine,
            CarrierKind::Triangle => CarrierWaveform::Triangle,
            CarrierKind::Saw => CarrierWaveform::Saw,
        }
    }
}

/// Audition voice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditionConfig {
    /// Carrier waveform (default: sine)
    #[serde(default)]
    pub carrier: CarrierKind,

    /// Vibrato depth in semitones (default: 0.5)
    #[serde(default = "default_vibrato")]
    pub vibrato_semitones: f64,

    /// Tremolo depth 0.0-1.0 (default: 0.0)
    #[serde(default)]
    pub tremolo_depth: f64,

    /// Voice volume 0.0-1.0 (default: 0.7)
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_vibrato() -> f64 {
    0.5
}
fn default_volume() -> f64 {
    0.7
}

impl Default for AuditionConfig {
    fn default() -> Self {
        Self {
            carrier: CarrierKind::default(),
            vibrato_semitones: default_vibrato(),
            tremolo_depth: 0.0,
            volume: default_volume(),
        }
    }
}

/// A scheduled note event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Start time in seconds
    pub at: f64,

    /// Duration in seconds
    pub duration: f64,

    /// MIDI note number 0-127
    pub note: u8,

    /// Velocity 0-127 (default: 100)
    #[serde(default = "default_velocity")]
    pub velocity: u8,
}

fn default_velocity() -> u8 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_audio_config() {
        let yaml = "sample_rate: 48000";
        let config: AudioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.buffer_size, 512); // default
    }

    #[test]
    fn test_lfo_config_defaults() {
        let config: LfoConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.waveform, WaveformKind::Triangle);
        assert_eq!(config.mode, ModeKind::Sync);
        assert_eq!(config.frequency_hz, 2.0);
        assert_eq!(config.amplitude, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_lfo_config_parses_waveform_names() {
        let yaml = r#"
waveform: random_sample_hold
mode: one_shot
frequency_hz: 4.5
amplitude: 0.8
delay_ms: 250
ramp_ms: 100
seed: 42
"#;
        let config: LfoConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.waveform, WaveformKind::RandomSampleHold);
        assert_eq!(config.mode, ModeKind::OneShot);
        assert_eq!(config.seed, Some(42));

        let params = config.to_parameters();
        assert_eq!(params.waveform, LfoWaveform::RandomSampleHold);
        assert_eq!(params.mode, LfoMode::OneShot);
        assert_eq!(params.frequency_hz, 4.5);
        assert_eq!(params.output_amplitude, 0.8);
        assert_eq!(params.delay_ms, 250.0);
        assert_eq!(params.ramp_ms, 100.0);
    }

    #[test]
    fn test_note_config() {
        let yaml = r#"
at: 0.5
duration: 2.0
note: 57
"#;
        let config: NoteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.note, 57);
        assert_eq!(config.velocity, 100); // default
    }

    fn valid_config() -> WobbleConfig {
        WobbleConfig {
            audio: AudioConfig {
                sample_rate: 44100,
                buffer_size: 512,
                device: None,
            },
            lfo: LfoConfig::default(),
            audition: AuditionConfig::default(),
            notes: vec![NoteConfig {
                at: 0.0,
                duration: 1.0,
                note: 69,
                velocity: 100,
            }],
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_frequency() {
        let mut config = valid_config();
        config.lfo.frequency_hz = 50.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_frequency_is_valid() {
        let mut config = valid_config();
        config.lfo.frequency_hz = -5.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_amplitude() {
        let mut config = valid_config();
        config.lfo.amplitude = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_note_duration() {
        let mut config = valid_config();
        config.notes[0].duration = 0.0;
        assert!(config.validate().is_err());
    }
}
