//! Synthesis components: the LFO engine and its audition harness

pub mod lfo;
pub mod modulation;
pub mod oscillator;
pub mod rng;
pub mod timer;
pub mod voice;

pub use lfo::{Lfo, LfoMode, LfoParameters, LfoWaveform};
pub use modulation::{ModInput, ModOutput, ModulationSource};
pub use oscillator::{CarrierWaveform, Oscillator};
pub use voice::AuditionVoice;
