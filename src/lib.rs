//! Wobble - Multi-output LFO modulation engine for software synthesizers
//!
//! A phase-accumulator LFO with seven waveforms, six simultaneous output
//! channels, note-synchronized retrigger modes, and onset delay/ramp
//! shaping, plus an audition voice and engine to hear and capture it.

pub mod config;
pub mod engine;
pub mod midi;
pub mod synth;

pub use config::WobbleConfig;
pub use engine::Engine;
