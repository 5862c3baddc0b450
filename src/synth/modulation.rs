//! Modulation source interface
//!
//! A modulation source is driven by note events and asked once per sample
//! for a vector of correlated output channels. The routing matrix that
//! consumes the channels lives outside this crate; sources only promise
//! the channel semantics below.

/// Six output channels produced by a single render call.
///
/// All channels derive from the same underlying phase state:
/// - `normal` / `inverted`: the bipolar waveform and its negation
/// - `quad_phase` / `quad_phase_inverted`: the same waveform a quarter
///   cycle ahead, and its negation
/// - `unipolar_from_max`: falling unipolar curve, mimics an inverted
///   envelope running from max back to max
/// - `unipolar_from_min`: rising unipolar curve, mimics an envelope
///   running from zero to max
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModOutput {
    pub normal: f64,
    pub inverted: f64,
    pub quad_phase: f64,
    pub quad_phase_inverted: f64,
    pub unipolar_from_max: f64,
    pub unipolar_from_min: f64,
}

impl ModOutput {
    /// Build all six channels from a bipolar pair, applying one gain
    pub fn from_bipolar(normal: f64, quad_phase: f64, gain: f64) -> Self {
        Self {
            normal: normal * gain,
            inverted: -normal * gain,
            quad_phase: quad_phase * gain,
            quad_phase_inverted: -quad_phase * gain,
            unipolar_from_max: (0.5 * normal + 0.5) * gain,
            unipolar_from_min: (0.5 - 0.5 * normal) * gain,
        }
    }
}

/// Values a routing matrix can feed into a modulation source.
///
/// Kept for interface uniformity across sources; the LFO in this crate
/// stores but does not consume them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModInput {
    /// Bipolar frequency modulation input
    pub frequency_mod: f64,
    /// Bipolar amplitude modulation input
    pub amplitude_mod: f64,
}

/// Per-voice modulation source driven by note events.
///
/// Every operation returns a success flag rather than a `Result`: a source
/// has no recoverable failure modes on the render path, and degenerate
/// parameters produce degenerate numeric output instead of errors.
pub trait ModulationSource {
    /// Recompute timing from a new sample rate and restore canonical phase
    fn reset(&mut self, sample_rate: f64) -> bool;

    /// Handle a note-on event (pitch in Hz, MIDI note number, velocity)
    fn note_on(&mut self, pitch: f64, note_number: u8, velocity: u8) -> bool;

    /// Handle a note-off event
    fn note_off(&mut self, pitch: f64, note_number: u8, velocity: u8) -> bool;

    /// Produce the output vector for the current sample and advance time
    fn render(&mut self) -> ModOutput;

    /// Auxiliary modulation input (unused by sources that ignore it)
    fn modulation_input(&self) -> ModInput;

    /// Replace the auxiliary modulation input
    fn set_modulation_input(&mut self, input: ModInput);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_output_channels() {
        let out = ModOutput::from_bipolar(0.5, -0.25, 1.0);

        assert_eq!(out.normal, 0.5);
        assert_eq!(out.inverted, -0.5);
        assert_eq!(out.quad_phase, -0.25);
        assert_eq!(out.quad_phase_inverted, 0.25);
        assert_eq!(out.unipolar_from_max, 0.75);
        assert_eq!(out.unipolar_from_min, 0.25);
    }

    #[test]
    fn test_mod_output_gain() {
        let unit = ModOutput::from_bipolar(1.0, 0.5, 1.0);
        let half = ModOutput::from_bipolar(1.0, 0.5, 0.5);

        assert_eq!(half.normal, unit.normal * 0.5);
        assert_eq!(half.quad_phase, unit.quad_phase * 0.5);
        assert_eq!(half.unipolar_from_max, unit.unipolar_from_max * 0.5);
        assert_eq!(half.unipolar_from_min, unit.unipolar_from_min * 0.5);
    }

    #[test]
    fn test_mod_output_zero_gain_silences() {
        let out = ModOutput::from_bipolar(1.0, -1.0, 0.0);
        assert_eq!(out, ModOutput::default());
    }

    #[test]
    fn test_unipolar_channels_complementary() {
        // from_max + from_min always sums to the gain
        for normal in [-1.0, -0.3, 0.0, 0.7, 1.0] {
            let out = ModOutput::from_bipolar(normal, 0.0, 0.8);
            assert!((out.unipolar_from_max + out.unipolar_from_min - 0.8).abs() < 1e-12);
        }
    }
}
