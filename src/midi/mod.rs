//! MIDI note helpers
//!
//! The voice context hands the modulation engine note events as
//! pitch/number/velocity triples; these conversions sit at that boundary.

/// A note event as seen by a voice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiNote {
    /// MIDI note number, 0-127
    pub number: u8,
    /// Note-on velocity, 0-127
    pub velocity: u8,
}

impl MidiNote {
    /// Equal-tempered frequency of this note
    pub fn frequency(&self) -> f64 {
        note_to_frequency(self.number)
    }

    /// Velocity normalized to 0.0..=1.0
    pub fn amplitude(&self) -> f64 {
        f64::from(self.velocity.min(127)) / 127.0
    }
}

/// MIDI note number to frequency in Hz (A4 = 69 = 440 Hz)
pub fn note_to_frequency(note: u8) -> f64 {
    440.0 * (2.0_f64).powf((f64::from(note) - 69.0) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_440() {
        assert!((note_to_frequency(69) - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_octave_doubles_frequency() {
        let a4 = note_to_frequency(69);
        let a5 = note_to_frequency(81);
        assert!((a5 - 2.0 * a4).abs() < 1e-9);
    }

    #[test]
    fn test_middle_c() {
        assert!((note_to_frequency(60) - 261.6256).abs() < 0.001);
    }

    #[test]
    fn test_note_amplitude() {
        let full = MidiNote {
            number: 60,
            velocity: 127,
        };
        let silent = MidiNote {
            number: 60,
            velocity: 0,
        };
        assert_eq!(full.amplitude(), 1.0);
        assert_eq!(silent.amplitude(), 0.0);
    }

    #[test]
    fn test_note_frequency_matches_helper() {
        let note = MidiNote {
            number: 57,
            velocity: 100,
        };
        assert_eq!(note.frequency(), note_to_frequency(57));
    }
}
