//! Audio-rate carrier oscillator for auditioning modulation
//!
//! Deliberately plain: the interesting signal here is the LFO riding on
//! top, so the carrier just needs to be clean and cheap.

use std::f64::consts::PI;

/// Carrier waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierWaveform {
    Sine,
    Triangle,
    Saw,
}

/// A basic phase-accumulator oscillator
pub struct Oscillator {
    waveform: CarrierWaveform,
    phase: f64,
    frequency: f64,
    sample_rate: f64,
}

impl Oscillator {
    /// Create a new oscillator
    pub fn new(waveform: CarrierWaveform, frequency: f64, sample_rate: f64) -> Self {
        Self {
            waveform,
            phase: 0.0,
            frequency,
            sample_rate,
        }
    }

    /// Set the frequency in Hz
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Get the current frequency
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Reset the phase
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Generate the next sample in -1.0..=1.0
    pub fn generate(&mut self) -> f64 {
        let sample = match self.waveform {
            CarrierWaveform::Sine => (self.phase * 2.0 * PI).sin(),
            CarrierWaveform::Triangle => {
                if self.phase < 0.25 {
                    4.0 * self.phase
                } else if self.phase < 0.75 {
                    2.0 - 4.0 * self.phase
                } else {
                    4.0 * self.phase - 4.0
                }
            }
            CarrierWaveform::Saw => 2.0 * self.phase - 1.0,
        };

        self.phase += self.frequency / self.sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_sine_range() {
        let mut osc = Oscillator::new(CarrierWaveform::Sine, 440.0, 44100.0);

        for _ in 0..44100 {
            let sample = osc.generate();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_oscillator_sine_starts_at_zero() {
        let mut osc = Oscillator::new(CarrierWaveform::Sine, 440.0, 44100.0);
        assert!(osc.generate().abs() < 1e-12);
    }

    #[test]
    fn test_oscillator_set_frequency() {
        let mut osc = Oscillator::new(CarrierWaveform::Saw, 220.0, 44100.0);
        osc.set_frequency(440.0);
        assert_eq!(osc.frequency(), 440.0);
    }

    #[test]
    fn test_oscillator_triangle_range() {
        let mut osc = Oscillator::new(CarrierWaveform::Triangle, 100.0, 44100.0);

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for _ in 0..44100 {
            let sample = osc.generate();
            min = min.min(sample);
            max = max.max(sample);
        }
        assert!(min < -0.99);
        assert!(max > 0.99);
    }

    #[test]
    fn test_oscillator_reset() {
        let mut osc = Oscillator::new(CarrierWaveform::Sine, 440.0, 44100.0);
        for _ in 0..13 {
            osc.generate();
        }
        osc.reset();
        assert!(osc.generate().abs() < 1e-12);
    }
}
