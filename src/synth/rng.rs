//! Pseudo-random sources for the sample-and-hold and noise waveforms
//!
//! Two flavors: a 32-bit linear-feedback shift register for full random
//! output, and a quantized additive-recurrence sequence for the
//! quasi-random variants (deterministic, few distinct levels).

/// 32-bit maximal-length LFSR (taps 32, 22, 2, 1).
///
/// Seeded explicitly so sequences are reproducible in tests. A zero seed
/// would lock the register, so it is replaced with a fixed non-zero value.
pub struct PnRegister {
    state: u32,
}

/// Fallback seed for the all-zero lockup state
const FALLBACK_SEED: u32 = 0xACE1_2B3D;

impl PnRegister {
    /// Create a new register with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    /// Advance the register one step and return the new state
    pub fn next_u32(&mut self) -> u32 {
        let feedback =
            ((self.state >> 31) ^ (self.state >> 21) ^ (self.state >> 1) ^ self.state) & 1;
        self.state = (self.state << 1) | feedback;
        self.state
    }

    /// Next value scaled to -1.0..1.0
    pub fn next_bipolar(&mut self) -> f64 {
        (self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Quasi-random sequence: a golden-ratio additive recurrence quantized
/// to a small number of output levels.
///
/// Compared to the LFSR this is smoother and more predictable: each draw
/// lands on one of `levels` evenly spaced values, and the low-discrepancy
/// recurrence avoids the clumping of true random draws.
pub struct QuasiRandom {
    position: f64,
    levels: u32,
}

/// Fractional part of the golden ratio; the classic low-discrepancy step
const GOLDEN_STEP: f64 = 0.618_033_988_749_895;

impl QuasiRandom {
    /// Create a sequence with the given number of output levels (min 2)
    pub fn new(levels: u32) -> Self {
        Self {
            position: 0.0,
            levels: levels.max(2),
        }
    }

    /// Next value in 0.0..=1.0, quantized to the configured level count
    pub fn next_unipolar(&mut self) -> f64 {
        self.position += GOLDEN_STEP;
        if self.position >= 1.0 {
            self.position -= 1.0;
        }
        let step = (self.position * self.levels as f64).floor();
        step / (self.levels - 1) as f64
    }

    /// Next value scaled to -1.0..1.0
    pub fn next_bipolar(&mut self) -> f64 {
        self.next_unipolar() * 2.0 - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pn_register_deterministic() {
        let mut a = PnRegister::new(12345);
        let mut b = PnRegister::new(12345);

        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_pn_register_seeds_diverge() {
        let mut a = PnRegister::new(1);
        let mut b = PnRegister::new(2);

        let seq_a: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_pn_register_zero_seed() {
        let mut rng = PnRegister::new(0);

        // Must not lock up at zero
        for _ in 0..100 {
            rng.next_u32();
        }
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_pn_register_bipolar_range() {
        let mut rng = PnRegister::new(777);

        for _ in 0..1000 {
            let v = rng.next_bipolar();
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_quasi_random_level_count() {
        let mut qr = QuasiRandom::new(8);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..1000 {
            let v = qr.next_unipolar();
            assert!((0.0..=1.0).contains(&v));
            seen.insert((v * 7.0).round() as i64);
        }

        // Quantized to at most 8 distinct levels
        assert!(seen.len() <= 8);
        assert!(seen.len() > 2);
    }

    #[test]
    fn test_quasi_random_deterministic() {
        let mut a = QuasiRandom::new(16);
        let mut b = QuasiRandom::new(16);

        for _ in 0..100 {
            assert_eq!(a.next_bipolar(), b.next_bipolar());
        }
    }

    #[test]
    fn test_quasi_random_minimum_levels() {
        let mut qr = QuasiRandom::new(0);

        // Clamped to 2 levels; values are only 0.0 or 1.0
        for _ in 0..100 {
            let v = qr.next_unipolar();
            assert!(v == 0.0 || v == 1.0);
        }
    }
}
