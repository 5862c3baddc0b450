//! Multi-output low frequency oscillator
//!
//! One phase accumulator drives six correlated output channels per render
//! call: the waveform, its inversion, a quadrature pair offset a quarter
//! cycle, and two unipolar envelope-style remappings. Waveforms cover the
//! usual periodic shapes plus two sample-and-hold flavors and two noise
//! flavors. Runs once per sample on the audio path: no allocation, no
//! transcendental calls (sine uses a parabolic approximation).

use std::f64::consts::PI;

use super::modulation::{ModInput, ModOutput, ModulationSource};
use super::rng::{PnRegister, QuasiRandom};
use super::timer::Timer;

/// LFO waveform shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfoWaveform {
    /// Bidirectional linear ramp
    Triangle,
    /// Parabolic sine approximation
    Sine,
    /// Unidirectional linear ramp
    Saw,
    /// New random value held for one cycle
    RandomSampleHold,
    /// Quantized quasi-random value held for one cycle
    QuasiRandomSampleHold,
    /// New random value every sample
    Noise,
    /// Quantized quasi-random value every sample
    QuasiRandomNoise,
}

/// Restart behavior on note events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfoMode {
    /// Phase restarts with each note-on
    Sync,
    /// One cycle per note-on, then the output freezes
    OneShot,
    /// Phase runs continuously across notes
    FreeRun,
}

/// Externally owned LFO settings, read by the generator on each render.
///
/// The owning voice context updates these between render calls; amplitude
/// is clamped to 0..=1 by caller convention and frequency may be negative
/// for reverse phase motion.
#[derive(Debug, Clone, Copy)]
pub struct LfoParameters {
    pub waveform: LfoWaveform,
    pub mode: LfoMode,
    /// Oscillation rate in Hz
    pub frequency_hz: f64,
    /// Output scale, 0.0..=1.0
    pub output_amplitude: f64,
    /// Silence after note-on before the signal starts
    pub delay_ms: f64,
    /// Fade-in after the delay elapses
    pub ramp_ms: f64,
}

impl Default for LfoParameters {
    fn default() -> Self {
        Self {
            waveform: LfoWaveform::Triangle,
            mode: LfoMode::Sync,
            frequency_hz: 2.0,
            output_amplitude: 1.0,
            delay_ms: 0.0,
            ramp_ms: 0.0,
        }
    }
}

// Parabolic sine constants, angle in -pi..pi
const B: f64 = 4.0 / PI;
const C: f64 = -4.0 / (PI * PI);
const P: f64 = 0.225;

/// Fast sine approximation with two parabolas.
///
/// Exact at 0 and +/-pi, odd-symmetric, max error well under 0.02 against
/// the true sine. Avoids a transcendental call on the per-sample path.
pub fn parabolic_sine(angle: f64) -> f64 {
    let y = B * angle + C * angle * angle.abs();
    P * (y * y.abs() - y) + y
}

/// Bipolar triangle: starts at +1, reaches -1 mid-cycle
fn triangle_shape(counter: f64) -> f64 {
    2.0 * (2.0 * counter - 1.0).abs() - 1.0
}

/// Bipolar saw: linear ramp -1..1 over the cycle
fn saw_shape(counter: f64) -> f64 {
    2.0 * counter - 1.0
}

/// Distinct levels for the quasi-random draws
const QUASI_RANDOM_LEVELS: u32 = 16;

/// Default seed when the caller does not inject one
const DEFAULT_SEED: u32 = 0x1D87_2B41;

/// The LFO engine: one instance per voice (or per global LFO slot).
pub struct Lfo {
    params: LfoParameters,

    // Timebase
    sample_rate: f64,
    phase_inc: f64,
    mod_counter: f64,
    mod_counter_qp: f64,

    // One-shot bookkeeping
    render_complete: bool,
    held_output: ModOutput,

    // Delay / ramp after note-on
    delay_timer: Timer,
    ramp_timer: Timer,

    // Sample-and-hold state; sh_counter of -1 forces a redraw on the
    // next render call instead of waiting for a cycle wrap
    pn_register: PnRegister,
    quasi_random: QuasiRandom,
    sh_counter: i64,
    sh_value: f64,

    mod_input: ModInput,
}

impl Lfo {
    /// Create an LFO with the default seed
    pub fn new(params: LfoParameters) -> Self {
        Self::with_seed(params, DEFAULT_SEED)
    }

    /// Create an LFO with an explicit seed for deterministic sequences
    pub fn with_seed(params: LfoParameters, seed: u32) -> Self {
        Self {
            params,
            sample_rate: 0.0,
            phase_inc: 0.0,
            mod_counter: 0.0,
            mod_counter_qp: 0.25,
            render_complete: false,
            held_output: ModOutput::default(),
            delay_timer: Timer::new(),
            ramp_timer: Timer::new(),
            pn_register: PnRegister::new(seed),
            quasi_random: QuasiRandom::new(QUASI_RANDOM_LEVELS),
            sh_counter: -1,
            sh_value: 0.0,
            mod_input: ModInput::default(),
        }
    }

    /// Current parameter block
    pub fn parameters(&self) -> LfoParameters {
        self.params
    }

    /// Replace the parameter block and recompute derived timing
    pub fn set_parameters(&mut self, params: LfoParameters) {
        self.params = params;
        self.update();
    }

    /// Recompute the phase increment and timer targets from the current
    /// parameters. Call after changing frequency, delay or ramp.
    pub fn update(&mut self) -> bool {
        if self.sample_rate > 0.0 {
            self.phase_inc = self.params.frequency_hz / self.sample_rate;
            self.delay_timer
                .set_target_ms(self.params.delay_ms, self.sample_rate);
            self.ramp_timer
                .set_target_ms(self.params.ramp_ms, self.sample_rate);
        }
        true
    }

    /// Primary modulo counter, 0.0..1.0
    pub fn phase(&self) -> f64 {
        self.mod_counter
    }

    /// Quadrature modulo counter, a quarter cycle ahead of the primary
    pub fn quad_phase(&self) -> f64 {
        self.mod_counter_qp
    }

    /// True once a one-shot traversal has finished
    pub fn is_complete(&self) -> bool {
        self.render_complete
    }

    /// Advance a modulo counter and wrap it into 0.0..1.0.
    ///
    /// Positive increments wrap downward at 1.0, negative increments wrap
    /// upward at 0.0. Returns true on a wrap event. A zero increment never
    /// wraps; the counter freezes where it is.
    ///
    /// The boundary compare carries a small tolerance: accumulated f64
    /// steps can land a hair short of the boundary (ten steps of 0.1 sum
    /// to 0.9999999999999999) and the wrap must not slip a sample late.
    fn advance_and_wrap(counter: &mut f64, phase_inc: f64) -> bool {
        const WRAP_TOLERANCE: f64 = 1e-9;

        *counter += phase_inc;

        if phase_inc > 0.0 && *counter >= 1.0 - WRAP_TOLERANCE {
            *counter -= 1.0;
            return true;
        }
        if phase_inc < 0.0 && *counter <= WRAP_TOLERANCE {
            *counter += 1.0;
            return true;
        }
        false
    }

    /// Draw the next random value for the current waveform family
    fn draw_random(&mut self) -> f64 {
        match self.params.waveform {
            LfoWaveform::RandomSampleHold | LfoWaveform::Noise => self.pn_register.next_bipolar(),
            LfoWaveform::QuasiRandomSampleHold | LfoWaveform::QuasiRandomNoise => {
                self.quasi_random.next_bipolar()
            }
            _ => 0.0,
        }
    }

    /// Raw bipolar (normal, quadrature) pair at the current counters
    fn shape_outputs(&self) -> (f64, f64) {
        match self.params.waveform {
            LfoWaveform::Triangle => (
                triangle_shape(self.mod_counter),
                triangle_shape(self.mod_counter_qp),
            ),
            LfoWaveform::Sine => {
                let angle = self.mod_counter * 2.0 * PI - PI;
                let angle_qp = self.mod_counter_qp * 2.0 * PI - PI;
                (parabolic_sine(-angle), parabolic_sine(-angle_qp))
            }
            LfoWaveform::Saw => (saw_shape(self.mod_counter), saw_shape(self.mod_counter_qp)),
            // Held and noise values have no phase shape; both channels
            // carry the same draw
            LfoWaveform::RandomSampleHold
            | LfoWaveform::QuasiRandomSampleHold
            | LfoWaveform::Noise
            | LfoWaveform::QuasiRandomNoise => (self.sh_value, self.sh_value),
        }
    }
}

impl ModulationSource for Lfo {
    fn reset(&mut self, sample_rate: f64) -> bool {
        self.sample_rate = sample_rate;
        self.phase_inc = self.params.frequency_hz / sample_rate;

        self.mod_counter = 0.0;
        self.mod_counter_qp = 0.25;
        self.render_complete = false;
        self.held_output = ModOutput::default();

        self.delay_timer
            .set_target_ms(self.params.delay_ms, sample_rate);
        self.delay_timer.reset();
        self.ramp_timer
            .set_target_ms(self.params.ramp_ms, sample_rate);
        self.ramp_timer.reset();

        self.sh_counter = -1;
        true
    }

    fn note_on(&mut self, _pitch: f64, _note_number: u8, _velocity: u8) -> bool {
        self.render_complete = false;
        self.delay_timer.reset();
        self.ramp_timer.reset();

        if matches!(self.params.mode, LfoMode::Sync | LfoMode::OneShot) {
            self.mod_counter = 0.0;
            self.mod_counter_qp = 0.25;
        }

        // Force a fresh sample-and-hold draw on the next render so the
        // note does not sit on a stale value for a full cycle
        self.sh_counter = -1;
        true
    }

    fn note_off(&mut self, _pitch: f64, _note_number: u8, _velocity: u8) -> bool {
        // Purely phase-driven; nothing to release
        true
    }

    fn render(&mut self) -> ModOutput {
        // Delay gate: output stays silent and phase frozen until elapsed
        if !self.delay_timer.expired() {
            self.delay_timer.advance();
            return ModOutput::default();
        }

        // Finished one-shot: hold the final output vector
        if self.render_complete {
            return self.held_output;
        }

        self.ramp_timer.advance();

        match self.params.waveform {
            LfoWaveform::RandomSampleHold | LfoWaveform::QuasiRandomSampleHold => {
                if self.sh_counter < 0 {
                    self.sh_value = self.draw_random();
                    self.sh_counter = 0;
                } else {
                    self.sh_counter += 1;
                }
            }
            LfoWaveform::Noise | LfoWaveform::QuasiRandomNoise => {
                self.sh_value = self.draw_random();
            }
            _ => {}
        }

        let (normal, quad) = self.shape_outputs();
        let gain = self.params.output_amplitude * self.ramp_timer.progress();
        let output = ModOutput::from_bipolar(normal, quad, gain);
        self.held_output = output;

        // Advance the timebase; both counters move identically so the
        // quarter-cycle offset holds for every waveform
        let wrapped = Self::advance_and_wrap(&mut self.mod_counter, self.phase_inc);
        Self::advance_and_wrap(&mut self.mod_counter_qp, self.phase_inc);

        if wrapped {
            if self.params.mode == LfoMode::OneShot {
                self.render_complete = true;
            } else {
                // Next render call starts a new cycle; mark the hold
                // counter for a redraw
                self.sh_counter = -1;
            }
        }

        output
    }

    fn modulation_input(&self) -> ModInput {
        self.mod_input
    }

    fn set_modulation_input(&mut self, input: ModInput) {
        self.mod_input = input;
    }
}
