//! Oscillators for the tone and drone voices.
//!
//! The sawtooth is band-limited with PolyBLEP; the triangle and sine
//! are clean enough naively at drone/tone frequencies.

use std::f64::consts::PI;

/// Waveform shapes used by the voices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Triangle,
}

/// A phase-accumulating oscillator.
#[derive(Debug, Clone)]
pub struct Oscillator {
    pub waveform: Waveform,
    pub frequency: f64,
    /// Detune in cents, applied on top of `frequency`.
    pub detune: f64,
    phase: f64,
    sample_rate: f64,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency: f64, sample_rate: f64) -> Self {
        Oscillator {
            waveform,
            frequency,
            detune: 0.0,
            phase: 0.0,
            sample_rate,
        }
    }

    fn phase_inc(&self) -> f64 {
        let freq = self.frequency * (2.0_f64).powf(self.detune / 1200.0);
        freq / self.sample_rate
    }

    /// Generate the next sample in [-1, 1].
    pub fn next_sample(&mut self) -> f64 {
        let inc = self.phase_inc();
        let sample = match self.waveform {
            Waveform::Sine => (2.0 * PI * self.phase).sin(),
            Waveform::Sawtooth => {
                let naive = 2.0 * self.phase - 1.0;
                naive - poly_blep(self.phase, inc)
            }
            Waveform::Triangle => {
                if self.phase < 0.5 {
                    4.0 * self.phase - 1.0
                } else {
                    3.0 - 4.0 * self.phase
                }
            }
        };

        self.phase += inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

/// PolyBLEP correction for the sawtooth's wrap discontinuity.
///
/// `t` is the phase in [0, 1), `dt` the per-sample phase increment.
fn poly_blep(t: f64, dt: f64) -> f64 {
    if t < dt {
        let t = t / dt;
        2.0 * t - t * t - 1.0
    } else if t > 1.0 - dt {
        let t = (t - 1.0) / dt;
        t * t + 2.0 * t + 1.0
    } else {
        0.0
    }
}
