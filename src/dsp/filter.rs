//! Lowpass biquad used by the tone and drone voices.
//!
//! Coefficients follow the Audio EQ Cookbook lowpass, matching the
//! WebAudio `BiquadFilterNode` the frontend previously relied on.
//! Direct Form II Transposed.

use std::f64::consts::PI;

/// A second-order lowpass filter with adjustable cutoff and Q.
#[derive(Debug, Clone)]
pub struct LowpassFilter {
    cutoff: f64,
    q: f64,
    sample_rate: f64,

    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,

    z1: f64,
    z2: f64,
}

impl LowpassFilter {
    pub fn new(cutoff: f64, q: f64, sample_rate: f64) -> Self {
        let mut filter = LowpassFilter {
            cutoff,
            q,
            sample_rate,
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
        };
        filter.update_coefficients();
        filter
    }

    /// Move the cutoff; coefficients are recomputed immediately so
    /// per-sample cutoff ramps track exactly.
    pub fn set_cutoff(&mut self, cutoff: f64) {
        if cutoff != self.cutoff {
            self.cutoff = cutoff;
            self.update_coefficients();
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn update_coefficients(&mut self) {
        // Keep the cutoff strictly inside (0, Nyquist).
        let cutoff = self.cutoff.clamp(1.0, self.sample_rate * 0.49);
        let w0 = 2.0 * PI * cutoff / self.sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * self.q);

        let b1 = 1.0 - cos_w0;
        let b0 = b1 / 2.0;
        let b2 = b0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        self.b0 = b0 / a0;
        self.b1 = b1 / a0;
        self.b2 = b2 / a0;
        self.a1 = a1 / a0;
        self.a2 = a2 / a0;
    }

    /// Process one sample.
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.z1;
        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_dc() {
        let mut filter = LowpassFilter::new(5000.0, 0.707, 44100.0);
        let mut out = 0.0;
        for _ in 0..1000 {
            out = filter.process(1.0);
        }
        assert!((out - 1.0).abs() < 0.001, "lowpass should pass DC, got {out}");
    }

    #[test]
    fn attenuates_high_frequencies() {
        let mut filter = LowpassFilter::new(200.0, 0.707, 44100.0);
        let freq = 10000.0;
        let mut max_out = 0.0_f64;
        for i in 0..4410 {
            let t = i as f64 / 44100.0;
            let out = filter.process((2.0 * PI * freq * t).sin());
            if i > 1000 {
                max_out = max_out.max(out.abs());
            }
        }
        assert!(max_out < 0.01, "10kHz should be crushed at 200Hz cutoff, got {max_out}");
    }

    #[test]
    fn cutoff_ramp_keeps_output_finite() {
        let mut filter = LowpassFilter::new(2000.0, 3.0, 44100.0);
        for i in 0..22050 {
            // Sweep the cutoff down while feeding an impulse train.
            filter.set_cutoff(2000.0 - i as f64 * 0.08);
            let input = if i % 441 == 0 { 1.0 } else { 0.0 };
            let out = filter.process(input);
            assert!(out.is_finite(), "output blew up at sample {i}");
        }
    }

    #[test]
    fn extreme_cutoffs_are_clamped() {
        let mut low = LowpassFilter::new(0.0, 0.707, 44100.0);
        let mut high = LowpassFilter::new(1e9, 0.707, 44100.0);
        for _ in 0..100 {
            assert!(low.process(1.0).is_finite());
            assert!(high.process(1.0).is_finite());
        }
    }
}
