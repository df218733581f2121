//! Tone voice — one scheduled note with the fixed plucked-string timbre.
//!
//! Two layers at a 70/30 mix: a steady sawtooth fundamental, and a
//! slightly detuned sawtooth through a lowpass whose cutoff ramps from
//! five times the fundamental down to the fundamental over the note's
//! first half second. One pluck envelope shapes the sum; the voice
//! gates itself off when its duration elapses.

use super::envelope::PluckEnvelope;
use super::filter::LowpassFilter;
use super::oscillator::{Oscillator, Waveform};

/// Detune of the second layer, in cents.
const LAYER_DETUNE_CENTS: f64 = 8.0;
/// Mix weight of the steady fundamental layer.
const FUNDAMENTAL_MIX: f64 = 0.7;
/// Mix weight of the filtered, detuned layer.
const FILTERED_MIX: f64 = 0.3;
/// The filter cutoff starts at this multiple of the fundamental.
const CUTOFF_START_RATIO: f64 = 5.0;
/// Seconds over which the cutoff ramps down to the fundamental.
const CUTOFF_RAMP_TIME: f64 = 0.5;
/// Filter resonance.
const FILTER_Q: f64 = 3.0;

/// A single playing tone.
#[derive(Debug, Clone)]
pub struct ToneVoice {
    fundamental: Oscillator,
    detuned: Oscillator,
    filter: LowpassFilter,
    envelope: PluckEnvelope,
    frequency: f64,
    /// Sample index at which the gate closes (duration boundary).
    gate_samples: usize,
    elapsed: usize,
    sample_rate: f64,
}

impl ToneVoice {
    pub fn new(frequency: f64, duration: f64, sample_rate: f64) -> Self {
        let mut detuned = Oscillator::new(Waveform::Sawtooth, frequency, sample_rate);
        detuned.detune = LAYER_DETUNE_CENTS;

        let mut envelope = PluckEnvelope::new(sample_rate);
        envelope.gate_on();

        ToneVoice {
            fundamental: Oscillator::new(Waveform::Sawtooth, frequency, sample_rate),
            detuned,
            filter: LowpassFilter::new(frequency * CUTOFF_START_RATIO, FILTER_Q, sample_rate),
            envelope,
            frequency,
            // At least one sample, or a sub-sample duration would skip
            // the gate-off boundary and sustain forever.
            gate_samples: ((duration * sample_rate) as usize).max(1),
            elapsed: 0,
            sample_rate,
        }
    }

    /// Next output sample.
    pub fn next_sample(&mut self) -> f64 {
        if self.envelope.is_finished() {
            return 0.0;
        }

        let t = self.elapsed as f64 / self.sample_rate;
        if t < CUTOFF_RAMP_TIME {
            // Exponential sweep from 5x the fundamental down to the
            // fundamental, as the WebAudio graph ramped it.
            let progress = t / CUTOFF_RAMP_TIME;
            let cutoff =
                self.frequency * CUTOFF_START_RATIO * (1.0 / CUTOFF_START_RATIO).powf(progress);
            self.filter.set_cutoff(cutoff);
        } else {
            self.filter.set_cutoff(self.frequency);
        }

        let dry = self.fundamental.next_sample();
        let wet = self.filter.process(self.detuned.next_sample());
        let env = self.envelope.next_sample();

        self.elapsed += 1;
        if self.elapsed == self.gate_samples {
            self.envelope.gate_off();
        }

        (FUNDAMENTAL_MIX * dry + FILTERED_MIX * wet) * env
    }

    /// True once the release has fully decayed.
    pub fn is_finished(&self) -> bool {
        self.envelope.is_finished()
    }
}
