//! Drone voice — a continuous, retunable background root tone.
//!
//! Triangle oscillator through an 800 Hz lowpass into a gain stage:
//! 1 s linear fade-in to the drone level, hold until stopped, then a
//! 1 s exponential fade-out after which the voice reports finished.
//! Retuning is immediate, with no ramp.

use super::filter::LowpassFilter;
use super::oscillator::{Oscillator, Waveform};

/// Steady-state drone gain.
const DRONE_LEVEL: f64 = 0.1;
/// Fade-in and fade-out length in seconds.
pub const FADE_TIME: f64 = 1.0;
/// Fixed lowpass cutoff in Hz.
const CUTOFF: f64 = 800.0;
/// Exponential fade-out target; the voice ends when it gets there.
const FADE_FLOOR: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GainStage {
    FadingIn,
    Holding,
    FadingOut,
    Finished,
}

/// The continuously sounding drone.
#[derive(Debug, Clone)]
pub struct DroneVoice {
    oscillator: Oscillator,
    filter: LowpassFilter,
    stage: GainStage,
    gain: f64,
    /// Gain at the moment the fade-out began.
    fade_out_start: f64,
    stage_samples: usize,
    stage_counter: usize,
    sample_rate: f64,
}

impl DroneVoice {
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        DroneVoice {
            oscillator: Oscillator::new(Waveform::Triangle, frequency, sample_rate),
            filter: LowpassFilter::new(CUTOFF, 0.707, sample_rate),
            stage: GainStage::FadingIn,
            gain: 0.0,
            fade_out_start: DRONE_LEVEL,
            stage_samples: (FADE_TIME * sample_rate) as usize,
            stage_counter: 0,
            sample_rate,
        }
    }

    /// Retune the drone immediately.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.oscillator.frequency = frequency;
    }

    pub fn frequency(&self) -> f64 {
        self.oscillator.frequency
    }

    /// Begin the fade-out. Harmless if already fading or finished.
    pub fn stop(&mut self) {
        if matches!(self.stage, GainStage::FadingOut | GainStage::Finished) {
            return;
        }
        self.stage = GainStage::FadingOut;
        self.fade_out_start = self.gain.max(FADE_FLOOR);
        self.stage_samples = (FADE_TIME * self.sample_rate) as usize;
        self.stage_counter = 0;
    }

    /// Next output sample.
    pub fn next_sample(&mut self) -> f64 {
        match self.stage {
            GainStage::FadingIn => {
                let t = self.stage_counter as f64 / self.stage_samples.max(1) as f64;
                self.gain = DRONE_LEVEL * t;
                self.stage_counter += 1;
                if self.stage_counter >= self.stage_samples {
                    self.gain = DRONE_LEVEL;
                    self.stage = GainStage::Holding;
                }
            }
            GainStage::Holding => {
                self.gain = DRONE_LEVEL;
            }
            GainStage::FadingOut => {
                let t = self.stage_counter as f64 / self.stage_samples.max(1) as f64;
                self.gain = self.fade_out_start * (FADE_FLOOR / self.fade_out_start).powf(t);
                self.stage_counter += 1;
                if self.stage_counter >= self.stage_samples {
                    self.gain = 0.0;
                    self.stage = GainStage::Finished;
                }
            }
            GainStage::Finished => {
                return 0.0;
            }
        }

        self.filter.process(self.oscillator.next_sample()) * self.gain
    }

    /// Fade-out complete; the voice can be dropped.
    pub fn is_finished(&self) -> bool {
        self.stage == GainStage::Finished
    }
}
