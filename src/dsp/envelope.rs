//! Pluck envelope for scheduled tones.
//!
//! Fixed shape: a short linear attack to the peak, an exponential
//! decay to a lower sustain level, sustain held while the gate is on,
//! then an exponential release of fixed length. Exponential segments
//! ramp toward a small floor rather than zero, matching the WebAudio
//! `exponentialRampToValueAtTime` behavior the frontend used.

/// Attack time in seconds (linear, to the peak level).
pub const ATTACK_TIME: f64 = 0.05;
/// Decay time in seconds (exponential, peak to sustain).
pub const DECAY_TIME: f64 = 0.3;
/// Release time in seconds (exponential, from the level at gate-off).
pub const RELEASE_TIME: f64 = 0.8;
/// Peak level reached at the end of the attack.
pub const PEAK_LEVEL: f64 = 1.0;
/// Sustain level held until gate-off.
pub const SUSTAIN_LEVEL: f64 = 0.3;

/// Exponential ramps cannot reach zero; below this the stage ends.
const SILENCE_FLOOR: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

/// The fixed-shape tone envelope.
#[derive(Debug, Clone)]
pub struct PluckEnvelope {
    stage: Stage,
    level: f64,
    /// Level at the start of the current stage.
    stage_start_level: f64,
    stage_samples: usize,
    stage_counter: usize,
    sample_rate: f64,
}

impl PluckEnvelope {
    pub fn new(sample_rate: f64) -> Self {
        PluckEnvelope {
            stage: Stage::Idle,
            level: 0.0,
            stage_start_level: 0.0,
            stage_samples: 0,
            stage_counter: 0,
            sample_rate,
        }
    }

    /// Start the envelope from silence.
    pub fn gate_on(&mut self) {
        self.level = 0.0;
        self.enter(Stage::Attack, ATTACK_TIME);
    }

    /// Begin the release from the current level.
    pub fn gate_off(&mut self) {
        if self.stage == Stage::Idle {
            return;
        }
        self.enter(Stage::Release, RELEASE_TIME);
    }

    fn enter(&mut self, stage: Stage, seconds: f64) {
        self.stage = stage;
        self.stage_start_level = self.level;
        self.stage_samples = (seconds * self.sample_rate) as usize;
        self.stage_counter = 0;
    }

    /// Next envelope level in [0, 1].
    pub fn next_sample(&mut self) -> f64 {
        match self.stage {
            Stage::Idle => {
                self.level = 0.0;
            }
            Stage::Attack => {
                let t = self.progress();
                self.level = self.stage_start_level + (PEAK_LEVEL - self.stage_start_level) * t;
                if self.step_done() {
                    self.level = PEAK_LEVEL;
                    self.enter(Stage::Decay, DECAY_TIME);
                }
            }
            Stage::Decay => {
                let t = self.progress();
                self.level = exp_ramp(PEAK_LEVEL, SUSTAIN_LEVEL, t);
                if self.step_done() {
                    self.level = SUSTAIN_LEVEL;
                    self.stage = Stage::Sustain;
                }
            }
            Stage::Sustain => {
                self.level = SUSTAIN_LEVEL;
            }
            Stage::Release => {
                let t = self.progress();
                self.level = exp_ramp(self.stage_start_level, SILENCE_FLOOR, t);
                if self.step_done() || self.level <= SILENCE_FLOOR {
                    self.level = 0.0;
                    self.stage = Stage::Idle;
                }
            }
        }
        self.level
    }

    /// Fraction of the current stage elapsed, in [0, 1].
    fn progress(&self) -> f64 {
        if self.stage_samples == 0 {
            1.0
        } else {
            self.stage_counter as f64 / self.stage_samples as f64
        }
    }

    /// Advance the stage counter; true when the stage is over.
    fn step_done(&mut self) -> bool {
        self.stage_counter += 1;
        self.stage_counter >= self.stage_samples
    }

    /// Idle after the release has run out.
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Idle
    }
}

/// WebAudio-style exponential ramp from `from` to `to` at progress `t`.
fn exp_ramp(from: f64, to: f64, t: f64) -> f64 {
    let from = from.max(SILENCE_FLOOR);
    let to = to.max(SILENCE_FLOOR);
    from * (to / from).powf(t)
}
