//! Audio Engine — schedules tones, chords, and the drone against one
//! shared clock, and renders the resulting timeline to samples.
//!
//! Scheduling never blocks and never fails: every operation registers
//! future state changes as absolute clock times and returns at once.
//! Malformed input degrades to documented defaults, because an error
//! on the live audio path would drop the rest of an in-flight chord.
//!
//! Once enqueued, tones are fire-and-forget; there is no cancellation.
//! The drone is the engine's only shared mutable resource and is
//! exclusive and singular: at most one exists, and a new one can only
//! start after the previous one has been handed off to its fade-out.

use crate::tuning::STANDARD_MIDI;

use super::clock::AudioClock;
use super::drone::DroneVoice;
use super::mixer::Mixer;
use super::tone::ToneVoice;

/// Onset stagger between successive chord tones, in seconds.
pub const STRUM_STAGGER: f64 = 0.03;
/// Tone duration used when the caller does not care.
pub const DEFAULT_TONE_DURATION: f64 = 2.0;
/// Frequency used when a note name cannot be resolved (middle C).
pub const FALLBACK_FREQUENCY: f64 = 261.63;

/// A tone registered on the clock but not yet sounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    /// Absolute start time on the engine clock, in seconds.
    pub start_time: f64,
    /// Gate length in seconds; the release runs after this.
    pub duration: f64,
    pub frequency: f64,
}

/// The scheduling and rendering engine.
pub struct AudioEngine {
    pub sample_rate: f64,
    /// Created lazily on first use; `None` means `Uninitialized`.
    clock: Option<AudioClock>,
    pending: Vec<ScheduledTone>,
    active: Vec<ToneVoice>,
    drone: Option<DroneVoice>,
    /// Fading former drones, fire-and-forget until silent.
    fading: Vec<DroneVoice>,
    mixer: Mixer,
}

impl AudioEngine {
    pub fn new(sample_rate: f64) -> Self {
        AudioEngine {
            sample_rate,
            clock: None,
            pending: Vec::new(),
            active: Vec::new(),
            drone: None,
            fading: Vec::new(),
            mixer: Mixer::new(),
        }
    }

    /// `Uninitialized → Ready`: create the clock if needed and resume
    /// it if something suspended it.
    fn ensure_ready(&mut self) -> &mut AudioClock {
        let clock = self.clock.get_or_insert_with(AudioClock::new);
        if clock.is_suspended() {
            clock.resume();
        }
        clock
    }

    /// Has the clock been created yet?
    pub fn is_ready(&self) -> bool {
        self.clock.is_some()
    }

    /// Current time on the shared clock, initializing it on first use.
    pub fn now(&mut self) -> f64 {
        self.ensure_ready().now()
    }

    /// Frequency of a fretted note from the open-string MIDI numbers.
    ///
    /// Pure 12-TET: `440 * 2^((midi - 69) / 12)`. A string index past
    /// the sixth string degrades to the low-E reference.
    pub fn note_frequency(string_index: usize, fret: u8, tuning_midi: &[i32; 6]) -> f64 {
        let open = tuning_midi
            .get(string_index)
            .copied()
            .unwrap_or(STANDARD_MIDI[0]);
        let midi = open + fret as i32;
        440.0 * (2.0_f64).powf((midi as f64 - 69.0) / 12.0)
    }

    /// Frequency of a root note in octave 4 (MIDI 60 + chromatic
    /// index). An unknown name degrades to middle C.
    pub fn root_frequency(note_name: &str, chromatic: &[&str]) -> f64 {
        match chromatic.iter().position(|&n| n == note_name) {
            Some(index) => 440.0 * (2.0_f64).powf(((60 + index) as f64 - 69.0) / 12.0),
            None => FALLBACK_FREQUENCY,
        }
    }

    /// Schedule one enveloped tone.
    ///
    /// `start_time = None` means "now" on the shared clock. A
    /// non-positive or non-finite frequency degrades to middle C.
    pub fn play_tone(&mut self, frequency: f64, start_time: Option<f64>, duration: f64) {
        let now = self.ensure_ready().now();
        let frequency = if frequency.is_finite() && frequency > 0.0 {
            frequency
        } else {
            FALLBACK_FREQUENCY
        };
        self.pending.push(ScheduledTone {
            start_time: start_time.unwrap_or(now),
            duration: if duration > 0.0 { duration } else { DEFAULT_TONE_DURATION },
            frequency,
        });
    }

    /// Schedule a strummed chord: one tone per frequency, onsets
    /// staggered by 30 ms, all sharing `duration`.
    pub fn play_chord(&mut self, frequencies: &[f64], start_time: Option<f64>, duration: f64) {
        let base = start_time.unwrap_or_else(|| self.now());
        for (i, &frequency) in frequencies.iter().enumerate() {
            self.play_tone(frequency, Some(base + i as f64 * STRUM_STAGGER), duration);
        }
    }

    /// Tones scheduled but not yet activated by a render pass.
    pub fn pending_tones(&self) -> &[ScheduledTone] {
        &self.pending
    }

    /// Toggle the drone. Starting it returns `true`; stopping hands
    /// the voice to its 1 s fade-out and returns `false`, after which
    /// the engine owns no drone.
    pub fn toggle_drone(&mut self, root_note: &str, chromatic: &[&str]) -> bool {
        match self.drone.take() {
            Some(mut drone) => {
                drone.stop();
                self.fading.push(drone);
                false
            }
            None => {
                self.ensure_ready();
                let frequency = Self::root_frequency(root_note, chromatic);
                self.drone = Some(DroneVoice::new(frequency, self.sample_rate));
                true
            }
        }
    }

    /// Retune the live drone immediately; no-op when the drone is off.
    pub fn update_drone_frequency(&mut self, root_note: &str, chromatic: &[&str]) {
        if let Some(drone) = &mut self.drone {
            drone.set_frequency(Self::root_frequency(root_note, chromatic));
        }
    }

    /// Is a drone currently owned by the engine?
    pub fn drone_active(&self) -> bool {
        self.drone.is_some()
    }

    /// Render `frames` mono samples of the scheduled timeline and
    /// advance the clock past them.
    ///
    /// Tones whose start time falls inside the window begin at the
    /// exact sample; overdue tones start on the first sample. Finished
    /// voices are dropped at the end of the block.
    pub fn render(&mut self, frames: usize) -> Vec<f64> {
        self.ensure_ready();
        let t0 = self.clock.as_ref().map(|c| c.now()).unwrap_or(0.0);
        let dt = 1.0 / self.sample_rate;

        // Activation scans the front of the queue in time order.
        self.pending
            .sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        let mut next_pending = 0;

        self.mixer.reset(frames);
        for i in 0..frames {
            let t = t0 + i as f64 * dt;

            while next_pending < self.pending.len()
                && self.pending[next_pending].start_time <= t + dt * 0.5
            {
                let tone = self.pending[next_pending];
                self.active
                    .push(ToneVoice::new(tone.frequency, tone.duration, self.sample_rate));
                next_pending += 1;
            }

            for voice in self.active.iter_mut() {
                self.mixer.accumulate(i, voice.next_sample());
            }
            if let Some(drone) = &mut self.drone {
                self.mixer.accumulate(i, drone.next_sample());
            }
            for tail in self.fading.iter_mut() {
                self.mixer.accumulate(i, tail.next_sample());
            }
        }

        self.pending.drain(..next_pending);
        self.active.retain(|v| !v.is_finished());
        self.fading.retain(|v| !v.is_finished());

        if let Some(clock) = &mut self.clock {
            clock.advance(frames as f64 * dt);
        }

        self.mixer.take()
    }
}
