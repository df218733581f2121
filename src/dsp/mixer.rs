//! Summing mixer with master gain and tanh soft clipping.

/// Accumulates voice output for one render block.
#[derive(Debug, Clone)]
pub struct Mixer {
    pub master_gain: f64,
    buffer: Vec<f64>,
}

impl Mixer {
    pub fn new() -> Self {
        Mixer {
            master_gain: 0.8,
            buffer: Vec::new(),
        }
    }

    /// Start a new block of `frames` zeroed samples.
    pub fn reset(&mut self, frames: usize) {
        self.buffer.clear();
        self.buffer.resize(frames, 0.0);
    }

    /// Add a voice sample into the block.
    pub fn accumulate(&mut self, index: usize, sample: f64) {
        if let Some(slot) = self.buffer.get_mut(index) {
            *slot += sample;
        }
    }

    /// Finish the block: apply master gain and soft clipping, and
    /// hand the buffer out.
    pub fn take(&mut self) -> Vec<f64> {
        let gain = self.master_gain;
        std::mem::take(&mut self.buffer)
            .into_iter()
            .map(|s| (s * gain).tanh())
            .collect()
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_is_silent() {
        let mut mixer = Mixer::new();
        mixer.reset(64);
        let out = mixer.take();
        assert_eq!(out.len(), 64);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn sums_voices_at_the_same_index() {
        let mut mixer = Mixer::new();
        mixer.master_gain = 1.0;
        mixer.reset(2);
        mixer.accumulate(0, 0.2);
        mixer.accumulate(0, 0.3);
        let out = mixer.take();
        assert!((out[0] - (0.5_f64).tanh()).abs() < 1e-12);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn soft_clip_bounds_loud_chords() {
        let mut mixer = Mixer::new();
        mixer.reset(1);
        mixer.accumulate(0, 50.0);
        let out = mixer.take();
        assert!(out[0] <= 1.0, "soft clip failed: {}", out[0]);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut mixer = Mixer::new();
        mixer.reset(4);
        mixer.accumulate(100, 1.0);
        assert_eq!(mixer.take().len(), 4);
    }
}
