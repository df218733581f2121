//! WAV renderer — sonifies theory results to 16-bit mono PCM bytes.
//!
//! This is the offline counterpart of live scheduling: the same
//! engine, run until every scheduled voice has decayed, with the
//! output wrapped in a RIFF header for download or playback.

use crate::error::TheoryError;
use crate::note;
use crate::scale::{self, ScaleType};
use crate::theory;

use super::engine::{AudioEngine, DEFAULT_TONE_DURATION, STRUM_STAGGER};
use super::envelope::RELEASE_TIME;

/// Spacing between scale steps in the rendered run, in seconds.
const STEP_SPACING: f64 = 0.5;
/// Gate length of each scale step.
const STEP_DURATION: f64 = 0.45;

/// Render one ascending pass through a scale, ending on the octave
/// root, as WAV bytes.
pub fn scale_wav(
    root: &str,
    scale_type: &str,
    sample_rate: u32,
) -> Result<Vec<u8>, TheoryError> {
    let ty = ScaleType::from_name(scale_type)?;
    let degrees = scale::build_scale(root, ty)?;
    let root_index = note::note_index(root).unwrap_or(0);

    let mut engine = AudioEngine::new(sample_rate as f64);
    for (i, degree) in degrees.iter().enumerate() {
        let midi = 60 + root_index as i32 + degree.semitone as i32;
        let frequency = 440.0 * (2.0_f64).powf((midi as f64 - 69.0) / 12.0);
        engine.play_tone(frequency, Some(i as f64 * STEP_SPACING), STEP_DURATION);
    }
    // Close the run on the root an octave up.
    let octave_midi = 60 + root_index as i32 + 12;
    let octave_freq = 440.0 * (2.0_f64).powf((octave_midi as f64 - 69.0) / 12.0);
    engine.play_tone(
        octave_freq,
        Some(degrees.len() as f64 * STEP_SPACING),
        STEP_DURATION,
    );

    let total = degrees.len() as f64 * STEP_SPACING + STEP_DURATION + RELEASE_TIME;
    let samples = engine.render((total * sample_rate as f64).ceil() as usize);
    Ok(encode_wav(&to_pcm_i16(&samples), sample_rate))
}

/// Render one strummed chord as WAV bytes.
pub fn chord_wav(frequencies: &[f64], sample_rate: u32) -> Vec<u8> {
    let mut engine = AudioEngine::new(sample_rate as f64);
    engine.play_chord(frequencies, Some(0.0), DEFAULT_TONE_DURATION);

    let strum_tail = frequencies.len().saturating_sub(1) as f64 * STRUM_STAGGER;
    let total = strum_tail + DEFAULT_TONE_DURATION + RELEASE_TIME;
    let samples = engine.render((total * sample_rate as f64).ceil() as usize);
    encode_wav(&to_pcm_i16(&samples), sample_rate)
}

/// Render a chord from the aggregate result by degree (1-based), using
/// the tuning's open-string octaves for voicing.
pub fn chord_wav_for_degree(
    data: &theory::TheoryData,
    degree: usize,
    sample_rate: u32,
) -> Option<Vec<u8>> {
    let chord = data.chords.get(degree.checked_sub(1)?)?;
    let frequencies: Vec<f64> = chord
        .notes
        .iter()
        .map(|n| AudioEngine::root_frequency(n, &note::CHROMATIC_SCALE))
        .collect();
    Some(chord_wav(&frequencies, sample_rate))
}

fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s * 32767.0).round().clamp(-32768.0, 32767.0) as i16)
        .collect()
}

/// Wrap mono i16 PCM in a RIFF/WAVE header.
fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}
