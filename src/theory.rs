//! Aggregate theory computation — the single entry point consumed by
//! the presentation layer, called once per input change.

use serde::{Deserialize, Serialize};

use crate::chord::{self, Chord, Complexity};
use crate::error::TheoryError;
use crate::fretboard::{self, FretboardCell};
use crate::note;
use crate::scale::{self, ScaleDegree, ScaleType};
use crate::tuning;

/// Everything the presentation and audio layers need for one
/// root/scale/complexity/tuning selection.
///
/// Field names mirror the JSON shape the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoryData {
    /// Root note as given by the caller (not normalized).
    pub root: String,
    /// Scale type name as given by the caller.
    #[serde(rename = "type")]
    pub scale_type: String,
    pub scale_data: Vec<ScaleDegree>,
    pub chords: Vec<Chord>,
    pub fretboard: Vec<Vec<FretboardCell>>,
    pub tuning_midi: [i32; 6],
    pub characteristic_intervals: Vec<String>,
}

impl TheoryData {
    /// Serialize to the JSON document the frontend consumes. Useful
    /// for non-wasm hosts that talk JSON instead of `JsValue`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Compute the full aggregate for one input selection.
///
/// Atomic: the first `TheoryError` aborts the whole call and no
/// partial result is ever returned.
pub fn get_data(
    root: &str,
    scale_type: &str,
    complexity: &str,
    tuning_name: &str,
) -> Result<TheoryData, TheoryError> {
    // Root validity is reported ahead of the scale type when both are
    // bad; callers key their error display off the first failure.
    if note::note_index(root).is_none() {
        return Err(TheoryError::InvalidRoot {
            note: note::normalize(root).to_string(),
        });
    }
    let ty = ScaleType::from_name(scale_type)?;
    let scale_data = scale::build_scale(root, ty)?;

    let chords = chord::diatonic_chords(&scale_data, Complexity::from_name(complexity));
    let fretboard = fretboard::fretboard_mapping(&scale_data, tuning_name);
    let tuning_midi = tuning::tuning_midi(tuning_name);
    let characteristic_intervals = ty
        .characteristic_intervals()
        .iter()
        .map(|s| s.to_string())
        .collect();

    Ok(TheoryData {
        root: root.to_string(),
        scale_type: scale_type.to_string(),
        scale_data,
        chords,
        fretboard,
        tuning_midi,
        characteristic_intervals,
    })
}
