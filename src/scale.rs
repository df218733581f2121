//! Scale types, interval patterns, and scale construction.
//!
//! Each supported scale type carries a fixed ascending list of semitone
//! offsets from the root. The set of types is closed: parsing a name
//! into [`ScaleType`] is the only dynamic step, so an unknown pattern
//! can never be reached at scale-construction time.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::{self, CHROMATIC_SCALE};

/// The closed set of supported scale types.
///
/// Covers the major modes, the harmonic- and melodic-minor families,
/// and the pentatonic/blues variants. `Major`/`Ionian` and
/// `Minor`/`Aeolian` are distinct names for identical patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleType {
    Major,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Minor,
    Aeolian,
    Locrian,
    HarmonicMinor,
    Locrian6,
    Ionian5,
    Dorian4,
    PhrygianDominant,
    Lydian2,
    SuperLocrianBb7,
    MelodicMinor,
    DorianB2,
    LydianAugmented,
    LydianDominant,
    MixolydianB6,
    Locrian2,
    SuperLocrian,
    MajorPentatonic,
    MinorPentatonic,
    BluesMinor,
}

impl ScaleType {
    /// Parse a scale-type name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let ty = match name.to_lowercase().as_str() {
            "major" => ScaleType::Major,
            "ionian" => ScaleType::Ionian,
            "dorian" => ScaleType::Dorian,
            "phrygian" => ScaleType::Phrygian,
            "lydian" => ScaleType::Lydian,
            "mixolydian" => ScaleType::Mixolydian,
            "minor" => ScaleType::Minor,
            "aeolian" => ScaleType::Aeolian,
            "locrian" => ScaleType::Locrian,
            "harmonic_minor" => ScaleType::HarmonicMinor,
            "locrian_6" => ScaleType::Locrian6,
            "ionian_5" => ScaleType::Ionian5,
            "dorian_4" => ScaleType::Dorian4,
            "phrygian_dominant" => ScaleType::PhrygianDominant,
            "lydian_2" => ScaleType::Lydian2,
            "super_locrian_bb7" => ScaleType::SuperLocrianBb7,
            "melodic_minor" => ScaleType::MelodicMinor,
            "dorian_b2" => ScaleType::DorianB2,
            "lydian_augmented" => ScaleType::LydianAugmented,
            "lydian_dominant" => ScaleType::LydianDominant,
            "mixolydian_b6" => ScaleType::MixolydianB6,
            "locrian_2" => ScaleType::Locrian2,
            "super_locrian" => ScaleType::SuperLocrian,
            "major_pentatonic" => ScaleType::MajorPentatonic,
            "minor_pentatonic" => ScaleType::MinorPentatonic,
            "blues_minor" => ScaleType::BluesMinor,
            _ => {
                return Err(TheoryError::UnsupportedScaleType {
                    name: name.to_string(),
                });
            }
        };
        Ok(ty)
    }

    /// Ascending semitone offsets from the root (length 5, 6, or 7).
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Minor | ScaleType::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::Locrian6 => &[0, 1, 3, 5, 6, 9, 10],
            ScaleType::Ionian5 => &[0, 2, 4, 5, 8, 9, 11],
            ScaleType::Dorian4 => &[0, 2, 3, 6, 7, 9, 10],
            ScaleType::PhrygianDominant => &[0, 1, 4, 5, 7, 8, 10],
            ScaleType::Lydian2 => &[0, 3, 4, 6, 7, 9, 11],
            ScaleType::SuperLocrianBb7 => &[0, 1, 3, 4, 6, 8, 9],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::DorianB2 => &[0, 1, 3, 5, 7, 9, 10],
            ScaleType::LydianAugmented => &[0, 2, 4, 6, 8, 9, 11],
            ScaleType::LydianDominant => &[0, 2, 4, 6, 7, 9, 10],
            ScaleType::MixolydianB6 => &[0, 2, 4, 5, 7, 8, 10],
            ScaleType::Locrian2 => &[0, 2, 3, 5, 6, 8, 10],
            ScaleType::SuperLocrian => &[0, 1, 3, 4, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::BluesMinor => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// Interval labels that distinguish this scale from its neighbors.
    ///
    /// Empty for types without a registered highlight set.
    pub fn characteristic_intervals(&self) -> &'static [&'static str] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &["M7"],
            ScaleType::Dorian => &["M6"],
            ScaleType::Phrygian => &["m2"],
            ScaleType::Lydian => &["d5"],
            ScaleType::Mixolydian => &["m7"],
            ScaleType::Minor | ScaleType::Aeolian => &["m6"],
            ScaleType::Locrian => &["d5", "m2"],
            ScaleType::HarmonicMinor => &["M7", "m6"],
            ScaleType::PhrygianDominant => &["M3", "m2"],
            ScaleType::MelodicMinor => &["M7", "M6"],
            ScaleType::LydianDominant => &["d5", "m7"],
            ScaleType::SuperLocrian => &["d5", "m6", "m2"],
            _ => &[],
        }
    }

    /// All supported scale-type names, in registration order.
    pub fn names() -> &'static [&'static str] {
        &[
            "major",
            "ionian",
            "dorian",
            "phrygian",
            "lydian",
            "mixolydian",
            "minor",
            "aeolian",
            "locrian",
            "harmonic_minor",
            "locrian_6",
            "ionian_5",
            "dorian_4",
            "phrygian_dominant",
            "lydian_2",
            "super_locrian_bb7",
            "melodic_minor",
            "dorian_b2",
            "lydian_augmented",
            "lydian_dominant",
            "mixolydian_b6",
            "locrian_2",
            "super_locrian",
            "major_pentatonic",
            "minor_pentatonic",
            "blues_minor",
        ]
    }
}

/// One position in a built scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDegree {
    /// Canonical (sharp-spelled) note name.
    pub note: String,
    /// 1-based position in the pattern.
    pub degree: usize,
    /// Interval label relative to the root.
    pub interval: String,
    /// Semitone offset from the root, in [0, 11].
    pub semitone: u8,
}

/// Build the ordered scale for a root note and scale type.
///
/// The root may use a flat spelling; it is normalized first. A root
/// outside the 12 chromatic names is a hard error.
pub fn build_scale(root: &str, scale_type: ScaleType) -> Result<Vec<ScaleDegree>, TheoryError> {
    let root = note::normalize(root);
    let root_index = note::note_index(root).ok_or_else(|| TheoryError::InvalidRoot {
        note: root.to_string(),
    })?;

    let degrees = scale_type
        .intervals()
        .iter()
        .enumerate()
        .map(|(i, &interval)| {
            let note_name = CHROMATIC_SCALE[(root_index + interval as usize) % 12];
            ScaleDegree {
                note: note_name.to_string(),
                degree: i + 1,
                interval: note::interval_name(interval).to_string(),
                semitone: interval,
            }
        })
        .collect();

    Ok(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_notes() {
        let scale = build_scale("C", ScaleType::Major).unwrap();
        let notes: Vec<&str> = scale.iter().map(|d| d.note.as_str()).collect();
        assert_eq!(notes, ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(scale[0].interval, "R");
        assert_eq!(scale[6].interval, "M7");
    }

    #[test]
    fn a_minor_pentatonic() {
        let scale = build_scale("A", ScaleType::MinorPentatonic).unwrap();
        let notes: Vec<&str> = scale.iter().map(|d| d.note.as_str()).collect();
        assert_eq!(notes, ["A", "C", "D", "E", "G"]);
        assert_eq!(scale.len(), 5);
    }

    #[test]
    fn flat_root_is_normalized() {
        let scale = build_scale("Bb", ScaleType::Major).unwrap();
        assert_eq!(scale[0].note, "A#");
    }

    #[test]
    fn invalid_root_rejected() {
        let err = build_scale("X", ScaleType::Major).unwrap_err();
        assert_eq!(err, TheoryError::InvalidRoot { note: "X".to_string() });
    }

    #[test]
    fn unknown_type_rejected() {
        let err = ScaleType::from_name("freygish").unwrap_err();
        assert!(matches!(err, TheoryError::UnsupportedScaleType { .. }));
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ScaleType::from_name("Major").unwrap(), ScaleType::Major);
        assert_eq!(
            ScaleType::from_name("HARMONIC_MINOR").unwrap(),
            ScaleType::HarmonicMinor
        );
    }

    #[test]
    fn every_type_parses_and_has_valid_pattern() {
        for name in ScaleType::names() {
            let ty = ScaleType::from_name(name).unwrap();
            let pattern = ty.intervals();
            assert!(
                (5..=7).contains(&pattern.len()),
                "{name} pattern length out of range"
            );
            assert_eq!(pattern[0], 0, "{name} must start at the root");
            for window in pattern.windows(2) {
                assert!(window[0] < window[1], "{name} pattern must ascend");
            }
            assert!(pattern.iter().all(|&s| s < 12), "{name} offsets must be mod-12");
        }
    }

    #[test]
    fn all_roots_all_types_have_pattern_length() {
        for root in CHROMATIC_SCALE {
            for name in ScaleType::names() {
                let ty = ScaleType::from_name(name).unwrap();
                let scale = build_scale(root, ty).unwrap();
                assert_eq!(scale.len(), ty.intervals().len());
                for (deg, (got, &want)) in scale.iter().zip(ty.intervals()).enumerate() {
                    assert_eq!(got.semitone, want);
                    assert_eq!(got.degree, deg + 1);
                }
            }
        }
    }

    #[test]
    fn characteristic_intervals_lookup() {
        assert_eq!(ScaleType::Lydian.characteristic_intervals(), ["d5"]);
        assert_eq!(
            ScaleType::Locrian.characteristic_intervals(),
            ["d5", "m2"]
        );
        assert!(ScaleType::BluesMinor.characteristic_intervals().is_empty());
    }
}
