//! Fretboard note map: scale members across 6 strings and 25 frets.

use serde::{Deserialize, Serialize};

use crate::note;
use crate::scale::ScaleDegree;
use crate::tuning;

/// Highest fret mapped, inclusive.
pub const FRET_COUNT: u8 = 24;

/// One scale-member position on the fretboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardCell {
    /// 1-based string number, low string first.
    pub string: usize,
    /// Fret number in [0, 24]; 0 is the open string.
    pub fret: u8,
    /// Sounding pitch-class name.
    pub note: String,
    /// Scale degree of the note (1-based).
    pub degree: usize,
    /// Interval label of the note relative to the scale root.
    pub interval: String,
}

/// Map a scale onto a tuning's fretboard.
///
/// Returns one cell list per string, containing only frets whose
/// sounding pitch class belongs to the scale. An unrecognized tuning
/// name falls back to `Standard`.
pub fn fretboard_mapping(scale: &[ScaleDegree], tuning_name: &str) -> Vec<Vec<FretboardCell>> {
    let tuning = tuning::tuning_notes(tuning_name);

    tuning
        .iter()
        .enumerate()
        .map(|(string_idx, open_note)| {
            // Preset tables only contain chromatic names.
            let open_index = note::note_index(open_note).unwrap_or(0);

            let mut cells = Vec::new();
            for fret in 0..=FRET_COUNT {
                let sounding = note::CHROMATIC_SCALE[(open_index + fret as usize) % 12];
                if let Some(degree) = scale.iter().find(|d| d.note == sounding) {
                    cells.push(FretboardCell {
                        string: string_idx + 1,
                        fret,
                        note: sounding.to_string(),
                        degree: degree.degree,
                        interval: degree.interval.clone(),
                    });
                }
            }
            cells
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ScaleType, build_scale};

    #[test]
    fn six_strings_always() {
        let scale = build_scale("C", ScaleType::Major).unwrap();
        let board = fretboard_mapping(&scale, "Standard");
        assert_eq!(board.len(), 6);
    }

    #[test]
    fn cells_are_scale_members_within_fret_range() {
        let scale = build_scale("E", ScaleType::MinorPentatonic).unwrap();
        let members: Vec<&str> = scale.iter().map(|d| d.note.as_str()).collect();

        for string in fretboard_mapping(&scale, "Drop D") {
            for cell in string {
                assert!(cell.fret <= FRET_COUNT);
                assert!(
                    members.contains(&cell.note.as_str()),
                    "{} is not in the scale",
                    cell.note
                );
            }
        }
    }

    #[test]
    fn open_low_e_is_root_of_e_scales() {
        let scale = build_scale("E", ScaleType::Minor).unwrap();
        let board = fretboard_mapping(&scale, "Standard");
        let first = &board[0][0];
        assert_eq!(first.string, 1);
        assert_eq!(first.fret, 0);
        assert_eq!(first.note, "E");
        assert_eq!(first.degree, 1);
        assert_eq!(first.interval, "R");
    }

    #[test]
    fn seven_note_scale_fills_most_of_the_neck() {
        // A 7-note scale covers 7 of 12 pitch classes; over 25 frets
        // each string sees each class at least twice.
        let scale = build_scale("G", ScaleType::Mixolydian).unwrap();
        for string in fretboard_mapping(&scale, "Standard") {
            assert!(string.len() >= 14, "expected >= 14 cells, got {}", string.len());
        }
    }

    #[test]
    fn flat_spelled_tuning_matches_sharp_scale() {
        // "Eb Standard" open strings are flat-spelled; they must still
        // match a sharp-spelled scale membership test.
        let scale = build_scale("D#", ScaleType::Major).unwrap();
        let board = fretboard_mapping(&scale, "Eb Standard");
        let first = &board[0][0];
        assert_eq!(first.fret, 0);
        assert_eq!(first.note, "D#");
        assert_eq!(first.degree, 1);
    }

    #[test]
    fn unknown_tuning_behaves_like_standard() {
        let scale = build_scale("A", ScaleType::Dorian).unwrap();
        assert_eq!(
            fretboard_mapping(&scale, "Banjo"),
            fretboard_mapping(&scale, "Standard")
        );
    }
}
