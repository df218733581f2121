//! Diatonic chord construction and interval-distance quality naming.
//!
//! Chords stack scale-degree *positions* at +2/+4 (and +6 for sevenths)
//! modulo the scale length. For 5- and 6-note scales this wraps earlier
//! than conventional tertian harmony would; downstream consumers depend
//! on exactly this positional stacking, so it is kept as-is.

use serde::{Deserialize, Serialize};

use crate::scale::ScaleDegree;

/// Chord complexity requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Triad,
    Seventh,
}

impl Complexity {
    /// Parse a complexity name. Anything other than `"seventh"` is a
    /// triad; an unknown string is not an error on this path.
    pub fn from_name(name: &str) -> Self {
        if name == "seventh" {
            Complexity::Seventh
        } else {
            Complexity::Triad
        }
    }
}

/// Base triad quality classified from (third, fifth) semitone distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    FlatFive,
    Unknown,
}

impl TriadQuality {
    fn classify(third: u8, fifth: u8) -> Self {
        match (third, fifth) {
            (4, 7) => TriadQuality::Major,
            (3, 7) => TriadQuality::Minor,
            (3, 6) => TriadQuality::Diminished,
            (4, 8) => TriadQuality::Augmented,
            (4, 6) => TriadQuality::FlatFive,
            _ => TriadQuality::Unknown,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TriadQuality::Major => "Major",
            TriadQuality::Minor => "Minor",
            TriadQuality::Diminished => "Diminished",
            TriadQuality::Augmented => "Augmented",
            TriadQuality::FlatFive => "b5",
            TriadQuality::Unknown => "Unknown",
        }
    }

    /// Refine the base quality with the seventh-root distance.
    ///
    /// An unmatched distance keeps the plain triad label, with no "7"
    /// suffix added. That silent pass-through is intended behavior.
    fn seventh_label(&self, seventh: u8) -> &'static str {
        match (self, seventh) {
            (TriadQuality::Major, 11) => "Maj7",
            (TriadQuality::Major, 10) => "Dom7",
            (TriadQuality::Minor, 10) => "m7",
            (TriadQuality::Minor, 11) => "m(maj7)",
            (TriadQuality::Diminished, 10) => "m7b5",
            (TriadQuality::Diminished, 9) => "dim7",
            (TriadQuality::Augmented, 11) => "Maj7#5",
            (TriadQuality::Augmented, 10) => "7#5",
            (TriadQuality::FlatFive, 10) => "7b5",
            _ => self.label(),
        }
    }
}

/// One diatonic chord built on a scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// 1-based scale degree of the chord root.
    pub degree: usize,
    /// Chord root note name.
    pub root: String,
    /// Chord tones in stacking order (3 for triads, 4 for sevenths).
    pub notes: Vec<String>,
    /// Display name, `"<root> <quality>"`.
    pub name: String,
}

/// Build one chord per scale degree by positional stacking.
pub fn diatonic_chords(scale: &[ScaleDegree], complexity: Complexity) -> Vec<Chord> {
    let len = scale.len();
    let mut chords = Vec::with_capacity(len);

    for i in 0..len {
        let root = &scale[i];
        let third = &scale[(i + 2) % len];
        let fifth = &scale[(i + 4) % len];
        let seventh = &scale[(i + 6) % len];

        let mut notes = vec![root.note.clone(), third.note.clone(), fifth.note.clone()];

        // Distances are mod 12 so degrees that wrapped past the octave
        // still classify correctly.
        let dist_third = (12 + third.semitone - root.semitone) % 12;
        let dist_fifth = (12 + fifth.semitone - root.semitone) % 12;
        let quality = TriadQuality::classify(dist_third, dist_fifth);

        let label = match complexity {
            Complexity::Triad => quality.label(),
            Complexity::Seventh => {
                notes.push(seventh.note.clone());
                let dist_seventh = (12 + seventh.semitone - root.semitone) % 12;
                quality.seventh_label(dist_seventh)
            }
        };

        chords.push(Chord {
            degree: i + 1,
            root: root.note.clone(),
            name: format!("{} {label}", root.note),
            notes,
        });
    }

    chords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ScaleType, build_scale};

    fn chord_names(root: &str, ty: ScaleType, complexity: Complexity) -> Vec<String> {
        let scale = build_scale(root, ty).unwrap();
        diatonic_chords(&scale, complexity)
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn c_major_triads() {
        assert_eq!(
            chord_names("C", ScaleType::Major, Complexity::Triad),
            [
                "C Major",
                "D Minor",
                "E Minor",
                "F Major",
                "G Major",
                "A Minor",
                "B Diminished",
            ]
        );
    }

    #[test]
    fn c_major_sevenths() {
        assert_eq!(
            chord_names("C", ScaleType::Major, Complexity::Seventh),
            ["C Maj7", "D m7", "E m7", "F Maj7", "G Dom7", "A m7", "B m7b5"]
        );
    }

    #[test]
    fn harmonic_minor_has_augmented_and_dim7() {
        let names = chord_names("A", ScaleType::HarmonicMinor, Complexity::Seventh);
        assert_eq!(names[2], "C Maj7#5");
        assert_eq!(names[6], "G# dim7");
    }

    #[test]
    fn triad_chords_have_three_notes() {
        let scale = build_scale("C", ScaleType::Major).unwrap();
        for chord in diatonic_chords(&scale, Complexity::Triad) {
            assert_eq!(chord.notes.len(), 3);
        }
    }

    #[test]
    fn seventh_chords_have_four_notes() {
        let scale = build_scale("C", ScaleType::Major).unwrap();
        for chord in diatonic_chords(&scale, Complexity::Seventh) {
            assert_eq!(chord.notes.len(), 4);
        }
    }

    #[test]
    fn pentatonic_wraps_positionally() {
        // Five degrees: third = +2, fifth = +4, both wrap early. The
        // resulting distances rarely match a registered quality.
        let scale = build_scale("C", ScaleType::MajorPentatonic).unwrap();
        let chords = diatonic_chords(&scale, Complexity::Triad);
        assert_eq!(chords.len(), 5);
        // Degree 1: C (0), E (4), A (9) → (4, 9) is unregistered.
        assert_eq!(chords[0].name, "C Unknown");
        assert_eq!(chords[0].notes, ["C", "E", "A"]);
    }

    #[test]
    fn unmatched_seventh_keeps_triad_label() {
        // C major pentatonic, degree 2: notes D (2), G (7), C (0),
        // third distance 5, fifth distance 10 → Unknown base, and the
        // seventh distance refines nothing.
        let scale = build_scale("C", ScaleType::MajorPentatonic).unwrap();
        let chords = diatonic_chords(&scale, Complexity::Seventh);
        assert_eq!(chords[1].name, "D Unknown");
        assert_eq!(chords[1].notes.len(), 4);
    }

    #[test]
    fn complexity_parse_defaults_to_triad() {
        assert_eq!(Complexity::from_name("seventh"), Complexity::Seventh);
        assert_eq!(Complexity::from_name("triad"), Complexity::Triad);
        assert_eq!(Complexity::from_name("ninth"), Complexity::Triad);
        assert_eq!(Complexity::from_name(""), Complexity::Triad);
    }

    #[test]
    fn degree_and_root_align_with_scale() {
        let scale = build_scale("E", ScaleType::Dorian).unwrap();
        let chords = diatonic_chords(&scale, Complexity::Triad);
        for (i, chord) in chords.iter().enumerate() {
            assert_eq!(chord.degree, i + 1);
            assert_eq!(chord.root, scale[i].note);
            assert_eq!(chord.notes[0], scale[i].note);
        }
    }
}
