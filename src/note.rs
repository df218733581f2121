//! Pitch-class names, enharmonic normalization, and interval labels.
//!
//! All note arithmetic in the crate runs over the 12 sharp-spelled
//! pitch classes in [`CHROMATIC_SCALE`]. Flat spellings are normalized
//! to their sharp equivalents before any computation.

/// The 12 pitch classes, sharp-spelled, starting from C.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The five flat spellings that normalize to sharp equivalents.
const FLAT_EQUIVALENTS: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Interval labels for semitone offsets 0..=11 from the root.
const INTERVAL_NAMES: [&str; 12] = [
    "R", "m2", "M2", "m3", "M3", "P4", "d5", "P5", "m6", "M6", "m7", "M7",
];

/// Normalize a flat spelling to its sharp equivalent.
///
/// Unrecognized input passes through unchanged; idempotent.
pub fn normalize(note: &str) -> &str {
    for (flat, sharp) in FLAT_EQUIVALENTS {
        if note == flat {
            return sharp;
        }
    }
    note
}

/// Chromatic index of a note name (after normalization), or `None` if
/// the name is not one of the 12 pitch classes.
pub fn note_index(note: &str) -> Option<usize> {
    let canonical = normalize(note);
    CHROMATIC_SCALE.iter().position(|&n| n == canonical)
}

/// Label for a semitone offset from the root; `"?"` outside 0..=11.
pub fn interval_name(semitone: u8) -> &'static str {
    INTERVAL_NAMES.get(semitone as usize).copied().unwrap_or("?")
}

/// Note name with octave for a MIDI note number (C4 = 60).
pub fn note_from_midi(midi: i32) -> String {
    let pitch_class = CHROMATIC_SCALE[midi.rem_euclid(12) as usize];
    let octave = midi.div_euclid(12) - 1;
    format!("{pitch_class}{octave}")
}
