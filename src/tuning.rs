//! Tuning presets, instrument registry, and open-string MIDI numbers.

use crate::note;

/// Reference open-string names for standard tuning, low to high.
const STANDARD_NOTES: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Reference open-string MIDI numbers for standard tuning (EADGBE).
pub const STANDARD_MIDI: [i32; 6] = [40, 45, 50, 55, 59, 64];

/// Named tuning presets, low string first. Flat spellings are allowed
/// here and normalized wherever pitch arithmetic happens.
pub const TUNINGS: [(&str, [&str; 6]); 9] = [
    ("Standard", ["E", "A", "D", "G", "B", "E"]),
    ("Drop D", ["D", "A", "D", "G", "B", "E"]),
    ("Double Drop D", ["D", "A", "D", "G", "B", "D"]),
    ("DADGAD", ["D", "A", "D", "G", "A", "D"]),
    ("Open D", ["D", "A", "D", "F#", "A", "D"]),
    ("Open G", ["D", "G", "D", "G", "B", "D"]),
    ("Open E", ["E", "B", "E", "G#", "B", "E"]),
    ("Eb Standard", ["Eb", "Ab", "Db", "Gb", "Bb", "Eb"]),
    ("D Standard", ["D", "G", "C", "F", "A", "D"]),
];

/// Instruments and the tuning presets available for each, used by the
/// presentation layer to populate its tuning dropdown.
pub const INSTRUMENTS: [(&str, &[&str]); 2] = [
    (
        "Guitar 6-String",
        &[
            "Standard",
            "Drop D",
            "Double Drop D",
            "DADGAD",
            "Open D",
            "Open G",
            "Open E",
            "Eb Standard",
            "D Standard",
        ],
    ),
    ("Grand Piano", &["Standard"]),
];

/// Look up a tuning preset by name. An unrecognized name silently
/// falls back to `Standard`; a missing preset must not break a live
/// fretboard refresh.
pub fn tuning_notes(name: &str) -> &'static [&'static str; 6] {
    TUNINGS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, notes)| notes)
        .unwrap_or(&TUNINGS[0].1)
}

/// MIDI note numbers of the six open strings for a tuning preset.
///
/// Each string transposes the standard reference by the semitone
/// distance between the target and reference open notes, wrapped into
/// (-6, +6] first. Small deviations therefore stay in the expected
/// octave; a retuning meant to exceed a tritone resolves to the nearer
/// octave instead. That is an accepted limitation of the preset model.
pub fn tuning_midi(name: &str) -> [i32; 6] {
    let tuning = tuning_notes(name);
    let mut midi = [0i32; 6];

    for i in 0..6 {
        // Preset tables only contain chromatic names, so both lookups succeed.
        let target = note::note_index(tuning[i]).unwrap_or(0) as i32;
        let reference = note::note_index(STANDARD_NOTES[i]).unwrap_or(0) as i32;

        let mut diff = target - reference;
        if diff > 6 {
            diff -= 12;
        }
        if diff < -6 {
            diff += 12;
        }

        midi[i] = STANDARD_MIDI[i] + diff;
    }

    midi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_matches_reference() {
        assert_eq!(tuning_midi("Standard"), [40, 45, 50, 55, 59, 64]);
    }

    #[test]
    fn drop_d_lowers_sixth_string() {
        assert_eq!(tuning_midi("Drop D"), [38, 45, 50, 55, 59, 64]);
    }

    #[test]
    fn eb_standard_is_one_semitone_down() {
        assert_eq!(tuning_midi("Eb Standard"), [39, 44, 49, 54, 58, 63]);
    }

    #[test]
    fn open_g_tuning() {
        assert_eq!(tuning_midi("Open G"), [38, 43, 50, 55, 59, 62]);
    }

    #[test]
    fn unknown_preset_falls_back_to_standard() {
        assert_eq!(tuning_midi("Nashville"), tuning_midi("Standard"));
        assert_eq!(tuning_notes("Nashville"), tuning_notes("Standard"));
    }

    #[test]
    fn all_presets_stay_near_reference() {
        // The (-6, +6] wrap bounds every open string to within a
        // tritone of its standard-tuning reference.
        for (name, _) in TUNINGS {
            let midi = tuning_midi(name);
            for (i, m) in midi.iter().enumerate() {
                let delta = m - STANDARD_MIDI[i];
                assert!(
                    (-6..=6).contains(&delta),
                    "{name} string {i} drifted {delta} semitones"
                );
            }
        }
    }

    #[test]
    fn instruments_reference_known_tunings() {
        for (instrument, tunings) in INSTRUMENTS {
            for tuning in tunings {
                assert!(
                    TUNINGS.iter().any(|(name, _)| name == tuning),
                    "{instrument} lists unknown tuning {tuning}"
                );
            }
        }
    }
}
