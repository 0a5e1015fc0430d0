//! Enharmonic resolution between spelled notes and pitch classes

use crate::error::TheoryError;
use crate::pitch::{NoteName, PitchClass};
use crate::tables::Family;

/// Named interval from unison to octave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Distance in semitones (0-12)
    pub semitones: u8,
    /// Short name (e.g., "m3", "P5")
    pub name: &'static str,
}

/// Interval names indexed by semitone count
const INTERVALS: [&str; 13] = [
    "P1", // Unison
    "m2", // Minor 2nd
    "M2", // Major 2nd
    "m3", // Minor 3rd
    "M3", // Major 3rd
    "P4", // Perfect 4th
    "A4", // Tritone
    "P5", // Perfect 5th
    "m6", // Minor 6th
    "M6", // Major 6th
    "m7", // Minor 7th
    "M7", // Major 7th
    "P8", // Octave
];

/// Pitch class of a spelled note
///
/// Families are searched sharp, flat, double-flat, double-sharp and the
/// first one containing the spelling wins.
pub fn to_pitch_class(note: NoteName) -> Result<PitchClass, TheoryError> {
    Family::LOOKUP_ORDER
        .iter()
        .find_map(|family| family.pitch_class_of(note))
        .ok_or(TheoryError::UnknownNote(note))
}

/// Index of the note's letter in "C D E F G A B" (accidental ignored)
pub fn letter_order(note: NoteName) -> usize {
    note.letter().order()
}

/// Spell a pitch class on the letter at `target_order`
///
/// Families are tried flat, sharp, double-flat, double-sharp. Fails when the
/// spelling would need more accidentals than the tables carry.
pub fn resolve_spelling(
    pitch_class: PitchClass,
    target_order: usize,
) -> Result<NoteName, TheoryError> {
    Family::SPELLING_ORDER
        .iter()
        .map(|family| family.spelling_of(pitch_class))
        .find(|candidate| letter_order(*candidate) == target_order)
        .ok_or(TheoryError::SpellingResolution {
            pitch_class,
            letter_order: target_order,
        })
}

/// Ascending interval from `a` to `b` within one octave
pub fn interval_between(a: PitchClass, b: PitchClass) -> Interval {
    let semitones = PitchClass::new(b.value() as i32 - a.value() as i32).value();
    Interval {
        semitones,
        name: INTERVALS[semitones as usize],
    }
}

/// Respell a note through the flat table (e.g., C# -> Db, E -> Fb)
pub fn flat_enharmonic(note: NoteName) -> Result<NoteName, TheoryError> {
    Ok(Family::Flat.spelling_of(to_pitch_class(note)?))
}

/// Respell a note through the sharp table (e.g., Db -> C#, C -> B#)
pub fn sharp_enharmonic(note: NoteName) -> Result<NoteName, TheoryError> {
    Ok(Family::Sharp.spelling_of(to_pitch_class(note)?))
}
