//! Error type shared by every stage of the engine

use crate::pitch::{NoteName, PitchClass};
use thiserror::Error;

/// Errors that refuse a computation
///
/// The engine is pure, so the same input always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Signature outside -7..=7 (user input)
    #[error("Invalid key signature {0}: expected a value from -7 to 7")]
    InvalidKeySignature(i32),
    /// No spelling family contains the note
    #[error("Unknown note: {0}")]
    UnknownNote(NoteName),
    /// The pitch class would need more than two accidentals on that letter
    #[error("Cannot spell pitch class {pitch_class} on letter order {letter_order}")]
    SpellingResolution {
        pitch_class: PitchClass,
        letter_order: usize,
    },
    /// Stacked thirds that match no chord quality
    #[error("No chord quality for a {low}+{high} semitone stack")]
    ClassificationGap { low: u8, high: u8 },
    /// Text that does not parse as a note name
    #[error("Invalid note name: {0:?}")]
    InvalidNoteName(String),
}
