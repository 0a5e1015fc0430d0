//! Spelling tables indexed by pitch class
//!
//! Each accidental family lists one spelling per pitch class (0=C).
//! Families are partial: a pitch class may fall back to a natural or a
//! lighter accidental where the family has no spelling of its own.

use crate::pitch::{Letter, NoteName, PitchClass};

/// Accidental family of a spelling table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    DoubleFlat,
    Flat,
    Sharp,
    DoubleSharp,
}

impl Family {
    /// Search order for name -> pitch class lookup
    pub const LOOKUP_ORDER: [Family; 4] = [
        Family::Sharp,
        Family::Flat,
        Family::DoubleFlat,
        Family::DoubleSharp,
    ];

    /// Search order for pitch class + letter -> name resolution
    pub const SPELLING_ORDER: [Family; 4] = [
        Family::Flat,
        Family::Sharp,
        Family::DoubleFlat,
        Family::DoubleSharp,
    ];

    /// The full 12-entry table for this family
    pub fn spellings(&self) -> &'static [NoteName; 12] {
        match self {
            Family::DoubleFlat => &DOUBLE_FLAT,
            Family::Flat => &FLAT,
            Family::Sharp => &SHARP,
            Family::DoubleSharp => &DOUBLE_SHARP,
        }
    }

    /// Spelling of a pitch class in this family
    pub fn spelling_of(&self, pitch_class: PitchClass) -> NoteName {
        self.spellings()[pitch_class.value() as usize]
    }

    /// Pitch class implied by a spelling, if this family contains it
    pub fn pitch_class_of(&self, note: NoteName) -> Option<PitchClass> {
        self.spellings()
            .iter()
            .position(|n| *n == note)
            .map(|i| PitchClass::new(i as i32))
    }
}

const fn n(letter: Letter, accidental: i8) -> NoteName {
    NoteName::spelled(letter, accidental)
}

use Letter::{A, B, C, D, E, F, G};

const DOUBLE_FLAT: [NoteName; 12] = [
    n(D, -2),
    n(D, -1),
    n(E, -2),
    n(E, -1),
    n(F, -1),
    n(G, -2),
    n(G, -1),
    n(A, -2),
    n(A, -1),
    n(B, -2),
    n(B, -1),
    n(C, -1),
];

const FLAT: [NoteName; 12] = [
    n(C, 0),
    n(D, -1),
    n(D, 0),
    n(E, -1),
    n(F, -1),
    n(F, 0),
    n(G, -1),
    n(G, 0),
    n(A, -1),
    n(A, 0),
    n(B, -1),
    n(C, -1),
];

const SHARP: [NoteName; 12] = [
    n(B, 1),
    n(C, 1),
    n(D, 0),
    n(D, 1),
    n(E, 0),
    n(E, 1),
    n(F, 1),
    n(G, 0),
    n(G, 1),
    n(A, 0),
    n(A, 1),
    n(B, 0),
];

const DOUBLE_SHARP: [NoteName; 12] = [
    n(B, 1),
    n(C, 1),
    n(C, 2),
    n(D, 1),
    n(D, 2),
    n(E, 1),
    n(F, 1),
    n(F, 2),
    n(G, 1),
    n(G, 2),
    n(A, 1),
    n(A, 2),
];
