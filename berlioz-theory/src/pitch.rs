//! Pitch classes, letters and spelled note names

use crate::error::TheoryError;
use std::fmt;
use std::str::FromStr;

/// Number of pitch classes in the octave
pub const PITCH_CLASSES: u8 = 12;

/// Largest supported accidental (double sharp / double flat)
pub const MAX_ACCIDENTAL: i8 = 2;

/// Chromatic pitch class (0-11, where 0=C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, reducing any integer modulo 12
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(PITCH_CLASSES as i32) as u8)
    }

    /// Raw value (0-11)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Move up by a number of semitones, wrapping at the octave
    pub fn transpose(&self, semitones: u8) -> Self {
        Self((self.0 + semitones % PITCH_CLASSES) % PITCH_CLASSES)
    }

    /// All twelve pitch classes in ascending order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASSES).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Natural letter name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// The letter cycle, starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Index in the cycle "C D E F G A B"
    pub fn order(&self) -> usize {
        *self as usize
    }

    /// Letter at a cycle index (wraps every 7)
    pub fn from_order(order: usize) -> Self {
        Self::ALL[order % Self::ALL.len()]
    }

    /// Parse an upper or lower case letter
    pub fn from_char(c: char) -> Option<Self> {
        use Letter::*;
        match c.to_ascii_uppercase() {
            'C' => Some(C),
            'D' => Some(D),
            'E' => Some(E),
            'F' => Some(F),
            'G' => Some(G),
            'A' => Some(A),
            'B' => Some(B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        use Letter::*;
        match self {
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G',
            A => 'A',
            B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A spelled note: letter plus accidental count
///
/// Negative accidentals are flats, positive are sharps. Magnitude never
/// exceeds [`MAX_ACCIDENTAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    letter: Letter,
    accidental: i8,
}

impl NoteName {
    /// Create a note name, rejecting triple (or worse) accidentals
    pub fn new(letter: Letter, accidental: i8) -> Option<Self> {
        if accidental.abs() <= MAX_ACCIDENTAL {
            Some(Self { letter, accidental })
        } else {
            None
        }
    }

    /// Table constructor; callers guarantee the accidental range
    pub(crate) const fn spelled(letter: Letter, accidental: i8) -> Self {
        Self { letter, accidental }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i8 {
        self.accidental
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.accidental < 0 { "b" } else { "#" };
        let marks = mark.repeat(self.accidental.unsigned_abs() as usize);
        // `pad` keeps width/alignment flags working in table cells
        f.pad(&format!("{}{}", self.letter, marks))
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    /// Parse names such as "C", "F#", "Bbb" or "G##"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidNoteName(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;

        let rest: &str = chars.as_str();
        let accidental = if rest.chars().all(|c| c == '#') {
            rest.len() as i32
        } else if rest.chars().all(|c| c == 'b') {
            -(rest.len() as i32)
        } else {
            return Err(invalid());
        };

        if accidental.abs() > MAX_ACCIDENTAL as i32 {
            return Err(invalid());
        }
        Ok(Self::spelled(letter, accidental as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_reduces() {
        assert_eq!(PitchClass::new(12).value(), 0);
        assert_eq!(PitchClass::new(-1).value(), 11);
        assert_eq!(PitchClass::new(25).value(), 1);
    }

    #[test]
    fn test_pitch_class_transpose_wraps() {
        assert_eq!(PitchClass::new(10).transpose(3), PitchClass::new(1));
        assert_eq!(PitchClass::new(4).transpose(12), PitchClass::new(4));
    }

    #[test]
    fn test_letter_order_cycle() {
        assert_eq!(Letter::C.order(), 0);
        assert_eq!(Letter::B.order(), 6);
        assert_eq!(Letter::from_order(7), Letter::C);
        assert_eq!(Letter::from_order(11), Letter::G);
    }

    #[test]
    fn test_note_name_display() {
        assert_eq!(NoteName::spelled(Letter::C, 0).to_string(), "C");
        assert_eq!(NoteName::spelled(Letter::F, 1).to_string(), "F#");
        assert_eq!(NoteName::spelled(Letter::B, -2).to_string(), "Bbb");
        assert_eq!(NoteName::spelled(Letter::G, 2).to_string(), "G##");
        assert_eq!(format!("{:<4}|", NoteName::spelled(Letter::E, -1)), "Eb  |");
    }

    #[test]
    fn test_note_name_parse() {
        assert_eq!("C".parse::<NoteName>(), Ok(NoteName::spelled(Letter::C, 0)));
        assert_eq!("f#".parse::<NoteName>(), Ok(NoteName::spelled(Letter::F, 1)));
        assert_eq!("Ebb".parse::<NoteName>(), Ok(NoteName::spelled(Letter::E, -2)));
        assert_eq!("A##".parse::<NoteName>(), Ok(NoteName::spelled(Letter::A, 2)));
    }

    #[test]
    fn test_note_name_parse_rejects() {
        assert!("".parse::<NoteName>().is_err());
        assert!("H".parse::<NoteName>().is_err());
        assert!("C#b".parse::<NoteName>().is_err());
        assert!("Cbbb".parse::<NoteName>().is_err());
    }

    #[test]
    fn test_note_name_new_limits_accidentals() {
        assert!(NoteName::new(Letter::D, 2).is_some());
        assert!(NoteName::new(Letter::D, -3).is_none());
    }
}
