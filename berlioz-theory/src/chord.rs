//! Triads, chord qualities and Roman-numeral degrees

use crate::enharmonic::{interval_between, to_pitch_class};
use crate::error::TheoryError;
use crate::pitch::NoteName;
use std::fmt;

/// Roman numerals for degrees I..VII (lower case)
const NUMERALS: [&str; 7] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// Glyphs used for diminished marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Degree sign ("vii°")
    #[default]
    Unicode,
    /// Plain ASCII ("viio")
    Ascii,
}

impl GlyphStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Some(GlyphStyle::Unicode),
            "ascii" => Some(GlyphStyle::Ascii),
            _ => None,
        }
    }

    fn diminished_mark(&self) -> &'static str {
        match self {
            GlyphStyle::Unicode => "\u{b0}",
            GlyphStyle::Ascii => "o",
        }
    }
}

/// Triad quality, from the two stacked thirds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Diminished,
    Minor,
    Major,
    Augmented,
}

impl ChordQuality {
    /// Classify a triad from its lower and upper third (in semitones)
    ///
    /// | low | high | quality    |
    /// |-----|------|------------|
    /// | 3   | 3    | Diminished |
    /// | 3   | 4    | Minor      |
    /// | 4   | 3    | Major      |
    /// | 4   | 4    | Augmented  |
    pub fn from_thirds(low: u8, high: u8) -> Result<Self, TheoryError> {
        match (low, high) {
            (3, 3) => Ok(ChordQuality::Diminished),
            (3, 4) => Ok(ChordQuality::Minor),
            (4, 3) => Ok(ChordQuality::Major),
            (4, 4) => Ok(ChordQuality::Augmented),
            _ => Err(TheoryError::ClassificationGap { low, high }),
        }
    }

    /// Suffix after the root in chord symbols ("", "m", "°", "+")
    pub fn code(&self, style: GlyphStyle) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => style.diminished_mark(),
            ChordQuality::Augmented => "+",
        }
    }

    fn is_upper_case(&self) -> bool {
        matches!(self, ChordQuality::Major | ChordQuality::Augmented)
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChordQuality::Diminished => "diminished",
            ChordQuality::Minor => "minor",
            ChordQuality::Major => "major",
            ChordQuality::Augmented => "augmented",
        };
        write!(f, "{}", s)
    }
}

/// Three spelled notes stacked in thirds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triad {
    pub root: NoteName,
    pub third: NoteName,
    pub fifth: NoteName,
}

impl Triad {
    pub fn new(root: NoteName, third: NoteName, fifth: NoteName) -> Self {
        Self { root, third, fifth }
    }

    /// Members from the bottom up
    pub fn members(&self) -> [NoteName; 3] {
        [self.root, self.third, self.fifth]
    }

    /// Quality from the semitone size of both stacked thirds
    pub fn quality(&self) -> Result<ChordQuality, TheoryError> {
        let root = to_pitch_class(self.root)?;
        let third = to_pitch_class(self.third)?;
        let fifth = to_pitch_class(self.fifth)?;

        let low = interval_between(root, third).semitones;
        let high = interval_between(third, fifth).semitones;
        ChordQuality::from_thirds(low, high)
    }
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.root, self.third, self.fifth)
    }
}

/// A classified scale degree: position (0-6) plus triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Degree {
    pub index: usize,
    pub quality: ChordQuality,
}

impl Degree {
    pub fn new(index: usize, quality: ChordQuality) -> Self {
        Self { index, quality }
    }

    /// Roman-numeral label (e.g., "I", "ii", "vii°", "III+")
    pub fn label(&self, style: GlyphStyle) -> String {
        let numeral = NUMERALS[self.index % NUMERALS.len()];
        let numeral = if self.quality.is_upper_case() {
            numeral.to_ascii_uppercase()
        } else {
            numeral.to_string()
        };

        match self.quality {
            ChordQuality::Diminished => numeral + style.diminished_mark(),
            ChordQuality::Augmented => numeral + "+",
            ChordQuality::Major | ChordQuality::Minor => numeral,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label(GlyphStyle::Unicode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triad(root: &str, third: &str, fifth: &str) -> Triad {
        Triad::new(
            root.parse().unwrap(),
            third.parse().unwrap(),
            fifth.parse().unwrap(),
        )
    }

    #[test]
    fn test_from_thirds_table() {
        assert_eq!(ChordQuality::from_thirds(3, 3), Ok(ChordQuality::Diminished));
        assert_eq!(ChordQuality::from_thirds(3, 4), Ok(ChordQuality::Minor));
        assert_eq!(ChordQuality::from_thirds(4, 3), Ok(ChordQuality::Major));
        assert_eq!(ChordQuality::from_thirds(4, 4), Ok(ChordQuality::Augmented));
    }

    #[test]
    fn test_from_thirds_gap() {
        assert_eq!(
            ChordQuality::from_thirds(2, 5),
            Err(TheoryError::ClassificationGap { low: 2, high: 5 })
        );
    }

    #[test]
    fn test_triad_quality() {
        assert_eq!(triad("C", "E", "G").quality(), Ok(ChordQuality::Major));
        assert_eq!(triad("D", "F", "A").quality(), Ok(ChordQuality::Minor));
        assert_eq!(triad("B", "D", "F").quality(), Ok(ChordQuality::Diminished));
        assert_eq!(triad("Eb", "G", "B").quality(), Ok(ChordQuality::Augmented));
        assert_eq!(triad("G#", "B#", "D#").quality(), Ok(ChordQuality::Major));
    }

    #[test]
    fn test_triad_quality_rejects_non_thirds() {
        // Suspended stack: 5 + 2 semitones
        assert!(matches!(
            triad("C", "F", "G").quality(),
            Err(TheoryError::ClassificationGap { low: 5, high: 2 })
        ));
    }

    #[test]
    fn test_degree_labels() {
        assert_eq!(Degree::new(0, ChordQuality::Major).label(GlyphStyle::Unicode), "I");
        assert_eq!(Degree::new(1, ChordQuality::Minor).label(GlyphStyle::Unicode), "ii");
        assert_eq!(Degree::new(6, ChordQuality::Diminished).label(GlyphStyle::Unicode), "vii°");
        assert_eq!(Degree::new(6, ChordQuality::Diminished).label(GlyphStyle::Ascii), "viio");
        assert_eq!(Degree::new(2, ChordQuality::Augmented).label(GlyphStyle::Unicode), "III+");
    }

    #[test]
    fn test_quality_codes() {
        assert_eq!(ChordQuality::Major.code(GlyphStyle::Unicode), "");
        assert_eq!(ChordQuality::Minor.code(GlyphStyle::Unicode), "m");
        assert_eq!(ChordQuality::Diminished.code(GlyphStyle::Unicode), "°");
        assert_eq!(ChordQuality::Diminished.code(GlyphStyle::Ascii), "o");
        assert_eq!(ChordQuality::Augmented.code(GlyphStyle::Ascii), "+");
    }

    #[test]
    fn test_glyph_style_parse() {
        assert_eq!(GlyphStyle::parse("ASCII"), Some(GlyphStyle::Ascii));
        assert_eq!(GlyphStyle::parse("unicode"), Some(GlyphStyle::Unicode));
        assert_eq!(GlyphStyle::parse("emoji"), None);
    }
}
