//! Scale modes and their interval patterns

use crate::chord::ChordQuality;
use std::fmt;

/// Scale mode (4 supported: major + three minor forms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
}

impl Mode {
    /// All modes, in command-code order
    pub const ALL: [Mode; 4] = [
        Mode::Major,
        Mode::NaturalMinor,
        Mode::HarmonicMinor,
        Mode::MelodicMinor,
    ];

    /// Semitone steps between consecutive degrees (sums to 12)
    pub fn steps(&self) -> [u8; 7] {
        match self {
            Mode::Major => [2, 2, 1, 2, 2, 2, 1],
            Mode::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
            Mode::HarmonicMinor => [2, 1, 2, 2, 1, 3, 1],
            Mode::MelodicMinor => [2, 1, 2, 2, 2, 2, 1],
        }
    }

    /// Check if this mode takes its tonic from the minor table
    pub fn is_minor(&self) -> bool {
        !matches!(self, Mode::Major)
    }

    /// Triad qualities on degrees I..VII
    pub fn diatonic_qualities(&self) -> [ChordQuality; 7] {
        use ChordQuality::*;
        match self {
            Mode::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            Mode::NaturalMinor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
            Mode::HarmonicMinor => [Minor, Diminished, Augmented, Minor, Major, Major, Diminished],
            Mode::MelodicMinor => [Minor, Minor, Augmented, Major, Major, Diminished, Diminished],
        }
    }

    /// Short command code ("M", "nm", "hm", "mm")
    pub fn code(&self) -> &'static str {
        match self {
            Mode::Major => "M",
            Mode::NaturalMinor => "nm",
            Mode::HarmonicMinor => "hm",
            Mode::MelodicMinor => "mm",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::NaturalMinor => "natural minor",
            Mode::HarmonicMinor => "harmonic minor",
            Mode::MelodicMinor => "melodic minor",
        }
    }

    /// Parse a command code or a mode name
    ///
    /// Codes are case sensitive ("M" is major, "m" is not a code);
    /// names ignore case, spaces, dashes and underscores.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(mode) = Self::ALL.iter().find(|m| m.code() == s) {
            return Some(*mode);
        }

        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "major" | "maj" => Some(Mode::Major),
            "minor" | "naturalminor" | "min" => Some(Mode::NaturalMinor),
            "harmonicminor" | "harmonic" => Some(Mode::HarmonicMinor),
            "melodicminor" | "melodic" => Some(Mode::MelodicMinor),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
