//! Key signatures and the scale/triad builder
//!
//! A [`Key`] is built in one shot from a signature and a mode:
//! 1. Look up the tonic for the signature (major or minor table)
//! 2. Walk the mode's steps to get seven pitch classes
//! 3. Spell each pitch class on consecutive letters from the tonic
//! 4. Stack thirds into seven triads and classify each one
//!
//! Any failure refuses the whole key; there is no partial result.

use crate::chord::{ChordQuality, Degree, Triad};
use crate::enharmonic::{letter_order, resolve_spelling, to_pitch_class};
use crate::error::TheoryError;
use crate::mode::Mode;
use crate::pitch::{Letter, NoteName, PitchClass};
use std::fmt;
use tracing::debug;

/// Notes (and triads) per diatonic scale
pub const SCALE_SIZE: usize = 7;

/// Largest number of sharps or flats in a signature
pub const MAX_ACCIDENTALS: i32 = 7;

const fn n(letter: Letter, accidental: i8) -> NoteName {
    NoteName::spelled(letter, accidental)
}

/// Major tonics indexed by signature + 7 (Cb .. C#)
const MAJOR_TONICS: [NoteName; 15] = [
    n(Letter::C, -1),
    n(Letter::G, -1),
    n(Letter::D, -1),
    n(Letter::A, -1),
    n(Letter::E, -1),
    n(Letter::B, -1),
    n(Letter::F, 0),
    n(Letter::C, 0),
    n(Letter::G, 0),
    n(Letter::D, 0),
    n(Letter::A, 0),
    n(Letter::E, 0),
    n(Letter::B, 0),
    n(Letter::F, 1),
    n(Letter::C, 1),
];

/// Minor-family tonics indexed by signature + 7 (Gb .. G#)
///
/// Anchored so that two flats gives F.
const MINOR_TONICS: [NoteName; 15] = [
    n(Letter::G, -1),
    n(Letter::D, -1),
    n(Letter::A, -1),
    n(Letter::E, -1),
    n(Letter::B, -1),
    n(Letter::F, 0),
    n(Letter::C, 0),
    n(Letter::G, 0),
    n(Letter::D, 0),
    n(Letter::A, 0),
    n(Letter::E, 0),
    n(Letter::B, 0),
    n(Letter::F, 1),
    n(Letter::C, 1),
    n(Letter::G, 1),
];

/// Key signature (-7..=7): positive counts sharps, negative counts flats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeySignature(i8);

impl KeySignature {
    /// Validate a signature; out-of-range values are rejected, never clamped
    pub fn new(value: i32) -> Result<Self, TheoryError> {
        if (-MAX_ACCIDENTALS..=MAX_ACCIDENTALS).contains(&value) {
            Ok(Self(value as i8))
        } else {
            Err(TheoryError::InvalidKeySignature(value))
        }
    }

    /// Signature with `count` sharps
    pub fn from_sharps(count: u8) -> Result<Self, TheoryError> {
        Self::new(count as i32)
    }

    /// Signature with `count` flats
    pub fn from_flats(count: u8) -> Result<Self, TheoryError> {
        Self::new(-(count as i32))
    }

    pub fn value(&self) -> i8 {
        self.0
    }

    pub fn sharps(&self) -> u8 {
        self.0.max(0) as u8
    }

    pub fn flats(&self) -> u8 {
        (-self.0).max(0) as u8
    }

    /// Tonic of this signature for the given mode family
    pub fn tonic(&self, mode: Mode) -> NoteName {
        let index = (self.0 as i32 + MAX_ACCIDENTALS) as usize;
        if mode.is_minor() {
            MINOR_TONICS[index]
        } else {
            MAJOR_TONICS[index]
        }
    }

    /// All valid signatures, from seven flats to seven sharps
    pub fn all() -> impl Iterator<Item = KeySignature> {
        (-MAX_ACCIDENTALS..=MAX_ACCIDENTALS).map(|v| KeySignature(v as i8))
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "no accidentals"),
            v if v > 0 => write!(f, "{} sharp{}", v, if v == 1 { "" } else { "s" }),
            v => write!(f, "{} flat{}", -v, if v == -1 { "" } else { "s" }),
        }
    }
}

/// A fully built key: spelled scale, triads and degree qualities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    signature: KeySignature,
    mode: Mode,
    tonic: NoteName,
    chromatic_scale: [PitchClass; SCALE_SIZE],
    spelled_scale: [NoteName; SCALE_SIZE],
    triads: [Triad; SCALE_SIZE],
    degrees: [Degree; SCALE_SIZE],
}

impl Key {
    /// Build a key from a raw signature value
    pub fn new(signature: i32, mode: Mode) -> Result<Self, TheoryError> {
        Self::build(KeySignature::new(signature)?, mode)
    }

    /// Build a key from a validated signature
    pub fn build(signature: KeySignature, mode: Mode) -> Result<Self, TheoryError> {
        let tonic = signature.tonic(mode);
        debug!(signature = signature.value(), %mode, %tonic, "building key");

        let chromatic_scale = Self::chromatic_scale_from(to_pitch_class(tonic)?, mode);

        let tonic_order = letter_order(tonic);
        let mut spelled_scale = [tonic; SCALE_SIZE];
        for (i, (slot, pitch_class)) in spelled_scale
            .iter_mut()
            .zip(chromatic_scale.iter())
            .enumerate()
        {
            *slot = resolve_spelling(*pitch_class, (tonic_order + i) % SCALE_SIZE)?;
        }

        let triads: [Triad; SCALE_SIZE] = std::array::from_fn(|i| {
            Triad::new(
                spelled_scale[i],
                spelled_scale[(i + 2) % SCALE_SIZE],
                spelled_scale[(i + 4) % SCALE_SIZE],
            )
        });

        let mut degrees = [Degree::new(0, ChordQuality::Major); SCALE_SIZE];
        for (i, (slot, triad)) in degrees.iter_mut().zip(triads.iter()).enumerate() {
            *slot = Degree::new(i, triad.quality()?);
        }

        Ok(Self {
            signature,
            mode,
            tonic,
            chromatic_scale,
            spelled_scale,
            triads,
            degrees,
        })
    }

    /// Cumulative sum of the first six steps, starting at the tonic
    fn chromatic_scale_from(tonic: PitchClass, mode: Mode) -> [PitchClass; SCALE_SIZE] {
        let steps = mode.steps();
        let mut scale = [tonic; SCALE_SIZE];
        for i in 1..SCALE_SIZE {
            scale[i] = scale[i - 1].transpose(steps[i - 1]);
        }
        scale
    }

    pub fn signature(&self) -> KeySignature {
        self.signature
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tonic(&self) -> NoteName {
        self.tonic
    }

    pub fn chromatic_scale(&self) -> &[PitchClass; SCALE_SIZE] {
        &self.chromatic_scale
    }

    pub fn spelled_scale(&self) -> &[NoteName; SCALE_SIZE] {
        &self.spelled_scale
    }

    pub fn triads(&self) -> &[Triad; SCALE_SIZE] {
        &self.triads
    }

    /// Triad on a 1-based scale degree (1..=7)
    pub fn triad(&self, degree: usize) -> Option<&Triad> {
        degree.checked_sub(1).and_then(|i| self.triads.get(i))
    }

    pub fn degrees(&self) -> &[Degree; SCALE_SIZE] {
        &self.degrees
    }

    /// 1-based degree of a note if it is spelled in this scale
    pub fn degree_of(&self, note: NoteName) -> Option<usize> {
        self.spelled_scale
            .iter()
            .position(|n| *n == note)
            .map(|i| i + 1)
    }

    /// Degrees visited stepping up three degrees at a time from the tonic
    ///
    /// Visits I, IV, vii, iii, vi, ii, V (indices 0, 3, 6, 2, 5, 1, 4).
    pub fn circle_progression(&self) -> [Degree; SCALE_SIZE] {
        std::array::from_fn(|i| self.degrees[(i * 3) % SCALE_SIZE])
    }

    /// Key name (e.g., "Bb", "Fm")
    pub fn name(&self) -> String {
        format!("{}{}", self.tonic, if self.mode.is_minor() { "m" } else { "" })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.tonic, self.mode, self.signature)
    }
}
