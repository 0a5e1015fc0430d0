//! Music theory engine for Berlioz
//!
//! Resolves key signatures to spelled diatonic scales, builds the seven
//! triads of each scale and labels them with Roman-numeral degrees.
//!
//! Layers, bottom up: spelling tables, enharmonic resolver, key builder,
//! chord classifier and table formatter.

mod chord;
mod enharmonic;
mod error;
mod format;
mod key;
mod mode;
mod pitch;
mod tables;

pub use chord::{ChordQuality, Degree, GlyphStyle, Triad};
pub use enharmonic::{
    flat_enharmonic, interval_between, letter_order, resolve_spelling, sharp_enharmonic,
    to_pitch_class, Interval,
};
pub use error::TheoryError;
pub use format::{circle_line, ChordTable};
pub use key::{Key, KeySignature, MAX_ACCIDENTALS, SCALE_SIZE};
pub use mode::Mode;
pub use pitch::{Letter, NoteName, PitchClass};
pub use tables::Family;

/// Build the key for `signature` and `mode` and render its chord table
pub fn compute_chord_scale(signature: i32, mode: Mode) -> Result<String, TheoryError> {
    compute_chord_scale_with(signature, mode, GlyphStyle::default())
}

/// Same as [`compute_chord_scale`] with an explicit glyph style
pub fn compute_chord_scale_with(
    signature: i32,
    mode: Mode,
    style: GlyphStyle,
) -> Result<String, TheoryError> {
    let key = Key::new(signature, mode)?;
    Ok(ChordTable::new(&key).with_style(style).render())
}
