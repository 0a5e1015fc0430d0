//! Monospaced rendering of a key's chord scale
//!
//! ```text
//! -------------------------------------------
//! | G   | A   | B   | C   | D   | E   | F   |
//! | E   | F   | G   | A   | B   | C   | D   |
//! | C   | D   | E   | F   | G   | A   | B   |
//! -------------------------------------------
//! | C   | Dm  | Em  | F   | G   | Am  | B°  |
//! | I   | ii  | iii | IV  | V   | vi  | vii°|
//! -------------------------------------------
//! ```

use crate::chord::GlyphStyle;
use crate::key::{Key, SCALE_SIZE};
use std::fmt;

/// Cell width between the separators
const CELL_WIDTH: usize = 5;

/// Full row width: seven cells plus eight separators
const TABLE_WIDTH: usize = SCALE_SIZE * (CELL_WIDTH + 1) + 1;

/// Chord scale table for one key
pub struct ChordTable<'a> {
    key: &'a Key,
    style: GlyphStyle,
}

impl<'a> ChordTable<'a> {
    pub fn new(key: &'a Key) -> Self {
        Self {
            key,
            style: GlyphStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the table as a string
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))
    }

    fn write_row<I>(f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
    where
        I: IntoIterator<Item = String>,
    {
        write!(f, "|")?;
        for cell in cells {
            write!(f, " {:<width$}|", cell, width = CELL_WIDTH - 1)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ChordTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let triads = self.key.triads();

        Self::write_border(f)?;
        // Fifths on top, roots at the bottom
        for member in (0..3).rev() {
            Self::write_row(f, triads.iter().map(|t| t.members()[member].to_string()))?;
        }
        Self::write_border(f)?;

        let chords = triads
            .iter()
            .zip(self.key.degrees())
            .map(|(t, d)| format!("{}{}", t.root, d.quality.code(self.style)));
        Self::write_row(f, chords)?;

        let labels = self.key.degrees().iter().map(|d| d.label(self.style));
        Self::write_row(f, labels)?;
        Self::write_border(f)
    }
}

/// Circle progression as a single line (e.g., "I - IV - vii° - ...")
pub fn circle_line(key: &Key, style: GlyphStyle) -> String {
    key.circle_progression()
        .iter()
        .map(|d| d.label(style))
        .collect::<Vec<_>>()
        .join(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    #[test]
    fn test_c_major_table() {
        let key = Key::new(0, Mode::Major).unwrap();
        let expected = "\
-------------------------------------------
| G   | A   | B   | C   | D   | E   | F   |
| E   | F   | G   | A   | B   | C   | D   |
| C   | D   | E   | F   | G   | A   | B   |
-------------------------------------------
| C   | Dm  | Em  | F   | G   | Am  | B°  |
| I   | ii  | iii | IV  | V   | vi  | vii°|
-------------------------------------------
";
        assert_eq!(ChordTable::new(&key).render(), expected);
    }

    #[test]
    fn test_harmonic_minor_ascii_table() {
        let key = Key::new(-2, Mode::HarmonicMinor).unwrap();
        let expected = "\
-------------------------------------------
| C   | Db  | E   | F   | G   | Ab  | Bb  |
| Ab  | Bb  | C   | Db  | E   | F   | G   |
| F   | G   | Ab  | Bb  | C   | Db  | E   |
-------------------------------------------
| Fm  | Go  | Ab+ | Bbm | C   | Db  | Eo  |
| i   | iio | III+| iv  | V   | VI  | viio|
-------------------------------------------
";
        let table = ChordTable::new(&key).with_style(GlyphStyle::Ascii);
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_rows_have_equal_width() {
        for signature in -7..=7 {
            for mode in Mode::ALL {
                let key = Key::new(signature, mode).unwrap();
                for style in [GlyphStyle::Unicode, GlyphStyle::Ascii] {
                    let rendered = ChordTable::new(&key).with_style(style).render();
                    assert_eq!(rendered.lines().count(), 8, "{}", key);
                    for line in rendered.lines() {
                        assert_eq!(line.chars().count(), TABLE_WIDTH, "{}: {:?}", key, line);
                    }
                }
            }
        }
    }

    #[test]
    fn test_circle_line() {
        let key = Key::new(0, Mode::Major).unwrap();
        assert_eq!(circle_line(&key, GlyphStyle::Unicode), "I - IV - vii° - iii - vi - ii - V");
        let key = Key::new(-2, Mode::NaturalMinor).unwrap();
        assert_eq!(circle_line(&key, GlyphStyle::Ascii), "i - iv - VII - III - VI - iio - v");
    }
}
