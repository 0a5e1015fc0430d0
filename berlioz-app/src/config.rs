//! Simple configuration persistence for Berlioz
//!
//! Stores display and logging preferences.

use berlioz_theory::GlyphStyle;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Log filter used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Glyphs for diminished marks in tables
    pub glyphs: GlyphStyle,
    /// tracing filter directive (e.g., "info", "berlioz_theory=debug")
    pub log_level: String,
    /// Print the circle progression after every chord table
    pub show_circle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            show_circle: false,
        }
    }
}

impl Config {
    /// Load config from the default location
    ///
    /// Returns default config if file doesn't exist or can't be read.
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(&path).unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.serialize())
    }

    /// Get the default config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("berlioz")
            .join("config.txt")
    }

    /// Parse config from simple key=value format
    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim();

                match key.trim() {
                    "glyphs" => {
                        if let Some(style) = GlyphStyle::parse(value) {
                            config.glyphs = style;
                        }
                    }
                    "log_level" => {
                        if !value.is_empty() {
                            config.log_level = value.to_string();
                        }
                    }
                    "show_circle" => {
                        if let Ok(flag) = value.parse() {
                            config.show_circle = flag;
                        }
                    }
                    _ => {} // Ignore unknown keys
                }
            }
        }

        config
    }

    /// Serialize config to simple key=value format
    fn serialize(&self) -> String {
        let glyphs = match self.glyphs {
            GlyphStyle::Unicode => "unicode",
            GlyphStyle::Ascii => "ascii",
        };

        [
            "# Berlioz Configuration".to_string(),
            format!("glyphs={}", glyphs),
            format!("log_level={}", self.log_level),
            format!("show_circle={}", self.show_circle),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse(""), Config::default());
    }

    #[test]
    fn test_parse_values() {
        let config = Config::parse("glyphs=ascii\nlog_level=debug\nshow_circle=true");
        assert_eq!(config.glyphs, GlyphStyle::Ascii);
        assert_eq!(config.log_level, "debug");
        assert!(config.show_circle);
    }

    #[test]
    fn test_parse_with_comments_and_unknown_keys() {
        let content = "# Comment\nglyphs = ascii\ntheme=crt\n# Another comment";
        let config = Config::parse(content);
        assert_eq!(config.glyphs, GlyphStyle::Ascii);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_parse_bad_values_keep_defaults() {
        let config = Config::parse("glyphs=emoji\nshow_circle=maybe\nlog_level=");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config {
            glyphs: GlyphStyle::Ascii,
            log_level: "warn".to_string(),
            show_circle: true,
        };

        let parsed = Config::parse(&config.serialize());
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("berlioz-missing").join("config.txt");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("berlioz-config-{}", std::process::id()));
        let path = dir.join("config.txt");
        let config = Config {
            show_circle: true,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }
}
