//! Line parser for Berlioz commands

use crate::commands::{Command, Mode};
use thiserror::Error;

/// Errors produced while parsing a command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing {what} for `{command}`")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("Key signature must be an integer, got {0:?}")]
    BadSignature(String),
    #[error("Unknown mode {0:?} (expected M, nm, hm or mm)")]
    UnknownMode(String),
    #[error("Unexpected argument: {0}")]
    TrailingArgument(String),
}

/// Parse one line of input into a [`Command`]
///
/// The chat-style `!` prefix is accepted and ignored. Signature range is
/// not checked here; the engine reports out-of-range values.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let input = line.trim();
    let input = input.strip_prefix('!').unwrap_or(input).trim();

    let mut words = input.split_whitespace();
    let word = words.next().ok_or(ParseError::Empty)?;

    let command = match word.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "help" | "h" | "?" => Command::Help,
        "scale" => {
            let (signature, mode) = parse_key_args("scale", &mut words)?;
            Command::Scale { signature, mode }
        }
        "circle" => {
            let (signature, mode) = parse_key_args("circle", &mut words)?;
            Command::Circle { signature, mode }
        }
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    match words.next() {
        Some(extra) => Err(ParseError::TrailingArgument(extra.to_string())),
        None => Ok(command),
    }
}

fn parse_key_args<'a, I>(command: &'static str, words: &mut I) -> Result<(i32, Mode), ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let signature = words.next().ok_or(ParseError::MissingArgument {
        command,
        what: "signature",
    })?;
    let signature: i32 = signature
        .parse()
        .map_err(|_| ParseError::BadSignature(signature.to_string()))?;

    let mode = words.next().ok_or(ParseError::MissingArgument {
        command,
        what: "mode",
    })?;
    let mode = Mode::parse(mode).ok_or_else(|| ParseError::UnknownMode(mode.to_string()))?;

    Ok((signature, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale() {
        assert_eq!(
            parse_command("scale -2 nm"),
            Ok(Command::Scale {
                signature: -2,
                mode: Mode::NaturalMinor
            })
        );
        assert_eq!(
            parse_command("  !scale 3 M "),
            Ok(Command::Scale {
                signature: 3,
                mode: Mode::Major
            })
        );
    }

    #[test]
    fn test_parse_circle() {
        assert_eq!(
            parse_command("circle 0 hm"),
            Ok(Command::Circle {
                signature: 0,
                mode: Mode::HarmonicMinor
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("HELP"), Ok(Command::Help));
    }

    #[test]
    fn test_out_of_range_signature_passes_through() {
        // Range is the engine's call
        assert_eq!(
            parse_command("scale 8 M"),
            Ok(Command::Scale {
                signature: 8,
                mode: Mode::Major
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert_eq!(parse_command("!"), Err(ParseError::Empty));
        assert_eq!(
            parse_command("play 1 M"),
            Err(ParseError::UnknownCommand("play".to_string()))
        );
        assert_eq!(
            parse_command("scale"),
            Err(ParseError::MissingArgument {
                command: "scale",
                what: "signature"
            })
        );
        assert_eq!(
            parse_command("scale 2"),
            Err(ParseError::MissingArgument {
                command: "scale",
                what: "mode"
            })
        );
        assert_eq!(
            parse_command("scale two M"),
            Err(ParseError::BadSignature("two".to_string()))
        );
        assert_eq!(
            parse_command("scale 2 dorian"),
            Err(ParseError::UnknownMode("dorian".to_string()))
        );
        assert_eq!(
            parse_command("scale 2 M extra"),
            Err(ParseError::TrailingArgument("extra".to_string()))
        );
    }

    #[test]
    fn test_command_names() {
        assert_eq!(parse_command("scale 0 M").unwrap().name(), "scale");
        assert_eq!(parse_command("circle 0 M").unwrap().name(), "circle");
    }
}
