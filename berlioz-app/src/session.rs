//! Command execution against the theory engine

use berlioz_input::{parse_command, Command, HELP_TEXT};
use berlioz_theory::{circle_line, ChordTable, Key, TheoryError};
use tracing::{debug, warn};

use crate::config::Config;

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print on stdout
    Output(String),
    /// Stop reading commands
    Quit,
}

/// Executes parsed commands with the user's display preferences
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse and run one line of input
    pub fn run_line(&self, line: &str) -> anyhow::Result<Outcome> {
        let command = parse_command(line)?;
        debug!(command = command.name(), "dispatching");
        Ok(self.execute(command)?)
    }

    /// Run a parsed command
    pub fn execute(&self, command: Command) -> Result<Outcome, TheoryError> {
        let style = self.config.glyphs;
        match command {
            Command::Scale { signature, mode } => {
                let key = refusing(Key::new(signature, mode))?;
                let mut text = format!("Key: {}\n", key.name());
                text.push_str(&ChordTable::new(&key).with_style(style).render());
                if self.config.show_circle {
                    text.push_str(&format!("Circle: {}\n", circle_line(&key, style)));
                }
                Ok(Outcome::Output(text))
            }
            Command::Circle { signature, mode } => {
                let key = refusing(Key::new(signature, mode))?;
                Ok(Outcome::Output(format!(
                    "Circle ({}): {}\n",
                    key.name(),
                    circle_line(&key, style)
                )))
            }
            Command::Help => Ok(Outcome::Output(format!("{}\n", HELP_TEXT))),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}

/// Log refused computations before handing the error back
fn refusing(result: Result<Key, TheoryError>) -> Result<Key, TheoryError> {
    if let Err(e) = &result {
        match e {
            TheoryError::InvalidKeySignature(_) => warn!(error = %e, "bad input"),
            TheoryError::SpellingResolution { .. } => {
                warn!(error = %e, "unsupported key/mode combination")
            }
            _ => warn!(error = %e, "engine invariant violated"),
        }
    }
    result
}

/// One-line explanation for the user
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TheoryError>() {
        Some(TheoryError::SpellingResolution { .. }) => {
            format!("unsupported key/mode combination: {}", err)
        }
        Some(TheoryError::UnknownNote(_)) | Some(TheoryError::ClassificationGap { .. }) => {
            format!("internal error: {}", err)
        }
        _ => err.to_string(),
    }
}
