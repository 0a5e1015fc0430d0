//! Text command handling for Berlioz

mod commands;
mod parser;

pub use commands::{Command, HELP_TEXT};
pub use parser::{parse_command, ParseError};
