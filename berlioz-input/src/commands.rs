//! Command definitions for Berlioz

pub use berlioz_theory::Mode;

/// Commands that can be dispatched from a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Chord table for a signature (-7..=7) and mode
    Scale { signature: i32, mode: Mode },
    /// Circle progression for a signature and mode
    Circle { signature: i32, mode: Mode },

    // Application
    Help,
    Quit,
}

impl Command {
    /// Command word as typed by the user
    pub fn name(&self) -> &'static str {
        match self {
            Command::Scale { .. } => "scale",
            Command::Circle { .. } => "circle",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

/// Usage summary printed by `help`
pub const HELP_TEXT: &str = "\
Commands (a leading '!' is optional):
  scale <signature> <mode>   chord table, e.g. `scale -2 nm`
  circle <signature> <mode>  circle progression, e.g. `circle 3 M`
  help                       show this text
  quit                       exit

signature: -7..7 (negative = flats, positive = sharps)
mode:      M (major), nm (natural minor), hm (harmonic minor), mm (melodic minor)";
