//! Berlioz - diatonic chord scales from the terminal
//!
//! `berlioz scale -2 nm` prints one table and exits; with no arguments,
//! commands are read from stdin one per line.

mod config;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use session::{describe_error, Outcome, Session};

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_logging(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--write-config") {
        let path = Config::config_path();
        config
            .save_to(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let session = Session::new(config);

    if args.is_empty() {
        run_repl(&session)
    } else {
        run_once(&session, &args.join(" "))
    }
}

/// Log to stderr so tables on stdout stay clean; `RUST_LOG` overrides the config
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_once(session: &Session, line: &str) -> anyhow::Result<()> {
    match session.run_line(line) {
        Ok(Outcome::Output(text)) => {
            print!("{}", text);
            Ok(())
        }
        Ok(Outcome::Quit) => Ok(()),
        Err(e) => anyhow::bail!(describe_error(&e)),
    }
}

fn run_repl(session: &Session) -> anyhow::Result<()> {
    info!("reading commands from stdin");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match session.run_line(&line) {
            Ok(Outcome::Output(text)) => {
                write!(stdout, "{}", text)?;
                stdout.flush()?;
            }
            Ok(Outcome::Quit) => break,
            Err(e) => {
                warn!(input = %line.trim(), "command failed");
                eprintln!("error: {}", describe_error(&e));
            }
        }
    }

    Ok(())
}
