use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use minimax_engine::EngineConfig;
use tracing_subscriber::EnvFilter;

mod session;

use session::{Flow, Session};

fn main() -> Result<()> {
    // stdout carries the protocol, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match config_path(std::env::args().skip(1))? {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut session = Session::new(config);

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let flow = session.handle(&line, &mut stdout)?;
        stdout.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Extracts the value of `--config <path>`; any other argument is rejected.
fn config_path(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(p) => path = Some(PathBuf::from(p)),
                None => bail!("--config needs a path"),
            },
            other => bail!("unexpected argument `{other}` (usage: uci_engine [--config <path>])"),
        }
    }
    Ok(path)
}
