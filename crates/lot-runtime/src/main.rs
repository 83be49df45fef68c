//! Interactive parking lot console.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lot_runtime::telemetry::init_logging;
use lot_runtime::{build_service, Args, Outcome, RuntimeConfig, Session};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RuntimeConfig::load(&args).context("invalid configuration")?;
    init_logging(&config.logging).context("failed to initialize logging")?;

    info!(
        total_slots = config.allocator.total_slots,
        pricing = ?config.pricing,
        "Starting lot runtime"
    );

    let mut session = Session::new(build_service(&config));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\nType 'help' for commands.", session.overview())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        match session.handle_line(&line) {
            Outcome::Output(text) => writeln!(out, "{}", text)?,
            Outcome::Silent => {}
            Outcome::Quit => break,
        }
        out.flush()?;
    }

    info!("Lot runtime stopped");
    Ok(())
}
