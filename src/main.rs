// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use locator::Locator;

mod cli;
use cli::Cli;

fn main() {
    // clap exits with code 2 on usage errors
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG`, when set, overrides `-v`.
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let locator = Locator::new(cli.options());
    let stdout = io::stdout().lock();

    match cli.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            log::debug!("reading query from {}", path.display());
            locator.run(BufReader::new(file), stdout)?;
        }
        None => {
            locator.run(io::stdin().lock(), stdout)?;
        }
    }

    Ok(())
}
