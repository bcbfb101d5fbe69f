// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the locator command-line interface.
//!
//! No subcommands. With no arguments the query comes from stdin and the answer
//! goes to stdout; every flag is optional.

use std::path::PathBuf;

use clap::Parser;
use locator::LocatorOptions;

#[derive(Parser, Debug)]
#[command(
    name = "locator",
    about = "Find the first index of a target in a sorted integer sequence",
    long_about = "Reads N, then N integers, then a target (whitespace separated) \
                  and prints the zero-based index of the target's first occurrence, \
                  or -1 if it is absent.",
    version
)]
pub struct Cli {
    /// Read the query from FILE instead of stdin ("-" means stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reject unsorted sequences instead of searching them
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> LocatorOptions {
        LocatorOptions {
            strict: self.strict,
        }
    }

    /// Input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
