use std::{path::PathBuf, time::Duration};

use clap::Parser;
use stoat_sat::{
    config::{Config, Mode},
    types::err::{self},
};

/// Determine the satisfiability of a DIMACS formula, or the status of an assignment to the formula.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS file to read.
    pub file: PathBuf,

    /// Report whether the assignment given in the file is buildable, incomplete, or invalid.
    #[arg(long, conflicts_with = "propagate")]
    pub status: bool,

    /// Report the literals implied by the assignment given in the file, and the status of the assignment.
    #[arg(long)]
    pub propagate: bool,

    /// Write a model, if one exists.
    #[arg(long)]
    pub model: bool,

    /// Write counters from the solve.
    #[arg(long)]
    pub stats: bool,

    /// The level of logs to write, if built with logs.
    #[arg(long, default_value_t = log::LevelFilter::Warn, value_parser = parse_level)]
    pub log_level: log::LevelFilter,

    /// Stop after this many conflicts.
    #[arg(long)]
    pub conflict_limit: Option<usize>,

    /// Stop after this many seconds.
    #[arg(long)]
    pub time_limit: Option<u64>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        match (self.status, self.propagate) {
            (_, true) => Mode::Propagate,
            (true, false) => Mode::Status,
            (false, false) => Mode::Solve,
        }
    }

    /// A config with the limits of the arguments.
    pub fn config(&self) -> Result<Config, err::ConfigError> {
        let mut config = Config::default();

        if let Some(limit) = self.conflict_limit {
            config.conflict_limit.set(Some(limit))?;
        }

        if let Some(seconds) = self.time_limit {
            config.time_limit.set(Some(Duration::from_secs(seconds)))?;
        }

        Ok(config)
    }
}

fn parse_level(level: &str) -> Result<log::LevelFilter, String> {
    level
        .parse()
        .map_err(|_| format!("unknown log level '{level}'"))
}
