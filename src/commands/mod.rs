//! Command implementations for slotlock.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the section setup shared by every command.

mod run;
mod status;

use crate::cli::{Command, SectionArgs};
use slotlock::config::Config;
use slotlock::error::Result;
use slotlock::section::CriticalSection;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code on success.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Status(args) => status::cmd_status(args),
    }
}

/// Resolve the configuration for a command: config file first, then flags.
fn resolve_config(args: &SectionArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(dir) = &args.lock_dir {
        config.lock_dir = Some(dir.clone());
        config.validate()?;
    }

    Ok(config)
}

/// Build the critical section named by the command-line options.
fn open_section(args: &SectionArgs) -> Result<CriticalSection> {
    let config = resolve_config(args)?;
    let max_process = args.slots.unwrap_or(config.default_slots);
    CriticalSection::with_config(Some(&args.id), max_process, &config)
}
