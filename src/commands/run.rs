//! Implementation of the `slotlock run` command.
//!
//! Acquires a slot of the section, runs the child command while the slot is
//! held, then releases it. The child's exit code becomes ours.

use super::open_section;
use crate::cli::RunArgs;
use slotlock::error::{Result, SectionError};
use slotlock::exit_codes;
use slotlock::section::timeout_from_secs;
use std::process::{Command, ExitStatus};
use tracing::info;

/// Execute the `slotlock run` command.
pub fn cmd_run(args: RunArgs) -> Result<i32> {
    let mut cs = open_section(&args.section)?;

    if args.no_wait {
        if !cs.has_access()? {
            eprintln!(
                "All {} slot(s) of section '{}' are busy.",
                cs.max_process(),
                args.section.id
            );
            return Ok(exit_codes::BUSY);
        }
    } else {
        cs.wait_access(timeout_from_secs(args.timeout))?;
    }

    let Some((program, rest)) = args.command.split_first() else {
        return Err(SectionError::Command("no command given".to_string()));
    };

    info!(section = %args.section.id, slots = ?cs.held_slots(), program = %program, "running command");

    let status = Command::new(program)
        .args(rest)
        .status()
        .map_err(|e| SectionError::Command(format!("'{}': {}", program, e)))?;

    cs.release()?;

    Ok(exit_code_of(status))
}

/// Exit code to report for a finished child.
///
/// A child killed by a signal reports `128 + signal`, as shells do.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    exit_codes::ENVIRONMENT_FAILURE
}
