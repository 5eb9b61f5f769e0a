//! CLI argument parsing for slotlock.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Slotlock: cross-process critical sections backed by file locks.
///
/// Processes that use the same section id (and lock directory) share up to
/// `--slots` concurrent holders. Slot files live in the system temp
/// directory unless configured otherwise.
#[derive(Parser, Debug)]
#[command(name = "slotlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments from the process command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for slotlock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a command while holding a slot of the section.
    ///
    /// Waits for a free slot (forever unless --timeout is given), runs the
    /// command, releases the slot and exits with the command's exit code.
    Run(RunArgs),

    /// Show the slot files of a section and which slots are taken.
    Status(StatusArgs),
}

/// Options identifying a critical section.
#[derive(Args, Debug)]
pub struct SectionArgs {
    /// Section identifier shared by all cooperating processes.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub id: String,

    /// Maximum number of simultaneous holders (default: config `default_slots`).
    #[arg(short, long)]
    pub slots: Option<usize>,

    /// Directory for slot files (overrides the config file).
    #[arg(long)]
    pub lock_dir: Option<PathBuf>,

    /// Path to a YAML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub section: SectionArgs,

    /// Maximum seconds to wait for a slot; negative waits forever.
    #[arg(
        short,
        long,
        default_value_t = -1.0,
        value_parser = parse_timeout,
        allow_negative_numbers = true,
        conflicts_with = "no_wait"
    )]
    pub timeout: f64,

    /// Fail immediately if every slot is taken.
    #[arg(long)]
    pub no_wait: bool,

    /// Command and arguments to run inside the section.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for the `status` command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub section: SectionArgs,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse `--timeout` seconds. Any number is accepted except NaN.
fn parse_timeout(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;

    if secs.is_nan() {
        return Err(format!("'{}' is not a number of seconds", value));
    }

    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["slotlock", "run", "--id", "demo", "--", "true"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.section.id, "demo");
            assert_eq!(args.section.slots, None);
            assert_eq!(args.timeout, -1.0);
            assert!(!args.no_wait);
            assert_eq!(args.command, vec!["true"]);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_run_with_options() {
        let cli = Cli::try_parse_from([
            "slotlock",
            "run",
            "--id",
            "pool",
            "--slots",
            "3",
            "--timeout",
            "2.5",
            "--lock-dir",
            "/var/lock/app",
            "--",
            "sh",
            "-c",
            "echo hi",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.section.slots, Some(3));
            assert_eq!(args.timeout, 2.5);
            assert_eq!(args.section.lock_dir, Some(PathBuf::from("/var/lock/app")));
            assert_eq!(args.command, vec!["sh", "-c", "echo hi"]);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_run_negative_timeout() {
        let cli =
            Cli::try_parse_from(["slotlock", "run", "--id", "x", "-t", "-1", "--", "true"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.timeout, -1.0);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_run_requires_command() {
        assert!(Cli::try_parse_from(["slotlock", "run", "--id", "demo"]).is_err());
    }

    #[test]
    fn parse_run_requires_id() {
        assert!(Cli::try_parse_from(["slotlock", "run", "--", "true"]).is_err());
    }

    #[test]
    fn no_wait_conflicts_with_timeout() {
        let result = Cli::try_parse_from([
            "slotlock",
            "run",
            "--id",
            "demo",
            "--no-wait",
            "--timeout",
            "3",
            "--",
            "true",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_status_json() {
        let cli =
            Cli::try_parse_from(["slotlock", "status", "--id", "demo", "-s", "2", "--json"]).unwrap();
        if let Command::Status(args) = cli.command {
            assert_eq!(args.section.id, "demo");
            assert_eq!(args.section.slots, Some(2));
            assert!(args.json);
        } else {
            panic!("Expected Status command");
        }
    }

    #[test]
    fn parse_run_rejects_nan_timeout() {
        for value in ["NaN", "nan", "soon"] {
            let result = Cli::try_parse_from([
                "slotlock", "run", "--id", "demo", "--timeout", value, "--", "true",
            ]);
            assert!(result.is_err(), "timeout '{}' should be rejected", value);
        }
    }

    #[test]
    fn parse_run_accepts_infinite_timeout() {
        let cli = Cli::try_parse_from([
            "slotlock", "run", "--id", "demo", "--timeout", "inf", "--", "true",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert!(args.timeout.is_infinite());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_rejects_empty_id() {
        assert!(Cli::try_parse_from(["slotlock", "status", "--id", ""]).is_err());
    }
}
