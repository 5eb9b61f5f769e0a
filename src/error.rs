//! Error types for slotlock.
//!
//! Uses thiserror for derive macros. "Slot busy" is deliberately absent:
//! contention is reported as `Ok(false)` by `CriticalSection::has_access`.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main error type for critical section operations.
///
/// Each variant maps to a process exit code used by the `slotlock` binary.
#[derive(Error, Debug)]
pub enum SectionError {
    /// A slot file could not be created, opened or locked.
    #[error("semaphore cannot be created: '{}': {source}", path.display())]
    Environment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A slot index outside the declared capacity was requested.
    #[error("slot number {slot} out of range (max_process = {max_process})")]
    SlotOutOfRange { slot: usize, max_process: usize },

    /// `wait_access` exceeded its maximum waiting time.
    #[error("exceeded the maximum waiting time of {:.1}s", waited.as_secs_f64())]
    Timeout { waited: Duration },

    /// A critical section needs room for at least one process.
    #[error("max_process must be greater than 0 (got {0})")]
    InvalidCapacity(usize),

    /// Configuration could not be read or failed validation.
    #[error("{0}")]
    Config(String),

    /// The protected command could not be started.
    #[error("failed to run command: {0}")]
    Command(String),
}

impl SectionError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SectionError::Environment { .. } => exit_codes::ENVIRONMENT_FAILURE,
            SectionError::SlotOutOfRange { .. } => exit_codes::ENVIRONMENT_FAILURE,
            SectionError::Timeout { .. } => exit_codes::TIMEOUT,
            SectionError::InvalidCapacity(_) => exit_codes::USER_ERROR,
            SectionError::Config(_) => exit_codes::USER_ERROR,
            SectionError::Command(_) => exit_codes::ENVIRONMENT_FAILURE,
        }
    }

    /// Whether this error is an expected outcome rather than a defect or
    /// environment problem.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SectionError::Timeout { .. })
    }
}

/// Result type alias for slotlock operations.
pub type Result<T> = std::result::Result<T, SectionError>;
