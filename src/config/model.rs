//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Delay between two acquisition attempts in `wait_access`.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Capacity used when the caller does not name one.
pub const DEFAULT_SLOTS: usize = 1;

/// Configuration for critical sections.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the slot marker files.
    /// `None` means the system temp directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_dir: Option<PathBuf>,

    /// Milliseconds to sleep between attempts while waiting for a slot.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Number of slots used by the CLI when `--slots` is not given.
    #[serde(default = "default_slots")]
    pub default_slots: usize,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_slots() -> usize {
    DEFAULT_SLOTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_dir: None,
            poll_interval_ms: default_poll_interval_ms(),
            default_slots: default_slots(),
        }
    }
}
