//! Configuration model for slotlock.
//!
//! This module defines the Config struct that can be loaded from a YAML file
//! (for example `slotlock.yaml`). It supports forward-compatible parsing
//! (unknown fields are ignored), sensible defaults for every field, and
//! validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SLOTS};
