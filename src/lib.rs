//! Slotlock: critical sections shared between independent processes.
//!
//! A critical section is a named region that at most `max_process` OS
//! processes may enter at the same time. Coordination happens entirely
//! through advisory locks on empty marker files in a shared directory, so
//! any process that agrees on the section identifier takes part, whatever
//! program it is.
//!
//! ```no_run
//! use slotlock::CriticalSection;
//! use std::time::Duration;
//!
//! # fn main() -> slotlock::Result<()> {
//! let mut cs = CriticalSection::new(Some("report-builder"), 2)?;
//! cs.wait_access(Some(Duration::from_secs(30)))?;
//! // at most two processes run this part at once
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod section;

pub use config::Config;
pub use error::{Result, SectionError};
pub use section::{CriticalSection, SectionId, SlotState, timeout_from_secs};
