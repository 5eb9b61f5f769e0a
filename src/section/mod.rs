//! Critical sections shared between independent processes.
//!
//! A [`CriticalSection`] lets at most `max_process` processes run a region of
//! code at the same time. Processes never talk to each other directly; they
//! agree on a set of slot files and compete for OS advisory locks on them.
//!
//! # Slot Files
//!
//! Slot files live in the lock directory (the system temp directory unless
//! configured otherwise) and are named `<digest>-<slot>`, where `<digest>` is
//! the SHA-256 hex digest of the section identifier and `<slot>` runs from
//! `0` to `max_process - 1`. They are created empty on first use and are
//! never deleted or written to.
//!
//! # Section Identity
//!
//! The identifier is either a caller-supplied label or, when none is given,
//! the source location (file and line) of the code constructing the section.
//! Two processes built from the same source therefore share the section
//! without any configuration.
//!
//! # RAII Guards
//!
//! Every lock taken by a section is released when the section is dropped or
//! explicitly released. A failure while unlocking during drop is logged but
//! does not panic.
//!
//! ```no_run
//! use slotlock::CriticalSection;
//!
//! # fn main() -> slotlock::Result<()> {
//! let mut cs = CriticalSection::new(Some("nightly-import"), 1)?;
//! if !cs.has_access()? {
//!     eprintln!("another process is already importing");
//!     return Ok(());
//! }
//! // ... protected work ...
//! # Ok(())
//! # }
//! ```

mod guard;
mod identity;
mod slot;
mod types;


// Re-export public API
pub use guard::{CriticalSection, timeout_from_secs};
pub use identity::SectionId;
pub use types::SlotState;
