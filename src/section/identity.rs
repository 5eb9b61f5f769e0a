//! Section identifiers and their on-disk digest.

use sha2::{Digest, Sha256};
use std::fmt;
use std::panic::Location;

/// Digest naming the slot-file namespace of a critical section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId {
    digest: String,
}

impl SectionId {
    /// Identity derived from an explicit label.
    pub fn from_label(label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(label.as_bytes());
        Self {
            digest: hex::encode(hasher.finalize()),
        }
    }

    /// Identity derived from the source location of the calling code.
    ///
    /// The chain of `#[track_caller]` functions above this one decides which
    /// frame counts as the caller.
    #[track_caller]
    pub fn from_caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Identity derived from a source location: file path followed by line number.
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::from_label(&format!("{}{}", location.file(), location.line()))
    }

    /// Explicit label if given and non-empty, caller location otherwise.
    #[track_caller]
    pub(crate) fn resolve(label: Option<&str>) -> Self {
        match label {
            Some(label) if !label.is_empty() => Self::from_label(label),
            _ => Self::from_caller(),
        }
    }

    /// Lowercase hex digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// File name of the given slot.
    pub fn slot_file_name(&self, slot: usize) -> String {
        format!("{}-{}", self.digest, slot)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digest)
    }
}
