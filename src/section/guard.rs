//! The `CriticalSection` guard.

use super::identity::SectionId;
use super::slot;
use super::types::SlotState;
use crate::config::Config;
use crate::error::{Result, SectionError};
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// A critical section that at most `max_process` processes may enter at once.
///
/// Access is obtained with [`has_access`](Self::has_access) (never blocks) or
/// [`wait_access`](Self::wait_access) (polls until a slot frees up). Every
/// lock the section obtained is released when it is dropped.
#[derive(Debug)]
pub struct CriticalSection {
    id: SectionId,
    max_process: usize,
    lock_dir: PathBuf,
    poll_interval: Duration,

    /// Locked handle per slot index. Slots not held here have no entry.
    slots: BTreeMap<usize, File>,
}

impl CriticalSection {
    /// Create a critical section with the default configuration.
    ///
    /// When `id` is `None` the identifier is the file and line of the code
    /// calling `new`, so every process running that line shares the section.
    ///
    /// An empty `id` counts as no id at all.
    ///
    /// No file is touched until access is requested.
    ///
    /// # Errors
    ///
    /// * `SectionError::InvalidCapacity` - `max_process` is zero
    #[track_caller]
    pub fn new(id: Option<&str>, max_process: usize) -> Result<Self> {
        Self::with_config(id, max_process, &Config::default())
    }

    /// Create a critical section using the lock directory and poll interval
    /// of `config`.
    ///
    /// # Errors
    ///
    /// * `SectionError::Config` - `config` fails validation
    /// * `SectionError::InvalidCapacity` - `max_process` is zero
    #[track_caller]
    pub fn with_config(id: Option<&str>, max_process: usize, config: &Config) -> Result<Self> {
        config.validate()?;

        if max_process == 0 {
            return Err(SectionError::InvalidCapacity(max_process));
        }

        let id = SectionId::resolve(id);

        Ok(Self {
            id,
            max_process,
            lock_dir: config.resolved_lock_dir(),
            poll_interval: config.poll_interval(),
            slots: BTreeMap::new(),
        })
    }

    /// Identity of the section.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Maximum number of simultaneous holders.
    pub fn max_process(&self) -> usize {
        self.max_process
    }

    /// Directory holding the slot files.
    pub fn lock_dir(&self) -> &Path {
        &self.lock_dir
    }

    /// Path of the file backing `slot`.
    pub fn slot_path(&self, slot: usize) -> PathBuf {
        self.lock_dir.join(self.id.slot_file_name(slot))
    }

    /// Paths of every slot file, in slot order.
    pub fn slot_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (0..self.max_process).map(|n| self.slot_path(n))
    }

    /// Slots currently locked by this instance.
    pub fn held_slots(&self) -> Vec<usize> {
        self.slots.keys().copied().collect()
    }

    /// Whether this instance currently holds a slot.
    pub fn is_held(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Checks if the process has access to continue.
    ///
    /// Tries slots `0..max_process` in order and keeps the first one it can
    /// lock. Returns `Ok(false)` when every slot is held elsewhere. If this
    /// instance already holds a slot, returns `Ok(true)` without trying again.
    ///
    /// # Errors
    ///
    /// * `SectionError::Environment` - a slot file cannot be created or opened
    pub fn has_access(&mut self) -> Result<bool> {
        if self.is_held() {
            return Ok(true);
        }

        for n in 0..self.max_process {
            if self.check(n)? {
                return Ok(true);
            }
        }

        trace!(section = %self.id, max_process = self.max_process, "all slots busy");
        Ok(false)
    }

    /// Wait until this instance has access.
    ///
    /// `None` waits forever. With `Some(timeout)` the wait fails with
    /// `SectionError::Timeout` once the deadline has passed, at most one poll
    /// interval late.
    pub fn wait_access(&mut self, timeout: Option<Duration>) -> Result<()> {
        let start = Instant::now();
        // An unrepresentable deadline is as good as no deadline.
        let deadline = timeout.and_then(|t| start.checked_add(t));

        loop {
            if self.has_access()? {
                debug!(
                    section = %self.id,
                    waited_ms = start.elapsed().as_millis() as u64,
                    "access granted"
                );
                return Ok(());
            }

            if let Some(deadline) = deadline
                && Instant::now() >= deadline
            {
                return Err(SectionError::Timeout {
                    waited: start.elapsed(),
                });
            }

            thread::sleep(self.poll_interval);
        }
    }

    /// Try to lock a single slot.
    ///
    /// On success the locked handle is kept until the section is released.
    pub(crate) fn check(&mut self, slot: usize) -> Result<bool> {
        if slot >= self.max_process {
            return Err(SectionError::SlotOutOfRange {
                slot,
                max_process: self.max_process,
            });
        }

        let path = self.slot_path(slot);
        let file = slot::open_slot(&path)?;

        if !slot::try_lock(&file, &path)? {
            trace!(section = %self.id, slot, "slot busy");
            return Ok(false);
        }

        debug!(section = %self.id, slot, path = %path.display(), "slot acquired");
        self.slots.insert(slot, file);
        Ok(true)
    }

    /// Report the state of every slot without disturbing anyone.
    ///
    /// Free slots are detected by locking and immediately unlocking them, so
    /// a concurrent `has_access` elsewhere may briefly see such a slot busy.
    pub fn slot_states(&self) -> Result<Vec<SlotState>> {
        (0..self.max_process).map(|n| self.slot_state(n)).collect()
    }

    /// Report the state of one slot, as [`slot_states`](Self::slot_states) does.
    pub fn slot_state(&self, slot: usize) -> Result<SlotState> {
        if slot >= self.max_process {
            return Err(SectionError::SlotOutOfRange {
                slot,
                max_process: self.max_process,
            });
        }

        if self.slots.contains_key(&slot) {
            return Ok(SlotState::HeldHere);
        }

        let path = self.slot_path(slot);
        let file = slot::open_slot(&path)?;
        if !slot::try_lock(&file, &path)? {
            return Ok(SlotState::Busy);
        }

        slot::unlock(&file).map_err(|source| SectionError::Environment { path, source })?;
        Ok(SlotState::Free)
    }

    /// Release every held slot now and report the first unlock failure.
    ///
    /// All handles are closed even when an unlock fails; closing the handle
    /// drops the OS lock regardless.
    pub fn release(mut self) -> Result<()> {
        match self.release_all().into_iter().next() {
            Some((slot, source)) => Err(SectionError::Environment {
                path: self.slot_path(slot),
                source,
            }),
            None => Ok(()),
        }
    }

    fn release_all(&mut self) -> Vec<(usize, io::Error)> {
        let mut failures = Vec::new();

        for (n, file) in std::mem::take(&mut self.slots) {
            match slot::unlock(&file) {
                Ok(()) => debug!(section = %self.id, slot = n, "slot released"),
                Err(e) => failures.push((n, e)),
            }
        }

        failures
    }
}

impl Drop for CriticalSection {
    fn drop(&mut self) {
        for (slot, e) in self.release_all() {
            let path = self.slot_path(slot);
            warn!(
                section = %self.id,
                slot,
                path = %path.display(),
                error = %e,
                "failed to release slot"
            );
        }
    }
}

/// Convert a signed number of seconds into a `wait_access` timeout.
///
/// Negative values (conventionally `-1`) mean "wait forever", as do values
/// too large to represent. `NaN` is not a timeout and yields `None` too;
/// callers taking user input should reject it first.
pub fn timeout_from_secs(secs: f64) -> Option<Duration> {
    if secs < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}
