//! Exit code constants for the slotlock CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Environment failure (slot file unusable, command could not start)
//! - 3: All slots busy (`--no-wait`)
//! - 4: Timed out waiting for a slot
//!
//! `slotlock run` exits with the child's own code once the child has run.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Environment failure: slot files cannot be created/opened, or the command failed to spawn.
pub const ENVIRONMENT_FAILURE: i32 = 2;

/// Every slot of the section is held by another process.
pub const BUSY: i32 = 3;

/// Waiting for a slot exceeded the requested timeout.
pub const TIMEOUT: i32 = 4;
