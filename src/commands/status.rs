//! Implementation of the `slotlock status` command.
//!
//! Displays the digest, lock directory and per-slot state of a section.

use super::open_section;
use crate::cli::StatusArgs;
use serde_json::json;
use slotlock::error::{Result, SectionError};
use slotlock::exit_codes;
use slotlock::section::SlotState;

/// Execute the `slotlock status` command.
///
/// Slot files that do not exist yet are created, exactly as a first
/// acquisition attempt would.
pub fn cmd_status(args: StatusArgs) -> Result<i32> {
    let cs = open_section(&args.section)?;

    if args.json {
        let mut slots = Vec::new();
        for (n, path) in cs.slot_paths().enumerate() {
            slots.push(json!({
                "slot": n,
                "state": cs.slot_state(n)?,
                "path": path.display().to_string(),
            }));
        }

        let report = json!({
            "id": args.section.id,
            "digest": cs.id().digest(),
            "lock_dir": cs.lock_dir().display().to_string(),
            "max_process": cs.max_process(),
            "slots": slots,
        });

        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| SectionError::Config(format!("failed to render status JSON: {}", e)))?;
        println!("{}", rendered);
        return Ok(exit_codes::SUCCESS);
    }

    println!("Section:   {}", args.section.id);
    println!("Digest:    {}", cs.id().digest());
    println!("Lock dir:  {}", cs.lock_dir().display());
    println!();

    // Printed slot by slot; a large section may take a while to scan.
    let mut busy = 0usize;
    for (n, path) in cs.slot_paths().enumerate() {
        let state = cs.slot_state(n)?;
        if state != SlotState::Free {
            busy += 1;
        }
        println!("  [{}] {:<9} {}", n, state, path.display());
    }

    println!();
    println!("Slots:     {}/{} taken", busy, cs.max_process());

    Ok(exit_codes::SUCCESS)
}
