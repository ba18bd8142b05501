//! Status decay engine
//!
//! Display status is derived on every read from the stored flag and the time
//! since last edit; no background job ever downgrades a note, and the
//! intermediate tiers are never written to disk.

use crate::notes::types::{DisplayStatus, Note, StoredStatus};

/// Age below which a live note still displays as alive (1 hour)
pub const ALIVE_WINDOW_MS: i64 = 3_600_000;

/// Age below which a live note displays as warming (24 hours)
pub const WARMING_WINDOW_MS: i64 = 86_400_000;

/// Compute the display status of `note` at wall-clock time `now_ms`.
///
/// A stored archive is terminal regardless of age. Live notes decay
/// `alive → warming → cooling`; the comparisons are strict, so an age of
/// exactly one hour is warming and exactly 24 hours is cooling.
pub fn display_status(note: &Note, now_ms: i64) -> DisplayStatus {
    if note.status == StoredStatus::Archived {
        return DisplayStatus::Archived;
    }

    let age = now_ms - note.updated_at;
    if age < ALIVE_WINDOW_MS {
        DisplayStatus::Alive
    } else if age < WARMING_WINDOW_MS {
        DisplayStatus::Warming
    } else {
        DisplayStatus::Cooling
    }
}
