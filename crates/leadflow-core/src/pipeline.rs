use crate::overlay::Overlay;
use crate::prospect::Prospect;
use crate::time;
use crate::types::Status;
use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Transition engine
// ---------------------------------------------------------------------------

/// Suggest a pipeline-stage promotion for one prospect, or `None` to keep the
/// current stage. Pure; the caller persists the result.
///
/// Rules run in order against the *persisted* status, first match wins, so a
/// single call moves a prospect at most one rule's worth: a brand-new company
/// that already clears the hot thresholds still lands on warm this pass and
/// hot on the next.
pub fn suggest_transition(
    prospect: &Prospect,
    overlay: &Overlay,
    now: DateTime<Utc>,
) -> Option<Status> {
    let current = overlay.status;
    let business = prospect.business_score;
    let conversation = prospect.conversation_score;

    // High activity: new -> warm.
    if current == Status::New && (business > 20.0 || conversation > 10.0) {
        return Some(Status::Warm);
    }

    // Very high activity: new or warm -> hot.
    if matches!(current, Status::New | Status::Warm)
        && (business > 50.0 || conversation > 20.0)
    {
        return Some(Status::Hot);
    }

    // Contacted within the last week: cold -> warm.
    if current == Status::Cold {
        if let Some(last) = overlay
            .last_contacted
            .as_deref()
            .and_then(time::parse_timestamp)
        {
            let days = time::days_since(now, last);
            if (0..=7).contains(&days) {
                return Some(Status::Warm);
            }
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
