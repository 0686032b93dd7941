use crate::overlay::Overlay;
use crate::paths::sanitize_company;
use crate::time;
use crate::types::FollowupKind;
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Followup
// ---------------------------------------------------------------------------

/// A scheduled follow-up for one company. The id is unique per
/// (company, follow-up) and anchors the deterministic reminder-job name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followup {
    pub id: String,
    pub kind: FollowupKind,
    pub datetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created: String,
    #[serde(default)]
    pub completed: bool,
}

impl Followup {
    pub fn new(kind: FollowupKind, datetime: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            datetime: datetime.into(),
            notes,
            created: Utc::now().to_rfc3339(),
            completed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Reminder derivation
// ---------------------------------------------------------------------------

/// Derive the scheduler rule from the follow-up timestamp:
/// `minute hour day month *`.
///
/// Known quirk, carried over as-is: with day and month fixed and only the
/// weekday wildcarded, the job fires once at the scheduled moment and then
/// lies dormant (it can only recur on the same calendar date in later years).
/// It is a de facto one-shot, not a real recurring schedule.
pub fn cron_schedule(at: DateTime<Utc>) -> String {
    format!("{} {} {} {} *", at.minute(), at.hour(), at.day(), at.month())
}

/// Deterministic job name so re-registering the same follow-up is idempotent
/// by identity. Whether a duplicate name overwrites or is rejected is the
/// external scheduler's call.
pub fn reminder_job_name(company: &str, id: &str) -> String {
    format!("crm_followup_{}_{}", sanitize_company(company), id)
}

/// Human-readable reminder text sent when the job fires.
pub fn reminder_message(company: &str, followup: &Followup, at: DateTime<Utc>) -> String {
    let notes = followup.notes.as_deref().unwrap_or("No notes provided");
    format!(
        "\u{1F514} CRM FOLLOW-UP REMINDER\n\
         \n\
         Company: {company}\n\
         Type: {kind}\n\
         Notes: {notes}\n\
         Scheduled: {when}\n\
         \n\
         Action Items:\n\
         \u{2022} Review prospect history\n\
         \u{2022} Prepare talking points\n\
         \u{2022} Check for recent activity\n\
         \u{2022} Update CRM after contact",
        kind = followup.kind.label(),
        when = at.format("%B %d, %Y at %I:%M %p"),
    )
}

// ---------------------------------------------------------------------------
// Overdue detection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct OverdueFollowup {
    pub company: String,
    pub due: DateTime<Utc>,
    pub days_overdue: i64,
}

/// Find every company whose `next_followup` parses and is strictly in the
/// past, most overdue first. Companies with no or unparseable follow-up
/// timestamps are silently excluded.
pub fn find_overdue(
    overlays: &BTreeMap<String, Overlay>,
    now: DateTime<Utc>,
) -> Vec<OverdueFollowup> {
    let mut overdue: Vec<OverdueFollowup> = overlays
        .iter()
        .filter_map(|(company, overlay)| {
            let due = overlay
                .next_followup
                .as_deref()
                .and_then(time::parse_timestamp)?;
            if now <= due {
                return None;
            }
            Some(OverdueFollowup {
                company: company.clone(),
                due,
                days_overdue: time::days_since(now, due),
            })
        })
        .collect();
    overdue.sort_by(|a, b| b.days_overdue.cmp(&a.days_overdue));
    overdue
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
