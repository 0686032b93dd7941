use crate::overlay::Overlay;
use crate::prospect::Prospect;
use crate::time;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lead scores never exceed this cap.
pub const SCORE_CAP: f64 = 500.0;

/// A recomputed score is only persisted when it moves at least this far from
/// the stored one. Keeps daily runs from churning overlay files.
pub const SCORE_DELTA_THRESHOLD: f64 = 10.0;

/// Categories that carry a flat relevance bonus.
pub const HIGH_VALUE_CATEGORIES: [&str; 3] =
    ["Food Processing", "Construction", "Industrial/Manufacturing"];

const RECENT_CONTACT_BONUS: f64 = 50.0;
const MONTH_CONTACT_BONUS: f64 = 25.0;
const QUARTER_CONTACT_BONUS: f64 = 10.0;
const TAG_BONUS: f64 = 15.0;
const BUSINESS_BONUS: f64 = 30.0;
const CONVERSATION_BONUS: f64 = 20.0;
const CATEGORY_BONUS: f64 = 25.0;

// ---------------------------------------------------------------------------
// ScoreBreakdown
// ---------------------------------------------------------------------------

/// Per-term breakdown of a computed lead score, for display and audit.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub recency_bonus: f64,
    pub status_bonus: f64,
    pub tag_bonus: f64,
    pub business_bonus: f64,
    pub conversation_bonus: f64,
    pub category_bonus: f64,
    /// Sum of all terms, capped at [`SCORE_CAP`].
    pub total: u32,
}

// ---------------------------------------------------------------------------
// Scoring engine
// ---------------------------------------------------------------------------

/// Compute the heuristic lead score for a prospect. Pure: `now` is an
/// explicit input and the same inputs always yield the same score.
pub fn lead_score(prospect: &Prospect, overlay: &Overlay, now: DateTime<Utc>) -> u32 {
    score_breakdown(prospect, overlay, now).total
}

/// Full additive breakdown behind [`lead_score`]. Terms are order-independent
/// and each is computed from the unclamped inputs; only the total is capped.
pub fn score_breakdown(prospect: &Prospect, overlay: &Overlay, now: DateTime<Utc>) -> ScoreBreakdown {
    let base = prospect.overall_score;
    let recency_bonus = recency_bonus(prospect, now);
    let status_bonus = overlay.status.score_bonus();
    let tag_bonus = overlay.priority_tags.len() as f64 * TAG_BONUS;

    let business_bonus = if prospect.business_score > 10.0 {
        BUSINESS_BONUS
    } else {
        0.0
    };
    let conversation_bonus = if prospect.conversation_score > 5.0 {
        CONVERSATION_BONUS
    } else {
        0.0
    };

    let category_bonus = if HIGH_VALUE_CATEGORIES.contains(&prospect.category_str()) {
        CATEGORY_BONUS
    } else {
        0.0
    };

    let sum = base
        + recency_bonus
        + status_bonus
        + tag_bonus
        + business_bonus
        + conversation_bonus
        + category_bonus;

    ScoreBreakdown {
        base,
        recency_bonus,
        status_bonus,
        tag_bonus,
        business_bonus,
        conversation_bonus,
        category_bonus,
        total: sum.clamp(0.0, SCORE_CAP) as u32,
    }
}

/// Recency buckets are mutually exclusive, first match wins: a contact
/// exactly 7 whole days old lands in the <30-day bucket. Malformed or absent
/// timestamps contribute nothing.
fn recency_bonus(prospect: &Prospect, now: DateTime<Utc>) -> f64 {
    let Some(raw) = prospect.latest_contact.as_deref() else {
        return 0.0;
    };
    let Some(contact) = time::parse_timestamp(raw) else {
        return 0.0;
    };
    let days = time::days_since(now, contact);
    if days < 7 {
        RECENT_CONTACT_BONUS
    } else if days < 30 {
        MONTH_CONTACT_BONUS
    } else if days < 90 {
        QUARTER_CONTACT_BONUS
    } else {
        0.0
    }
}

/// The score the hysteresis check compares against: the stored custom score
/// if one exists, otherwise the upstream overall score.
pub fn current_score(prospect: &Prospect, overlay: &Overlay) -> f64 {
    overlay.custom_score.unwrap_or(prospect.overall_score)
}

/// Whether a recomputed score has moved enough to be worth persisting.
pub fn should_persist(new_score: u32, current: f64) -> bool {
    (f64::from(new_score) - current).abs() >= SCORE_DELTA_THRESHOLD
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
