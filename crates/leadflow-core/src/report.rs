use crate::config::Config;
use crate::followup;
use crate::overlay::Overlay;
use crate::prospect::ProspectStore;
use crate::types::Status;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// WeeklyReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub generated: DateTime<Utc>,
    pub total_prospects: usize,
    pub hot_leads: usize,
    pub new_prospects: usize,
    pub overdue_followups: usize,
    /// Category histogram, descending by count. Ties keep the order in which
    /// the category was first seen while walking the store.
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

pub fn build_weekly_report(
    store: &ProspectStore,
    overlays: &BTreeMap<String, Overlay>,
    now: DateTime<Utc>,
) -> WeeklyReport {
    let default_overlay = Overlay::default();
    let mut hot_leads = 0;
    let mut new_prospects = 0;
    let mut categories: Vec<CategoryCount> = Vec::new();

    for (company, prospect) in &store.filtered_prospects {
        let overlay = overlays.get(company).unwrap_or(&default_overlay);

        match overlay.status {
            Status::Hot => hot_leads += 1,
            Status::New => new_prospects += 1,
            _ => {}
        }

        let category = prospect.category_str();
        match categories.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => categories.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }

    // Stable sort preserves first-encountered order among equal counts.
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    WeeklyReport {
        generated: now,
        total_prospects: store.len(),
        hot_leads,
        new_prospects,
        overdue_followups: followup::find_overdue(overlays, now).len(),
        categories,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Deterministic template substitution over the aggregated numbers; no
/// business logic lives here.
pub fn render(report: &WeeklyReport, cfg: &Config) -> String {
    let mut out = format!(
        "\u{1F4CA} CRM Weekly Report\n\
         Generated: {date}\n\
         \n\
         OVERVIEW:\n\
         \u{2022} Total Prospects: {total}\n\
         \u{2022} Hot Leads: {hot}\n\
         \u{2022} New Prospects: {new}\n\
         \u{2022} Overdue Follow-ups: {overdue}\n\
         \n\
         CATEGORY BREAKDOWN:",
        date = report.generated.format("%B %d, %Y"),
        total = report.total_prospects,
        hot = report.hot_leads,
        new = report.new_prospects,
        overdue = report.overdue_followups,
    );

    for c in &report.categories {
        out.push_str(&format!("\n\u{2022} {}: {}", c.category, c.count));
    }

    out.push_str(&format!(
        "\n\nRECOMMENDED ACTIONS:\n\
         \u{2022} Contact {overdue} overdue prospects\n\
         \u{2022} Follow up with {hot} hot leads\n\
         \u{2022} Review and qualify {new} new prospects\n\
         \u{2022} Schedule site visits for qualified opportunities",
        overdue = report.overdue_followups,
        hot = report.hot_leads,
        new = report.new_prospects,
    ));

    if let Some(url) = &cfg.dashboard_url {
        out.push_str(&format!("\n\nAccess your CRM: {url}"));
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
