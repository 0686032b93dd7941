use crate::config::Config;
use crate::error::Result;
use crate::followup::{self, Followup, OverdueFollowup};
use crate::notify::Notifier;
use crate::overlay::Overlay;
use crate::paths;
use crate::pipeline;
use crate::prospect::ProspectStore;
use crate::report::{self, WeeklyReport};
use crate::score;
use crate::time;
use crate::types::{FollowupKind, Status};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ScoreUpdate {
    pub company: String,
    pub old_score: f64,
    pub new_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineUpdate {
    pub company: String,
    pub from: Status,
    pub to: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutomationSummary {
    pub overdue: usize,
    pub score_updates: usize,
    pub pipeline_updates: usize,
}

// ---------------------------------------------------------------------------
// Automations
// ---------------------------------------------------------------------------

/// The operations an external scheduler (or a human) invokes. Each run loads
/// the prospect snapshot fresh, walks the companies, and writes overlays back
/// as it goes; per-company failures are logged and skipped, never fatal.
pub struct Automations<'a> {
    root: &'a Path,
    config: Config,
    notifier: &'a dyn Notifier,
}

impl<'a> Automations<'a> {
    pub fn new(root: &'a Path, config: Config, notifier: &'a dyn Notifier) -> Self {
        Self {
            root,
            config,
            notifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_store(&self) -> ProspectStore {
        ProspectStore::load_or_empty(&paths::data_path(self.root, &self.config))
    }

    /// Overlays for every company in the snapshot; missing files become
    /// defaults, so lookup is total over the prospect key space.
    pub fn load_overlays(&self, store: &ProspectStore) -> BTreeMap<String, Overlay> {
        store
            .filtered_prospects
            .keys()
            .map(|company| {
                (
                    company.clone(),
                    Overlay::load_or_default(self.root, &self.config, company),
                )
            })
            .collect()
    }

    // ---------------------------------------------------------------------------
    // check-overdue
    // ---------------------------------------------------------------------------

    /// Find overdue follow-ups and, when there are any, send one alert
    /// message listing them most-overdue first.
    pub fn check_overdue_followups(&self, now: DateTime<Utc>) -> Vec<OverdueFollowup> {
        let store = self.load_store();
        let overlays = self.load_overlays(&store);
        let overdue = followup::find_overdue(&overlays, now);

        if !overdue.is_empty() {
            let message = overdue_alert(&overdue);
            if let Err(e) = self.notifier.send_message(&message) {
                tracing::warn!("failed to send overdue alert: {e}");
            }
        }

        overdue
    }

    // ---------------------------------------------------------------------------
    // update-scores
    // ---------------------------------------------------------------------------

    /// Recompute lead scores and persist the ones that moved at least the
    /// hysteresis threshold.
    pub fn auto_score_update(&self, now: DateTime<Utc>) -> Vec<ScoreUpdate> {
        let store = self.load_store();
        let mut updates = Vec::new();

        for (company, prospect) in &store.filtered_prospects {
            let mut overlay = Overlay::load_or_default(self.root, &self.config, company);
            let current = score::current_score(prospect, &overlay);
            let new_score = score::lead_score(prospect, &overlay, now);

            if !score::should_persist(new_score, current) {
                continue;
            }

            overlay.custom_score = Some(f64::from(new_score));
            overlay.score_updated = Some(now.to_rfc3339());
            if let Err(e) = overlay.save(self.root, &self.config, company) {
                tracing::warn!("failed to save score for {company}: {e}");
                continue;
            }
            updates.push(ScoreUpdate {
                company: company.clone(),
                old_score: current,
                new_score,
            });
        }

        updates
    }

    // ---------------------------------------------------------------------------
    // pipeline-automation
    // ---------------------------------------------------------------------------

    /// Apply suggested stage transitions, recording the audit fields.
    pub fn pipeline_automation(&self, now: DateTime<Utc>) -> Vec<PipelineUpdate> {
        let store = self.load_store();
        let mut updates = Vec::new();

        for (company, prospect) in &store.filtered_prospects {
            let mut overlay = Overlay::load_or_default(self.root, &self.config, company);
            let current = overlay.status;

            let Some(new_status) = pipeline::suggest_transition(prospect, &overlay, now) else {
                continue;
            };
            if new_status == current {
                continue;
            }

            overlay.status = new_status;
            overlay.previous_status = Some(current);
            overlay.status_auto_updated = Some(now.to_rfc3339());
            if let Err(e) = overlay.save(self.root, &self.config, company) {
                tracing::warn!("failed to save status for {company}: {e}");
                continue;
            }
            updates.push(PipelineUpdate {
                company: company.clone(),
                from: current,
                to: new_status,
            });
        }

        updates
    }

    // ---------------------------------------------------------------------------
    // weekly-report
    // ---------------------------------------------------------------------------

    /// Build the weekly summary and send its textual rendering.
    pub fn generate_weekly_report(&self, now: DateTime<Utc>) -> WeeklyReport {
        let store = self.load_store();
        let overlays = self.load_overlays(&store);
        let report = report::build_weekly_report(&store, &overlays, now);

        let text = report::render(&report, &self.config);
        if let Err(e) = self.notifier.send_message(&text) {
            tracing::warn!("failed to send weekly report: {e}");
        }

        report
    }

    // ---------------------------------------------------------------------------
    // full-automation
    // ---------------------------------------------------------------------------

    /// Overdue check, score update, and pipeline pass in that order. The
    /// weekly report stays a separately scheduled job.
    pub fn full_automation(&self, now: DateTime<Utc>) -> AutomationSummary {
        AutomationSummary {
            overdue: self.check_overdue_followups(now).len(),
            score_updates: self.auto_score_update(now).len(),
            pipeline_updates: self.pipeline_automation(now).len(),
        }
    }

    // ---------------------------------------------------------------------------
    // schedule-followup
    // ---------------------------------------------------------------------------

    /// Record a follow-up on the company's overlay and register the external
    /// reminder job. Returns whether the reminder was registered; a notifier
    /// failure is reported, not raised.
    pub fn schedule_followup(
        &self,
        company: &str,
        kind: FollowupKind,
        datetime: &str,
        notes: Option<String>,
    ) -> Result<bool> {
        let at = time::parse_timestamp(datetime)
            .ok_or_else(|| crate::error::CrmError::InvalidTimestamp(datetime.to_string()))?;

        let record = Followup::new(kind, datetime, notes);
        let mut overlay = Overlay::load_or_default(self.root, &self.config, company);
        overlay.push_followup(record.clone());
        overlay.save(self.root, &self.config, company)?;

        let name = followup::reminder_job_name(company, &record.id);
        let schedule = followup::cron_schedule(at);
        let message = followup::reminder_message(company, &record, at);
        match self.notifier.schedule_job(&name, &schedule, &message) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!("failed to create reminder for {company}: {e}");
                Ok(false)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Alert formatting
// ---------------------------------------------------------------------------

fn overdue_alert(overdue: &[OverdueFollowup]) -> String {
    let mut message = format!(
        "\u{1F6A8} CRM OVERDUE ALERT - {} Follow-ups Past Due\n\n",
        overdue.len()
    );
    for item in overdue {
        message.push_str(&format!(
            "\u{2022} {} - {} days overdue\n",
            item.company, item.days_overdue
        ));
    }
    message.push_str(
        "\nRecommended Actions:\n\
         \u{2022} Review and contact overdue prospects\n\
         \u{2022} Update CRM status after contact\n\
         \u{2022} Reschedule follow-ups as needed",
    );
    message
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
