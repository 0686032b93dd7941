use crate::config::Config;
use crate::error::{CrmError, Result};
use crate::followup::Followup;
use crate::paths;
use crate::types::Status;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// User-owned state layered on top of a prospect, one JSON file per company.
/// Every field is defaulted so a missing file and an empty record read the
/// same way; engines must never care which one they got.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overlay {
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub followups: Vec<Followup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_followup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<String>,

    // Audit trail, written only by automation runs. Never an input to the
    // scoring or transition engines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_auto_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<Status>,
}

impl Overlay {
    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Load the overlay for `company`. `Ok(None)` when no file exists yet;
    /// a file that exists but does not parse is reported as corrupt so
    /// callers can tell "no data" from "bad data".
    pub fn load(root: &Path, cfg: &Config, company: &str) -> Result<Option<Self>> {
        let path = paths::overlay_path(root, cfg, company);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let overlay: Overlay =
            serde_json::from_str(&data).map_err(|e| CrmError::CorruptOverlay {
                company: company.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(overlay))
    }

    /// Non-fatal variant used by automation runs: missing or unreadable
    /// overlays degrade to all-defaults, with a warning for the latter.
    pub fn load_or_default(root: &Path, cfg: &Config, company: &str) -> Self {
        match Self::load(root, cfg, company) {
            Ok(Some(overlay)) => overlay,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("failed to load overlay for {company}: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, root: &Path, cfg: &Config, company: &str) -> Result<()> {
        let path = paths::overlay_path(root, cfg, company);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // ---------------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------------

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.priority_tags.contains(&tag) {
            self.priority_tags.push(tag);
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.priority_tags.retain(|t| t != tag);
    }

    /// Record a scheduled follow-up and make it the next one due.
    pub fn push_followup(&mut self, followup: Followup) {
        self.next_followup = Some(followup.datetime.clone());
        self.followups.push(followup);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
