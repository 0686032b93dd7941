use crate::error::{CrmError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Prospect
// ---------------------------------------------------------------------------

/// A business prospect from the upstream snapshot. Immutable from this
/// system's point of view; activity scores are precomputed upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prospect {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub business_score: f64,
    #[serde(default)]
    pub conversation_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_emails: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_strength: Option<String>,
}

impl Prospect {
    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or("Unknown")
    }
}

// ---------------------------------------------------------------------------
// ProspectStore
// ---------------------------------------------------------------------------

/// The read-only prospect snapshot: `filtered_prospects` keyed by company
/// name plus an opaque `summary_stats` block we carry but never interpret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProspectStore {
    #[serde(default)]
    pub filtered_prospects: BTreeMap<String, Prospect>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub summary_stats: serde_json::Value,
}

impl ProspectStore {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CrmError::DataFileMissing(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let store: ProspectStore = serde_json::from_str(&data)?;
        Ok(store)
    }

    /// Log-and-continue variant: any load failure yields an empty store so
    /// automation runs degrade to no-ops instead of aborting.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("failed to load prospect data from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.filtered_prospects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_prospects.is_empty()
    }

    pub fn get(&self, company: &str) -> Option<&Prospect> {
        self.filtered_prospects.get(company)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
