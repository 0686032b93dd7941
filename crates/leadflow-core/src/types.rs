use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Pipeline stage for a prospect. Ordered coldest to hottest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    New,
    #[default]
    Cold,
    Warm,
    Hot,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::New, Status::Cold, Status::Warm, Status::Hot]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Cold => "cold",
            Status::Warm => "warm",
            Status::Hot => "hot",
        }
    }

    /// Score bonus contributed by this stage.
    pub fn score_bonus(self) -> f64 {
        match self {
            Status::Hot => 100.0,
            Status::Warm => 50.0,
            Status::New => 25.0,
            Status::Cold => 0.0,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Status::New),
            "cold" => Ok(Status::Cold),
            "warm" => Ok(Status::Warm),
            "hot" => Ok(Status::Hot),
            _ => Err(crate::error::CrmError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FollowupKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowupKind {
    Call,
    Email,
    Meeting,
    SiteVisit,
}

impl FollowupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowupKind::Call => "call",
            FollowupKind::Email => "email",
            FollowupKind::Meeting => "meeting",
            FollowupKind::SiteVisit => "site_visit",
        }
    }

    /// Human-readable label used in reminder messages.
    pub fn label(self) -> &'static str {
        match self {
            FollowupKind::Call => "Call",
            FollowupKind::Email => "Email",
            FollowupKind::Meeting => "Meeting",
            FollowupKind::SiteVisit => "Site Visit",
        }
    }
}

impl fmt::Display for FollowupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FollowupKind {
    type Err = crate::error::CrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(FollowupKind::Call),
            "email" => Ok(FollowupKind::Email),
            "meeting" => Ok(FollowupKind::Meeting),
            "site_visit" | "site-visit" => Ok(FollowupKind::SiteVisit),
            _ => Err(crate::error::CrmError::InvalidFollowupKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
