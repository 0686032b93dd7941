pub mod followup;
pub mod overdue;
pub mod pipeline;
pub mod prospect;
pub mod report;
pub mod run;
pub mod scores;
pub mod status;
pub mod tag;

use anyhow::Context;
use leadflow_core::config::Config;
use std::path::Path;

/// Load `crm.yaml` (or defaults) for a command invocation.
pub fn load_config(root: &Path) -> anyhow::Result<Config> {
    Config::load(root).context("failed to load crm.yaml")
}
