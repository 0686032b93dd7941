use anyhow::Context;
use leadflow_core::overlay::Overlay;
use leadflow_core::types::Status;
use std::path::Path;
use std::str::FromStr;

pub fn run(root: &Path, company: &str, status: &str) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;
    let status = Status::from_str(status)?;

    let mut overlay = Overlay::load(root, &cfg, company)
        .with_context(|| format!("failed to load overlay for '{company}'"))?
        .unwrap_or_default();
    overlay.status = status;
    overlay
        .save(root, &cfg, company)
        .with_context(|| format!("failed to save overlay for '{company}'"))?;

    println!("{company}: status set to {status}");
    Ok(())
}
