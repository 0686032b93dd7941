use anyhow::Context;
use leadflow_core::automation::Automations;
use leadflow_core::notify::CommandNotifier;
use leadflow_core::types::FollowupKind;
use std::path::Path;
use std::str::FromStr;

pub fn run(
    root: &Path,
    company: &str,
    kind: &str,
    at: &str,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;
    let kind = FollowupKind::from_str(kind)?;

    let notifier = CommandNotifier::new(&cfg.messenger);
    let auto = Automations::new(root, cfg, &notifier);

    let registered = auto
        .schedule_followup(company, kind, at, notes)
        .with_context(|| format!("failed to schedule follow-up for '{company}'"))?;

    if registered {
        println!("Follow-up scheduled for {company} at {at}");
    } else {
        println!("Follow-up recorded for {company}, but the reminder could not be registered");
    }
    Ok(())
}
