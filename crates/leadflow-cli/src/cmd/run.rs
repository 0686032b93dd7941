use crate::output::print_json;
use chrono::Utc;
use leadflow_core::automation::Automations;
use leadflow_core::notify::{CommandNotifier, Notifier, NullNotifier};
use std::path::Path;

pub fn run(root: &Path, dry_run: bool, json: bool) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;

    let notifier: Box<dyn Notifier> = if dry_run {
        Box::new(NullNotifier::default())
    } else {
        Box::new(CommandNotifier::new(&cfg.messenger))
    };
    let auto = Automations::new(root, cfg, notifier.as_ref());

    if !json {
        println!("Running full CRM automation...");
    }
    let summary = auto.full_automation(Utc::now());

    if json {
        return print_json(&summary);
    }

    println!(
        "Done: {} overdue, {} score updates, {} pipeline updates",
        summary.overdue, summary.score_updates, summary.pipeline_updates
    );
    if dry_run {
        println!("(dry run — nothing was sent)");
    }
    Ok(())
}
