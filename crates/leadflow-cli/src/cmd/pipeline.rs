use crate::output::print_json;
use chrono::Utc;
use leadflow_core::automation::Automations;
use leadflow_core::notify::CommandNotifier;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;
    let notifier = CommandNotifier::new(&cfg.messenger);
    let auto = Automations::new(root, cfg, &notifier);

    let updates = auto.pipeline_automation(Utc::now());

    if json {
        return print_json(&updates);
    }

    for u in &updates {
        println!("Pipeline update for {}: {} -> {}", u.company, u.from, u.to);
    }
    println!("{} pipeline updates", updates.len());
    Ok(())
}
