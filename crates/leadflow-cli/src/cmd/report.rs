use crate::output::print_json;
use chrono::Utc;
use leadflow_core::automation::Automations;
use leadflow_core::notify::CommandNotifier;
use leadflow_core::report;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;
    let notifier = CommandNotifier::new(&cfg.messenger);
    let auto = Automations::new(root, cfg, &notifier);

    let weekly = auto.generate_weekly_report(Utc::now());

    if json {
        return print_json(&weekly);
    }

    println!("{}", report::render(&weekly, auto.config()));
    Ok(())
}
