use crate::output::{print_json, print_table};
use chrono::Utc;
use leadflow_core::automation::Automations;
use leadflow_core::notify::CommandNotifier;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;
    let notifier = CommandNotifier::new(&cfg.messenger);
    let auto = Automations::new(root, cfg, &notifier);

    let overdue = auto.check_overdue_followups(Utc::now());

    if json {
        return print_json(&overdue);
    }

    if overdue.is_empty() {
        println!("No overdue follow-ups.");
        return Ok(());
    }

    println!("{} follow-ups past due:", overdue.len());
    let rows: Vec<Vec<String>> = overdue
        .iter()
        .map(|o| {
            vec![
                o.company.clone(),
                o.due.format("%Y-%m-%d").to_string(),
                format!("{} days", o.days_overdue),
            ]
        })
        .collect();
    print_table(&["COMPANY", "DUE", "OVERDUE"], &rows);
    Ok(())
}
