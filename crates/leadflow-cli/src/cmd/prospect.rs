use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::Utc;
use leadflow_core::overlay::Overlay;
use leadflow_core::prospect::ProspectStore;
use leadflow_core::score::{lead_score, score_breakdown};
use leadflow_core::paths;
use std::path::Path;

fn load_store(root: &Path) -> anyhow::Result<(ProspectStore, leadflow_core::config::Config)> {
    let cfg = super::load_config(root)?;
    let store = ProspectStore::load(&paths::data_path(root, &cfg))
        .context("failed to load prospect data")?;
    Ok((store, cfg))
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

pub fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let (store, cfg) = load_store(root)?;
    let now = Utc::now();

    let mut rows: Vec<(String, String, String, u32)> = store
        .filtered_prospects
        .iter()
        .map(|(company, prospect)| {
            let overlay = Overlay::load_or_default(root, &cfg, company);
            (
                company.clone(),
                prospect.category_str().to_string(),
                overlay.status.to_string(),
                lead_score(prospect, &overlay, now),
            )
        })
        .collect();
    rows.sort_by(|a, b| b.3.cmp(&a.3));

    if json {
        let value: Vec<serde_json::Value> = rows
            .iter()
            .map(|(company, category, status, score)| {
                serde_json::json!({
                    "company": company,
                    "category": category,
                    "status": status,
                    "score": score,
                })
            })
            .collect();
        return print_json(&value);
    }

    let table: Vec<Vec<String>> = rows
        .into_iter()
        .map(|(company, category, status, score)| {
            vec![company, category, status, score.to_string()]
        })
        .collect();
    print_table(&["COMPANY", "CATEGORY", "STATUS", "SCORE"], &table);
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

pub fn show(root: &Path, company: &str, json: bool) -> anyhow::Result<()> {
    let (store, cfg) = load_store(root)?;
    let prospect = store
        .get(company)
        .with_context(|| format!("no prospect named '{company}'"))?;
    let overlay = Overlay::load(root, &cfg, company)
        .with_context(|| format!("failed to load overlay for '{company}'"))?
        .unwrap_or_default();

    if json {
        let value = serde_json::json!({
            "company": company,
            "prospect": prospect,
            "overlay": overlay,
            "score": lead_score(prospect, &overlay, Utc::now()),
        });
        return print_json(&value);
    }

    println!("{company}");
    println!("  category:       {}", prospect.category_str());
    println!("  status:         {}", overlay.status);
    println!("  overall score:  {}", prospect.overall_score);
    println!(
        "  lead score:     {}",
        lead_score(prospect, &overlay, Utc::now())
    );
    if let Some(score) = overlay.custom_score {
        println!("  custom score:   {score}");
    }
    if !overlay.priority_tags.is_empty() {
        println!("  tags:           {}", overlay.priority_tags.join(", "));
    }
    if let Some(next) = &overlay.next_followup {
        println!("  next follow-up: {next}");
    }
    if let Some(last) = &prospect.latest_contact {
        println!("  latest contact: {last}");
    }
    if !overlay.notes.is_empty() {
        println!("  notes:          {}", overlay.notes);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

pub fn score(root: &Path, company: &str, json: bool) -> anyhow::Result<()> {
    let (store, cfg) = load_store(root)?;
    let prospect = store
        .get(company)
        .with_context(|| format!("no prospect named '{company}'"))?;
    let overlay = Overlay::load_or_default(root, &cfg, company);
    let breakdown = score_breakdown(prospect, &overlay, Utc::now());

    if json {
        return print_json(&breakdown);
    }

    println!("Score breakdown for {company}:");
    println!("  base:          {:>7.1}", breakdown.base);
    println!("  recency:       {:>7.1}", breakdown.recency_bonus);
    println!("  status:        {:>7.1}", breakdown.status_bonus);
    println!("  tags:          {:>7.1}", breakdown.tag_bonus);
    println!("  business:      {:>7.1}", breakdown.business_bonus);
    println!("  conversation:  {:>7.1}", breakdown.conversation_bonus);
    println!("  category:      {:>7.1}", breakdown.category_bonus);
    println!("  total (capped) {:>7}", breakdown.total);
    Ok(())
}
