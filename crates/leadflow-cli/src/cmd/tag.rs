use anyhow::Context;
use clap::Subcommand;
use leadflow_core::overlay::Overlay;
use std::path::Path;

#[derive(Subcommand)]
pub enum TagSubcommand {
    /// Add a priority tag to a company
    Add { company: String, tag: String },

    /// Remove a priority tag from a company
    Remove { company: String, tag: String },
}

pub fn run(root: &Path, subcmd: TagSubcommand) -> anyhow::Result<()> {
    let cfg = super::load_config(root)?;

    let (company, tag, adding) = match subcmd {
        TagSubcommand::Add { company, tag } => (company, tag, true),
        TagSubcommand::Remove { company, tag } => (company, tag, false),
    };

    let mut overlay = Overlay::load(root, &cfg, &company)
        .with_context(|| format!("failed to load overlay for '{company}'"))?
        .unwrap_or_default();
    if adding {
        overlay.add_tag(tag.clone());
    } else {
        overlay.remove_tag(&tag);
    }
    overlay
        .save(root, &cfg, &company)
        .with_context(|| format!("failed to save overlay for '{company}'"))?;

    let verb = if adding { "added" } else { "removed" };
    println!("{company}: {verb} tag '{tag}'");
    Ok(())
}
