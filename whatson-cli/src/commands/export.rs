use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;
use whatson_core::ics::generate_ics;

use super::find_event;

pub async fn run(catalog: &Catalog, id: &str, output: Option<PathBuf>) -> Result<()> {
    let events = catalog.load().await?;
    let event = find_event(events, id)?;

    let ics = generate_ics(&event)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.ics", event.id)));

    std::fs::write(&path, ics)
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!("{}", format!("Created: {}", path.display()).green());

    Ok(())
}
