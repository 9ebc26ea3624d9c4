use anyhow::{Context, Result};
use whatson_core::catalog::Catalog;

use super::find_event;

pub async fn run(catalog: &Catalog, id: &str) -> Result<()> {
    let events = catalog.load().await?;
    let event = find_event(events, id)?;

    let Some(link) = event.link else {
        anyhow::bail!("Event '{}' has no agenda link", id);
    };

    open::that(&link).with_context(|| format!("Could not open {link}"))?;

    Ok(())
}
