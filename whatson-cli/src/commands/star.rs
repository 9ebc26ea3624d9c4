use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;
use whatson_core::favorites::FavoriteStore;
use whatson_core::filter::{self, FilterSelection};

use super::find_event;
use crate::render::format_date_span;

pub async fn run(catalog: &Catalog, store: &FavoriteStore, id: Option<&str>) -> Result<()> {
    let events = catalog.load().await?;

    let event = match id {
        Some(id) => find_event(events, id)?,
        None => pick_event(events, store)?,
    };

    let starred = store.toggle(&event.id)?;

    if starred {
        println!("{} Starred: {}", "★".yellow(), event.name);
    } else {
        println!("{}", format!("Unstarred: {}", event.name).dimmed());
    }

    Ok(())
}

/// Let the user pick from the upcoming events.
fn pick_event(
    events: Vec<whatson_core::Event>,
    store: &FavoriteStore,
) -> Result<whatson_core::Event> {
    let today = chrono::Local::now().date_naive();
    let mut upcoming = filter::apply_filters(
        &events,
        &FilterSelection::default(),
        |id| store.is_favorite(id),
        today,
    );

    if upcoming.is_empty() {
        anyhow::bail!("No upcoming events to star");
    }

    let items: Vec<String> = upcoming
        .iter()
        .map(|e| {
            let marker = if store.is_favorite(&e.id) { "★ " } else { "" };
            format!("{}{} ({}, {})", marker, e.name, e.city, format_date_span(e))
        })
        .collect();

    let selection = Select::new()
        .with_prompt("  Event")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(upcoming.swap_remove(selection))
}
