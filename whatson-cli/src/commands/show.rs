use anyhow::Result;
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;
use whatson_core::favorites::FavoriteStore;

use super::find_event;
use crate::render::format_date_span;

pub async fn run(catalog: &Catalog, store: &FavoriteStore, id: &str) -> Result<()> {
    let events = catalog.load().await?;
    let event = find_event(events, id)?;

    let star = if store.is_favorite(&event.id) {
        format!(" {}", "★".yellow())
    } else {
        String::new()
    };

    println!("{}{}", event.name.bold(), star);
    println!("{}", format_date_span(&event).dimmed());
    println!("{}", event.city.dimmed());
    println!();
    println!("{} {}", "Host:".bold(), event.host);
    if let Some(ref category) = event.category {
        println!("{} {}", "Category:".bold(), category);
    }
    if let Some(ref link) = event.link {
        println!("{} {}", "Agenda:".bold(), link);
    }

    Ok(())
}
