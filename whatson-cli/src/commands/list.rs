use anyhow::Result;
use chrono::Datelike;
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;
use whatson_core::favorites::FavoriteStore;
use whatson_core::filter::{self, FilterSelection};

use crate::render::{month_header, render_row};

pub async fn run(
    catalog: &Catalog,
    store: &FavoriteStore,
    selection: FilterSelection,
) -> Result<()> {
    let events = catalog.load().await?;

    if events.is_empty() {
        println!(
            "{}",
            "The feed is empty. Run `whatson refresh` to fetch events.".dimmed()
        );
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let visible = filter::apply_filters(&events, &selection, |id| store.is_favorite(id), today);

    if visible.is_empty() {
        println!("{}", "No upcoming events match this filter".dimmed());
        return Ok(());
    }

    // Group events by month and print
    let mut current_month: Option<(i32, u32)> = None;

    for event in &visible {
        // apply_filters only returns events with a parsable start date
        let Some(start) = event.start_date() else {
            continue;
        };

        let month = (start.year(), start.month());
        if current_month != Some(month) {
            if current_month.is_some() {
                println!();
            }
            println!("{}", month_header(start).bold());
            current_month = Some(month);
        }

        println!("{}", render_row(event, store.is_favorite(&event.id)));
    }

    Ok(())
}
