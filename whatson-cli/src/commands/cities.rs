use anyhow::Result;
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;
use whatson_core::filter::available_cities;

pub async fn run(catalog: &Catalog) -> Result<()> {
    let events = catalog.load().await?;
    let cities = available_cities(&events);

    if cities.is_empty() {
        println!("{}", "No cities in the feed".dimmed());
        return Ok(());
    }

    for city in cities {
        println!("{city}");
    }

    Ok(())
}
