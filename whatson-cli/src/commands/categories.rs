use anyhow::Result;
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;
use whatson_core::filter::available_categories;

pub async fn run(catalog: &Catalog) -> Result<()> {
    let events = catalog.load().await?;
    let categories = available_categories(&events);

    if categories.is_empty() {
        println!("{}", "No categories in the feed".dimmed());
        return Ok(());
    }

    for category in categories {
        println!("{category}");
    }

    Ok(())
}
