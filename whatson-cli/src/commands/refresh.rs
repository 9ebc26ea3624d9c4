use anyhow::Result;
use owo_colors::OwoColorize;
use whatson_core::catalog::Catalog;

use crate::utils::tui::create_spinner;

pub async fn run(catalog: &Catalog) -> Result<()> {
    let spinner = create_spinner("Fetching events");
    let result = catalog.refresh().await;
    spinner.finish_and_clear();

    match result {
        Ok(events) => {
            println!("{}", format!("Fetched {} events", events.len()).green());
        }
        Err(e) => println!("{}", e.to_string().red()),
    }

    Ok(())
}
