pub mod categories;
pub mod cities;
pub mod export;
pub mod list;
pub mod open;
pub mod refresh;
pub mod show;
pub mod star;

use anyhow::Result;
use whatson_core::Event;

/// Pull one event out of the list by id, with a hint about valid ids.
pub(crate) fn find_event(mut events: Vec<Event>, id: &str) -> Result<Event> {
    match events.iter().position(|e| e.id == id) {
        Some(index) => Ok(events.swap_remove(index)),
        None => {
            let available: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
            anyhow::bail!(
                "Event '{}' not found. Available: {}",
                id,
                available.join(", ")
            )
        }
    }
}
