//! Free-text search logic for filters

use crate::Event;

/// Case-insensitive substring match against the title or the description.
/// An empty search term matches every event.
pub fn matches_search(event: &Event, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let needle = search_term.to_lowercase();
    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
}
