//! Loading events handed over by an external data source

use log::debug;
use std::collections::HashSet;
use std::fmt;

use super::Event;

/// Errors that can occur while reading event data
#[derive(Debug, Clone, PartialEq)]
pub enum EventsError {
    /// The input was not a JSON array of events
    InvalidJson(String),
    /// Two events share the same id
    DuplicateId(u32),
}

impl fmt::Display for EventsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventsError::InvalidJson(error) => {
                write!(f, "Event data could not be parsed: {}", error)
            }
            EventsError::DuplicateId(id) => {
                write!(f, "Event data contains more than one event with id {}", id)
            }
        }
    }
}

impl std::error::Error for EventsError {}

/// Parses a JSON array of events, keeping their order.
pub fn load_events_from_json(source: &str) -> Result<Vec<Event>, EventsError> {
    let events: Vec<Event> =
        serde_json::from_str(source).map_err(|e| EventsError::InvalidJson(e.to_string()))?;

    let mut seen = HashSet::new();
    for event in &events {
        if !seen.insert(event.id) {
            return Err(EventsError::DuplicateId(event.id));
        }
    }

    debug!("Loaded {} events", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use assert_matches::assert_matches;

    const ONE_EVENT: &str = r#"[
        {
            "id": 7,
            "title": "Open Mic",
            "category": "Music",
            "date": "2025-07-11",
            "time": "8:00 PM",
            "location": "The Basement",
            "distance": 0.9,
            "price": 5,
            "rating": 4.1,
            "attendees": 40,
            "image": "",
            "description": "Bring your own songs."
        }
    ]"#;

    #[test]
    fn test_load_single_event() {
        let events = load_events_from_json(ONE_EVENT).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 7);
        assert_eq!(events[0].category, Category::Music);
        assert_eq!(events[0].price, 5.0);
        assert!(events[0].tags.is_empty());
    }

    #[test]
    fn test_load_empty_array() {
        assert_eq!(load_events_from_json("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_load_invalid_json() {
        assert_matches!(
            load_events_from_json("{ not json"),
            Err(EventsError::InvalidJson(_))
        );
    }

    #[test]
    fn test_load_invalid_date() {
        let source = ONE_EVENT.replace("2025-07-11", "07/11/2025");
        assert_matches!(
            load_events_from_json(&source),
            Err(EventsError::InvalidJson(_))
        );
    }

    #[test]
    fn test_load_duplicate_ids() {
        let events = crate::sample_events();
        let mut duplicated = events.clone();
        duplicated.push(events[0].clone());
        let source = serde_json::to_string(&duplicated).unwrap();

        assert_matches!(
            load_events_from_json(&source),
            Err(EventsError::DuplicateId(1))
        );
    }

    #[test]
    fn test_sample_events_survive_json() {
        let source = serde_json::to_string(&crate::sample_events()).unwrap();
        assert_eq!(load_events_from_json(&source).unwrap(), crate::sample_events());
    }
}
