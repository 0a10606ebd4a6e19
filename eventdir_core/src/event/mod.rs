//! Event records as supplied by the data source

mod sample;
mod source;

pub use sample::sample_events;
pub use source::{EventsError, load_events_from_json};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event category. Labels are matched exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Music,
    Food,
    Arts,
    Sports,
    Business,
    /// Any category outside the built-in set
    Other(String),
}

impl Category {
    /// The built-in categories in dropdown order
    pub fn builtin() -> [Category; 5] {
        [
            Category::Music,
            Category::Food,
            Category::Arts,
            Category::Sports,
            Category::Business,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Music => "Music",
            Category::Food => "Food",
            Category::Arts => "Arts",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::Other(label) => label,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Music" => Category::Music,
            "Food" => Category::Food,
            "Arts" => Category::Arts,
            "Sports" => Category::Sports,
            "Business" => Category::Business,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single local event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    /// Miles from the user
    pub distance: f64,
    /// Zero means free
    pub price: f64,
    pub rating: f64,
    pub attendees: u32,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// Short date like "Sat, Jul 12"
    pub fn display_date(&self) -> String {
        self.date.format("%a, %b %-d").to_string()
    }

    pub fn display_price(&self) -> String {
        if self.is_free() {
            "FREE".to_string()
        } else if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }

    pub fn display_distance(&self) -> String {
        format!("{} mi", self.distance)
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} at {})",
            self.title,
            self.category,
            self.display_date(),
            self.time
        )
    }
}
