//! Filter selection and matching logic
//!
//! A [`FilterSelection`] holds one choice per dimension. An event is visible
//! when it passes every active dimension; inactive dimensions match
//! everything.

mod date;
mod numeric;
mod text;
mod types;

pub use date::parse_iso_date;
pub use types::*;

use log::debug;

use crate::Event;

/// The user's current filter choices across every dimension
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    pub search_term: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub distance_range: DistanceRange,
    pub rating_floor: RatingFloor,
    pub date: DateFilter,
}

impl FilterSelection {
    /// Create a selection with every dimension inactive
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn with_distance_range(mut self, distance_range: DistanceRange) -> Self {
        self.distance_range = distance_range;
        self
    }

    pub fn with_rating_floor(mut self, rating_floor: RatingFloor) -> Self {
        self.rating_floor = rating_floor;
        self
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    /// Reset every dropdown and the date. The search text is kept.
    pub fn clear_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.price_range = PriceRange::All;
        self.distance_range = DistanceRange::All;
        self.rating_floor = RatingFloor::All;
        self.date = DateFilter::Any;
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && !self.category.is_active()
            && !self.price_range.is_active()
            && !self.distance_range.is_active()
            && !self.rating_floor.is_active()
            && !self.date.is_active()
    }

    /// Badge labels for the active dropdown filters
    pub fn active_filters(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if self.category.is_active() {
            badges.push(self.category.label().to_string());
        }
        if self.price_range.is_active() {
            badges.push(self.price_range.label().to_string());
        }
        if self.distance_range.is_active() {
            badges.push(self.distance_range.label().to_string());
        }
        if self.rating_floor.is_active() {
            badges.push(self.rating_floor.label());
        }
        badges
    }

    /// Check if an event passes every active dimension
    pub fn matches(&self, event: &Event) -> bool {
        text::matches_search(event, &self.search_term)
            && self.matches_category(event)
            && numeric::matches_price(&self.price_range, event.price)
            && numeric::matches_distance(&self.distance_range, event.distance)
            && numeric::matches_rating(&self.rating_floor, event.rating)
            && date::matches_date(&self.date, &event.date)
    }

    fn matches_category(&self, event: &Event) -> bool {
        match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == *category,
        }
    }
}

/// Returns the events that pass the selection, in their original order.
pub fn filter_events<'a>(events: &'a [Event], selection: &FilterSelection) -> Vec<&'a Event> {
    let visible: Vec<&Event> = events.iter().filter(|e| selection.matches(e)).collect();

    debug!(
        "Filter kept {} of {} events (active: {:?})",
        visible.len(),
        events.len(),
        selection.active_filters()
    );

    visible
}
