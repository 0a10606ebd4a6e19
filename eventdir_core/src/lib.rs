//! Core data structures and filtering logic for the local events directory.
//!
//! The crate holds no state of its own. Callers own the event list and the
//! current [`FilterSelection`], and hand both in whenever they need fresh
//! results.

pub mod event;
pub mod filter;
pub mod weekend;

pub use event::{Category, Event, EventsError, load_events_from_json, sample_events};
pub use filter::{
    CategoryFilter, DateFilter, DistanceRange, FilterSelection, PriceRange, RatingFloor,
    filter_events,
};
pub use weekend::{
    DayBuckets, WeekendDates, WeekendDay, bucket_by_day, compute_weekend_dates, weekend_heading,
};
