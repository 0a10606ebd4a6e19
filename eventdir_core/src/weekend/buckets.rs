//! Splitting a weekend's events into per-day tabs

use serde::Serialize;

use super::{WeekendDates, WeekendDay};
use crate::Event;

/// Events grouped by weekend day, each in input order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DayBuckets<'a> {
    pub friday: Vec<&'a Event>,
    pub saturday: Vec<&'a Event>,
    pub sunday: Vec<&'a Event>,
}

impl<'a> DayBuckets<'a> {
    pub fn get(&self, day: WeekendDay) -> &[&'a Event] {
        match day {
            WeekendDay::Friday => &self.friday,
            WeekendDay::Saturday => &self.saturday,
            WeekendDay::Sunday => &self.sunday,
        }
    }

    /// Total events across all three days
    pub fn len(&self) -> usize {
        self.friday.len() + self.saturday.len() + self.sunday.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions events by exact date. Events outside the weekend are dropped.
pub fn bucket_by_day<'a, I>(events: I, weekend: &WeekendDates) -> DayBuckets<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut buckets = DayBuckets::default();

    for event in events {
        match weekend.day_of(&event.date) {
            Some(WeekendDay::Friday) => buckets.friday.push(event),
            Some(WeekendDay::Saturday) => buckets.saturday.push(event),
            Some(WeekendDay::Sunday) => buckets.sunday.push(event),
            None => {}
        }
    }

    buckets
}
