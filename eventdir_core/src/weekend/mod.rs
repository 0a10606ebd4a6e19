//! Weekend windows and day buckets
//!
//! A weekend is anchored on a Friday and covers the following Saturday and
//! Sunday. Offsets move the window a whole week at a time, and all arithmetic
//! is on calendar days.

mod buckets;

pub use buckets::{DayBuckets, bucket_by_day};

use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// The three days of the weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendDay {
    #[default]
    Friday,
    Saturday,
    Sunday,
}

impl WeekendDay {
    pub const OPTIONS: [WeekendDay; 3] =
        [WeekendDay::Friday, WeekendDay::Saturday, WeekendDay::Sunday];

    pub fn options() -> Vec<WeekendDay> {
        Self::OPTIONS.to_vec()
    }

    /// Case-insensitive. Unknown names select Friday.
    pub fn from_label(label: &str) -> Self {
        match Self::OPTIONS
            .iter()
            .find(|day| day.label().eq_ignore_ascii_case(label.trim()))
        {
            Some(day) => *day,
            None => {
                warn!("Unrecognized weekend day '{}', showing Friday", label);
                WeekendDay::Friday
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeekendDay::Friday => "Friday",
            WeekendDay::Saturday => "Saturday",
            WeekendDay::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for WeekendDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The Friday, Saturday and Sunday of one weekend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekendDates {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeekendDates {
    pub fn dates(&self) -> [NaiveDate; 3] {
        [self.friday, self.saturday, self.sunday]
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates().contains(date)
    }

    pub fn get(&self, day: WeekendDay) -> NaiveDate {
        match day {
            WeekendDay::Friday => self.friday,
            WeekendDay::Saturday => self.saturday,
            WeekendDay::Sunday => self.sunday,
        }
    }

    /// Which day of this weekend a date falls on, if any
    pub fn day_of(&self, date: &NaiveDate) -> Option<WeekendDay> {
        WeekendDay::OPTIONS
            .into_iter()
            .find(|day| self.get(*day) == *date)
    }

    pub fn iso_dates(&self) -> [String; 3] {
        self.dates().map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Like "Jul 11 - Jul 13"
    pub fn range_label(&self) -> String {
        format!(
            "{} - {}",
            self.friday.format("%b %-d"),
            self.sunday.format("%b %-d")
        )
    }

    /// Like "Saturday, Jul 12"
    pub fn tab_label(&self, day: WeekendDay) -> String {
        format!("{}, {}", day.label(), self.get(day).format("%b %-d"))
    }
}

/// Computes the weekend `week_offset` weeks away from the one at or after
/// `today`. Offset 0 is the coming Friday, or `today` itself on a Friday.
///
/// Returns `None` only when the weekend would fall outside the supported
/// calendar range.
pub fn compute_weekend_dates(today: NaiveDate, week_offset: i32) -> Option<WeekendDates> {
    let weekday = i64::from(today.weekday().num_days_from_sunday());
    let days_to_friday = (5 - weekday + 7) % 7;
    let shift = days_to_friday + i64::from(week_offset) * 7;

    let friday = today.checked_add_signed(Duration::try_days(shift)?)?;
    let saturday = friday.succ_opt()?;
    let sunday = saturday.succ_opt()?;

    debug!(
        "Weekend {} from {}: {} to {}",
        week_offset, today, friday, sunday
    );

    Some(WeekendDates {
        friday,
        saturday,
        sunday,
    })
}

/// Navigation heading for a week offset
pub fn weekend_heading(week_offset: i32) -> String {
    match week_offset {
        0 => "This Weekend".to_string(),
        1 => "Next Weekend".to_string(),
        -1 => "Last Weekend".to_string(),
        n if n > 1 => format!("In {} Weeks", n),
        n => format!("{} Weeks Ago", n.unsigned_abs()),
    }
}
