//! Filter dimension types
//!
//! Each dimension is a closed set of choices with a label for display. Labels
//! coming back from a caller are parsed leniently: anything unrecognized turns
//! the dimension off instead of hiding every event.

use log::warn;
use std::fmt;

use super::date::parse_iso_date;
use crate::Category;
use crate::weekend::WeekendDates;

/// Label of the "no filtering" choice shared by every dropdown
pub const ALL_LABEL: &str = "All";

/// Category selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(label))
        }
    }

    /// "All" followed by the built-in categories
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::builtin().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Price bands. Closed bands include both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    All,
    Free,
    From1To25,
    From26To50,
    From51To100,
    /// Strictly more than 100
    Over100,
}

impl PriceRange {
    pub const OPTIONS: [PriceRange; 6] = [
        PriceRange::All,
        PriceRange::Free,
        PriceRange::From1To25,
        PriceRange::From26To50,
        PriceRange::From51To100,
        PriceRange::Over100,
    ];

    pub fn from_label(label: &str) -> Self {
        match Self::OPTIONS.iter().find(|range| range.label() == label) {
            Some(range) => *range,
            None => {
                warn!("Unrecognized price range '{}', not filtering by price", label);
                PriceRange::All
            }
        }
    }

    pub fn options() -> Vec<PriceRange> {
        Self::OPTIONS.to_vec()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => ALL_LABEL,
            PriceRange::Free => "Free",
            PriceRange::From1To25 => "$1-25",
            PriceRange::From26To50 => "$26-50",
            PriceRange::From51To100 => "$51-100",
            PriceRange::Over100 => "$100+",
        }
    }

    pub fn is_active(&self) -> bool {
        *self != PriceRange::All
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Distance bands in miles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceRange {
    #[default]
    All,
    /// Strictly less than 2
    Under2,
    From2To5,
    From5To10,
    /// Strictly more than 10
    Over10,
}

impl DistanceRange {
    pub const OPTIONS: [DistanceRange; 5] = [
        DistanceRange::All,
        DistanceRange::Under2,
        DistanceRange::From2To5,
        DistanceRange::From5To10,
        DistanceRange::Over10,
    ];

    pub fn from_label(label: &str) -> Self {
        match Self::OPTIONS.iter().find(|range| range.label() == label) {
            Some(range) => *range,
            None => {
                warn!(
                    "Unrecognized distance range '{}', not filtering by distance",
                    label
                );
                DistanceRange::All
            }
        }
    }

    pub fn options() -> Vec<DistanceRange> {
        Self::OPTIONS.to_vec()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceRange::All => ALL_LABEL,
            DistanceRange::Under2 => "Under 2 miles",
            DistanceRange::From2To5 => "2-5 miles",
            DistanceRange::From5To10 => "5-10 miles",
            DistanceRange::Over10 => "10+ miles",
        }
    }

    pub fn is_active(&self) -> bool {
        *self != DistanceRange::All
    }
}

impl fmt::Display for DistanceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Minimum star rating
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatingFloor {
    #[default]
    All,
    AtLeast(f64),
}

impl RatingFloor {
    /// Reads the number in front of the '+', so "4.5+ stars" becomes 4.5.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            return RatingFloor::All;
        }

        let leading = label.split('+').next().unwrap_or_default().trim();
        match leading.parse::<f64>() {
            Ok(floor) if floor.is_finite() => RatingFloor::AtLeast(floor),
            _ => {
                warn!("Unrecognized rating floor '{}', not filtering by rating", label);
                RatingFloor::All
            }
        }
    }

    pub fn options() -> Vec<RatingFloor> {
        vec![
            RatingFloor::All,
            RatingFloor::AtLeast(4.5),
            RatingFloor::AtLeast(4.0),
            RatingFloor::AtLeast(3.5),
            RatingFloor::AtLeast(3.0),
        ]
    }

    pub fn label(&self) -> String {
        match self {
            RatingFloor::All => ALL_LABEL.to_string(),
            RatingFloor::AtLeast(floor) => {
                // Keep "4.0+" for catalog floors but never round a finer floor
                let short = format!("{:.1}", floor);
                if short.parse::<f64>() == Ok(*floor) {
                    format!("{}+ stars", short)
                } else {
                    format!("{}+ stars", floor)
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RatingFloor::AtLeast(_))
    }
}

impl fmt::Display for RatingFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which days are visible
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    Any,
    /// A single calendar day picked by the user
    On(chrono::NaiveDate),
    /// The Friday to Sunday window currently on screen
    Weekend(WeekendDates),
}

impl DateFilter {
    /// Empty input clears the date. Input that isn't a `YYYY-MM-DD` date is
    /// ignored.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() {
            return DateFilter::Any;
        }

        match parse_iso_date(label) {
            Some(date) => DateFilter::On(date),
            None => {
                warn!("Unrecognized date '{}', not filtering by date", label);
                DateFilter::Any
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DateFilter::Any)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFilter::Any => write!(f, "Any date"),
            DateFilter::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateFilter::Weekend(weekend) => write!(f, "Weekend of {}", weekend.range_label()),
        }
    }
}
