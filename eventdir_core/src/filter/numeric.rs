//! Band and floor comparisons for price, distance and rating

use super::types::{DistanceRange, PriceRange, RatingFloor};

/// Check if a price falls inside the selected band
pub fn matches_price(range: &PriceRange, price: f64) -> bool {
    match range {
        PriceRange::All => true,
        PriceRange::Free => price == 0.0,
        PriceRange::From1To25 => (1.0..=25.0).contains(&price),
        PriceRange::From26To50 => (26.0..=50.0).contains(&price),
        PriceRange::From51To100 => (51.0..=100.0).contains(&price),
        PriceRange::Over100 => price > 100.0,
    }
}

/// Check if a distance falls inside the selected band
pub fn matches_distance(range: &DistanceRange, distance: f64) -> bool {
    match range {
        DistanceRange::All => true,
        DistanceRange::Under2 => distance < 2.0,
        DistanceRange::From2To5 => (2.0..=5.0).contains(&distance),
        DistanceRange::From5To10 => (5.0..=10.0).contains(&distance),
        DistanceRange::Over10 => distance > 10.0,
    }
}

/// Check if a rating reaches the selected floor
pub fn matches_rating(floor: &RatingFloor, rating: f64) -> bool {
    match floor {
        RatingFloor::All => true,
        RatingFloor::AtLeast(min) => rating >= *min,
    }
}
