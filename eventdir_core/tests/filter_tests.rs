//! Tests for filtering the sample directory

use chrono::NaiveDate;
use eventdir_core::{
    Category, CategoryFilter, DateFilter, DistanceRange, Event, FilterSelection, PriceRange,
    RatingFloor, compute_weekend_dates, filter_events, sample_events,
};

fn titles(events: &[&Event]) -> Vec<String> {
    events.iter().map(|e| e.title.clone()).collect()
}

fn event_at(id: u32, price: f64, distance: f64, rating: f64) -> Event {
    let mut event = sample_events().remove(0);
    event.id = id;
    event.price = price;
    event.distance = distance;
    event.rating = rating;
    event
}

#[test]
fn test_all_selection_is_identity() {
    let events = sample_events();
    let selection = FilterSelection::new()
        .with_category(CategoryFilter::from_label("All"))
        .with_price_range(PriceRange::from_label("All"))
        .with_distance_range(DistanceRange::from_label("All"))
        .with_rating_floor(RatingFloor::from_label("All"));

    let result = filter_events(&events, &selection);
    let expected: Vec<&Event> = events.iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn test_empty_events_with_any_selection() {
    let selection = FilterSelection::new()
        .with_search("jazz")
        .with_category(CategoryFilter::Only(Category::Music))
        .with_rating_floor(RatingFloor::AtLeast(4.5));

    assert!(filter_events(&[], &selection).is_empty());
}

#[test]
fn test_result_is_ordered_subsequence() {
    let events = sample_events();
    let selections = [
        FilterSelection::new().with_search("e"),
        FilterSelection::new().with_price_range(PriceRange::From1To25),
        FilterSelection::new().with_distance_range(DistanceRange::From2To5),
        FilterSelection::new().with_rating_floor(RatingFloor::AtLeast(4.7)),
    ];

    for selection in &selections {
        let ids: Vec<u32> = filter_events(&events, selection)
            .iter()
            .map(|e| e.id)
            .collect();

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted, "selection {:?}", selection);
    }
}

#[test]
fn test_category_food() {
    let events = sample_events();
    let selection = FilterSelection::new().with_category(CategoryFilter::from_label("Food"));

    assert_eq!(
        titles(&filter_events(&events, &selection)),
        ["Food Truck Rally", "Wine Tasting Evening"]
    );
}

#[test]
fn test_price_free() {
    let events = sample_events();
    let selection = FilterSelection::new().with_price_range(PriceRange::from_label("Free"));

    assert_eq!(
        titles(&filter_events(&events, &selection)),
        ["Food Truck Rally", "Tech Startup Meetup"]
    );
}

#[test]
fn test_rating_floor_excludes_charity_run() {
    let events = sample_events();
    let selection =
        FilterSelection::new().with_rating_floor(RatingFloor::from_label("4.5+ stars"));

    let result = titles(&filter_events(&events, &selection));
    assert_eq!(result.len(), 5);
    assert!(!result.contains(&"5K Charity Run".to_string()));
}

#[test]
fn test_food_under_2_miles() {
    let events = sample_events();
    let selection = FilterSelection::new()
        .with_category(CategoryFilter::from_label("Food"))
        .with_distance_range(DistanceRange::from_label("Under 2 miles"));

    assert_eq!(
        titles(&filter_events(&events, &selection)),
        ["Food Truck Rally"]
    );
}

#[test]
fn test_price_100_boundary() {
    let events = vec![event_at(1, 100.0, 1.0, 4.0), event_at(2, 100.5, 1.0, 4.0)];

    let over = FilterSelection::new().with_price_range(PriceRange::from_label("$100+"));
    let ids: Vec<u32> = filter_events(&events, &over).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);

    let band = FilterSelection::new().with_price_range(PriceRange::from_label("$51-100"));
    let ids: Vec<u32> = filter_events(&events, &band).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_distance_2_boundary() {
    let events = vec![event_at(1, 0.0, 2.0, 4.0), event_at(2, 0.0, 1.999, 4.0)];
    let selection =
        FilterSelection::new().with_distance_range(DistanceRange::from_label("Under 2 miles"));

    let ids: Vec<u32> = filter_events(&events, &selection).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_rating_4_5_boundary() {
    let events = vec![event_at(1, 0.0, 1.0, 4.5), event_at(2, 0.0, 1.0, 4.49)];
    let selection =
        FilterSelection::new().with_rating_floor(RatingFloor::from_label("4.5+ stars"));

    let ids: Vec<u32> = filter_events(&events, &selection).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_exact_date() {
    let events = sample_events();
    let selection = FilterSelection::new().with_date(DateFilter::from_label("2025-07-20"));

    assert_eq!(
        titles(&filter_events(&events, &selection)),
        ["Digital Art Exhibition"]
    );
}

#[test]
fn test_weekend_membership() {
    let events = sample_events();
    let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
    let weekend = compute_weekend_dates(today, 0).unwrap();
    let selection = FilterSelection::new().with_date(DateFilter::Weekend(weekend));

    // July 18 to 20
    assert_eq!(
        titles(&filter_events(&events, &selection)),
        ["Digital Art Exhibition", "5K Charity Run"]
    );
}

#[test]
fn test_weekend_and_category_combine() {
    let events = sample_events();
    let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
    let weekend = compute_weekend_dates(today, 0).unwrap();
    let selection = FilterSelection::new()
        .with_date(DateFilter::Weekend(weekend))
        .with_category(CategoryFilter::Only(Category::Sports));

    assert_eq!(
        titles(&filter_events(&events, &selection)),
        ["5K Charity Run"]
    );
}

#[test]
fn test_malformed_rating_matches_everything() {
    let events = sample_events();
    let selection =
        FilterSelection::new().with_rating_floor(RatingFloor::from_label("five+ stars"));

    assert_eq!(filter_events(&events, &selection).len(), events.len());
}

#[test]
fn test_unrecognized_bands_match_everything() {
    let events = sample_events();
    let selection = FilterSelection::new()
        .with_price_range(PriceRange::from_label("$1000+"))
        .with_distance_range(DistanceRange::from_label("Under 1 mile"));

    assert_eq!(filter_events(&events, &selection).len(), events.len());
}

#[test]
fn test_filtering_is_idempotent() {
    let events = sample_events();
    let selection = FilterSelection::new().with_price_range(PriceRange::From1To25);

    let first: Vec<Event> = filter_events(&events, &selection)
        .into_iter()
        .cloned()
        .collect();
    let second = filter_events(&first, &selection);

    assert_eq!(second.len(), first.len());
    assert_eq!(titles(&second), ["Digital Art Exhibition", "5K Charity Run"]);
}
