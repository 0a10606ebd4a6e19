//! Built-in sample listing used when no event source is configured

use chrono::NaiveDate;

use super::{Category, Event};

struct SampleEvent {
    id: u32,
    title: &'static str,
    category: Category,
    date: (i32, u32, u32),
    time: &'static str,
    location: &'static str,
    distance: f64,
    price: f64,
    rating: f64,
    attendees: u32,
    image: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

impl SampleEvent {
    fn into_event(self) -> Option<Event> {
        let (year, month, day) = self.date;
        Some(Event {
            id: self.id,
            title: self.title.to_string(),
            category: self.category,
            date: NaiveDate::from_ymd_opt(year, month, day)?,
            time: self.time.to_string(),
            location: self.location.to_string(),
            distance: self.distance,
            price: self.price,
            rating: self.rating,
            attendees: self.attendees,
            image: self.image.to_string(),
            description: self.description.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        })
    }
}

/// The six events of the sample directory, in listing order.
pub fn sample_events() -> Vec<Event> {
    let samples = [
        SampleEvent {
            id: 1,
            title: "Summer Jazz Festival",
            category: Category::Music,
            date: (2025, 7, 15),
            time: "7:00 PM",
            location: "Central Park",
            distance: 2.3,
            price: 45.0,
            rating: 4.8,
            attendees: 450,
            image: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=250&fit=crop",
            description: "An evening of smooth jazz under the stars with renowned local and international artists.",
            tags: &["Outdoor", "Live Music", "21+"],
        },
        SampleEvent {
            id: 2,
            title: "Food Truck Rally",
            category: Category::Food,
            date: (2025, 7, 12),
            time: "11:00 AM",
            location: "Downtown Square",
            distance: 1.8,
            price: 0.0,
            rating: 4.6,
            attendees: 320,
            image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400&h=250&fit=crop",
            description: "Delicious street food from 20+ food trucks, live music, and family activities.",
            tags: &["Outdoor", "Free", "Family Friendly", "Food Available"],
        },
        SampleEvent {
            id: 3,
            title: "Digital Art Exhibition",
            category: Category::Arts,
            date: (2025, 7, 20),
            time: "2:00 PM",
            location: "Modern Art Gallery",
            distance: 4.2,
            price: 25.0,
            rating: 4.9,
            attendees: 180,
            image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=250&fit=crop",
            description: "Immersive digital art installations by contemporary artists exploring technology and creativity.",
            tags: &["Indoor", "Interactive", "Tech"],
        },
        SampleEvent {
            id: 4,
            title: "5K Charity Run",
            category: Category::Sports,
            date: (2025, 7, 18),
            time: "8:00 AM",
            location: "Riverside Trail",
            distance: 3.1,
            price: 15.0,
            rating: 4.4,
            attendees: 280,
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=250&fit=crop",
            description: "Join us for a morning run supporting local children's charities. All fitness levels welcome!",
            tags: &["Outdoor", "Charity", "Early Morning", "All Levels"],
        },
        SampleEvent {
            id: 5,
            title: "Tech Startup Meetup",
            category: Category::Business,
            date: (2025, 7, 22),
            time: "6:30 PM",
            location: "Innovation Hub",
            distance: 5.7,
            price: 0.0,
            rating: 4.7,
            attendees: 150,
            image: "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=400&h=250&fit=crop",
            description: "Network with entrepreneurs, investors, and tech enthusiasts. Featuring startup pitches and panel discussions.",
            tags: &["Indoor", "Free", "Networking", "Tech"],
        },
        SampleEvent {
            id: 6,
            title: "Wine Tasting Evening",
            category: Category::Food,
            date: (2025, 7, 25),
            time: "7:30 PM",
            location: "Vintage Cellars",
            distance: 6.2,
            price: 60.0,
            rating: 4.9,
            attendees: 80,
            image: "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?w=400&h=250&fit=crop",
            description: "Curated selection of premium wines paired with artisanal cheeses and expert sommelier guidance.",
            tags: &["Indoor", "21+", "Premium"],
        },
    ];

    samples.into_iter().filter_map(SampleEvent::into_event).collect()
}
