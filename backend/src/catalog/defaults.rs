//! Built-in sample data around downtown San Francisco.

use std::collections::HashMap;

use chrono::Utc;

use crate::models::{Place, PlaceCategory, PlaceDetail, PlaceReview};

fn place(
    name: &str,
    place_id: &str,
    vicinity: &str,
    lat: f64,
    lon: f64,
    rating: f64,
    types: &[&str],
) -> Place {
    Place {
        name: name.to_string(),
        place_id: place_id.to_string(),
        vicinity: vicinity.to_string(),
        latitude: lat,
        longitude: lon,
        rating,
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

fn category(name: &str, places: Vec<Place>) -> PlaceCategory {
    PlaceCategory {
        name: name.to_string(),
        places,
    }
}

#[rustfmt::skip]
pub(super) fn categories() -> Vec<PlaceCategory> {
    vec![
        category(
            "restaurant",
            vec![
                place("Cafe Delight", "cafe_delight_01", "123 Main St", 37.7749, -122.4194, 4.5, &["restaurant", "cafe"]),
                place("Burger Joint", "burger_joint_02", "456 Market St", 37.7746, -122.4172, 4.2, &["restaurant", "fast_food"]),
                place("Pizza Palace", "pizza_palace_03", "789 Mission St", 37.7850, -122.4064, 4.7, &["restaurant", "italian"]),
            ],
        ),
        category(
            "cafe",
            vec![
                place("Morning Brew", "morning_brew_01", "101 Howard St", 37.7891, -122.3964, 4.8, &["cafe", "bakery"]),
                place("Tea Time", "tea_time_02", "202 Folsom St", 37.7897, -122.3905, 4.3, &["cafe", "tea_house"]),
            ],
        ),
        category(
            "store",
            vec![
                place("Market Fresh", "market_fresh_01", "303 Beale St", 37.7896, -122.3913, 4.4, &["store", "grocery"]),
                place("Tech Shop", "tech_shop_02", "404 Spear St", 37.7902, -122.3894, 4.6, &["store", "electronics"]),
            ],
        ),
        category(
            "park",
            vec![
                place("Green Gardens", "green_gardens_01", "505 Bryant St", 37.7832, -122.3954, 4.9, &["park", "garden"]),
                place("City Park", "city_park_02", "606 Brannan St", 37.7786, -122.3962, 4.7, &["park", "playground"]),
            ],
        ),
    ]
}

fn hours(weekday: &str, weekend: [&str; 3]) -> Vec<String> {
    let [friday, saturday, sunday] = weekend;
    ["Monday", "Tuesday", "Wednesday", "Thursday"]
        .iter()
        .map(|day| format!("{}: {}", day, weekday))
        .chain([
            format!("Friday: {}", friday),
            format!("Saturday: {}", saturday),
            format!("Sunday: {}", sunday),
        ])
        .collect()
}

/// Opening hours used for every generated detail.
pub(super) fn weekday_hours() -> Vec<String> {
    hours(
        "9:00 AM – 6:00 PM",
        ["9:00 AM – 7:00 PM", "10:00 AM – 5:00 PM", "10:00 AM – 4:00 PM"],
    )
}

/// Hand-written details. Every other place gets a generated one.
pub(super) fn details() -> HashMap<String, PlaceDetail> {
    let now = Utc::now().timestamp();

    let cafe_delight = PlaceDetail {
        name: "Cafe Delight".to_string(),
        address: "123 Main St, San Francisco, CA 94105".to_string(),
        phone: "+1 (415) 555-1234".to_string(),
        latitude: 37.7749,
        longitude: -122.4194,
        website: "https://cafedelight.example.com".to_string(),
        rating: 4.5,
        opening_hours: hours(
            "7:00 AM – 7:00 PM",
            ["7:00 AM – 8:00 PM", "8:00 AM – 8:00 PM", "8:00 AM – 6:00 PM"],
        ),
        reviews: vec![
            PlaceReview {
                author: "Jane Smith".to_string(),
                rating: 5,
                text: "Great coffee and atmosphere!".to_string(),
                time: now - 86_400,
            },
            PlaceReview {
                author: "John Doe".to_string(),
                rating: 4,
                text: "Good service but a bit pricey.".to_string(),
                time: now - 172_800,
            },
        ],
    };

    HashMap::from([("cafe_delight_01".to_string(), cafe_delight)])
}
