//! Static places catalog and mock geocoder.
//!
//! Read-only after startup. The catalog is either the built-in sample table
//! or a JSON file named by `GWEN_CATALOG_PATH`.

mod defaults;
mod geocoder;

pub use geocoder::*;

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::geo;
use crate::models::{Place, PlaceCategory, PlaceDetail, PlaceReview};

/// On-disk catalog layout. Places without an explicit detail get a generated one.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<PlaceCategory>,
    #[serde(default)]
    pub details: HashMap<String, PlaceDetail>,
}

/// Places grouped by category plus per-place details.
#[derive(Debug, Clone)]
pub struct PlacesCatalog {
    categories: Vec<PlaceCategory>,
    details: HashMap<String, PlaceDetail>,
}

impl PlacesCatalog {
    /// The sample San Francisco catalog.
    pub fn builtin() -> Self {
        Self::from_parts(defaults::categories(), defaults::details())
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(format!("Invalid catalog {}: {}", path.display(), e))
        })?;
        Ok(Self::from_parts(file.categories, file.details))
    }

    pub fn from_parts(
        categories: Vec<PlaceCategory>,
        mut details: HashMap<String, PlaceDetail>,
    ) -> Self {
        let now = Utc::now().timestamp();
        for place in categories.iter().flat_map(|c| &c.places) {
            details
                .entry(place.place_id.clone())
                .or_insert_with(|| generated_detail(place, now));
        }
        Self {
            categories,
            details,
        }
    }

    /// Places of `category`, or every place when the category is unknown or empty.
    pub fn candidates(&self, category: &str) -> Vec<&Place> {
        match self
            .categories
            .iter()
            .find(|c| c.name == category && !c.places.is_empty())
        {
            Some(found) => found.places.iter().collect(),
            None => self.categories.iter().flat_map(|c| &c.places).collect(),
        }
    }

    /// Candidate places within `radius` meters of the query point.
    pub fn search(&self, latitude: f64, longitude: f64, category: &str, radius: f64) -> Vec<Place> {
        geo::places_within(latitude, longitude, radius, self.candidates(category))
    }

    pub fn detail(&self, place_id: &str) -> Result<&PlaceDetail, AppError> {
        self.details
            .get(place_id)
            .ok_or_else(|| AppError::NotFound("Place not found".to_string()))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn place_count(&self) -> usize {
        self.categories.iter().map(|c| c.places.len()).sum()
    }
}

const DAY_SECS: i64 = 86_400;

fn generated_detail(place: &Place, now: i64) -> PlaceDetail {
    let reviews = (1..=3u8)
        .map(|i| PlaceReview {
            author: format!("User{}", i),
            rating: (place.rating.floor().clamp(0.0, 5.0) as u8 + i % 2).min(5),
            text: format!("Sample review {}", i),
            time: now - i64::from(i) * DAY_SECS,
        })
        .collect();

    PlaceDetail {
        name: place.name.clone(),
        address: format!("{}, San Francisco, CA 94105", place.vicinity),
        phone: "+1 (415) 555-0123".to_string(),
        latitude: place.latitude,
        longitude: place.longitude,
        website: format!("https://{}.example.com", place.place_id.replace('_', "")),
        rating: place.rating,
        opening_hours: defaults::weekday_hours(),
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories() {
        let catalog = PlacesCatalog::builtin();
        let names: Vec<&str> = catalog.category_names().collect();
        assert_eq!(names, vec!["restaurant", "cafe", "store", "park"]);
        assert_eq!(catalog.place_count(), 9);
    }

    #[test]
    fn test_every_place_has_detail() {
        let catalog = PlacesCatalog::builtin();
        for place in catalog.candidates("unknown") {
            let detail = catalog.detail(&place.place_id).unwrap();
            assert_eq!(detail.name, place.name);
            assert_eq!(detail.opening_hours.len(), 7);
        }
    }

    #[test]
    fn test_handwritten_detail_is_kept() {
        let catalog = PlacesCatalog::builtin();
        let detail = catalog.detail("cafe_delight_01").unwrap();
        assert_eq!(detail.phone, "+1 (415) 555-1234");
        assert_eq!(detail.reviews.len(), 2);
        assert_eq!(detail.reviews[0].author, "Jane Smith");
    }

    #[test]
    fn test_generated_detail() {
        let catalog = PlacesCatalog::builtin();
        let detail = catalog.detail("tea_time_02").unwrap();

        assert_eq!(detail.address, "202 Folsom St, San Francisco, CA 94105");
        assert_eq!(detail.website, "https://teatime02.example.com");
        assert_eq!(detail.phone, "+1 (415) 555-0123");
        // Tea Time is rated 4.3
        let ratings: Vec<u8> = detail.reviews.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5, 4, 5]);
        assert!(detail.reviews[0].time > detail.reviews[1].time);
    }

    #[test]
    fn test_generated_rating_is_capped() {
        let catalog = PlacesCatalog::builtin();
        // Green Gardens is rated 4.9
        let detail = catalog.detail("green_gardens_01").unwrap();
        assert!(detail.reviews.iter().all(|r| r.rating <= 5));
    }

    #[test]
    fn test_out_of_range_rating_is_clamped() {
        let place = |place_id: &str, rating: f64| Place {
            name: "Odd Spot".to_string(),
            place_id: place_id.to_string(),
            vicinity: "1 Odd Way".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            rating,
            types: vec!["odd".to_string()],
        };
        let catalog = PlacesCatalog::from_parts(
            vec![PlaceCategory {
                name: "odd".to_string(),
                places: vec![place("high_01", 300.0), place("low_02", -2.0)],
            }],
            HashMap::new(),
        );

        let ratings = |place_id: &str| -> Vec<u8> {
            let detail = catalog.detail(place_id).unwrap();
            detail.reviews.iter().map(|r| r.rating).collect()
        };
        assert_eq!(ratings("high_01"), vec![5, 5, 5]);
        assert_eq!(ratings("low_02"), vec![1, 0, 1]);
    }

    #[test]
    fn test_unknown_place_is_not_found() {
        let catalog = PlacesCatalog::builtin();
        assert!(matches!(
            catalog.detail("nowhere_00"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_known_category_limits_candidates() {
        let catalog = PlacesCatalog::builtin();
        let ids: Vec<&str> = catalog
            .candidates("park")
            .iter()
            .map(|p| p.place_id.as_str())
            .collect();
        assert_eq!(ids, vec!["green_gardens_01", "city_park_02"]);
    }

    #[test]
    fn test_unknown_category_falls_back_to_union() {
        let catalog = PlacesCatalog::builtin();
        let results = catalog.search(37.7749, -122.4194, "unknown_category", 50_000.0);
        assert_eq!(results.len(), 9);
        assert_eq!(results[0].place_id, "cafe_delight_01");
        assert_eq!(results[8].place_id, "city_park_02");
    }

    #[test]
    fn test_search_filters_by_radius() {
        let catalog = PlacesCatalog::builtin();
        let results = catalog.search(37.7749, -122.4194, "restaurant", 300.0);
        let ids: Vec<&str> = results.iter().map(|p| p.place_id.as_str()).collect();
        // Burger Joint is about 200 m away, Pizza Palace well over a kilometer.
        assert_eq!(ids, vec!["cafe_delight_01", "burger_joint_02"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "categories": [{
                    "name": "museum",
                    "places": [{
                        "name": "Art House",
                        "place_id": "art_house_01",
                        "vicinity": "1 Art Way",
                        "latitude": 10.0,
                        "longitude": 20.0,
                        "rating": 3.5,
                        "types": ["museum"]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let catalog = PlacesCatalog::load(&path).unwrap();
        assert_eq!(catalog.place_count(), 1);
        assert_eq!(catalog.search(10.0, 20.0, "museum", 1.0).len(), 1);
        assert_eq!(
            catalog.detail("art_house_01").unwrap().address,
            "1 Art Way, San Francisco, CA 94105"
        );
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            PlacesCatalog::load(&path),
            Err(AppError::Internal(_))
        ));
        assert!(PlacesCatalog::load(&dir.path().join("missing.json")).is_err());
    }
}
