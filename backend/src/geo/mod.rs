//! Proximity engine.
//!
//! Great-circle distances on a spherical Earth, used to trigger location
//! reminders and to filter the places catalog.

use crate::models::{LocationReminder, Place, UserLocation};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance in meters between two points given in degrees.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Reminders strictly inside their own trigger radius of `location`.
pub fn nearby_reminders(
    location: UserLocation,
    reminders: &[LocationReminder],
) -> Vec<LocationReminder> {
    reminders
        .iter()
        .filter(|r| {
            distance_meters(
                location.latitude,
                location.longitude,
                r.latitude,
                r.longitude,
            ) < r.radius
        })
        .cloned()
        .collect()
}

/// Places no farther than `radius` meters from the query point (inclusive).
pub fn places_within<'a, I>(latitude: f64, longitude: f64, radius: f64, places: I) -> Vec<Place>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .filter(|p| distance_meters(latitude, longitude, p.latitude, p.longitude) <= radius)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: (f64, f64) = (37.7749, -122.4194);
    const NYC: (f64, f64) = (40.7128, -74.0060);

    fn reminder(id: u64, latitude: f64, longitude: f64, radius: f64) -> LocationReminder {
        LocationReminder {
            id,
            reminder: format!("reminder {}", id),
            latitude,
            longitude,
            place_name: String::new(),
            radius,
            created_at: 0.0,
        }
    }

    fn place(id: &str, latitude: f64, longitude: f64) -> Place {
        Place {
            name: id.to_string(),
            place_id: id.to_string(),
            vicinity: String::new(),
            latitude,
            longitude,
            rating: 4.0,
            types: vec![],
        }
    }

    #[test]
    fn test_same_point_is_zero() {
        for &(lat, lon) in &[SF, NYC, (0.0, 0.0), (-33.8688, 151.2093), (89.9, 179.9)] {
            assert_eq!(distance_meters(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let ab = distance_meters(SF.0, SF.1, NYC.0, NYC.1);
        let ba = distance_meters(NYC.0, NYC.1, SF.0, SF.1);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_sf_to_nyc() {
        let d = distance_meters(SF.0, SF.1, NYC.0, NYC.1);
        let expected = 4_129_000.0;
        assert!(
            (d - expected).abs() / expected < 0.01,
            "SF to NYC was {} m",
            d
        );
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // pi * R / 180
        let d = distance_meters(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_194.93).abs() < 1.0);
    }

    #[test]
    fn test_reminder_boundary_is_exclusive() {
        let d = distance_meters(0.0, 0.0, 0.001, 0.0);
        let reminders = vec![
            reminder(1, 0.001, 0.0, d),
            reminder(2, 0.001, 0.0, d + 0.001),
        ];

        let nearby = nearby_reminders(UserLocation::default(), &reminders);
        let ids: Vec<u64> = nearby.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_reminder_uses_its_own_radius() {
        let reminders = vec![
            reminder(1, SF.0, SF.1, 100.0),
            reminder(2, 37.7800, -122.4194, 100.0),
            reminder(3, 37.7800, -122.4194, 1_000.0),
        ];
        let here = UserLocation {
            latitude: SF.0,
            longitude: SF.1,
        };

        let ids: Vec<u64> = nearby_reminders(here, &reminders)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_place_boundary_is_inclusive() {
        let target = place("edge", 0.001, 0.0);
        let d = distance_meters(0.0, 0.0, target.latitude, target.longitude);

        assert_eq!(places_within(0.0, 0.0, d, [&target]).len(), 1);
        assert!(places_within(0.0, 0.0, d - 0.001, [&target]).is_empty());
    }

    #[test]
    fn test_places_keep_catalog_order() {
        let places = vec![
            place("b", SF.0, SF.1),
            place("far", NYC.0, NYC.1),
            place("a", 37.7750, -122.4195),
        ];

        let ids: Vec<String> = places_within(SF.0, SF.1, 1_000.0, &places)
            .into_iter()
            .map(|p| p.place_id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
