use crate::core::distance::haversine_miles;
use crate::core::zipcodes::ZipDatabase;
use crate::models::ZipDistance;

/// Distance in miles between two zip codes
///
/// Returns `None` when either zip code is missing from the lookup table.
#[inline]
pub fn distance_between_zips(db: &ZipDatabase, zip1: &str, zip2: &str) -> Option<f64> {
    let a = db.lookup(zip1)?;
    let b = db.lookup(zip2)?;
    Some(haversine_miles(a.lat, a.lng, b.lat, b.lng))
}

/// Check whether two zip codes are within the given radius of each other
///
/// A lookup miss on either side yields `false`, not an error: an
/// unresolvable zip code fails every radius bound by policy.
#[inline]
pub fn within_radius(db: &ZipDatabase, zip1: &str, zip2: &str, radius_miles: f64) -> bool {
    match distance_between_zips(db, zip1, zip2) {
        Some(distance) => distance <= radius_miles,
        None => false,
    }
}

/// Rank candidate zip codes by distance from a target
///
/// Candidates with unresolvable coordinates are dropped silently. Survivors
/// are sorted ascending by distance; ties keep their input order.
pub fn filter_by_proximity(
    db: &ZipDatabase,
    target_zip: &str,
    candidates: &[String],
    radius_miles: f64,
) -> Vec<ZipDistance> {
    let mut ranked: Vec<ZipDistance> = candidates
        .iter()
        .filter_map(|zip| {
            let distance = distance_between_zips(db, target_zip, zip)?;
            if distance <= radius_miles {
                Some(ZipDistance {
                    zip_code: zip.clone(),
                    distance,
                })
            } else {
                None
            }
        })
        .collect();

    // Stable sort preserves input order for equal distances
    ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> ZipDatabase {
        ZipDatabase::bundled()
    }

    #[test]
    fn test_within_radius_close_zips() {
        // Chelsea and the East Village are under 2 miles apart
        assert!(within_radius(&db(), "10001", "10003", 5.0));
    }

    #[test]
    fn test_within_radius_far_zips() {
        // NYC to LA exceeds every radius option
        for radius in [5.0, 10.0, 25.0, 50.0, 100.0] {
            assert!(!within_radius(&db(), "10001", "90001", radius));
        }
    }

    #[test]
    fn test_within_radius_unknown_zip_false() {
        let db = db();
        for radius in [5.0, 10.0, 25.0, 50.0, 100.0] {
            assert!(!within_radius(&db, "99999", "10001", radius));
            assert!(!within_radius(&db, "10001", "99999", radius));
            assert!(!within_radius(&db, "99999", "88888", radius));
        }
    }

    #[test]
    fn test_filter_sorted_ascending() {
        let candidates = vec![
            "10025".to_string(), // ~3.7 mi
            "10003".to_string(), // ~1.4 mi
            "07030".to_string(), // ~1.7 mi
            "11201".to_string(), // ~3.9 mi
        ];

        let ranked = filter_by_proximity(&db(), "10001", &candidates, 25.0);

        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].zip_code, "10003");
        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_filter_drops_unresolvable() {
        let candidates = vec!["10003".to_string(), "99999".to_string()];
        let ranked = filter_by_proximity(&db(), "10001", &candidates, 25.0);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].zip_code, "10003");
    }

    #[test]
    fn test_filter_bounded_by_radius() {
        let candidates = vec![
            "10003".to_string(),
            "02108".to_string(), // Boston, ~188 mi
            "90001".to_string(), // LA, ~2448 mi
        ];

        let ranked = filter_by_proximity(&db(), "10001", &candidates, 100.0);

        assert_eq!(ranked.len(), 1);
        for entry in &ranked {
            assert!(entry.distance <= 100.0);
        }
    }

    #[test]
    fn test_filter_stable_ties() {
        // The same zip twice ties exactly; input order must hold
        let candidates = vec![
            "10003".to_string(),
            "10003".to_string(),
            "10002".to_string(),
        ];

        let ranked = filter_by_proximity(&db(), "10001", &candidates, 25.0);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].zip_code, "10003");
        assert_eq!(ranked[1].zip_code, "10003");
    }

    #[test]
    fn test_unknown_target_yields_empty() {
        let candidates = vec!["10003".to_string(), "10002".to_string()];
        let ranked = filter_by_proximity(&db(), "99999", &candidates, 100.0);
        assert!(ranked.is_empty());
    }
}
