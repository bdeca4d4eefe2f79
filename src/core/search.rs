use std::sync::Arc;

use crate::core::{
    filters::{matches_list_filters, matches_scalar_filters},
    proximity::distance_between_zips,
    zipcodes::ZipDatabase,
};
use crate::models::{ParentProfile, SearchFilters, SearchResult};

/// Result of ranking one batch of candidates
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub total_candidates: usize,
    pub has_more: bool,
}

/// Proximity search orchestrator
///
/// # Pipeline stages
/// 1. Requester exclusion (re-applied after the server-side predicate)
/// 2. In-memory list/scalar filter re-check
/// 3. Distance from the search zip code; unresolvable or out-of-radius
///    profiles dropped
/// 4. Ascending distance sort, truncation to the limit
#[derive(Debug, Clone)]
pub struct Searcher {
    zip_db: Arc<ZipDatabase>,
}

impl Searcher {
    pub fn new(zip_db: Arc<ZipDatabase>) -> Self {
        Self { zip_db }
    }

    pub fn zip_db(&self) -> &ZipDatabase {
        &self.zip_db
    }

    /// Rank raw candidates from the profile store against the filters
    ///
    /// `candidates` is expected to hold up to `limit + 1` profiles so that
    /// `has_more` can be derived without a separate count query.
    pub fn rank(
        &self,
        requester_id: &str,
        filters: &SearchFilters,
        candidates: Vec<ParentProfile>,
    ) -> SearchOutcome {
        let total_candidates = candidates.len();

        let mut survivors: Vec<SearchResult> = candidates
            .into_iter()
            .filter(|profile| profile.uid != requester_id)
            .filter(|profile| matches_scalar_filters(profile, filters))
            .filter(|profile| matches_list_filters(profile, filters))
            .filter_map(|profile| {
                let distance =
                    distance_between_zips(&self.zip_db, &filters.zip_code, &profile.zip_code)?;
                if distance <= filters.radius_miles as f64 {
                    Some(SearchResult {
                        profile,
                        distance: Some(distance),
                    })
                } else {
                    None
                }
            })
            .collect();

        // Ascending by distance; a missing distance sorts last even though
        // none can survive the radius filter above
        survivors.sort_by(|a, b| match (a.distance, b.distance) {
            (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let has_more = survivors.len() > filters.limit;
        survivors.truncate(filters.limit);

        SearchOutcome {
            results: survivors,
            total_candidates,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher() -> Searcher {
        Searcher::new(Arc::new(ZipDatabase::bundled()))
    }

    fn candidate(uid: &str, zip: &str) -> ParentProfile {
        ParentProfile {
            uid: uid.to_string(),
            display_name: format!("Parent {}", uid),
            zip_code: zip.to_string(),
            age_range: Some("30-39".to_string()),
            interests: vec!["playdates".to_string()],
            children_age_ranges: vec!["0-2".to_string()],
            relationship_status: Some("married".to_string()),
            bio: None,
            photo_url: None,
            created_at: None,
        }
    }

    fn filters(zip: &str, radius: u16, limit: usize) -> SearchFilters {
        SearchFilters {
            zip_code: zip.to_string(),
            radius_miles: radius,
            limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_sorted_by_distance() {
        let outcome = searcher().rank(
            "me",
            &filters("10001", 25, 50),
            vec![
                candidate("far", "11201"),
                candidate("near", "10003"),
                candidate("mid", "07030"),
            ],
        );

        let uids: Vec<&str> = outcome
            .results
            .iter()
            .map(|r| r.profile.uid.as_str())
            .collect();
        assert_eq!(uids, vec!["near", "mid", "far"]);
        assert!(!outcome.has_more);
    }

    #[test]
    fn test_rank_excludes_requester() {
        let outcome = searcher().rank(
            "me",
            &filters("10001", 25, 50),
            vec![candidate("me", "10001"), candidate("other", "10003")],
        );

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].profile.uid, "other");
    }

    #[test]
    fn test_rank_drops_out_of_radius() {
        // LA is ~2448 miles out; never visible from NYC at any radius option
        let outcome = searcher().rank(
            "me",
            &filters("10001", 100, 50),
            vec![candidate("la", "90001"), candidate("near", "10003")],
        );

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].profile.uid, "near");
    }

    #[test]
    fn test_rank_drops_unresolvable_zip() {
        let outcome = searcher().rank(
            "me",
            &filters("10001", 100, 50),
            vec![candidate("ghost", "99999"), candidate("near", "10003")],
        );

        assert_eq!(outcome.results.len(), 1);
        for result in &outcome.results {
            assert!(result.distance.is_some());
        }
    }

    #[test]
    fn test_rank_unknown_search_zip_yields_empty() {
        let outcome = searcher().rank(
            "me",
            &filters("99999", 100, 50),
            vec![candidate("a", "10003"), candidate("b", "10001")],
        );

        assert!(outcome.results.is_empty());
        assert!(!outcome.has_more);
    }

    #[test]
    fn test_has_more_and_truncation() {
        let candidates: Vec<ParentProfile> = (0..6)
            .map(|i| candidate(&format!("u{}", i), "10003"))
            .collect();

        let outcome = searcher().rank("me", &filters("10001", 25, 5), candidates);

        assert_eq!(outcome.results.len(), 5);
        assert!(outcome.has_more);

        // Exactly at the limit: no more pages
        let candidates: Vec<ParentProfile> = (0..5)
            .map(|i| candidate(&format!("u{}", i), "10003"))
            .collect();
        let outcome = searcher().rank("me", &filters("10001", 25, 5), candidates);
        assert!(!outcome.has_more);
    }

    #[test]
    fn test_rank_or_semantics_for_interests() {
        let mut only_second = candidate("b-only", "10003");
        only_second.interests = vec!["B".to_string()];

        let mut neither = candidate("neither", "10003");
        neither.interests = vec!["C".to_string()];

        let mut filters = filters("10001", 25, 50);
        filters.interests = vec!["A".to_string(), "B".to_string()];

        let outcome = searcher().rank("me", &filters, vec![only_second, neither]);

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].profile.uid, "b-only");
    }
}
