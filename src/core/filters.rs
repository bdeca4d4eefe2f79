use crate::models::{ParentProfile, SearchFilters};

/// Check a profile against the request's list filters in memory
///
/// The backing store can apply only one array-membership predicate per
/// query, so the full `interests` and `children_age_ranges` lists are
/// re-applied here. Both use ANY-overlap semantics: a profile passes a
/// list filter when at least one requested element appears in the
/// profile's own list.
#[inline]
pub fn matches_list_filters(profile: &ParentProfile, filters: &SearchFilters) -> bool {
    if !filters.interests.is_empty()
        && !any_overlap(&filters.interests, &profile.interests)
    {
        return false;
    }

    if !filters.children_age_ranges.is_empty()
        && !any_overlap(&filters.children_age_ranges, &profile.children_age_ranges)
    {
        return false;
    }

    true
}

/// Check a profile against single-valued filters
///
/// These are also sent server-side; the re-check keeps the in-memory
/// pipeline correct regardless of what the store returned.
#[inline]
pub fn matches_scalar_filters(profile: &ParentProfile, filters: &SearchFilters) -> bool {
    if let Some(age_range) = &filters.age_range {
        if profile.age_range.as_deref() != Some(age_range.as_str()) {
            return false;
        }
    }

    if let Some(status) = &filters.relationship_status {
        if profile.relationship_status.as_deref() != Some(status.as_str()) {
            return false;
        }
    }

    true
}

#[inline]
fn any_overlap(wanted: &[String], actual: &[String]) -> bool {
    wanted.iter().any(|w| actual.contains(w))
}
