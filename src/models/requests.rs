use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    SearchFilters, DEFAULT_RADIUS_MILES, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT,
    RADIUS_OPTIONS_MILES,
};

/// Request to search for parents near a zip code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchParentsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "requester_id", rename = "requesterId")]
    pub requester_id: String,
    #[validate(regex(path = *ZIP_CODE_RE))]
    #[serde(alias = "zip_code", rename = "zipCode")]
    pub zip_code: String,
    #[serde(default = "default_radius")]
    #[serde(alias = "radius_miles", rename = "radiusMiles")]
    pub radius_miles: u16,
    #[serde(alias = "age_range", rename = "ageRange", default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(alias = "children_age_ranges", rename = "childrenAgeRanges", default)]
    pub children_age_ranges: Vec<String>,
    #[serde(alias = "relationship_status", rename = "relationshipStatus", default)]
    pub relationship_status: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_radius() -> u16 {
    DEFAULT_RADIUS_MILES
}

fn default_limit() -> u16 {
    DEFAULT_SEARCH_LIMIT as u16
}

static ZIP_CODE_RE: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^\d{5}$").unwrap());

impl SearchParentsRequest {
    /// True iff the radius is one of the enumerated options
    pub fn radius_is_valid(&self) -> bool {
        RADIUS_OPTIONS_MILES.contains(&self.radius_miles)
    }

    /// Convert into core filters, capping the limit
    pub fn into_filters(self) -> SearchFilters {
        SearchFilters {
            zip_code: self.zip_code,
            radius_miles: self.radius_miles,
            age_range: self.age_range,
            interests: self.interests,
            children_age_ranges: self.children_age_ranges,
            relationship_status: self.relationship_status,
            limit: (self.limit as usize).min(MAX_SEARCH_LIMIT),
        }
    }
}
