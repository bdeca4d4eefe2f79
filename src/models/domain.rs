use serde::{Deserialize, Serialize};

/// Radius options offered by the search UI, in miles
pub const RADIUS_OPTIONS_MILES: [u16; 5] = [5, 10, 25, 50, 100];

/// Default search radius in miles
pub const DEFAULT_RADIUS_MILES: u16 = 25;

/// Default number of results per search
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Hard cap on results per search
pub const MAX_SEARCH_LIMIT: usize = 100;

/// A zip code with its geographic center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipCoordinate {
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub lat: f64,
    pub lng: f64,
}

/// Parent profile as stored in the profile collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentProfile {
    pub uid: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "ageRange", default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "childrenAgeRanges", default)]
    pub children_age_ranges: Vec<String>,
    #[serde(rename = "relationshipStatus", default)]
    pub relationship_status: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Filters for one search request
#[derive(Debug, Clone)]
pub struct SearchFilters {
    pub zip_code: String,
    pub radius_miles: u16,
    pub age_range: Option<String>,
    pub interests: Vec<String>,
    pub children_age_ranges: Vec<String>,
    pub relationship_status: Option<String>,
    pub limit: usize,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            zip_code: String::new(),
            radius_miles: DEFAULT_RADIUS_MILES,
            age_range: None,
            interests: vec![],
            children_age_ranges: vec![],
            relationship_status: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// A ranked search hit
///
/// `distance` is `None` only when a zip code could not be resolved; such
/// entries never survive into a radius-bounded response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub profile: ParentProfile,
    #[serde(rename = "distanceMiles")]
    pub distance: Option<f64>,
}

/// A candidate zip code with its distance from the search center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipDistance {
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(rename = "distanceMiles")]
    pub distance: f64,
}
