// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ParentProfile, SearchFilters, SearchResult, ZipCoordinate, ZipDistance,
    DEFAULT_RADIUS_MILES, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, RADIUS_OPTIONS_MILES,
};
pub use requests::SearchParentsRequest;
pub use responses::{ErrorResponse, HealthResponse, SearchParentsResponse};
