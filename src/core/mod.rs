// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod proximity;
pub mod search;
pub mod zipcodes;

pub use distance::haversine_miles;
pub use filters::{matches_list_filters, matches_scalar_filters};
pub use proximity::{distance_between_zips, filter_by_proximity, within_radius};
pub use search::{SearchOutcome, Searcher};
pub use zipcodes::ZipDatabase;
