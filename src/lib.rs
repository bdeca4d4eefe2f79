//! ZipParents Search - proximity search service for the ZipParents community
//!
//! This library implements the zip-code proximity search used by ZipParents:
//! a curated zip-to-coordinate lookup, a haversine distance calculator, a
//! proximity filter, and the search pipeline that ranks parent profiles by
//! distance from a target zip code.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_miles, Searcher, ZipDatabase};
pub use crate::models::{
    ParentProfile, SearchFilters, SearchParentsRequest, SearchParentsResponse, SearchResult,
};
