use serde::{Deserialize, Serialize};

use crate::models::domain::SearchResult;

/// Response for the parent search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParentsResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
