use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Searcher;
use crate::models::{ErrorResponse, HealthResponse, SearchParentsRequest, SearchParentsResponse};
use crate::services::FirestoreClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub firestore: Arc<FirestoreClient>,
    pub searcher: Searcher,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search/parents", web::post().to(search_parents));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let backend_healthy = state.firestore.health_check().await.unwrap_or(false);

    let status = if backend_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Parent search endpoint
///
/// POST /api/v1/search/parents
///
/// Request body:
/// ```json
/// {
///   "requesterId": "string",
///   "zipCode": "10001",
///   "radiusMiles": 25,
///   "ageRange": "30-39",
///   "interests": ["string"],
///   "childrenAgeRanges": ["string"],
///   "relationshipStatus": "string",
///   "limit": 50
/// }
/// ```
async fn search_parents(
    state: web::Data<AppState>,
    req: web::Json<SearchParentsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if !req.radius_is_valid() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid radius".to_string(),
            message: "radiusMiles must be one of: 5, 10, 25, 50, 100".to_string(),
            status_code: 400,
        });
    }

    let requester_id = req.requester_id.clone();
    let filters = req.into_inner().into_filters();

    tracing::info!(
        "Searching parents near {} (radius: {} mi, limit: {}) for {}",
        filters.zip_code,
        filters.radius_miles,
        filters.limit,
        requester_id
    );

    let candidates = match state.firestore.query_profiles(&requester_id, &filters).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query profiles for {}: {}", requester_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to query profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!(
        "Fetched {} candidates for {}",
        candidates.len(),
        requester_id
    );

    let outcome = state.searcher.rank(&requester_id, &filters, candidates);

    let response = SearchParentsResponse {
        total: outcome.results.len(),
        has_more: outcome.has_more,
        results: outcome.results,
    };

    tracing::info!(
        "Returning {} results for {} (from {} candidates, hasMore: {})",
        response.total,
        requester_id,
        outcome.total_candidates,
        response.has_more
    );

    HttpResponse::Ok().json(response)
}
