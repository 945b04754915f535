use actix_web::{web, HttpResponse, Responder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::models::{
    missing_fields, BrandBrief, CreatorBrief, ErrorResponse, HealthResponse, MatchResponse,
    MissingFieldsResponse,
};
use crate::services::Catalog;
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub matcher: Matcher,
    pub gst_rate_percent: f64,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/match", web::post().to(match_creators))
        .route("/match/brands", web::post().to(match_brands));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Match & Bill API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find creators for a brand brief
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "category": "Fashion",
///   "targetLocations": ["Mumbai"],
///   "targetAges": [18, 30],
///   "platforms": ["Instagram"],
///   "budgetINR": 90000
/// }
/// ```
async fn match_creators(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> impl Responder {
    let brief: BrandBrief = match parse_brief(&body, BrandBrief::REQUIRED_FIELDS) {
        Ok(brief) => brief,
        Err(response) => return response,
    };

    if brief.target_ages[0] > brief.target_ages[1] {
        tracing::warn!("Rejected brief with inverted targetAges {:?}", brief.target_ages);
        return bad_request("invalid_request", "targetAges must be [min, max] with min <= max");
    }

    let matches = state
        .matcher
        .score_creators_for_brand(&brief, state.catalog.creators());

    tracing::info!(
        "Creator match for {} brief: {} results from {} creators",
        brief.category,
        matches.len(),
        state.catalog.creators().len()
    );

    HttpResponse::Ok().json(MatchResponse::new(matches))
}

/// Find brands for a creator brief
///
/// POST /api/match/brands
async fn match_brands(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> impl Responder {
    let brief: CreatorBrief = match parse_brief(&body, CreatorBrief::REQUIRED_FIELDS) {
        Ok(brief) => brief,
        Err(response) => return response,
    };

    if brief.min_budget_inr > brief.max_budget_inr {
        tracing::warn!(
            "Rejected creator brief with inverted budget range {}..{}",
            brief.min_budget_inr,
            brief.max_budget_inr
        );
        return bad_request("invalid_request", "minBudgetINR must not exceed maxBudgetINR");
    }

    let matches = state
        .matcher
        .score_brands_for_creator(&brief, state.catalog.brands());

    tracing::info!(
        "Brand match for {:?}: {} results from {} brands",
        brief.categories,
        matches.len(),
        state.catalog.brands().len()
    );

    HttpResponse::Ok().json(MatchResponse::new(matches))
}

/// Reject missing fields first, then deserialize into the typed brief
fn parse_brief<T: DeserializeOwned>(body: &Value, required: &[&str]) -> Result<T, HttpResponse> {
    let missing = missing_fields(body, required);
    if !missing.is_empty() {
        tracing::warn!("Rejected brief, missing fields: {:?}", missing);
        return Err(HttpResponse::BadRequest().json(MissingFieldsResponse {
            error: "Missing required fields".to_string(),
            missing_fields: missing,
        }));
    }

    serde_json::from_value(body.clone()).map_err(|e| {
        tracing::warn!("Rejected malformed brief: {}", e);
        bad_request("invalid_request", &format!("Invalid brief: {}", e))
    })
}

fn bad_request(error: &str, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 400,
    })
}
