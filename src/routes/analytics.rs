use actix_web::{web, HttpResponse, Responder};
use crate::models::{BrandAnalyticsQuery, CreatorAnalyticsQuery};
use crate::routes::matches::AppState;
use crate::services::AnalyticsGenerator;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analytics/overview", web::get().to(overview))
        .route("/analytics/creators", web::get().to(creators))
        .route("/analytics/brands", web::get().to(brands))
        .route("/analytics/trending", web::get().to(trending));
}

// Mock figures are regenerated on every call

async fn overview(state: web::Data<AppState>) -> impl Responder {
    let mut generator = AnalyticsGenerator::new(rand::thread_rng());
    HttpResponse::Ok().json(generator.overview(state.catalog.as_ref()))
}

/// GET /api/analytics/creators?category=&location=&platform=&sortBy=&order=
async fn creators(
    state: web::Data<AppState>,
    query: web::Query<CreatorAnalyticsQuery>,
) -> impl Responder {
    let mut generator = AnalyticsGenerator::new(rand::thread_rng());
    let response = generator.creators(state.catalog.as_ref(), &query);
    tracing::debug!("Creator analytics: {} rows", response.total_count);
    HttpResponse::Ok().json(response)
}

/// GET /api/analytics/brands?category=&location=&sortBy=&order=
async fn brands(
    state: web::Data<AppState>,
    query: web::Query<BrandAnalyticsQuery>,
) -> impl Responder {
    let mut generator = AnalyticsGenerator::new(rand::thread_rng());
    let response = generator.brands(state.catalog.as_ref(), &query);
    tracing::debug!("Brand analytics: {} rows", response.total_count);
    HttpResponse::Ok().json(response)
}

async fn trending(state: web::Data<AppState>) -> impl Responder {
    let mut generator = AnalyticsGenerator::new(rand::thread_rng());
    HttpResponse::Ok().json(generator.trending(state.catalog.as_ref()))
}
