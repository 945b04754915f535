// Route exports
pub mod analytics;
pub mod billing;
pub mod errors;
pub mod matches;

pub use errors::{handle_json_payload_error, handle_query_payload_error, JsonError};
pub use matches::AppState;

use actix_web::{web, HttpRequest, HttpResponse};
use crate::models::NotFoundResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(matches::health_check))
        .service(
            web::scope("/api")
                .configure(matches::configure)
                .configure(billing::configure)
                .configure(analytics::configure),
        )
        .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse {
        error: "Route not found".to_string(),
        path: req.path().to_string(),
    })
}
