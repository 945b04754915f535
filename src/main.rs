use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use matchbill::config::{LoggingSettings, Settings};
use matchbill::core::Matcher;
use matchbill::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use matchbill::services::{Catalog, InMemoryCatalog};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // LOG_LEVEL/LOG_FORMAT win over the config files, RUST_LOG over both
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    init_tracing(&settings.logging);

    info!("Starting matchmaking service...");

    let catalog = match &settings.catalog.path {
        Some(path) => InMemoryCatalog::load(path),
        None => InMemoryCatalog::sample(),
    }
    .map_err(|e| {
        error!("Failed to load catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!(
        "Catalog loaded: {} creators, {} brands (source: {})",
        catalog.creators().len(),
        catalog.brands().len(),
        settings.catalog.path.as_deref().unwrap_or("bundled sample")
    );

    // Initialize matcher with configured weights
    let matcher = Matcher::new(settings.creator_weights(), settings.brand_weights());

    info!("Matcher initialized with weights: {:?}", matcher);

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        matcher,
        gst_rate_percent: settings.billing.gst_rate_percent,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
