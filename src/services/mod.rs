// Service exports
pub mod analytics;
pub mod billing;
pub mod catalog;

pub use analytics::AnalyticsGenerator;
pub use billing::{compute_gst, validation_issues, DEFAULT_GST_RATE_PERCENT};
pub use catalog::{Catalog, CatalogError, InMemoryCatalog};
