use crate::models::{Brand, Creator};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Sample catalog shipped with the service
const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog entry {id}: {reason}")]
    InvalidEntry { id: String, reason: String },
}

impl CatalogError {
    fn invalid(id: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidEntry {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Read-only source of candidates for both matching directions
///
/// Loaded once at start-up and shared across request handlers.
pub trait Catalog: Send + Sync {
    fn creators(&self) -> &[Creator];
    fn brands(&self) -> &[Brand];
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    #[serde(default)]
    creators: Vec<Creator>,
    #[serde(default)]
    brands: Vec<Brand>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting entries the scorers cannot handle
    pub fn new(creators: Vec<Creator>, brands: Vec<Brand>) -> Result<Self, CatalogError> {
        let catalog = Self { creators, brands };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a `{ "creators": [...], "brands": [...] }` document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: InMemoryCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The bundled five-creator, two-brand sample catalog
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for creator in &self.creators {
            if !seen.insert(creator.id.as_str()) {
                return Err(CatalogError::invalid(&creator.id, "duplicate id"));
            }
            if !(creator.avg_views > 0.0) {
                return Err(CatalogError::invalid(&creator.id, "avgViews must be positive"));
            }
            if !(creator.base_price_inr > 0.0) {
                return Err(CatalogError::invalid(&creator.id, "basePriceINR must be positive"));
            }
            if !(0.0..=1.0).contains(&creator.engagement_rate) {
                return Err(CatalogError::invalid(&creator.id, "engagementRate must be within [0, 1]"));
            }
        }

        seen.clear();
        for brand in &self.brands {
            if !seen.insert(brand.id.as_str()) {
                return Err(CatalogError::invalid(&brand.id, "duplicate id"));
            }
            if !(brand.budget_inr > 0.0) {
                return Err(CatalogError::invalid(&brand.id, "budgetINR must be positive"));
            }
            if brand.target_ages[0] > brand.target_ages[1] {
                return Err(CatalogError::invalid(&brand.id, "targetAges is inverted"));
            }
        }

        Ok(())
    }
}

impl Catalog for InMemoryCatalog {
    fn creators(&self) -> &[Creator] {
        &self.creators
    }

    fn brands(&self) -> &[Brand] {
        &self.brands
    }
}
