use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::{BrandWeights, CreatorWeights};
use crate::services::DEFAULT_GST_RATE_PERCENT;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub billing: BillingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON catalog file, the bundled sample is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub creator_weights: CreatorWeightsConfig,
    #[serde(default)]
    pub brand_weights: BrandWeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatorWeightsConfig {
    #[serde(default = "default_relevance_weight")]
    pub relevance: f64,
    #[serde(default = "default_audience_fit_weight")]
    pub audience_fit: f64,
    #[serde(default = "default_performance_weight")]
    pub performance: f64,
    #[serde(default = "default_constraints_weight")]
    pub constraints: f64,
}

impl Default for CreatorWeightsConfig {
    fn default() -> Self {
        Self {
            relevance: default_relevance_weight(),
            audience_fit: default_audience_fit_weight(),
            performance: default_performance_weight(),
            constraints: default_constraints_weight(),
        }
    }
}

impl From<&CreatorWeightsConfig> for CreatorWeights {
    fn from(config: &CreatorWeightsConfig) -> Self {
        Self {
            relevance: config.relevance,
            audience_fit: config.audience_fit,
            performance: config.performance,
            constraints: config.constraints,
        }
    }
}

fn default_relevance_weight() -> f64 { 0.4 }
fn default_audience_fit_weight() -> f64 { 0.3 }
fn default_performance_weight() -> f64 { 0.2 }
fn default_constraints_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct BrandWeightsConfig {
    #[serde(default = "default_category_match_weight")]
    pub category_match: f64,
    #[serde(default = "default_budget_fit_weight")]
    pub budget_fit: f64,
    #[serde(default = "default_collaboration_match_weight")]
    pub collaboration_match: f64,
    #[serde(default = "default_audience_alignment_weight")]
    pub audience_alignment: f64,
}

impl Default for BrandWeightsConfig {
    fn default() -> Self {
        Self {
            category_match: default_category_match_weight(),
            budget_fit: default_budget_fit_weight(),
            collaboration_match: default_collaboration_match_weight(),
            audience_alignment: default_audience_alignment_weight(),
        }
    }
}

impl From<&BrandWeightsConfig> for BrandWeights {
    fn from(config: &BrandWeightsConfig) -> Self {
        Self {
            category_match: config.category_match,
            budget_fit: config.budget_fit,
            collaboration_match: config.collaboration_match,
            audience_alignment: config.audience_alignment,
        }
    }
}

fn default_category_match_weight() -> f64 { 0.4 }
fn default_budget_fit_weight() -> f64 { 0.3 }
fn default_collaboration_match_weight() -> f64 { 0.2 }
fn default_audience_alignment_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct BillingSettings {
    #[serde(default = "default_gst_rate_percent")]
    pub gst_rate_percent: f64,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            gst_rate_percent: default_gst_rate_percent(),
        }
    }
}

fn default_gst_rate_percent() -> f64 { DEFAULT_GST_RATE_PERCENT }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with MATCHBILL__)
    /// 4. `PORT`, for parity with common hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHBILL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MATCHBILL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings: Self = with_port_override(builder)?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject weight sets that are negative or do not sum to 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        let creator = &self.scoring.creator_weights;
        check_weights(
            "scoring.creator_weights",
            &[
                ("relevance", creator.relevance),
                ("audience_fit", creator.audience_fit),
                ("performance", creator.performance),
                ("constraints", creator.constraints),
            ],
        )?;

        let brand = &self.scoring.brand_weights;
        check_weights(
            "scoring.brand_weights",
            &[
                ("category_match", brand.category_match),
                ("budget_fit", brand.budget_fit),
                ("collaboration_match", brand.collaboration_match),
                ("audience_alignment", brand.audience_alignment),
            ],
        )
    }

    pub fn creator_weights(&self) -> CreatorWeights {
        CreatorWeights::from(&self.scoring.creator_weights)
    }

    pub fn brand_weights(&self) -> BrandWeights {
        BrandWeights::from(&self.scoring.brand_weights)
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

fn check_weights(section: &str, weights: &[(&str, f64)]) -> Result<(), ConfigError> {
    for (name, weight) in weights {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(ConfigError::Message(format!(
                "{}.{} must be a non-negative number, got {}",
                section, name, weight
            )));
        }
    }

    let total: f64 = weights.iter().map(|(_, weight)| weight).sum();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::Message(format!(
            "{} must sum to 1, got {}",
            section, total
        )));
    }
    Ok(())
}

fn with_port_override(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    match std::env::var("PORT").ok().and_then(|port| port.parse::<u16>().ok()) {
        Some(port) => builder.set_override("server.port", port as i64),
        None => Ok(builder),
    }
}
