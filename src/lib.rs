//! Matchbill - brand and creator matchmaking service
//!
//! Ranks creators for a brand brief and brands for a creator brief with
//! weighted, explainable scores. Each result carries a 0-100 match score,
//! up to three human-readable reasons and a per-component breakdown.
//! The HTTP layer adds billing validation and mock dashboard analytics.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{AgeRange, Matcher, WeightedScorer};
pub use models::{Brand, BrandBrief, Creator, CreatorBrief, MatchResult, CreatorWeights, BrandWeights};
pub use services::{Catalog, InMemoryCatalog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = InMemoryCatalog::sample().unwrap();
        let matcher = Matcher::default();

        let brief = BrandBrief {
            category: "Fitness".to_string(),
            target_locations: vec!["Mumbai".to_string()],
            target_ages: [18, 34],
            platforms: vec!["Instagram".to_string()],
            budget_inr: 500000.0,
            no_adult_content: true,
            goals: vec![],
            tone: vec![],
            timeline_days: None,
        };

        let matches = matcher.score_creators_for_brand(&brief, catalog.creators());
        assert!(!matches.is_empty());
    }
}
