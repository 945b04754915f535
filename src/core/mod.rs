// Core algorithm exports
pub mod age;
pub mod brand_match;
pub mod creator_match;
pub mod diversify;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use age::{AgeRange, AgeBracketError};
pub use diversify::{diversify, DIVERSIFICATION_REASON};
pub use filters::{filter_eligible_creators, filter_eligible_brands, is_eligible_creator, is_eligible_brand};
pub use matcher::Matcher;
pub use scoring::{ComponentScore, Component, WeightedScorer, Evaluation};
