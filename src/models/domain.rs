use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content creator from the catalog
///
/// Candidate in the brand→creator flow. Treated as read-only reference data
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "_id")]
    pub id: String,
    pub handle: String,
    /// Category tags, first entry is the primary vertical
    pub verticals: Vec<String>,
    pub platforms: Vec<String>,
    /// Location name → fraction of audience
    #[serde(rename = "audienceGeo", default)]
    pub audience_geo: BTreeMap<String, f64>,
    /// Age bracket label ("18-24", "45+") → fraction of audience
    #[serde(rename = "audienceAge", default)]
    pub audience_age: BTreeMap<String, f64>,
    #[serde(rename = "avgViews")]
    pub avg_views: f64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    #[serde(rename = "pastBrandCategories", default)]
    pub past_brand_categories: Vec<String>,
    #[serde(rename = "contentTone", default)]
    pub content_tone: Vec<String>,
    #[serde(rename = "safetyFlags", default)]
    pub safety_flags: SafetyFlags,
    #[serde(rename = "basePriceINR")]
    pub base_price_inr: f64,
}

impl Creator {
    /// Dominant category used by the diversification pass
    pub fn primary_vertical(&self) -> Option<&str> {
        self.verticals.first().map(String::as_str)
    }

    /// Cost per view in INR, lower is better value
    #[inline]
    pub fn cost_per_view(&self) -> f64 {
        self.base_price_inr / self.avg_views
    }

    /// Location with the largest audience share
    pub fn top_location(&self) -> Option<&str> {
        self.audience_geo
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(location, _)| location.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyFlags {
    #[serde(default)]
    pub adult: bool,
}

/// Brand from the catalog
///
/// Candidate in the creator→brand flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "budgetINR")]
    pub budget_inr: f64,
    #[serde(rename = "targetLocations", default)]
    pub target_locations: Vec<String>,
    /// Inclusive [min, max] age range
    #[serde(rename = "targetAges")]
    pub target_ages: [u32; 2],
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub tone: Vec<String>,
    pub platforms: Vec<String>,
    #[serde(default)]
    pub constraints: BrandConstraints,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConstraints {
    #[serde(rename = "noAdultContent", default)]
    pub no_adult_content: bool,
    #[serde(rename = "timelineDays", default, skip_serializing_if = "Option::is_none")]
    pub timeline_days: Option<u32>,
    #[serde(rename = "allowsAdultContent", default)]
    pub allows_adult_content: bool,
}

/// A scored candidate
///
/// The candidate's own fields are flattened next to the score so the JSON
/// shape matches the catalog entity with three extra keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult<T> {
    #[serde(flatten)]
    pub candidate: T,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub reasons: Vec<String>,
    pub breakdown: BTreeMap<String, u8>,
}

/// Component weights for the brand→creator pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatorWeights {
    pub relevance: f64,
    pub audience_fit: f64,
    pub performance: f64,
    pub constraints: f64,
}

impl Default for CreatorWeights {
    fn default() -> Self {
        Self {
            relevance: 0.4,
            audience_fit: 0.3,
            performance: 0.2,
            constraints: 0.1,
        }
    }
}

/// Component weights for the creator→brand pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandWeights {
    pub category_match: f64,
    pub budget_fit: f64,
    pub collaboration_match: f64,
    pub audience_alignment: f64,
}

impl Default for BrandWeights {
    fn default() -> Self {
        Self {
            category_match: 0.4,
            budget_fit: 0.3,
            collaboration_match: 0.2,
            audience_alignment: 0.1,
        }
    }
}
