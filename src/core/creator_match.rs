//! Brand→creator component scorers
//!
//! Four independent factors, each in 0..=100:
//! relevance, audience fit, performance and constraints.

use crate::core::age::AgeRange;
use crate::core::scoring::{Component, ComponentScore, WeightedScorer};
use crate::models::{BrandBrief, Creator, CreatorWeights};

/// Engagement rate above which the performance reason cites engagement
const HIGH_ENGAGEMENT_RATE: f64 = 0.05;

/// Each half of the performance score is worth at most this much
const PERFORMANCE_HALF: f64 = 50.0;

/// Min/max cost-per-view across the eligible pool of one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpvRange {
    pub min: f64,
    pub max: f64,
}

impl CpvRange {
    /// Scan the eligible pool, `None` when it is empty
    pub fn from_pool<'a, I>(pool: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Creator>,
    {
        pool.into_iter()
            .map(Creator::cost_per_view)
            .fold(None, |range, cpv| match range {
                None => Some(CpvRange { min: cpv, max: cpv }),
                Some(CpvRange { min, max }) => Some(CpvRange {
                    min: min.min(cpv),
                    max: max.max(cpv),
                }),
            })
    }

    /// Inverted min-max normalisation onto 0..=50
    ///
    /// The cheapest creator scores 50, the most expensive 0. A degenerate
    /// range where every CPV is equal scores 50 for everyone.
    #[inline]
    pub fn normalized_score(&self, cpv: f64) -> f64 {
        if self.max == self.min {
            return PERFORMANCE_HALF;
        }
        ((self.max - cpv) / (self.max - self.min)) * PERFORMANCE_HALF
    }
}

/// Context shared by every creator scored for one brand brief
#[derive(Debug, Clone, Copy)]
pub struct CreatorRequest<'a> {
    pub brief: &'a BrandBrief,
    pub cpv: CpvRange,
}

/// The four brand→creator components with their weights
pub fn scorer<'a>(weights: &CreatorWeights) -> WeightedScorer<CreatorRequest<'a>, Creator> {
    WeightedScorer::new(vec![
        Component { name: "relevance", weight: weights.relevance, score: relevance },
        Component { name: "audienceFit", weight: weights.audience_fit, score: audience_fit },
        Component { name: "performance", weight: weights.performance, score: performance },
        Component { name: "constraints", weight: weights.constraints, score: constraints },
    ])
}

/// Category experience: proven campaign history beats topical overlap
pub fn relevance(request: &CreatorRequest<'_>, creator: &Creator) -> ComponentScore {
    let category = &request.brief.category;

    if creator.past_brand_categories.contains(category) {
        ComponentScore::new(100.0, format!("Proven experience in {}", category))
    } else if creator.verticals.contains(category) {
        ComponentScore::new(70.0, format!("Relevant Vertical: {}", category))
    } else {
        ComponentScore::new(0.0, "No direct relevance")
    }
}

/// Average of the location share and the age-bracket fit
pub fn audience_fit(request: &CreatorRequest<'_>, creator: &Creator) -> ComponentScore {
    let brief = request.brief;

    let location_share: f64 = brief
        .target_locations
        .iter()
        .filter_map(|location| creator.audience_geo.get(location))
        // An empty f64 sum is -0.0, which would print as "-0%"
        .fold(0.0, |total, share| total + share);
    let location_score = (location_share * 100.0).min(100.0);

    let age_score = age_fit(&creator.audience_age, AgeRange::from_bounds(brief.target_ages));

    ComponentScore::new(
        (location_score + age_score) / 2.0,
        format!("{}% audience match in target cities", location_score.round() as u32),
    )
}

/// Weighted age overlap, 0..=100
///
/// Each bracket contributes its audience fraction scaled by how much of it
/// lies inside the target, measured against the smaller of the two ranges.
/// Malformed bracket labels contribute nothing.
pub fn age_fit<'a, I>(audience_age: I, target: AgeRange) -> f64
where
    I: IntoIterator<Item = (&'a String, &'a f64)>,
{
    audience_age
        .into_iter()
        .filter_map(|(label, fraction)| match label.parse::<AgeRange>() {
            Ok(bracket) => Some((bracket, *fraction)),
            Err(e) => {
                tracing::warn!("Skipping audience age bracket: {}", e);
                None
            }
        })
        .filter_map(|(bracket, fraction)| {
            bracket.overlap(&target).map(|overlap| {
                let denominator = bracket.size().min(target.size()) as f64;
                fraction * (overlap.size() as f64 / denominator) * 100.0
            })
        })
        .sum()
}

/// Value for money plus engagement, each half worth up to 50
pub fn performance(request: &CreatorRequest<'_>, creator: &Creator) -> ComponentScore {
    let cpv_score = request.cpv.normalized_score(creator.cost_per_view());
    let engagement_score = (creator.engagement_rate * 1000.0).min(PERFORMANCE_HALF);

    let reason = if creator.engagement_rate > HIGH_ENGAGEMENT_RATE {
        format!("High {:.1}% Engagement", creator.engagement_rate * 100.0)
    } else {
        "Great value for money (Low CPV)".to_string()
    };

    ComponentScore::new(cpv_score + engagement_score, reason)
}

/// Content-safety constraint, already enforced by the eligibility filter
pub fn constraints(request: &CreatorRequest<'_>, creator: &Creator) -> ComponentScore {
    if request.brief.no_adult_content && creator.safety_flags.adult {
        ComponentScore::new(0.0, "Violates content guidelines")
    } else {
        ComponentScore::new(100.0, "Meets all constraints")
    }
}
