use crate::core::{
    brand_match,
    creator_match::{self, CpvRange, CreatorRequest},
    diversify::diversify,
    filters::{filter_eligible_brands, filter_eligible_creators},
};
use crate::models::{Brand, BrandBrief, BrandWeights, Creator, CreatorBrief, CreatorWeights, MatchResult};

/// Main matching orchestrator for both directions of the marketplace
///
/// # Pipeline Stages
/// 1. Eligibility filter (budget, platform, content safety)
/// 2. Weighted multi-factor scoring
/// 3. Sort by match score, descending
/// 4. Diversification of the top three (brand→creator only)
///
/// The matcher holds no catalog state; callers pass the candidate pool so
/// concurrent requests never share anything mutable.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    creator_weights: CreatorWeights,
    brand_weights: BrandWeights,
}

impl Matcher {
    pub fn new(creator_weights: CreatorWeights, brand_weights: BrandWeights) -> Self {
        Self {
            creator_weights,
            brand_weights,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(CreatorWeights::default(), BrandWeights::default())
    }

    /// Rank creators for a brand brief
    ///
    /// # Arguments
    /// * `brief` - Validated brand brief. Inverted `targetAges` are scored as
    ///   the range between the two ages
    /// * `catalog` - Creator pool to search
    ///
    /// # Returns
    /// Scored creators, best first, empty when none are eligible
    pub fn score_creators_for_brand(
        &self,
        brief: &BrandBrief,
        catalog: &[Creator],
    ) -> Vec<MatchResult<Creator>> {
        let eligible = filter_eligible_creators(brief, catalog);

        tracing::debug!(
            "{} of {} creators eligible for {} brief",
            eligible.len(),
            catalog.len(),
            brief.category
        );

        // An empty pool has no CPV range and short-circuits here
        let Some(cpv) = CpvRange::from_pool(eligible.iter().copied()) else {
            return Vec::new();
        };

        let request = CreatorRequest { brief, cpv };
        let scorer = creator_match::scorer(&self.creator_weights);
        let mut ranked = scorer.rank(&request, eligible);

        if let Some(index) = diversify(&mut ranked) {
            tracing::debug!("Promoted creator from position {} for diversification", index + 1);
        }

        ranked
    }

    /// Rank brands for a creator brief
    ///
    /// No diversification pass is applied in this direction.
    pub fn score_brands_for_creator(
        &self,
        brief: &CreatorBrief,
        catalog: &[Brand],
    ) -> Vec<MatchResult<Brand>> {
        let eligible = filter_eligible_brands(brief, catalog);

        tracing::debug!(
            "{} of {} brands eligible for creator brief",
            eligible.len(),
            catalog.len()
        );

        if eligible.is_empty() {
            return Vec::new();
        }

        brand_match::scorer(&self.brand_weights).rank(brief, eligible)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
