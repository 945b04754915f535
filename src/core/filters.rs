use crate::models::{Brand, BrandBrief, Creator, CreatorBrief};

/// Whether two platform lists share at least one entry
#[inline]
fn shares_platform(wanted: &[String], offered: &[String]) -> bool {
    wanted.iter().any(|platform| offered.contains(platform))
}

/// Check if a creator passes the hard constraints of a brand brief
///
/// Budget, platform and content-safety rules must all hold.
#[inline]
pub fn is_eligible_creator(brief: &BrandBrief, creator: &Creator) -> bool {
    // Asking price within budget
    if creator.base_price_inr > brief.budget_inr {
        return false;
    }

    if !shares_platform(&brief.platforms, &creator.platforms) {
        return false;
    }

    if brief.no_adult_content && creator.safety_flags.adult {
        return false;
    }

    true
}

/// Check if a brand passes the hard constraints of a creator brief
#[inline]
pub fn is_eligible_brand(brief: &CreatorBrief, brand: &Brand) -> bool {
    if brand.budget_inr < brief.min_budget_inr || brand.budget_inr > brief.max_budget_inr {
        return false;
    }

    if !shares_platform(&brief.platforms, &brand.platforms) {
        return false;
    }

    if brief.exclusions.no_adult_content && brand.constraints.allows_adult_content {
        return false;
    }

    true
}

/// Order-preserving subset of the creator catalog eligible for a brand brief
pub fn filter_eligible_creators<'a>(brief: &BrandBrief, creators: &'a [Creator]) -> Vec<&'a Creator> {
    creators
        .iter()
        .filter(|creator| is_eligible_creator(brief, creator))
        .collect()
}

/// Order-preserving subset of the brand catalog eligible for a creator brief
pub fn filter_eligible_brands<'a>(brief: &CreatorBrief, brands: &'a [Brand]) -> Vec<&'a Brand> {
    brands
        .iter()
        .filter(|brand| is_eligible_brand(brief, brand))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AudienceDemographics, BrandConstraints, Exclusions, SafetyFlags};
    use std::collections::BTreeMap;

    fn create_creator(id: &str, price: f64, platforms: &[&str], adult: bool) -> Creator {
        Creator {
            id: id.to_string(),
            handle: format!("@{}", id),
            verticals: vec!["Fashion".to_string()],
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            audience_geo: BTreeMap::new(),
            audience_age: BTreeMap::new(),
            avg_views: 100000.0,
            engagement_rate: 0.05,
            past_brand_categories: vec![],
            content_tone: vec![],
            safety_flags: SafetyFlags { adult },
            base_price_inr: price,
        }
    }

    fn create_brand(id: &str, budget: f64, platforms: &[&str], allows_adult: bool) -> Brand {
        Brand {
            id: id.to_string(),
            name: format!("Brand {}", id),
            category: "Fashion".to_string(),
            budget_inr: budget,
            target_locations: vec!["Mumbai".to_string()],
            target_ages: [18, 30],
            goals: vec![],
            tone: vec![],
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            constraints: BrandConstraints {
                no_adult_content: false,
                timeline_days: None,
                allows_adult_content: allows_adult,
            },
        }
    }

    fn brand_brief() -> BrandBrief {
        BrandBrief {
            category: "Fashion".to_string(),
            target_locations: vec!["Mumbai".to_string()],
            target_ages: [18, 30],
            platforms: vec!["Instagram".to_string()],
            budget_inr: 90000.0,
            no_adult_content: true,
            goals: vec![],
            tone: vec![],
            timeline_days: None,
        }
    }

    fn creator_brief() -> CreatorBrief {
        CreatorBrief {
            categories: vec!["Fashion".to_string()],
            platforms: vec!["YouTube".to_string()],
            min_budget_inr: 300000.0,
            max_budget_inr: 800000.0,
            preferred_tones: vec![],
            collaboration_types: vec![],
            audience_demographics: AudienceDemographics::default(),
            exclusions: Exclusions {
                no_adult_content: true,
                ..Exclusions::default()
            },
        }
    }

    #[test]
    fn test_creator_filters() {
        let brief = brand_brief();
        let creators = vec![
            create_creator("ok", 90000.0, &["Instagram"], false),
            create_creator("pricey", 90001.0, &["Instagram"], false),
            create_creator("wrong_platform", 50000.0, &["LinkedIn"], false),
            create_creator("adult", 50000.0, &["Instagram", "YouTube"], true),
            create_creator("ok2", 10000.0, &["TikTok", "Instagram"], false),
        ];

        let eligible: Vec<&str> = filter_eligible_creators(&brief, &creators)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(eligible, vec!["ok", "ok2"]);
    }

    #[test]
    fn test_adult_creator_allowed_without_constraint() {
        let mut brief = brand_brief();
        brief.no_adult_content = false;
        let creator = create_creator("adult", 50000.0, &["Instagram"], true);

        assert!(is_eligible_creator(&brief, &creator));
    }

    #[test]
    fn test_brand_filters() {
        let brief = creator_brief();
        let brands = vec![
            create_brand("low", 299999.0, &["YouTube"], false),
            create_brand("min", 300000.0, &["YouTube"], false),
            create_brand("max", 800000.0, &["YouTube", "LinkedIn"], false),
            create_brand("high", 800001.0, &["YouTube"], false),
            create_brand("platform", 500000.0, &["LinkedIn"], false),
            create_brand("adult", 500000.0, &["YouTube"], true),
        ];

        let eligible: Vec<&str> = filter_eligible_brands(&brief, &brands)
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(eligible, vec!["min", "max"]);
    }

    #[test]
    fn test_empty_pool() {
        assert!(filter_eligible_creators(&brand_brief(), &[]).is_empty());
        assert!(filter_eligible_brands(&creator_brief(), &[]).is_empty());
    }
}
