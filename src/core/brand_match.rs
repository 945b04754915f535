//! Creator→brand component scorers

use crate::core::age::AgeRange;
use crate::core::scoring::{group_thousands, Component, ComponentScore, WeightedScorer};
use crate::models::{Brand, BrandWeights, CreatorBrief};

/// Collaboration types that brands in the catalog accept
const SUPPORTED_COLLABORATIONS: &[&str] = &["Sponsored Posts", "Brand Ambassador"];

const COLLABORATION_TYPE_POINTS: f64 = 60.0;
const TONE_POINTS: f64 = 40.0;
const AUDIENCE_POINTS: f64 = 50.0;

/// Lowest score an in-range budget can receive
const BUDGET_FLOOR: f64 = 80.0;

/// Category → categories considered adjacent to it
pub const RELATED_CATEGORIES: &[(&str, &[&str])] = &[
    ("Fashion", &["Beauty", "Lifestyle"]),
    ("Beauty", &["Fashion", "Lifestyle"]),
    ("Technology", &["Education", "Business"]),
    ("Food", &["Lifestyle", "Travel"]),
    ("Travel", &["Lifestyle", "Food"]),
    ("Fitness", &["Lifestyle", "Wellness"]),
];

/// Entries of the related-category table for `category`
pub fn related_categories(category: &str) -> &'static [&'static str] {
    RELATED_CATEGORIES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// Whether two categories are adjacent in either direction of the table
pub fn are_related(a: &str, b: &str) -> bool {
    related_categories(a).contains(&b) || related_categories(b).contains(&a)
}

/// The four creator→brand components with their weights
pub fn scorer(weights: &BrandWeights) -> WeightedScorer<CreatorBrief, Brand> {
    WeightedScorer::new(vec![
        Component { name: "categoryMatch", weight: weights.category_match, score: category_match },
        Component { name: "budgetFit", weight: weights.budget_fit, score: budget_fit },
        Component {
            name: "collaborationMatch",
            weight: weights.collaboration_match,
            score: collaboration_match,
        },
        Component {
            name: "audienceAlignment",
            weight: weights.audience_alignment,
            score: audience_alignment,
        },
    ])
}

pub fn category_match(brief: &CreatorBrief, brand: &Brand) -> ComponentScore {
    if brief.categories.contains(&brand.category) {
        return ComponentScore::new(100.0, format!("Perfect category match: {}", brand.category));
    }

    if brief
        .categories
        .iter()
        .any(|category| are_related(category, &brand.category))
    {
        return ComponentScore::new(70.0, "Related category alignment");
    }

    ComponentScore::new(0.0, "No category alignment")
}

/// At least 80 anywhere in range, rising to 100 at the midpoint
pub fn budget_fit(brief: &CreatorBrief, brand: &Brand) -> ComponentScore {
    let (min, max) = (brief.min_budget_inr, brief.max_budget_inr);
    let budget = brand.budget_inr;

    if budget < min || budget > max {
        return ComponentScore::new(0.0, "Budget outside preferred range");
    }

    let half_range = (max - min) / 2.0;
    let score = if half_range > 0.0 {
        let midpoint = (min + max) / 2.0;
        let normalized_distance = (budget - midpoint).abs() / half_range;
        (100.0 - normalized_distance * 20.0).max(BUDGET_FLOOR)
    } else {
        100.0
    };

    ComponentScore::new(
        score,
        format!("Budget fits your range (₹{})", group_thousands(budget)),
    )
}

pub fn collaboration_match(brief: &CreatorBrief, brand: &Brand) -> ComponentScore {
    let mut score = 0.0;
    let mut fired = Vec::new();

    if brief
        .collaboration_types
        .iter()
        .any(|kind| SUPPORTED_COLLABORATIONS.contains(&kind.as_str()))
    {
        score += COLLABORATION_TYPE_POINTS;
        fired.push("Suitable collaboration types");
    }

    let tone_match = brief.preferred_tones.iter().any(|creator_tone| {
        let creator_tone = creator_tone.to_lowercase();
        brand
            .tone
            .iter()
            .any(|brand_tone| brand_tone.to_lowercase().contains(&creator_tone))
    });

    if tone_match {
        score += TONE_POINTS;
        fired.push("Brand tone alignment");
    }

    let reason = if fired.is_empty() {
        "Limited collaboration fit".to_string()
    } else {
        fired.join(", ")
    };

    ComponentScore::new(score, reason)
}

pub fn audience_alignment(brief: &CreatorBrief, brand: &Brand) -> ComponentScore {
    let demographics = &brief.audience_demographics;
    let mut score = 0.0;

    if demographics
        .locations
        .iter()
        .any(|location| brand.target_locations.contains(location))
    {
        score += AUDIENCE_POINTS;
    }

    let target = AgeRange::from_bounds(brand.target_ages);
    let age_match = demographics
        .age_groups
        .iter()
        .filter_map(|label| match label.parse::<AgeRange>() {
            Ok(bracket) => Some(bracket),
            Err(e) => {
                tracing::warn!("Skipping declared age group: {}", e);
                None
            }
        })
        .any(|bracket| bracket.overlaps(&target));

    if age_match {
        score += AUDIENCE_POINTS;
    }

    let reason = if score > AUDIENCE_POINTS {
        "Good audience alignment"
    } else {
        "Limited audience overlap"
    };

    ComponentScore::new(score, reason)
}
