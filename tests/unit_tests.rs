// Unit tests for the matchbill scorers

use matchbill::core::{
    age::AgeRange,
    brand_match::{self, are_related},
    creator_match::{self, age_fit, CpvRange, CreatorRequest},
    filters::{filter_eligible_creators, is_eligible_brand},
    scoring::{group_thousands, top_reasons, ComponentScore},
};
use matchbill::models::{
    AudienceDemographics, Brand, BrandBrief, Creator, CreatorBrief, Exclusions,
};
use matchbill::services::{Catalog, InMemoryCatalog};
use std::collections::BTreeMap;

fn sample() -> InMemoryCatalog {
    InMemoryCatalog::sample().expect("bundled catalog should load")
}

fn creator<'a>(catalog: &'a InMemoryCatalog, handle: &str) -> &'a Creator {
    catalog
        .creators()
        .iter()
        .find(|c| c.handle == handle)
        .expect("creator present in sample")
}

fn fashion_brief() -> BrandBrief {
    BrandBrief {
        category: "Fashion".to_string(),
        target_locations: vec!["Mumbai".to_string()],
        target_ages: [18, 30],
        platforms: vec!["Instagram".to_string()],
        budget_inr: 90000.0,
        no_adult_content: true,
        goals: vec!["awareness".to_string()],
        tone: vec![],
        timeline_days: None,
    }
}

fn creator_brief() -> CreatorBrief {
    CreatorBrief {
        categories: vec!["Fashion".to_string()],
        platforms: vec!["Instagram".to_string()],
        min_budget_inr: 300000.0,
        max_budget_inr: 800000.0,
        preferred_tones: vec!["energetic".to_string()],
        collaboration_types: vec!["Sponsored Posts".to_string()],
        audience_demographics: AudienceDemographics {
            locations: vec!["Mumbai".to_string()],
            age_groups: vec!["18-24".to_string()],
        },
        exclusions: Exclusions::default(),
    }
}

fn request<'a>(brief: &'a BrandBrief, catalog: &InMemoryCatalog) -> CreatorRequest<'a> {
    let eligible = filter_eligible_creators(brief, catalog.creators());
    CreatorRequest {
        brief,
        cpv: CpvRange::from_pool(eligible).expect("sample pool is not empty"),
    }
}

#[test]
fn test_relevance_tiers() {
    let catalog = sample();
    let brief = fashion_brief();
    let request = request(&brief, &catalog);
    let cpv = request.cpv;

    let proven = creator_match::relevance(&request, creator(&catalog, "@fitwithria"));
    assert_eq!(proven.score, 100);
    assert_eq!(proven.reason, "Proven experience in Fashion");

    let none = creator_match::relevance(&request, creator(&catalog, "@foodiesneha"));
    assert_eq!(none.score, 0);
    assert_eq!(none.reason, "No direct relevance");

    let mut brief = fashion_brief();
    brief.category = "Beauty".to_string();
    let request = CreatorRequest { brief: &brief, cpv };
    let vertical = creator_match::relevance(&request, creator(&catalog, "@fashionbymaya"));
    // Beauty is in both past categories and verticals; past wins
    assert_eq!(vertical.score, 100);

    brief.category = "Lifestyle".to_string();
    let request = CreatorRequest { brief: &brief, cpv };
    let vertical = creator_match::relevance(&request, creator(&catalog, "@fitwithria"));
    assert_eq!(vertical.score, 70);
    assert_eq!(vertical.reason, "Relevant Vertical: Lifestyle");
}

#[test]
fn test_audience_fit_for_fitwithria() {
    let catalog = sample();
    let brief = fashion_brief();
    let request = request(&brief, &catalog);

    // Location 42, age 55 + 21 = 76, mean 59
    let fit = creator_match::audience_fit(&request, creator(&catalog, "@fitwithria"));
    assert_eq!(fit.score, 59);
    assert_eq!(fit.reason, "42% audience match in target cities");
}

#[test]
fn test_audience_fit_without_target_city_audience() {
    let catalog = sample();
    let mut brief = fashion_brief();
    brief.target_locations = vec!["Goa".to_string()];

    let matches = matchbill::Matcher::default().score_creators_for_brand(&brief, catalog.creators());
    let sneha = matches
        .iter()
        .find(|m| m.candidate.handle == "@foodiesneha")
        .expect("eligible on Instagram within budget");

    assert!(sneha.reasons.contains(&"0% audience match in target cities".to_string()));
    assert!(matches
        .iter()
        .flat_map(|m| m.reasons.iter())
        .all(|reason| !reason.starts_with('-')));
}

#[test]
fn test_age_fit_partial_overlap() {
    let mut audience = BTreeMap::new();
    audience.insert("18-24".to_string(), 0.55);
    audience.insert("25-34".to_string(), 0.35);
    audience.insert("35-44".to_string(), 0.1);

    let score = age_fit(&audience, AgeRange::new(18, 30));
    assert!((score - 76.0).abs() < 1e-9);
}

#[test]
fn test_age_fit_skips_malformed_brackets() {
    let mut audience = BTreeMap::new();
    audience.insert("18-24".to_string(), 0.5);
    audience.insert("teens".to_string(), 0.5);

    let score = age_fit(&audience, AgeRange::new(18, 24));
    assert!((score - 50.0).abs() < 1e-9);
}

#[test]
fn test_age_fit_open_bracket() {
    let mut audience = BTreeMap::new();
    audience.insert("45+".to_string(), 1.0);

    // Target 50-59 lies entirely inside 45-100
    let score = age_fit(&audience, AgeRange::new(50, 59));
    assert!((score - 100.0).abs() < 1e-9);
}

#[test]
fn test_performance_reason_threshold() {
    let catalog = sample();
    let brief = fashion_brief();
    let request = request(&brief, &catalog);

    let cheap = creator_match::performance(&request, creator(&catalog, "@foodiesneha"));
    assert_eq!(cheap.score, 100);
    assert_eq!(cheap.reason, "High 5.6% Engagement");

    let modest = creator_match::performance(&request, creator(&catalog, "@fitwithria"));
    assert_eq!(modest.reason, "Great value for money (Low CPV)");
    assert!(modest.score < cheap.score);
}

#[test]
fn test_cpv_range_degenerate_pool() {
    let catalog = sample();
    let only = creator(&catalog, "@fitwithria");

    let range = CpvRange::from_pool(std::iter::once(only)).unwrap();
    assert_eq!(range.min, range.max);
    assert_eq!(range.normalized_score(only.cost_per_view()), 50.0);

    assert!(CpvRange::from_pool(std::iter::empty::<&Creator>()).is_none());
}

#[test]
fn test_constraints_component() {
    let catalog = sample();
    let brief = fashion_brief();
    let request = request(&brief, &catalog);

    let mut candidate = creator(&catalog, "@fitwithria").clone();
    assert_eq!(creator_match::constraints(&request, &candidate).score, 100);

    candidate.safety_flags.adult = true;
    let violated = creator_match::constraints(&request, &candidate);
    assert_eq!(violated.score, 0);
    assert_eq!(violated.reason, "Violates content guidelines");
}

fn acme(catalog: &InMemoryCatalog) -> Brand {
    catalog.brands()[0].clone()
}

#[test]
fn test_category_match_tiers() {
    let catalog = sample();
    let mut brief = creator_brief();
    let brand = acme(&catalog);

    let perfect = brand_match::category_match(&brief, &brand);
    assert_eq!(perfect.score, 100);
    assert_eq!(perfect.reason, "Perfect category match: Fashion");

    brief.categories = vec!["Lifestyle".to_string()];
    let related = brand_match::category_match(&brief, &brand);
    assert_eq!(related.score, 70);
    assert_eq!(related.reason, "Related category alignment");

    brief.categories = vec!["Technology".to_string()];
    assert_eq!(brand_match::category_match(&brief, &brand).score, 0);
}

#[test]
fn test_related_categories_are_symmetric() {
    assert!(are_related("Fashion", "Beauty"));
    assert!(are_related("Lifestyle", "Fashion"));
    assert!(are_related("Wellness", "Fitness"));
    assert!(!are_related("Fintech", "Fashion"));
}

#[test]
fn test_budget_fit_midpoint_scores_full() {
    let catalog = sample();
    let brief = creator_brief();
    let mut brand = acme(&catalog);
    brand.budget_inr = 550000.0;

    let fit = brand_match::budget_fit(&brief, &brand);
    assert_eq!(fit.score, 100);
    assert_eq!(fit.reason, "Budget fits your range (₹550,000)");
}

#[test]
fn test_budget_fit_edges_and_outside() {
    let catalog = sample();
    let brief = creator_brief();
    let mut brand = acme(&catalog);

    brand.budget_inr = 300000.0;
    assert_eq!(brand_match::budget_fit(&brief, &brand).score, 80);

    brand.budget_inr = 500000.0;
    assert_eq!(brand_match::budget_fit(&brief, &brand).score, 96);

    brand.budget_inr = 900000.0;
    let outside = brand_match::budget_fit(&brief, &brand);
    assert_eq!(outside.score, 0);
    assert_eq!(outside.reason, "Budget outside preferred range");
}

#[test]
fn test_budget_fit_zero_width_range() {
    let catalog = sample();
    let mut brief = creator_brief();
    brief.min_budget_inr = 500000.0;
    brief.max_budget_inr = 500000.0;

    assert_eq!(brand_match::budget_fit(&brief, &acme(&catalog)).score, 100);
}

#[test]
fn test_collaboration_match_combines_reasons() {
    let catalog = sample();
    let mut brief = creator_brief();
    let brand = acme(&catalog);

    let both = brand_match::collaboration_match(&brief, &brand);
    assert_eq!(both.score, 100);
    assert_eq!(both.reason, "Suitable collaboration types, Brand tone alignment");

    brief.collaboration_types = vec!["Affiliate".to_string()];
    brief.preferred_tones = vec!["Energetic".to_string()];
    let tone_only = brand_match::collaboration_match(&brief, &brand);
    assert_eq!(tone_only.score, 40);
    assert_eq!(tone_only.reason, "Brand tone alignment");

    brief.preferred_tones.clear();
    let neither = brand_match::collaboration_match(&brief, &brand);
    assert_eq!(neither.score, 0);
    assert_eq!(neither.reason, "Limited collaboration fit");
}

#[test]
fn test_audience_alignment() {
    let catalog = sample();
    let mut brief = creator_brief();
    let brand = acme(&catalog);

    let good = brand_match::audience_alignment(&brief, &brand);
    assert_eq!(good.score, 100);
    assert_eq!(good.reason, "Good audience alignment");

    brief.audience_demographics.age_groups = vec!["45+".to_string()];
    let partial = brand_match::audience_alignment(&brief, &brand);
    assert_eq!(partial.score, 50);
    assert_eq!(partial.reason, "Limited audience overlap");
}

#[test]
fn test_brand_eligibility() {
    let catalog = sample();
    let brief = creator_brief();

    // FinSmart is only on YouTube and LinkedIn
    assert!(is_eligible_brand(&brief, &catalog.brands()[0]));
    assert!(!is_eligible_brand(&brief, &catalog.brands()[1]));
}

#[test]
fn test_top_reasons_drop_zero_and_cap() {
    let reasons = top_reasons(vec![
        ComponentScore::new(0.0, "zero"),
        ComponentScore::new(40.0, "low"),
        ComponentScore::new(90.0, "high"),
        ComponentScore::new(60.0, "mid"),
        ComponentScore::new(55.0, "fourth"),
    ]);

    assert_eq!(reasons, vec!["high", "mid", "fourth"]);
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(550000.0), "550,000");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1234567.0), "1,234,567");
}
