//! Mock analytics for the dashboard
//!
//! Everything here is demo data: counts and averages come from the catalog,
//! but earnings, followers, ratings, ROI and growth figures are fabricated
//! with random numbers on every call. Nothing in this module feeds the
//! matching core.

use crate::models::{
    Brand, BrandAnalyticsQuery, BrandSortKey, Creator, CreatorAnalyticsQuery, CreatorSortKey,
    SortOrder,
};
use crate::services::catalog::Catalog;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Share of campaign value assumed to reach the creator
const CREATOR_EARNINGS_SHARE: f64 = 0.3;

/// Campaigns assumed per creator when estimating category earnings
const ESTIMATED_CAMPAIGNS: f64 = 3.0;

const TRENDING_LIMIT: usize = 5;
const TOP_PERFORMERS_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewTotals {
    #[serde(rename = "totalCreators")]
    pub total_creators: usize,
    #[serde(rename = "totalBrands")]
    pub total_brands: usize,
    #[serde(rename = "totalEarnings")]
    pub total_earnings: f64,
    #[serde(rename = "avgEngagement")]
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub creators: usize,
    #[serde(rename = "totalEarnings")]
    pub total_earnings: f64,
    #[serde(rename = "avgEngagement")]
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationStat {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStat {
    pub name: String,
    pub users: usize,
    #[serde(rename = "totalViews")]
    pub total_views: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformer {
    pub name: String,
    pub engagement: f64,
    pub followers: f64,
    pub earnings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub overview: OverviewTotals,
    #[serde(rename = "categoryStats")]
    pub category_stats: Vec<CategoryStat>,
    #[serde(rename = "locationStats")]
    pub location_stats: Vec<LocationStat>,
    #[serde(rename = "platformStats")]
    pub platform_stats: Vec<PlatformStat>,
    #[serde(rename = "topPerformers")]
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorAnalytics {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub category: String,
    pub platforms: Vec<String>,
    pub followers: u64,
    #[serde(rename = "avgViews")]
    pub avg_views: f64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    pub location: String,
    pub earnings: f64,
    #[serde(rename = "campaignsCompleted")]
    pub campaigns_completed: u32,
    pub rating: f64,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    #[serde(rename = "lastActive")]
    pub last_active: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorAnalyticsResponse {
    pub creators: Vec<CreatorAnalytics>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub filters: CreatorAnalyticsQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandAnalytics {
    pub id: String,
    pub name: String,
    pub category: String,
    pub industry: String,
    pub location: String,
    #[serde(rename = "totalSpent")]
    pub total_spent: f64,
    #[serde(rename = "campaignsRun")]
    pub campaigns_run: u32,
    #[serde(rename = "avgCampaignBudget")]
    pub avg_campaign_budget: f64,
    #[serde(rename = "topPerformingCreator")]
    pub top_performing_creator: Option<String>,
    #[serde(rename = "joinDate")]
    pub join_date: String,
    #[serde(rename = "lastCampaign")]
    pub last_campaign: String,
    pub roi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandAnalyticsResponse {
    pub brands: Vec<BrandAnalytics>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub filters: BrandAnalyticsQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingCategory {
    pub category: String,
    /// Percent
    pub growth: f64,
    pub creators: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignHighlight {
    pub id: String,
    pub brand: Option<String>,
    pub creator: String,
    pub category: String,
    pub reach: f64,
    pub engagement: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(rename = "trendingCategories")]
    pub trending_categories: Vec<TrendingCategory>,
    #[serde(rename = "topCampaigns")]
    pub top_campaigns: Vec<CampaignHighlight>,
}

/// Mock-data generator, owns its randomness so tests can seed it
pub struct AnalyticsGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> AnalyticsGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Platform-wide totals and distributions
    pub fn overview(&mut self, catalog: &dyn Catalog) -> AnalyticsOverview {
        let creators = catalog.creators();

        let total_earnings: f64 = creators
            .iter()
            .map(|creator| {
                let campaigns = self.rng.gen_range(5..25) as f64;
                creator.base_price_inr * campaigns * CREATOR_EARNINGS_SHARE
            })
            .sum();

        let avg_engagement = if creators.is_empty() {
            0.0
        } else {
            let mean = creators.iter().map(|c| c.engagement_rate).sum::<f64>() / creators.len() as f64;
            round_to(mean, 2)
        };

        let mut categories: BTreeMap<&str, CategoryStat> = BTreeMap::new();
        for creator in creators {
            for vertical in &creator.verticals {
                let stat = categories.entry(vertical.as_str()).or_insert_with(|| CategoryStat {
                    name: vertical.clone(),
                    creators: 0,
                    total_earnings: 0.0,
                    avg_engagement: 0.0,
                });
                stat.creators += 1;
                stat.total_earnings += creator.base_price_inr * ESTIMATED_CAMPAIGNS;
                stat.avg_engagement += creator.engagement_rate;
            }
        }
        let category_stats: Vec<CategoryStat> = categories
            .into_values()
            .map(|mut stat| {
                stat.avg_engagement /= stat.creators as f64;
                stat
            })
            .collect();

        let mut locations: BTreeMap<&str, usize> = BTreeMap::new();
        for location in creators.iter().filter_map(Creator::top_location) {
            *locations.entry(location).or_default() += 1;
        }
        let location_stats: Vec<LocationStat> = locations
            .into_iter()
            .map(|(name, value)| LocationStat { name: name.to_string(), value })
            .collect();

        let mut platforms: BTreeMap<&str, PlatformStat> = BTreeMap::new();
        for creator in creators {
            for platform in &creator.platforms {
                let stat = platforms.entry(platform.as_str()).or_insert_with(|| PlatformStat {
                    name: platform.clone(),
                    users: 0,
                    total_views: 0.0,
                });
                stat.users += 1;
                stat.total_views += creator.avg_views;
            }
        }

        let mut by_engagement: Vec<&Creator> = creators.iter().collect();
        by_engagement.sort_by(|a, b| compare_f64(b.engagement_rate, a.engagement_rate));
        let top_performers = by_engagement
            .into_iter()
            .take(TOP_PERFORMERS_LIMIT)
            .map(|creator| TopPerformer {
                name: creator.handle.clone(),
                engagement: creator.engagement_rate,
                followers: creator.avg_views / 1000.0,
                earnings: creator.base_price_inr * ESTIMATED_CAMPAIGNS,
            })
            .collect();

        AnalyticsOverview {
            overview: OverviewTotals {
                total_creators: creators.len(),
                total_brands: catalog.brands().len(),
                total_earnings,
                avg_engagement,
            },
            category_stats,
            location_stats,
            platform_stats: platforms.into_values().collect(),
            top_performers,
        }
    }

    /// Filtered, enriched and sorted creator listing
    pub fn creators(
        &mut self,
        catalog: &dyn Catalog,
        query: &CreatorAnalyticsQuery,
    ) -> CreatorAnalyticsResponse {
        let category = non_empty(&query.category);
        let location = non_empty(&query.location);
        let platform = non_empty(&query.platform);

        let mut creators: Vec<CreatorAnalytics> = catalog
            .creators()
            .iter()
            .filter(|c| category.map_or(true, |cat| c.verticals.iter().any(|v| v == cat)))
            .filter(|c| location.map_or(true, |loc| c.audience_geo.contains_key(loc)))
            .filter(|c| platform.map_or(true, |p| c.platforms.iter().any(|cp| cp == p)))
            .map(|creator| self.enrich_creator(creator))
            .collect();

        creators.sort_by(|a, b| apply_order(compare_creators(a, b, query.sort_by), query.order));

        CreatorAnalyticsResponse {
            total_count: creators.len(),
            creators,
            filters: query.clone(),
        }
    }

    /// Filtered, enriched and sorted brand listing
    pub fn brands(
        &mut self,
        catalog: &dyn Catalog,
        query: &BrandAnalyticsQuery,
    ) -> BrandAnalyticsResponse {
        let category = non_empty(&query.category);
        let location = non_empty(&query.location);
        let creators = catalog.creators();

        let mut brands: Vec<BrandAnalytics> = catalog
            .brands()
            .iter()
            .filter(|b| category.map_or(true, |cat| b.category == cat))
            .filter(|b| location.map_or(true, |loc| b.target_locations.iter().any(|l| l == loc)))
            .map(|brand| self.enrich_brand(brand, creators))
            .collect();

        brands.sort_by(|a, b| apply_order(compare_brands(a, b, query.sort_by), query.order));

        BrandAnalyticsResponse {
            total_count: brands.len(),
            brands,
            filters: query.clone(),
        }
    }

    /// Fastest-growing categories and highlighted campaigns
    pub fn trending(&mut self, catalog: &dyn Catalog) -> TrendingResponse {
        let creators = catalog.creators();
        let brands = catalog.brands();

        let mut growth: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for creator in creators {
            for vertical in &creator.verticals {
                let entry = growth.entry(vertical.as_str()).or_insert((0.0, 0));
                entry.0 += self.rng.gen_range(10.0..60.0_f64);
                entry.1 += 1;
            }
        }

        let mut trending_categories: Vec<TrendingCategory> = growth
            .into_iter()
            .map(|(category, (total, count))| TrendingCategory {
                category: category.to_string(),
                growth: (total / count as f64).round(),
                creators: count,
            })
            .collect();
        trending_categories.sort_by(|a, b| compare_f64(b.growth, a.growth));
        trending_categories.truncate(TRENDING_LIMIT);

        let top_campaigns = creators
            .iter()
            .take(TRENDING_LIMIT)
            .enumerate()
            .map(|(index, creator)| CampaignHighlight {
                id: format!("campaign_{}", index + 1),
                brand: (!brands.is_empty()).then(|| brands[index % brands.len()].name.clone()),
                creator: creator.handle.clone(),
                category: creator.primary_vertical().unwrap_or_default().to_string(),
                reach: creator.avg_views * self.rng.gen_range(1.2..2.0_f64),
                engagement: creator.engagement_rate,
                roi: self.rng.gen_range(2.5..4.5_f64),
            })
            .collect();

        TrendingResponse {
            trending_categories,
            top_campaigns,
        }
    }

    fn enrich_creator(&mut self, creator: &Creator) -> CreatorAnalytics {
        let followers = (creator.avg_views * self.rng.gen_range(1.5..2.5_f64)).floor() as u64;
        let earnings = creator.base_price_inr * self.rng.gen_range(5..20) as f64;
        let rating: f64 = self.rng.gen_range(4.2..5.0);

        CreatorAnalytics {
            id: creator.id.clone(),
            handle: creator.handle.clone(),
            name: display_name(&creator.handle),
            category: creator.primary_vertical().unwrap_or_default().to_string(),
            platforms: creator.platforms.clone(),
            followers,
            avg_views: creator.avg_views,
            engagement_rate: creator.engagement_rate,
            location: creator.top_location().unwrap_or_default().to_string(),
            earnings,
            campaigns_completed: self.rng.gen_range(3..28),
            rating: round_to(rating, 1),
            join_date: self.random_date(2023, None),
            last_active: self.random_date(2024, Some(8)),
        }
    }

    fn enrich_brand(&mut self, brand: &Brand, creators: &[Creator]) -> BrandAnalytics {
        let campaigns_run: u32 = self.rng.gen_range(3..18);
        let total_spent = brand.budget_inr * campaigns_run as f64;
        let roi: f64 = self.rng.gen_range(2.5..4.5);
        let top_performing_creator = (!creators.is_empty())
            .then(|| creators[self.rng.gen_range(0..creators.len())].handle.clone());

        BrandAnalytics {
            id: brand.id.clone(),
            name: brand.name.clone(),
            category: brand.category.clone(),
            industry: format!("{} Industry", brand.category),
            location: brand.target_locations.first().cloned().unwrap_or_default(),
            total_spent,
            campaigns_run,
            avg_campaign_budget: total_spent / campaigns_run as f64,
            top_performing_creator,
            join_date: self.random_date(2023, None),
            last_campaign: self.random_date(2024, Some(8)),
            roi: round_to(roi, 1),
        }
    }

    /// ISO date in `year`, random month unless fixed
    fn random_date(&mut self, year: i32, month: Option<u32>) -> String {
        let month = month.unwrap_or_else(|| self.rng.gen_range(1..=12));
        let day = self.rng.gen_range(1..=28);
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// "@fitwithria" → "Fitwithria", "@fashionByMaya" → "Fashion By Maya"
pub fn display_name(handle: &str) -> String {
    let bare = handle.trim_start_matches('@');
    let mut words: Vec<String> = Vec::new();

    for ch in bare.chars() {
        match words.last_mut() {
            Some(word) if !ch.is_uppercase() => word.push(ch),
            _ => words.push(ch.to_uppercase().collect()),
        }
    }

    words.join(" ")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_creators(a: &CreatorAnalytics, b: &CreatorAnalytics, key: CreatorSortKey) -> Ordering {
    match key {
        CreatorSortKey::Handle => a.handle.to_lowercase().cmp(&b.handle.to_lowercase()),
        CreatorSortKey::Followers => a.followers.cmp(&b.followers),
        CreatorSortKey::AvgViews => compare_f64(a.avg_views, b.avg_views),
        CreatorSortKey::EngagementRate => compare_f64(a.engagement_rate, b.engagement_rate),
        CreatorSortKey::Earnings => compare_f64(a.earnings, b.earnings),
        CreatorSortKey::CampaignsCompleted => a.campaigns_completed.cmp(&b.campaigns_completed),
        CreatorSortKey::Rating => compare_f64(a.rating, b.rating),
    }
}

fn compare_brands(a: &BrandAnalytics, b: &BrandAnalytics, key: BrandSortKey) -> Ordering {
    match key {
        BrandSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        BrandSortKey::TotalSpent => compare_f64(a.total_spent, b.total_spent),
        BrandSortKey::CampaignsRun => a.campaigns_run.cmp(&b.campaigns_run),
        BrandSortKey::AvgCampaignBudget => compare_f64(a.avg_campaign_budget, b.avg_campaign_budget),
        BrandSortKey::Roi => compare_f64(a.roi, b.roi),
    }
}
