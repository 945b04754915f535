use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Brand-shaped brief used to search the creator catalog
///
/// POST /api/match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandBrief {
    pub category: String,
    #[serde(rename = "targetLocations")]
    pub target_locations: Vec<String>,
    /// Inclusive [min, max] age range
    #[serde(rename = "targetAges")]
    pub target_ages: [u32; 2],
    pub platforms: Vec<String>,
    #[serde(rename = "budgetINR")]
    pub budget_inr: f64,
    #[serde(rename = "noAdultContent", default)]
    pub no_adult_content: bool,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(rename = "timelineDays", default, skip_serializing_if = "Option::is_none")]
    pub timeline_days: Option<u32>,
}

impl BrandBrief {
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["category", "targetLocations", "targetAges", "platforms", "budgetINR"];
}

/// Creator-shaped brief used to search the brand catalog
///
/// POST /api/match/brands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorBrief {
    pub categories: Vec<String>,
    pub platforms: Vec<String>,
    #[serde(rename = "minBudgetINR")]
    pub min_budget_inr: f64,
    #[serde(rename = "maxBudgetINR")]
    pub max_budget_inr: f64,
    #[serde(rename = "preferredTones", default)]
    pub preferred_tones: Vec<String>,
    #[serde(rename = "collaborationTypes")]
    pub collaboration_types: Vec<String>,
    #[serde(rename = "audienceDemographics", default)]
    pub audience_demographics: AudienceDemographics,
    #[serde(default)]
    pub exclusions: Exclusions,
}

impl CreatorBrief {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "categories",
        "platforms",
        "minBudgetINR",
        "maxBudgetINR",
        "collaborationTypes",
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceDemographics {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(rename = "ageGroups", default)]
    pub age_groups: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    #[serde(rename = "noAdultContent", default)]
    pub no_adult_content: bool,
    #[serde(rename = "noAlcoholTobacco", default)]
    pub no_alcohol_tobacco: bool,
    #[serde(rename = "noGambling", default)]
    pub no_gambling: bool,
}

/// Required fields that are absent or empty in a raw JSON brief
///
/// `null`, `""`, `0` and `false` count as missing. Arrays and objects are
/// present even when empty.
pub fn missing_fields(body: &Value, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| match body.get(**field) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(_) => false,
        })
        .map(|field| field.to_string())
        .collect()
}

static GSTIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$").unwrap()
});
static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static PAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$").unwrap());
static UPI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]{2,256}@[a-zA-Z]{2,64}$").unwrap());
static ACCOUNT_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9,18}$").unwrap());
static IFSC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());

// Billing forms default every absent field so that missing values surface
// as validation issues rather than deserialization errors.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PostalAddress {
    #[validate(length(min = 1, message = "Street address is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(regex(path = *PINCODE_RE, message = "Invalid pincode format"))]
    pub pincode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Cheque")]
    Cheque,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Upi,
        PaymentMethod::Cheque,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cheque => "Cheque",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.label() == label)
            .ok_or(())
    }
}

fn validate_payment_method(method: &str) -> Result<(), ValidationError> {
    if method.parse::<PaymentMethod>().is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("payment_method");
    err.message = Some(Cow::Borrowed("Invalid payment method"));
    Err(err)
}

/// Brand billing details
///
/// POST /api/billing/brand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BrandBillingRequest {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company: String,
    #[validate(regex(path = *GSTIN_RE, message = "Invalid GSTIN format"))]
    pub gstin: String,
    #[validate(nested)]
    pub address: PostalAddress,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number format"))]
    pub phone: String,
    #[validate(range(exclusive_min = 0.0, message = "Budget must be positive"))]
    pub budget: f64,
    /// One of the [`PaymentMethod`] labels
    #[serde(rename = "paymentMethod")]
    #[validate(custom(function = "validate_payment_method"))]
    pub payment_method: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BankAccount {
    #[serde(rename = "accountNumber")]
    #[validate(regex(path = *ACCOUNT_NUMBER_RE, message = "Invalid account number"))]
    pub account_number: String,
    #[validate(regex(path = *IFSC_RE, message = "Invalid IFSC code"))]
    pub ifsc: String,
    #[serde(rename = "bankName")]
    #[validate(length(min = 1, message = "Bank name is required"))]
    pub bank_name: String,
    #[serde(rename = "accountHolderName")]
    #[validate(length(min = 1, message = "Account holder name is required"))]
    pub account_holder_name: String,
}

/// Creator payout details
///
/// POST /api/billing/creator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreatorPayoutRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(regex(path = *PAN_RE, message = "Invalid PAN format"))]
    pub pan: String,
    #[validate(regex(path = *UPI_RE, message = "Invalid UPI ID format"))]
    pub upi: String,
    #[serde(rename = "bankAccount")]
    #[validate(nested)]
    pub bank_account: BankAccount,
    #[validate(nested)]
    pub address: PostalAddress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreatorSortKey {
    Handle,
    Followers,
    AvgViews,
    #[default]
    #[serde(alias = "engagement")]
    EngagementRate,
    Earnings,
    CampaignsCompleted,
    Rating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandSortKey {
    Name,
    #[default]
    TotalSpent,
    CampaignsRun,
    AvgCampaignBudget,
    Roi,
}

/// GET /api/analytics/creators query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatorAnalyticsQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub platform: Option<String>,
    #[serde(rename = "sortBy", default)]
    pub sort_by: CreatorSortKey,
    #[serde(default)]
    pub order: SortOrder,
}

/// GET /api/analytics/brands query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandAnalyticsQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "sortBy", default)]
    pub sort_by: BrandSortKey,
    #[serde(default)]
    pub order: SortOrder,
}
