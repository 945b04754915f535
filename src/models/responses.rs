use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;
use crate::models::requests::{BrandBillingRequest, CreatorPayoutRequest};

/// Response for both match endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse<T> {
    pub success: bool,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    pub matches: Vec<MatchResult<T>>,
}

impl<T> MatchResponse<T> {
    pub fn new(matches: Vec<MatchResult<T>>) -> Self {
        Self {
            success: true,
            total_matches: matches.len(),
            matches,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Brief rejected before scoring because required fields are absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingFieldsResponse {
    pub error: String,
    #[serde(rename = "missingFields")]
    pub missing_fields: Vec<String>,
}

/// Unknown route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
}

/// One failed validation rule, `field` is a dotted path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailedResponse {
    pub error: String,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Percentage, e.g. 18
    pub rate: f64,
    pub amount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandBillingSummary {
    #[serde(flatten)]
    pub details: BrandBillingRequest,
    pub gst: GstBreakdown,
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandBillingResponse {
    pub success: bool,
    pub message: String,
    pub summary: BrandBillingSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorPayoutRecord {
    #[serde(flatten)]
    pub details: CreatorPayoutRequest,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorPayoutResponse {
    pub success: bool,
    pub message: String,
    pub data: CreatorPayoutRecord,
}
