// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Creator, SafetyFlags, Brand, BrandConstraints, MatchResult, CreatorWeights, BrandWeights};
pub use requests::{
    BrandBrief, CreatorBrief, AudienceDemographics, Exclusions, missing_fields,
    BrandBillingRequest, CreatorPayoutRequest, PostalAddress, BankAccount, PaymentMethod,
    CreatorAnalyticsQuery, BrandAnalyticsQuery, CreatorSortKey, BrandSortKey, SortOrder,
};
pub use responses::{
    MatchResponse, HealthResponse, ErrorResponse, MissingFieldsResponse, NotFoundResponse,
    ValidationIssue, ValidationFailedResponse, GstBreakdown, BrandBillingSummary,
    BrandBillingResponse, CreatorPayoutRecord, CreatorPayoutResponse,
};
