use actix_web::{web, HttpResponse, Responder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;
use crate::models::{
    BrandBillingRequest, BrandBillingResponse, BrandBillingSummary, CreatorPayoutRecord,
    CreatorPayoutRequest, CreatorPayoutResponse, ValidationFailedResponse, ValidationIssue,
};
use crate::routes::matches::AppState;
use crate::services::{compute_gst, validation_issues};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/billing/brand", web::post().to(submit_brand_billing))
        .route("/billing/creator", web::post().to(submit_creator_payout));
}

/// Validate brand billing details and quote GST
///
/// POST /api/billing/brand
async fn submit_brand_billing(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> impl Responder {
    let details: BrandBillingRequest = match parse_form(body.into_inner()) {
        Ok(details) => details,
        Err(issues) => {
            tracing::info!("Brand billing rejected: {} issue(s)", issues.len());
            return validation_failed(issues);
        }
    };

    let gst = compute_gst(details.budget, state.gst_rate_percent);
    let invoice_number = uuid::Uuid::new_v4().to_string();

    tracing::info!("Brand billing accepted for {} (invoice {})", details.company, invoice_number);

    HttpResponse::Ok().json(BrandBillingResponse {
        success: true,
        message: "Billing details submitted successfully".to_string(),
        summary: BrandBillingSummary {
            details,
            gst,
            invoice_number,
            submitted_at: chrono::Utc::now(),
        },
    })
}

/// Validate creator payout details
///
/// POST /api/billing/creator
async fn submit_creator_payout(body: web::Json<Value>) -> impl Responder {
    let details: CreatorPayoutRequest = match parse_form(body.into_inner()) {
        Ok(details) => details,
        Err(issues) => {
            tracing::info!("Creator payout rejected: {} issue(s)", issues.len());
            return validation_failed(issues);
        }
    };

    tracing::info!("Payout details accepted for {}", details.name);

    HttpResponse::Ok().json(CreatorPayoutResponse {
        success: true,
        message: "Payout details submitted successfully".to_string(),
        data: CreatorPayoutRecord {
            details,
            submitted_at: chrono::Utc::now(),
        },
    })
}

/// Deserialize and validate a billing form
///
/// Absent fields take their defaults and fail the field rules. A value of the
/// wrong JSON type is reported against the whole body.
fn parse_form<T: DeserializeOwned + Validate>(body: Value) -> Result<T, Vec<ValidationIssue>> {
    let form: T = serde_json::from_value(body).map_err(|e| {
        vec![ValidationIssue {
            field: "body".to_string(),
            message: e.to_string(),
        }]
    })?;

    form.validate().map_err(|errors| validation_issues(&errors))?;
    Ok(form)
}

fn validation_failed(issues: Vec<ValidationIssue>) -> HttpResponse {
    HttpResponse::BadRequest().json(ValidationFailedResponse {
        error: "Validation failed".to_string(),
        issues,
    })
}
