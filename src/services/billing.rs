use crate::models::{GstBreakdown, ValidationIssue};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Standard GST rate applied to campaign budgets, in percent
pub const DEFAULT_GST_RATE_PERCENT: f64 = 18.0;

/// GST surcharge on a campaign budget
pub fn compute_gst(amount: f64, rate_percent: f64) -> GstBreakdown {
    let gst = amount * rate_percent / 100.0;
    GstBreakdown {
        rate: rate_percent,
        amount: gst,
        total: amount + gst,
    }
}

/// Flatten nested validator errors into `{field, message}` pairs
///
/// Nested fields use dotted paths (`address.pincode`), list entries their
/// index (`items.0.name`). Output is sorted by field for stable responses.
pub fn validation_issues(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    collect_issues(errors, "", &mut issues);
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}

fn collect_issues(errors: &ValidationErrors, prefix: &str, issues: &mut Vec<ValidationIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                issues.extend(errs.iter().map(|err| ValidationIssue {
                    field: path.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", err.code)),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_issues(nested, &path, issues),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_issues(nested, &format!("{}.{}", path, index), issues);
                }
            }
        }
    }
}
