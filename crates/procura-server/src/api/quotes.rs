use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use procura_core::{QuoteRequest, EXPECTED_RESPONSE};
use serde::Serialize;
use sqlx::postgres::PgDatabaseError;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState};

const SUBMIT_FAILED: &str = "Failed to submit quote request";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct QuoteConfirmation {
    pub quote_id: Uuid,
    pub message: String,
    pub supplier_name: String,
    pub expected_response: &'static str,
}

// ---------------------------------------------------------------------------
// Store error mapping
// ---------------------------------------------------------------------------

/// Field-level message for a named `leads` check constraint.
fn constraint_detail(constraint: &str) -> String {
    match constraint {
        "leads_company_name_length" => "companyName must be between 1 and 200 characters".into(),
        "leads_contact_name_length" => "contactName must be between 1 and 120 characters".into(),
        "leads_email_length" => "email must be at most 254 characters".into(),
        "leads_phone_length" => "phone must be at most 40 characters".into(),
        "leads_postcode_length" => "postcode must be at most 10 characters".into(),
        other => format!("request violates constraint '{other}'"),
    }
}

/// `company_name` -> `companyName`, matching the request payload.
fn payload_field(column: &str) -> String {
    let mut out = String::with_capacity(column.len());
    let mut upper_next = false;
    for c in column.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Store-side validation failures become 400s with field details; anything
/// else is an opaque 500.
fn map_lead_insert_error(req_id: &str, e: &procura_db::DbError) -> ApiError {
    if let procura_db::DbError::Sqlx(sqlx::Error::Database(db_err)) = e {
        let detail = match db_err.code().as_deref() {
            Some("23514") => Some(constraint_detail(db_err.constraint().unwrap_or("unknown"))),
            Some("23502") => Some(
                db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(PgDatabaseError::column)
                    .map_or_else(
                        || "a required field is missing".to_string(),
                        |column| format!("{} is required", payload_field(column)),
                    ),
            ),
            Some("22001") => Some("a field exceeds its maximum length".to_string()),
            _ => None,
        };

        if let Some(detail) = detail {
            tracing::warn!(error = %db_err, "lead rejected by store validation");
            return ApiError::new(req_id, "validation_error", "Validation failed")
                .with_details(vec![detail]);
        }
    }
    map_db_error(req_id.to_owned(), e, SUBMIT_FAILED)
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /api/public/quote-request
pub(super) async fn create_quote_request(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuoteConfirmation>>, ApiError> {
    let rid = req_id.0.as_str();

    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "malformed quote request body");
        ApiError::new(rid, "bad_request", "Invalid request body")
            .with_details(vec![rejection.body_text()])
    })?;

    let quote = request.validate().map_err(|details| {
        ApiError::new(rid, "validation_error", "Validation failed").with_details(details)
    })?;

    let vendor = procura_db::get_vendor_by_public_id(&state.pool, quote.vendor_id)
        .await
        .map_err(|e| map_db_error(rid.to_owned(), &e, SUBMIT_FAILED))?
        .ok_or_else(|| ApiError::new(rid, "not_found", "Supplier not found"))?;

    if !procura_core::quote_eligible(Some(vendor.tier.as_str()), vendor.show_pricing) {
        tracing::info!(vendor_id = vendor.id, "quote request refused for ineligible supplier");
        return Err(ApiError::new(
            rid,
            "forbidden",
            "This supplier is not currently accepting quote requests",
        ));
    }

    let lead = procura_db::insert_lead(&state.pool, vendor.id, &quote)
        .await
        .map_err(|e| map_lead_insert_error(rid, &e))?;

    tracing::info!(
        lead_id = lead.id,
        vendor_id = vendor.id,
        service = %quote.service,
        "quote request recorded"
    );

    let data = QuoteConfirmation {
        quote_id: lead.public_id,
        message: format!(
            "Your quote request has been sent to {}. They will be in touch shortly.",
            vendor.company
        ),
        supplier_name: vendor.company,
        expected_response: EXPECTED_RESPONSE,
    };
    Ok(Json(ApiResponse::ok(req_id.0.clone(), data)))
}
