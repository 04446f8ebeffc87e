//! Writes to the `leads` table.

use chrono::{DateTime, Utc};
use procura_core::ValidatedQuote;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::DbError;

/// Identity of a freshly inserted lead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeadRow {
    pub id: i64,
    pub public_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Persist a quote request as a pending lead for `vendor_id`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails, including check-constraint
/// violations on over-long fields.
pub async fn insert_lead(
    pool: &PgPool,
    vendor_id: i64,
    quote: &ValidatedQuote,
) -> Result<LeadRow, DbError> {
    let row = sqlx::query_as::<_, LeadRow>(
        "INSERT INTO leads \
             (vendor_id, service, company_name, contact_name, email, phone, postcode, \
              source_channel, referral_source, requirements) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, 'website', $8, $9) \
         RETURNING id, public_id, status, created_at",
    )
    .bind(vendor_id)
    .bind(&quote.service)
    .bind(&quote.company_name)
    .bind(&quote.contact_name)
    .bind(&quote.email)
    .bind(&quote.phone)
    .bind(&quote.postcode)
    .bind(&quote.referral_source)
    .bind(Json(&quote.requirements))
    .fetch_one(pool)
    .await?;

    Ok(row)
}
