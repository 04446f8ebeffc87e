//! Read queries for the `vendors` table.

use procura_core::VendorProfile;
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// Listing projection of a `vendors` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VendorRow {
    pub id: i64,
    pub public_id: Uuid,
    pub company: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub years_in_business: Option<i32>,
    pub services: Vec<String>,
    pub brands: Vec<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub coverage: Vec<String>,
    pub tier: String,
    pub listing_status: String,
    pub show_pricing: bool,
    pub rating: f64,
    pub review_count: i32,
    pub login_count: i32,
}

impl VendorRow {
    /// Convert into the domain read model.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidRow`] if `listing_status` holds an unknown value.
    pub fn into_profile(self) -> Result<VendorProfile, DbError> {
        Ok(VendorProfile {
            listing_status: self.listing_status.parse()?,
            id: self.id,
            public_id: self.public_id,
            company: self.company,
            name: self.name,
            email: self.email,
            phone: self.phone,
            website: self.website,
            description: self.description,
            years_in_business: self.years_in_business,
            services: self.services,
            brands: self.brands,
            city: self.city,
            region: self.region,
            coverage: self.coverage,
            tier: self.tier,
            show_pricing: self.show_pricing,
            rating: self.rating,
            review_count: self.review_count,
            login_count: self.login_count,
        })
    }
}

/// Resolved listing filters. `service` is a canonical service name;
/// `location_pattern` is an already-escaped `ILIKE` pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingQuery<'a> {
    pub service: Option<&'a str>,
    pub location_pattern: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Counts vendors eligible for the public listing under the given filters.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_listed_vendors(pool: &PgPool, query: ListingQuery<'_>) -> Result<i64, DbError> {
    // Listed: an active, verified account, or an unclaimed directory placeholder.
    // $1 = canonical service name, $2 = escaped location ILIKE pattern.
    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM vendors v \
         WHERE ((v.account_status = 'active' AND v.verification_status = 'verified') \
                OR v.listing_status = 'unclaimed') \
           AND ($1::TEXT IS NULL OR EXISTS ( \
                SELECT 1 FROM unnest(v.services) AS s(service) \
                WHERE lower(s.service) = lower($1))) \
           AND ($2::TEXT IS NULL \
                OR v.city ILIKE $2 \
                OR v.region ILIKE $2 \
                OR EXISTS ( \
                    SELECT 1 FROM unnest(v.coverage) AS c(area) \
                    WHERE c.area ILIKE $2))",
    )
    .bind(query.service)
    .bind(query.location_pattern)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

/// Returns every vendor eligible for the public listing under the given
/// filters, ordered by id. Ranking happens in the caller because the sort
/// key is computed per request.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_listed_vendors(
    pool: &PgPool,
    query: ListingQuery<'_>,
) -> Result<Vec<VendorRow>, DbError> {
    let rows = sqlx::query_as::<_, VendorRow>(
        "SELECT v.id, v.public_id, v.company, v.name, v.email, v.phone, v.website, \
                v.description, v.years_in_business, v.services, v.brands, v.city, v.region, \
                v.coverage, v.tier, v.listing_status, v.show_pricing, v.rating, \
                v.review_count, v.login_count \
         FROM vendors v \
         WHERE ((v.account_status = 'active' AND v.verification_status = 'verified') \
                OR v.listing_status = 'unclaimed') \
           AND ($1::TEXT IS NULL OR EXISTS ( \
                SELECT 1 FROM unnest(v.services) AS s(service) \
                WHERE lower(s.service) = lower($1))) \
           AND ($2::TEXT IS NULL \
                OR v.city ILIKE $2 \
                OR v.region ILIKE $2 \
                OR EXISTS ( \
                    SELECT 1 FROM unnest(v.coverage) AS c(area) \
                    WHERE c.area ILIKE $2)) \
         ORDER BY v.id",
    )
    .bind(query.service)
    .bind(query.location_pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns a vendor by its public id regardless of listing eligibility.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_vendor_by_public_id(
    pool: &PgPool,
    public_id: Uuid,
) -> Result<Option<VendorRow>, DbError> {
    let row = sqlx::query_as::<_, VendorRow>(
        "SELECT v.id, v.public_id, v.company, v.name, v.email, v.phone, v.website, \
                v.description, v.years_in_business, v.services, v.brands, v.city, v.region, \
                v.coverage, v.tier, v.listing_status, v.show_pricing, v.rating, \
                v.review_count, v.login_count \
         FROM vendors v \
         WHERE v.public_id = $1",
    )
    .bind(public_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
