use procura_core::VendorSeed;
use sqlx::PgPool;

use crate::DbError;

/// Upsert vendors and their products from the seed file.
///
/// Returns the number of vendors processed (inserted or updated).
/// All upserts run inside a single transaction; if any operation fails
/// the entire batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_vendors(pool: &PgPool, vendors: &[VendorSeed]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for vendor in vendors {
        let vendor_id: i64 = sqlx::query_scalar(
            "INSERT INTO vendors \
                 (slug, company, name, email, phone, website, description, years_in_business, \
                  services, brands, city, region, postcode, coverage, tier, listing_status, \
                  account_status, verification_status, show_pricing) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19) \
             ON CONFLICT (slug) DO UPDATE SET \
                 company = EXCLUDED.company, \
                 name = EXCLUDED.name, \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 website = EXCLUDED.website, \
                 description = EXCLUDED.description, \
                 years_in_business = EXCLUDED.years_in_business, \
                 services = EXCLUDED.services, \
                 brands = EXCLUDED.brands, \
                 city = EXCLUDED.city, \
                 region = EXCLUDED.region, \
                 postcode = EXCLUDED.postcode, \
                 coverage = EXCLUDED.coverage, \
                 tier = EXCLUDED.tier, \
                 listing_status = EXCLUDED.listing_status, \
                 account_status = EXCLUDED.account_status, \
                 verification_status = EXCLUDED.verification_status, \
                 show_pricing = EXCLUDED.show_pricing, \
                 updated_at = NOW() \
             RETURNING id",
        )
        .bind(vendor.slug())
        .bind(&vendor.company)
        .bind(&vendor.name)
        .bind(&vendor.email)
        .bind(&vendor.phone)
        .bind(&vendor.website)
        .bind(&vendor.description)
        .bind(vendor.years_in_business)
        .bind(&vendor.services)
        .bind(&vendor.brands)
        .bind(&vendor.city)
        .bind(&vendor.region)
        .bind(&vendor.postcode)
        .bind(&vendor.coverage)
        .bind(&vendor.tier)
        .bind(vendor.listing_status.as_str())
        .bind(&vendor.account_status)
        .bind(&vendor.verification_status)
        .bind(vendor.show_pricing)
        .fetch_one(&mut *tx)
        .await?;

        for product in &vendor.products {
            sqlx::query(
                "INSERT INTO vendor_products (vendor_id, name, status) \
                 VALUES ($1, $2, 'active') \
                 ON CONFLICT (vendor_id, name) DO UPDATE \
                 SET status = 'active', updated_at = NOW()",
            )
            .bind(vendor_id)
            .bind(product)
            .execute(&mut *tx)
            .await?;
        }

        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}
