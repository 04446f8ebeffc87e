//! Aggregations over the `vendor_products` table.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::DbError;

/// Active product count per vendor id. Vendors without active products are
/// absent from the map.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn active_product_counts(
    pool: &PgPool,
    vendor_ids: &[i64],
) -> Result<HashMap<i64, i64>, DbError> {
    if vendor_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, (i64, i64)>(
        "SELECT vendor_id, COUNT(*) AS active_count \
         FROM vendor_products \
         WHERE status = 'active' AND vendor_id = ANY($1) \
         GROUP BY vendor_id",
    )
    .bind(vendor_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}
