//! Public listing pipeline: filter, count, fetch, join product counts, rank.

use procura_core::{rank_and_paginate, ListingFilters, PageRequest, ScoredVendor};
use sqlx::PgPool;

use crate::products::active_product_counts;
use crate::vendors::{count_listed_vendors, list_listed_vendors, ListingQuery};
use crate::DbError;

/// One ranked page plus the unpaginated match count.
#[derive(Debug, Clone)]
pub struct RankedListing {
    pub vendors: Vec<ScoredVendor>,
    pub total: i64,
}

/// Run the listing pipeline for one page.
///
/// The whole matched set is scored and sorted before slicing, since the
/// priority score is not stored.
///
/// # Errors
///
/// Returns [`DbError`] if any query fails or a row cannot be converted.
pub async fn fetch_ranked_listing(
    pool: &PgPool,
    filters: &ListingFilters,
    page: PageRequest,
) -> Result<RankedListing, DbError> {
    let location_pattern = filters.location_pattern();
    let query = ListingQuery {
        service: filters.service(),
        location_pattern: location_pattern.as_deref(),
    };

    let (total, rows) = tokio::try_join!(
        count_listed_vendors(pool, query),
        list_listed_vendors(pool, query)
    )?;

    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let counts = active_product_counts(pool, &ids).await?;

    let scored = rows
        .into_iter()
        .map(|row| {
            let product_count = counts.get(&row.id).copied().unwrap_or(0);
            row.into_profile()
                .map(|profile| ScoredVendor::new(profile, product_count))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RankedListing {
        vendors: rank_and_paginate(scored, page),
        total,
    })
}
