//! `rank` command: prints the public listing order as a plain-text table.

use procura_core::{ListingFilters, PageRequest, Pagination, ScoredVendor};

pub(crate) async fn run_rank(
    pool: &sqlx::PgPool,
    category: Option<String>,
    location: Option<String>,
    page: i64,
    limit: i64,
) -> anyhow::Result<()> {
    let filters = ListingFilters::new(category, location);
    if let Some(raw) = filters.category.as_deref() {
        if filters.service().is_none() {
            tracing::warn!(category = raw, "unknown category; no service filter applied");
        }
    }

    let page = PageRequest::new(Some(page), Some(limit));
    let listing = procura_db::fetch_ranked_listing(pool, &filters, page).await?;
    let pagination = Pagination::new(page, listing.total);

    println!("{}", header_line());
    let offset = page.skip();
    for (i, vendor) in listing.vendors.iter().enumerate() {
        println!("{}", format_row(offset + i + 1, vendor));
    }
    println!(
        "page {} of {} ({} matching vendor(s))",
        pagination.page, pagination.total_pages, pagination.total
    );
    Ok(())
}

fn header_line() -> String {
    format!(
        "{:>4}  {:>7}  {:<8}  {:>8}  {}",
        "#", "score", "tier", "products", "company"
    )
}

fn format_row(position: usize, vendor: &ScoredVendor) -> String {
    format!(
        "{:>4}  {:>7}  {:<8}  {:>8}  {}",
        position,
        vendor.priority_score,
        vendor.profile.display_tier().as_str(),
        vendor.product_count,
        vendor.profile.company
    )
}
