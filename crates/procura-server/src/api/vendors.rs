use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use procura_core::{ListingFilters, PageRequest, Pagination, PublicVendor};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState};

/// Page and limit arrive as raw strings so non-numeric values fall back to
/// their defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ListingParams {
    pub category: Option<String>,
    pub location: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct VendorListing {
    pub vendors: Vec<PublicVendor>,
    pub pagination: Pagination,
    pub filters: ListingFilters,
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
}

impl ListingParams {
    fn page_request(&self) -> PageRequest {
        PageRequest::new(
            parse_number(self.page.as_deref()),
            parse_number(self.limit.as_deref()),
        )
    }
}

async fn ranked_listing(
    state: &AppState,
    req_id: RequestId,
    filters: ListingFilters,
    page: PageRequest,
) -> Result<Json<ApiResponse<VendorListing>>, ApiError> {
    let listing = procura_db::fetch_ranked_listing(&state.pool, &filters, page)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e, "Failed to fetch vendors"))?;

    tracing::debug!(
        total = listing.total,
        returned = listing.vendors.len(),
        "vendor listing served"
    );

    let data = VendorListing {
        vendors: listing.vendors.into_iter().map(PublicVendor::from).collect(),
        pagination: Pagination::new(page, listing.total),
        filters,
    };
    Ok(Json(ApiResponse::ok(req_id.0, data)))
}

/// GET /api/public/vendors
pub(super) async fn list_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ApiResponse<VendorListing>>, ApiError> {
    let page = params.page_request();
    let filters = ListingFilters::new(params.category, params.location);
    ranked_listing(&state, req_id, filters, page).await
}

/// GET /api/public/suppliers/{category}
///
/// Unlike the generic listing, an unknown category here is a 404.
pub(super) async fn list_suppliers_by_category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(category): Path<String>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ApiResponse<VendorListing>>, ApiError> {
    if procura_core::service_name_for_slug(&category).is_none() {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("unknown service category '{category}'"),
        ));
    }

    let page = params.page_request();
    let filters = ListingFilters::new(Some(category), params.location);
    ranked_listing(&state, req_id, filters, page).await
}
