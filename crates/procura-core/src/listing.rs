//! Listing filters, page bounds, and the rank-then-paginate step.
//!
//! The sort key is computed per request rather than stored, so the full
//! matched set is ranked in memory before the requested page is sliced out.

use serde::Serialize;

use crate::services::service_name_for_slug;

pub const DEFAULT_PAGE_LIMIT: i64 = 20;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Anything that can be ordered in a public listing.
pub trait Ranked {
    fn priority_score(&self) -> i64;
    /// Secondary key; ascending order among equal scores.
    fn rank_key(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Page defaults to 1 (minimum 1); limit defaults to 20, clamped to `1..=100`.
    #[must_use]
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
        }
    }

    #[must_use]
    pub fn skip(&self) -> usize {
        let skip = (self.page - 1).saturating_mul(self.limit);
        usize::try_from(skip).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn take(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl Pagination {
    #[must_use]
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total = total.max(0);
        let total_pages = (total + request.limit - 1) / request.limit;
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_more: request.page < total_pages,
        }
    }
}

/// Sort descending by priority score (ascending rank key among ties), then
/// return the requested page.
#[must_use]
pub fn rank_and_paginate<T: Ranked>(mut items: Vec<T>, page: PageRequest) -> Vec<T> {
    items.sort_by(|a, b| {
        b.priority_score()
            .cmp(&a.priority_score())
            .then_with(|| a.rank_key().cmp(&b.rank_key()))
    });
    items.into_iter().skip(page.skip()).take(page.take()).collect()
}

/// Raw category and location filters as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingFilters {
    pub category: Option<String>,
    pub location: Option<String>,
}

impl ListingFilters {
    #[must_use]
    pub fn new(category: Option<String>, location: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            category: non_blank(category),
            location: non_blank(location),
        }
    }

    /// Canonical service name for the category filter. An unrecognised
    /// category yields `None` and applies no service filter.
    #[must_use]
    pub fn service(&self) -> Option<&'static str> {
        self.category.as_deref().and_then(service_name_for_slug)
    }

    /// `ILIKE` pattern for a case-insensitive substring match on location.
    #[must_use]
    pub fn location_pattern(&self) -> Option<String> {
        self.location
            .as_deref()
            .map(|loc| format!("%{}%", escape_like(loc.trim())))
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
#[must_use]
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
