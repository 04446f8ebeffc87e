//! Listing priority score.
//!
//! `priority = tier_score * 1000 + visibility_score * 10`. The visibility
//! ceiling (47) times its multiplier stays below one tier step (50 * 1000), so
//! a higher display tier always outranks a lower one.

use crate::tiers::tier_priority;

// ---------------------------------------------------------------------------
// Weight constants
// ---------------------------------------------------------------------------

pub const TIER_MULTIPLIER: i64 = 1000;
pub const VISIBILITY_MULTIPLIER: i64 = 10;

/// Company name is non-blank.
pub const W_COMPANY: i64 = 3;
/// Contact phone is non-blank.
pub const W_PHONE: i64 = 4;
/// Contact email is non-blank.
pub const W_EMAIL: i64 = 3;
/// Website is non-blank.
pub const W_WEBSITE: i64 = 5;
/// Years in business is set and non-zero.
pub const W_YEARS_IN_BUSINESS: i64 = 3;
/// Description longer than [`DESCRIPTION_MIN_CHARS`].
pub const W_DESCRIPTION: i64 = 4;
/// At least one active product.
pub const W_PRODUCTS: i64 = 15;
/// At least one brand listed.
pub const W_BRANDS: i64 = 5;
/// At least one coverage area listed.
pub const W_COVERAGE: i64 = 5;

pub const DESCRIPTION_MIN_CHARS: usize = 20;

pub const MAX_VISIBILITY_SCORE: i64 = 47;

const _: () = assert!(
    W_COMPANY
        + W_PHONE
        + W_EMAIL
        + W_WEBSITE
        + W_YEARS_IN_BUSINESS
        + W_DESCRIPTION
        + W_PRODUCTS
        + W_BRANDS
        + W_COVERAGE
        == MAX_VISIBILITY_SCORE,
    "visibility weights must sum to MAX_VISIBILITY_SCORE"
);

const _: () = assert!(
    MAX_VISIBILITY_SCORE * VISIBILITY_MULTIPLIER < 50 * TIER_MULTIPLIER,
    "visibility must never cross a tier boundary"
);

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The vendor fields the score reads. Every field is optional; absent and
/// blank values contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInput<'a> {
    pub tier: Option<&'a str>,
    pub company: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub website: Option<&'a str>,
    pub years_in_business: Option<i32>,
    pub description: Option<&'a str>,
    pub has_products: bool,
    pub brands: &'a [String],
    pub coverage: &'a [String],
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Profile-completeness score in `0..=MAX_VISIBILITY_SCORE`.
#[must_use]
pub fn visibility_score(input: &ScoreInput<'_>) -> i64 {
    let signals = [
        (present(input.company), W_COMPANY),
        (present(input.phone), W_PHONE),
        (present(input.email), W_EMAIL),
        (present(input.website), W_WEBSITE),
        (input.years_in_business.is_some_and(|y| y > 0), W_YEARS_IN_BUSINESS),
        (
            input
                .description
                .is_some_and(|d| d.chars().count() > DESCRIPTION_MIN_CHARS),
            W_DESCRIPTION,
        ),
        (input.has_products, W_PRODUCTS),
        (!input.brands.is_empty(), W_BRANDS),
        (!input.coverage.is_empty(), W_COVERAGE),
    ];

    signals
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, weight)| weight)
        .sum()
}

#[must_use]
pub fn calculate_priority_score(input: &ScoreInput<'_>) -> i64 {
    tier_priority(input.tier) * TIER_MULTIPLIER + visibility_score(input) * VISIBILITY_MULTIPLIER
}
