pub mod app_config;
pub mod config;
pub mod listing;
pub mod quote;
pub mod scoring;
pub mod seed;
pub mod services;
pub mod tiers;
pub mod vendor;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{
    escape_like, rank_and_paginate, ListingFilters, PageRequest, Pagination, Ranked,
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
pub use quote::{QuoteRequest, QuoteRequirements, ValidatedQuote, EXPECTED_RESPONSE};
pub use scoring::{calculate_priority_score, visibility_score, ScoreInput};
pub use seed::{load_vendor_seeds, VendorSeed, VendorSeedFile};
pub use services::{normalize_service, service_categories, service_name_for_slug, ServiceCategory};
pub use tiers::{
    can_receive_quotes, can_show_pricing, get_display_tier, quote_eligible, tier_priority,
    DisplayTier,
};
pub use vendor::{ListingStatus, PublicVendor, ScoredVendor, VendorProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("failed to read vendor seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vendor seed file: {0}")]
    SeedFileParse(#[from] serde_yaml::Error),
    #[error("invalid vendor seed file: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid listing status: {0}")]
    InvalidListingStatus(String),
}
