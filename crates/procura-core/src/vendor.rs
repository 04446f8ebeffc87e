//! Vendor read model and its public listing view.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Ranked;
use crate::scoring::{calculate_priority_score, ScoreInput};
use crate::tiers::{get_display_tier, DisplayTier};
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Unclaimed,
    Claimed,
    Verified,
    Suspended,
}

impl ListingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Unclaimed => "unclaimed",
            ListingStatus::Claimed => "claimed",
            ListingStatus::Verified => "verified",
            ListingStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unclaimed" => Ok(ListingStatus::Unclaimed),
            "claimed" => Ok(ListingStatus::Claimed),
            "verified" => Ok(ListingStatus::Verified),
            "suspended" => Ok(ListingStatus::Suspended),
            other => Err(CoreError::InvalidListingStatus(other.to_string())),
        }
    }
}

/// The vendor fields the listing pipeline reads.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProfile {
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
    pub listing_status: ListingStatus,
    pub show_pricing: bool,
    pub rating: f64,
    pub review_count: i32,
    pub login_count: i32,
}

impl VendorProfile {
    #[must_use]
    pub fn display_tier(&self) -> DisplayTier {
        get_display_tier(Some(self.tier.as_str()))
    }

    #[must_use]
    pub fn score_input(&self, has_products: bool) -> ScoreInput<'_> {
        ScoreInput {
            tier: Some(self.tier.as_str()),
            company: Some(self.company.as_str()),
            phone: self.phone.as_deref(),
            email: self.email.as_deref(),
            website: self.website.as_deref(),
            years_in_business: self.years_in_business,
            description: self.description.as_deref(),
            has_products,
            brands: &self.brands,
            coverage: &self.coverage,
        }
    }

    /// Whether a real business stands behind this listing, as opposed to a
    /// seeded directory placeholder.
    #[must_use]
    pub fn account_claimed(&self) -> bool {
        matches!(
            self.listing_status,
            ListingStatus::Claimed | ListingStatus::Verified
        ) || self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
            || self.display_tier().is_paid()
            || self.rating > 0.0
            || self.login_count > 0
    }

    #[must_use]
    pub fn shows_pricing(&self) -> bool {
        self.display_tier().is_paid() || self.show_pricing
    }
}

/// A vendor with its per-request ranking inputs attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVendor {
    pub profile: VendorProfile,
    pub product_count: i64,
    pub priority_score: i64,
}

impl ScoredVendor {
    #[must_use]
    pub fn new(profile: VendorProfile, product_count: i64) -> Self {
        let priority_score = calculate_priority_score(&profile.score_input(product_count > 0));
        Self {
            profile,
            product_count,
            priority_score,
        }
    }
}

impl Ranked for ScoredVendor {
    fn priority_score(&self) -> i64 {
        self.priority_score
    }

    fn rank_key(&self) -> i64 {
        self.profile.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicLocation {
    pub city: Option<String>,
    pub region: Option<String>,
    pub coverage: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPerformance {
    pub rating: f64,
    pub review_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBusinessProfile {
    pub description: Option<String>,
    pub years_in_business: Option<i32>,
}

/// Public listing card. Contact details other than the website, account
/// state, and login activity never leave the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicVendor {
    pub id: Uuid,
    pub company: String,
    pub name: Option<String>,
    pub services: Vec<String>,
    pub location: PublicLocation,
    pub performance: PublicPerformance,
    pub business_profile: PublicBusinessProfile,
    pub brands: Vec<String>,
    pub tier: DisplayTier,
    pub website: Option<String>,
    pub product_count: i64,
    pub priority_score: i64,
    pub listing_status: ListingStatus,
    pub account_claimed: bool,
    pub show_pricing: bool,
}

impl From<ScoredVendor> for PublicVendor {
    fn from(scored: ScoredVendor) -> Self {
        let tier = scored.profile.display_tier();
        let account_claimed = scored.profile.account_claimed();
        let show_pricing = scored.profile.shows_pricing();
        let v = scored.profile;

        Self {
            id: v.public_id,
            company: v.company,
            name: v.name,
            services: v.services,
            location: PublicLocation {
                city: v.city,
                region: v.region,
                coverage: v.coverage,
            },
            performance: PublicPerformance {
                rating: v.rating,
                review_count: v.review_count,
            },
            business_profile: PublicBusinessProfile {
                description: v.description,
                years_in_business: v.years_in_business,
            },
            brands: v.brands,
            tier,
            website: v.website,
            product_count: scored.product_count,
            priority_score: scored.priority_score,
            listing_status: v.listing_status,
            account_claimed,
            show_pricing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(id: i64) -> VendorProfile {
        VendorProfile {
            id,
            public_id: Uuid::nil(),
            company: String::new(),
            name: None,
            email: None,
            phone: None,
            website: None,
            description: None,
            years_in_business: None,
            services: vec!["Photocopiers".to_string()],
            brands: vec![],
            city: Some("Swansea".to_string()),
            region: Some("Wales".to_string()),
            coverage: vec![],
            tier: "free".to_string(),
            listing_status: ListingStatus::Unclaimed,
            show_pricing: false,
            rating: 0.0,
            review_count: 0,
            login_count: 0,
        }
    }

    #[test]
    fn listing_status_parses_known_values() {
        assert_eq!(
            "claimed".parse::<ListingStatus>().unwrap(),
            ListingStatus::Claimed
        );
        assert!("archived".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn unclaimed_placeholder_is_not_claimed() {
        assert!(!placeholder(1).account_claimed());
    }

    #[test]
    fn any_claim_signal_marks_account_claimed() {
        let mut claimed = placeholder(1);
        claimed.listing_status = ListingStatus::Claimed;
        assert!(claimed.account_claimed());

        let mut with_phone = placeholder(2);
        with_phone.phone = Some("01792 000000".to_string());
        assert!(with_phone.account_claimed());

        let mut paid = placeholder(3);
        paid.tier = "silver".to_string();
        assert!(paid.account_claimed());

        let mut rated = placeholder(4);
        rated.rating = 4.5;
        assert!(rated.account_claimed());

        let mut logged_in = placeholder(5);
        logged_in.login_count = 2;
        assert!(logged_in.account_claimed());
    }

    #[test]
    fn show_pricing_combines_tier_and_override() {
        let mut vendor = placeholder(1);
        assert!(!vendor.shows_pricing());
        vendor.show_pricing = true;
        assert!(vendor.shows_pricing());
        vendor.show_pricing = false;
        vendor.tier = "Enterprise".to_string();
        assert!(vendor.shows_pricing());
    }

    #[test]
    fn scored_vendor_uses_product_count_as_signal() {
        let without = ScoredVendor::new(placeholder(1), 0);
        let with = ScoredVendor::new(placeholder(1), 3);
        assert_eq!(without.priority_score, 0);
        assert_eq!(with.priority_score, 150);
    }

    #[test]
    fn public_view_strips_private_contact_fields() {
        let mut vendor = placeholder(9);
        vendor.email = Some("owner@example.com".to_string());
        vendor.phone = Some("07700 900000".to_string());
        vendor.tier = "gold".to_string();

        let public = PublicVendor::from(ScoredVendor::new(vendor, 1));
        let json = serde_json::to_value(&public).expect("serialize");

        assert_eq!(json["tier"], "verified");
        assert_eq!(json["accountClaimed"], true);
        assert_eq!(json["showPricing"], true);
        assert_eq!(json["productCount"], 1);
        assert_eq!(json["location"]["city"], "Swansea");
        assert!(json.get("email").is_none());
        assert!(json.get("phone").is_none());
        assert!(json.get("loginCount").is_none());
    }
}
