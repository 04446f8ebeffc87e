//! Subscription tier normalization.
//!
//! Vendors carry a raw, alias-laden tier label (legacy plan names included).
//! Everything downstream works with the three-value [`DisplayTier`].

use serde::{Deserialize, Serialize};

const VERIFIED_ALIASES: &[&str] = &["enterprise", "managed", "verified", "gold", "platinum"];
const VISIBLE_ALIASES: &[&str] = &["basic", "visible", "standard", "silver", "bronze"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTier {
    Free,
    Visible,
    Verified,
}

impl DisplayTier {
    /// Tier contribution to the priority score, before the tier multiplier.
    #[must_use]
    pub fn priority(self) -> i64 {
        match self {
            DisplayTier::Free => 0,
            DisplayTier::Visible => 50,
            DisplayTier::Verified => 100,
        }
    }

    #[must_use]
    pub fn is_paid(self) -> bool {
        self != DisplayTier::Free
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayTier::Free => "free",
            DisplayTier::Visible => "visible",
            DisplayTier::Verified => "verified",
        }
    }
}

impl std::fmt::Display for DisplayTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalize a raw tier label. Unknown, empty, or absent labels are `Free`.
#[must_use]
pub fn get_display_tier(raw: Option<&str>) -> DisplayTier {
    let Some(raw) = raw else {
        return DisplayTier::Free;
    };
    let tier = raw.trim().to_ascii_lowercase();

    if VERIFIED_ALIASES.contains(&tier.as_str()) {
        DisplayTier::Verified
    } else if VISIBLE_ALIASES.contains(&tier.as_str()) {
        DisplayTier::Visible
    } else {
        DisplayTier::Free
    }
}

/// Tier score for a raw label: 0, 50, or 100.
#[must_use]
pub fn tier_priority(raw: Option<&str>) -> i64 {
    get_display_tier(raw).priority()
}

#[must_use]
pub fn can_show_pricing(raw: Option<&str>) -> bool {
    get_display_tier(raw).is_paid()
}

#[must_use]
pub fn can_receive_quotes(raw: Option<&str>) -> bool {
    can_show_pricing(raw)
}

/// Final quote eligibility: a paid tier, or the vendor-level pricing override.
#[must_use]
pub fn quote_eligible(raw: Option<&str>, show_pricing_override: bool) -> bool {
    can_receive_quotes(raw) || show_pricing_override
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KNOWN: &[(&str, DisplayTier)] = &[
        ("free", DisplayTier::Free),
        ("listed", DisplayTier::Free),
        ("basic", DisplayTier::Visible),
        ("visible", DisplayTier::Visible),
        ("standard", DisplayTier::Visible),
        ("silver", DisplayTier::Visible),
        ("bronze", DisplayTier::Visible),
        ("managed", DisplayTier::Verified),
        ("verified", DisplayTier::Verified),
        ("enterprise", DisplayTier::Verified),
        ("gold", DisplayTier::Verified),
        ("platinum", DisplayTier::Verified),
    ];

    #[test]
    fn every_known_alias_maps_to_its_group() {
        for (raw, expected) in ALL_KNOWN {
            assert_eq!(get_display_tier(Some(raw)), *expected, "alias '{raw}'");
        }
    }

    #[test]
    fn classification_is_case_insensitive() {
        for (raw, expected) in ALL_KNOWN {
            let upper = raw.to_uppercase();
            assert_eq!(get_display_tier(Some(&upper)), *expected, "alias '{upper}'");
        }
        assert_eq!(get_display_tier(Some("Gold ")), DisplayTier::Verified);
    }

    #[test]
    fn absent_empty_and_unknown_default_to_free() {
        assert_eq!(get_display_tier(None), DisplayTier::Free);
        assert_eq!(get_display_tier(Some("")), DisplayTier::Free);
        assert_eq!(get_display_tier(Some("unknown-tier")), DisplayTier::Free);
        assert_eq!(get_display_tier(Some("diamond")), DisplayTier::Free);
    }

    #[test]
    fn tier_priority_follows_display_tier() {
        assert_eq!(tier_priority(Some("listed")), 0);
        assert_eq!(tier_priority(Some("bronze")), 50);
        assert_eq!(tier_priority(Some("PLATINUM")), 100);
        assert_eq!(tier_priority(None), 0);
    }

    #[test]
    fn pricing_gate_matches_non_free_display_tier() {
        for (raw, tier) in ALL_KNOWN {
            assert_eq!(can_show_pricing(Some(raw)), *tier != DisplayTier::Free);
            assert_eq!(can_receive_quotes(Some(raw)), can_show_pricing(Some(raw)));
        }
        assert!(!can_show_pricing(None));
    }

    #[test]
    fn pricing_override_makes_free_vendor_quote_eligible() {
        assert!(!quote_eligible(Some("free"), false));
        assert!(quote_eligible(Some("free"), true));
        assert!(quote_eligible(Some("standard"), false));
    }

    #[test]
    fn display_tier_serializes_lowercase() {
        let json = serde_json::to_string(&DisplayTier::Visible).expect("serialize");
        assert_eq!(json, "\"visible\"");
        assert_eq!(DisplayTier::Verified.to_string(), "verified");
    }
}
