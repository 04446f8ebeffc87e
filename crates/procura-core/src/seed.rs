use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::vendor::ListingStatus;
use crate::ConfigError;

fn default_tier() -> String {
    "free".to_string()
}

fn default_listing_status() -> ListingStatus {
    ListingStatus::Unclaimed
}

fn default_account_status() -> String {
    "pending".to_string()
}

fn default_verification_status() -> String {
    "unverified".to_string()
}

/// One directory entry in the vendor seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSeed {
    pub company: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub years_in_business: Option<i32>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postcode: Option<String>,
    #[serde(default)]
    pub coverage: Vec<String>,
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default = "default_listing_status")]
    pub listing_status: ListingStatus,
    #[serde(default = "default_account_status")]
    pub account_status: String,
    #[serde(default = "default_verification_status")]
    pub verification_status: String,
    #[serde(default)]
    pub show_pricing: bool,
    /// Names of active products to attach to the vendor.
    #[serde(default)]
    pub products: Vec<String>,
}

impl VendorSeed {
    /// Generate a URL-safe slug from the company name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.company
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct VendorSeedFile {
    pub vendors: Vec<VendorSeed>,
}

/// Load and validate the vendor seed file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vendor_seeds(path: &Path) -> Result<VendorSeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_vendor_seeds(&content)
}

fn parse_vendor_seeds(content: &str) -> Result<VendorSeedFile, ConfigError> {
    let file: VendorSeedFile = serde_yaml::from_str(content)?;
    validate_vendor_seeds(&file)?;
    Ok(file)
}

fn validate_vendor_seeds(file: &VendorSeedFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for vendor in &file.vendors {
        if vendor.company.trim().is_empty() {
            return Err(ConfigError::Validation(
                "vendor company must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(vendor.company.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor company: '{}'",
                vendor.company
            )));
        }

        let slug = vendor.slug();
        if slug.is_empty() || !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' has an empty or duplicate slug '{slug}'",
                vendor.company
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_entry_with_defaults() {
        let file = parse_vendor_seeds(
            "vendors:\n  - company: Valley Copiers\n    services: [Photocopiers]\n",
        )
        .expect("valid seed file");
        let vendor = &file.vendors[0];
        assert_eq!(vendor.tier, "free");
        assert_eq!(vendor.listing_status, ListingStatus::Unclaimed);
        assert_eq!(vendor.account_status, "pending");
        assert_eq!(vendor.verification_status, "unverified");
        assert!(!vendor.show_pricing);
        assert!(vendor.products.is_empty());
        assert_eq!(vendor.slug(), "valley-copiers");
    }

    #[test]
    fn slug_strips_punctuation() {
        let file = parse_vendor_seeds("vendors:\n  - company: \"O'Neill & Sons Ltd.\"\n")
            .expect("valid seed file");
        assert_eq!(file.vendors[0].slug(), "oneill-sons-ltd");
    }

    #[test]
    fn rejects_blank_company() {
        let err = parse_vendor_seeds("vendors:\n  - company: \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_duplicate_company_case_insensitively() {
        let err = parse_vendor_seeds(
            "vendors:\n  - company: Valley Copiers\n  - company: valley copiers\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn rejects_unknown_listing_status() {
        let err = parse_vendor_seeds(
            "vendors:\n  - company: Valley Copiers\n    listing_status: archived\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::SeedFileParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_vendor_seeds(Path::new("/nonexistent/vendors.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::SeedFileIo { ref path, .. } if path.contains("vendors.yaml")));
    }
}
