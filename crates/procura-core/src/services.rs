//! Service category vocabulary shared by listings and quote intake.

use serde::Serialize;

/// Category slug to canonical service name, in display order.
pub const SERVICE_SLUG_MAP: &[(&str, &str)] = &[
    ("photocopiers", "Photocopiers"),
    ("printers", "Printers"),
    ("managed-print", "Managed Print"),
    ("telecoms", "Telecoms"),
    ("it-support", "IT Support"),
    ("cctv", "CCTV"),
    ("security-systems", "Security Systems"),
    ("document-management", "Document Management"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub slug: &'static str,
    pub name: &'static str,
}

/// Resolve a category slug (or canonical name) to its canonical service name.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
#[must_use]
pub fn service_name_for_slug(value: &str) -> Option<&'static str> {
    let needle = value.trim();
    SERVICE_SLUG_MAP
        .iter()
        .find(|(slug, name)| slug.eq_ignore_ascii_case(needle) || name.eq_ignore_ascii_case(needle))
        .map(|(_, name)| *name)
}

/// Canonical service name for a quote request. Unknown values pass through trimmed.
#[must_use]
pub fn normalize_service(value: &str) -> String {
    service_name_for_slug(value).map_or_else(|| value.trim().to_string(), str::to_string)
}

#[must_use]
pub fn service_categories() -> Vec<ServiceCategory> {
    SERVICE_SLUG_MAP
        .iter()
        .map(|&(slug, name)| ServiceCategory { slug, name })
        .collect()
}
