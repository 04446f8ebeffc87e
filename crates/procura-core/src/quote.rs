//! Quote request payload validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::normalize_service;

/// Response-time promise returned with every accepted quote request.
pub const EXPECTED_RESPONSE: &str = "1-2 business days";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Incoming quote request as posted by the public site. Every field is
/// optional at the serde level so missing fields surface as validation
/// details rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub vendor_id: Option<String>,
    pub service: Option<String>,
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub postcode: Option<String>,
    pub message: Option<String>,
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub monthly_volume: Option<String>,
    pub requirements: Option<String>,
    pub referral_source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequirements {
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub monthly_volume: Option<String>,
    pub requirements: Option<String>,
    pub message: Option<String>,
}

/// A quote request that passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuote {
    pub vendor_id: Uuid,
    /// Canonical service name.
    pub service: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub postcode: Option<String>,
    pub referral_source: Option<String>,
    pub requirements: QuoteRequirements,
}

fn trimmed(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl QuoteRequest {
    /// Check required fields and formats.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field, in payload order.
    pub fn validate(&self) -> Result<ValidatedQuote, Vec<String>> {
        let mut details = Vec::new();

        let mut required = |field: &str, value: Option<&String>| {
            let v = trimmed(value);
            if v.is_none() {
                details.push(format!("{field} is required"));
            }
            v
        };

        let vendor_id = required("vendorId", self.vendor_id.as_ref());
        let service = required("service", self.service.as_ref());
        let company_name = required("companyName", self.company_name.as_ref());
        let contact_name = required("contactName", self.contact_name.as_ref());
        let email = required("email", self.email.as_ref());
        let phone = required("phone", self.phone.as_ref());

        let vendor_uuid = vendor_id.as_deref().and_then(|id| {
            let parsed = Uuid::parse_str(id).ok();
            if parsed.is_none() {
                details.push("vendorId is not a valid supplier id".to_string());
            }
            parsed
        });

        if let Some(ref e) = email {
            if !EMAIL_RE.is_match(e) {
                details.push("email must be a valid email address".to_string());
            }
        }

        if !details.is_empty() {
            return Err(details);
        }

        match (vendor_uuid, service, company_name, contact_name, email, phone) {
            (
                Some(vendor_id),
                Some(service),
                Some(company_name),
                Some(contact_name),
                Some(email),
                Some(phone),
            ) => Ok(ValidatedQuote {
                vendor_id,
                service: normalize_service(&service),
                company_name,
                contact_name,
                email: email.to_lowercase(),
                phone,
                postcode: trimmed(self.postcode.as_ref()).map(|p| p.to_uppercase()),
                referral_source: trimmed(self.referral_source.as_ref()),
                requirements: QuoteRequirements {
                    timeline: trimmed(self.timeline.as_ref()),
                    budget_range: trimmed(self.budget_range.as_ref()),
                    monthly_volume: trimmed(self.monthly_volume.as_ref()),
                    requirements: trimmed(self.requirements.as_ref()),
                    message: trimmed(self.message.as_ref()),
                },
            }),
            _ => Err(vec!["quote request is incomplete".to_string()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENDOR: &str = "6f1c2a44-8d0b-4c47-9d1e-2b7f3a9c0e11";

    fn valid_request() -> QuoteRequest {
        QuoteRequest {
            vendor_id: Some(VENDOR.to_string()),
            service: Some("photocopiers".to_string()),
            company_name: Some("Harbour Dental".to_string()),
            contact_name: Some("Sam Jones".to_string()),
            email: Some("Sam@HarbourDental.example".to_string()),
            phone: Some("029 2000 0001".to_string()),
            postcode: Some(" cf10 1aa ".to_string()),
            monthly_volume: Some("5000".to_string()),
            ..QuoteRequest::default()
        }
    }

    #[test]
    fn valid_request_is_normalized() {
        let quote = valid_request().validate().expect("should validate");
        assert_eq!(quote.vendor_id.to_string(), VENDOR);
        assert_eq!(quote.service, "Photocopiers");
        assert_eq!(quote.email, "sam@harbourdental.example");
        assert_eq!(quote.postcode.as_deref(), Some("CF10 1AA"));
        assert_eq!(quote.requirements.monthly_volume.as_deref(), Some("5000"));
        assert!(quote.requirements.timeline.is_none());
    }

    #[test]
    fn empty_request_lists_every_required_field() {
        let details = QuoteRequest::default().validate().unwrap_err();
        assert_eq!(
            details,
            vec![
                "vendorId is required",
                "service is required",
                "companyName is required",
                "contactName is required",
                "email is required",
                "phone is required",
            ]
        );
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let mut request = valid_request();
        request.contact_name = Some("   ".to_string());
        let details = request.validate().unwrap_err();
        assert_eq!(details, vec!["contactName is required"]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["not-an-email", "a@b", "two@@example.com", "sp ace@example.com"] {
            let mut request = valid_request();
            request.email = Some(bad.to_string());
            let details = request.validate().unwrap_err();
            assert_eq!(details, vec!["email must be a valid email address"], "{bad}");
        }
    }

    #[test]
    fn malformed_vendor_id_is_rejected() {
        let mut request = valid_request();
        request.vendor_id = Some("64b7f0c2e1".to_string());
        let details = request.validate().unwrap_err();
        assert_eq!(details, vec!["vendorId is not a valid supplier id"]);
    }

    #[test]
    fn unknown_service_passes_through() {
        let mut request = valid_request();
        request.service = Some("Shredding".to_string());
        assert_eq!(request.validate().unwrap().service, "Shredding");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let request: QuoteRequest = serde_json::from_value(serde_json::json!({
            "vendorId": VENDOR,
            "service": "telecoms",
            "companyName": "Bay Logistics",
            "contactName": "Alex",
            "email": "alex@bay.example",
            "phone": "01234",
            "budgetRange": "£1k-£5k"
        }))
        .expect("deserialize");
        let quote = request.validate().expect("validate");
        assert_eq!(quote.service, "Telecoms");
        assert_eq!(quote.requirements.budget_range.as_deref(), Some("£1k-£5k"));
    }
}
