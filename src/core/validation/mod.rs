//! Pure shipping details validation
//!
//! Validation never touches the network or the clock: the same details and
//! locality always produce the same [`FieldErrors`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// local@domain.tld with no whitespace and a single `@`
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid regex pattern"));

/// The closed set of shipping form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingField {
    FullName,
    Email,
    Phone,
    StreetAddress,
    HouseNumber,
    PostalCode,
    City,
}

impl ShippingField {
    pub fn as_str(self) -> &'static str {
        match self {
            ShippingField::FullName => "full_name",
            ShippingField::Email => "email",
            ShippingField::Phone => "phone",
            ShippingField::StreetAddress => "street_address",
            ShippingField::HouseNumber => "house_number",
            ShippingField::PostalCode => "postal_code",
            ShippingField::City => "city",
        }
    }
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery details collected during the shipping step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
}

impl ShippingDetails {
    /// Blank details with the city fixed to the delivery locality
    pub fn for_locality(locality: &str) -> Self {
        Self {
            city: locality.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::FullName => &self.full_name,
            ShippingField::Email => &self.email,
            ShippingField::Phone => &self.phone,
            ShippingField::StreetAddress => &self.street_address,
            ShippingField::HouseNumber => &self.house_number,
            ShippingField::PostalCode => &self.postal_code,
            ShippingField::City => &self.city,
        }
    }

    /// Pure: Replace one editable field.
    ///
    /// The city is locked to the delivery locality, so edits to it are
    /// dropped and the details come back unchanged.
    pub fn with_field(mut self, field: ShippingField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ShippingField::FullName => self.full_name = value,
            ShippingField::Email => self.email = value,
            ShippingField::Phone => self.phone = value,
            ShippingField::StreetAddress => self.street_address = value,
            ShippingField::HouseNumber => self.house_number = value,
            ShippingField::PostalCode => self.postal_code = value,
            ShippingField::City => {}
        }
        self
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldError {
    Required,
    InvalidFormat,
    OutsideLocality { locality: String },
}

impl FieldError {
    /// Message shown next to the offending input
    pub fn message(&self, field: ShippingField) -> String {
        match (self, field) {
            (FieldError::OutsideLocality { locality }, _) => format!("{} only.", locality),
            (FieldError::InvalidFormat, ShippingField::Email) => "Invalid email".to_string(),
            (FieldError::InvalidFormat, other) => format!("Invalid {}", other),
            (FieldError::Required, ShippingField::FullName) => "Name is required".to_string(),
            (FieldError::Required, ShippingField::Phone) => "Phone is required".to_string(),
            (FieldError::Required, ShippingField::StreetAddress) => "Street required".to_string(),
            (FieldError::Required, other) => format!("{} is required", other),
        }
    }
}

/// Field errors keyed by field, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ShippingField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ShippingField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: ShippingField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: ShippingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShippingField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// `(field, message)` pairs ready for display
    pub fn messages(&self) -> Vec<(ShippingField, String)> {
        self.iter()
            .map(|(field, error)| (field, error.message(field)))
            .collect()
    }
}

/// Pure: Validate shipping details against the delivery locality.
///
/// Postal code and house number are collected but not checked.
pub fn validate(details: &ShippingDetails, locality: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if details.full_name.trim().is_empty() {
        errors.insert(ShippingField::FullName, FieldError::Required);
    }
    if !EMAIL_REGEX.is_match(&details.email) {
        errors.insert(ShippingField::Email, FieldError::InvalidFormat);
    }
    if details.phone.trim().is_empty() {
        errors.insert(ShippingField::Phone, FieldError::Required);
    }
    if details.street_address.trim().is_empty() {
        errors.insert(ShippingField::StreetAddress, FieldError::Required);
    }
    if !is_within_locality(&details.city, locality) {
        errors.insert(
            ShippingField::City,
            FieldError::OutsideLocality {
                locality: locality.to_string(),
            },
        );
    }

    errors
}

/// Non-empty city that contains the locality name, ignoring case
fn is_within_locality(city: &str, locality: &str) -> bool {
    !city.trim().is_empty() && city.to_lowercase().contains(&locality.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> ShippingDetails {
        ShippingDetails::for_locality("Stockholm")
            .with_field(ShippingField::FullName, "Astrid Lind")
            .with_field(ShippingField::Email, "astrid@example.se")
            .with_field(ShippingField::Phone, "+46 70 123 45 67")
            .with_field(ShippingField::StreetAddress, "Sveavägen")
            .with_field(ShippingField::HouseNumber, "12")
            .with_field(ShippingField::PostalCode, "111 57")
    }

    #[test]
    fn test_well_formed_details_pass() {
        assert!(validate(&valid_details(), "Stockholm").is_empty());
    }

    #[test]
    fn test_blank_details_report_every_required_field() {
        let errors = validate(&ShippingDetails::for_locality("Stockholm"), "Stockholm");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ShippingField::FullName), Some(&FieldError::Required));
        assert_eq!(errors.get(ShippingField::Email), Some(&FieldError::InvalidFormat));
        assert_eq!(errors.get(ShippingField::Phone), Some(&FieldError::Required));
        assert_eq!(errors.get(ShippingField::StreetAddress), Some(&FieldError::Required));
        assert!(!errors.contains(ShippingField::City));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let details = valid_details()
            .with_field(ShippingField::FullName, "   ")
            .with_field(ShippingField::Phone, "\t");
        let errors = validate(&details, "Stockholm");
        assert!(errors.contains(ShippingField::FullName));
        assert!(errors.contains(ShippingField::Phone));
    }

    #[test]
    fn test_email_patterns() {
        for bad in ["astrid.example.se", "astrid@example", "astrid @example.se", "@example.se", ""] {
            let details = valid_details().with_field(ShippingField::Email, bad);
            assert!(
                validate(&details, "Stockholm").contains(ShippingField::Email),
                "{bad:?} should be rejected"
            );
        }
        for good in ["a@b.se", "first.last@sub.example.com"] {
            let details = valid_details().with_field(ShippingField::Email, good);
            assert!(validate(&details, "Stockholm").is_empty(), "{good:?} should pass");
        }
    }

    #[test]
    fn test_city_must_contain_locality() {
        let mut details = valid_details();
        details.city = "Göteborg".to_string();
        let errors = validate(&details, "Stockholm");
        assert_eq!(
            errors.get(ShippingField::City),
            Some(&FieldError::OutsideLocality {
                locality: "Stockholm".to_string()
            })
        );

        details.city = "STOCKHOLM city".to_string();
        assert!(validate(&details, "Stockholm").is_empty());

        details.city = "  ".to_string();
        assert!(validate(&details, "Stockholm").contains(ShippingField::City));
    }

    #[test]
    fn test_postal_code_and_house_number_unchecked() {
        let details = valid_details()
            .with_field(ShippingField::PostalCode, "")
            .with_field(ShippingField::HouseNumber, "not a number");
        assert!(validate(&details, "Stockholm").is_empty());
    }

    #[test]
    fn test_city_is_locked() {
        let details = ShippingDetails::for_locality("Stockholm").with_field(ShippingField::City, "Malmö");
        assert_eq!(details.city, "Stockholm");
        assert_eq!(details.get(ShippingField::City), "Stockholm");
    }

    #[test]
    fn test_messages() {
        let mut details = ShippingDetails::for_locality("Stockholm");
        details.city = "Uppsala".to_string();
        let messages = validate(&details, "Stockholm").messages();
        assert_eq!(
            messages,
            vec![
                (ShippingField::FullName, "Name is required".to_string()),
                (ShippingField::Email, "Invalid email".to_string()),
                (ShippingField::Phone, "Phone is required".to_string()),
                (ShippingField::StreetAddress, "Street required".to_string()),
                (ShippingField::City, "Stockholm only.".to_string()),
            ]
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let details = valid_details().with_field(ShippingField::Email, "nope");
        assert_eq!(validate(&details, "Stockholm"), validate(&details, "Stockholm"));
    }

    #[test]
    fn test_field_names_serialize_snake_case() {
        let mut errors = FieldErrors::new();
        errors.insert(ShippingField::StreetAddress, FieldError::Required);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"street_address": {"kind": "required"}}));
    }
}
