//! # BIN Record Data Model
//!
//! Typed view of the JSON document returned by the binlist lookup service.
//! Only the fields that end up in a report are modelled; everything else the
//! service sends (card number length, Luhn flag, coordinates, ...) is ignored
//! so a surprise in those keys can never fail the decode.
//! Every modelled field is optional and independently absent.
//!
//! ```rust
//! use bin_lookup_bot::bin_record::BinRecord;
//!
//! let record: BinRecord = serde_json::from_str(r#"{"scheme": "visa", "prepaid": false}"#).unwrap();
//! assert_eq!(record.scheme.as_deref(), Some("visa"));
//! assert_eq!(record.prepaid, Some(false));
//! assert!(record.bank.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Lookup result for a single BIN
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinRecord {
    /// Card network (e.g., "visa", "mastercard")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Card type (e.g., "debit", "credit")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    /// Card tier or level (e.g., "classic", "platinum")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Whether the card is prepaid. `None` means the key was absent or null,
    /// which is distinct from `Some(false)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepaid: Option<bool>,

    /// Issuing bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,

    /// Issuing country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

/// Issuing bank details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Issuing country details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
    /// Flag emoji
    #[serde(default)]
    pub emoji: Option<String>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,
}

impl BinRecord {
    /// True when none of the reported fields carries a value
    ///
    /// Empty strings count as absent, `prepaid: false` counts as present.
    pub fn is_empty(&self) -> bool {
        let bank_empty = self.bank.as_ref().map_or(true, |bank| {
            non_empty(&bank.name).is_none()
                && non_empty(&bank.url).is_none()
                && non_empty(&bank.phone).is_none()
        });
        let country_empty = self.country.as_ref().map_or(true, |country| {
            non_empty(&country.name).is_none()
                && non_empty(&country.emoji).is_none()
                && non_empty(&country.currency).is_none()
        });

        non_empty(&self.scheme).is_none()
            && non_empty(&self.card_type).is_none()
            && non_empty(&self.brand).is_none()
            && self.prepaid.is_none()
            && bank_empty
            && country_empty
    }
}

/// Treat empty strings the same as absent values
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
