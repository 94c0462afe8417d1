//! Domain types exchanged between the network, storage and client layers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::Locale;

// ---------------------------------------------------------------------------
// RawCountry
// ---------------------------------------------------------------------------

/// One element of the REST Countries response, kept as untyped JSON.
///
/// The API is loosely typed in practice (missing capitals, absent flags), so
/// the record is only interpreted when it is selected for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCountry(pub Value);

impl RawCountry {
    /// `name.common`, if it is a non-blank string.
    pub fn common_name(&self) -> Option<&str> {
        self.0
            .get("name")
            .and_then(|n| n.get("common"))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// First entry of the `capital` array, if it is a string.
    pub fn first_capital(&self) -> Option<&str> {
        self.0
            .get("capital")
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .and_then(Value::as_str)
    }

    /// `population`, when it is a JSON number that fits a head count.
    pub fn population(&self) -> Option<u64> {
        let value = self.0.get("population")?;
        if let Some(n) = value.as_u64() {
            return Some(n);
        }
        match value.as_f64() {
            Some(f) if f.is_finite() && f >= 0.0 => Some(f as u64),
            _ => None,
        }
    }

    /// Raster flag URL, falling back to the vector one.
    pub fn flag_url(&self) -> Option<&str> {
        let flags = self.0.get("flags")?;
        ["png", "svg"]
            .iter()
            .filter_map(|kind| flags.get(*kind).and_then(Value::as_str))
            .find(|url| !url.is_empty())
    }

    /// Interpret the raw record, substituting the locale's sentinels for
    /// anything missing or malformed.
    pub fn normalize(&self, locale: Locale) -> CountryRecord {
        let text = locale.messages();
        CountryRecord {
            name: self.common_name().unwrap_or(text.no_name).to_string(),
            capital: self.first_capital().unwrap_or(text.no_capital).to_string(),
            population: self.population(),
            flag: self.flag_url().unwrap_or_default().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// CountryRecord
// ---------------------------------------------------------------------------

/// A country ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub capital: String,
    pub population: Option<u64>,
    /// Flag image URL; empty when the API offered none.
    pub flag: String,
}

// ---------------------------------------------------------------------------
// FavoriteEntry
// ---------------------------------------------------------------------------

/// A saved country. Serialized as `{"name": ..., "date": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub name: String,
    /// ISO-8601 timestamp of when the entry was added.
    #[serde(rename = "date")]
    pub added_at: String,
}

impl FavoriteEntry {
    pub fn new(name: impl Into<String>, added_at: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            added_at: added_at.into(),
        }
    }
}
