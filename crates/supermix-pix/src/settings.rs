//! Merchant PIX settings.
//!
//! The site keeps its settings as key/value rows; the three PIX rows are
//! picked out by key and everything else is ignored.

use serde::{Deserialize, Serialize};

/// Setting row keys.
pub mod keys {
    pub const PIX_KEY: &str = "pix_key";
    pub const PIX_NAME: &str = "pix_name";
    pub const PIX_CITY: &str = "pix_city";
}

/// Environment variables read by [`PixSettings::from_env`].
pub mod env {
    pub const PIX_KEY: &str = "PIX_KEY";
    pub const PIX_NAME: &str = "PIX_NAME";
    pub const PIX_CITY: &str = "PIX_CITY";
}

/// The receiving account as configured by the merchant, before any
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixSettings {
    #[serde(default, alias = "pix_key")]
    pub key: String,
    #[serde(default, alias = "pix_name")]
    pub name: String,
    #[serde(default, alias = "pix_city")]
    pub city: String,
}

impl PixSettings {
    pub fn new(key: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            city: city.into(),
        }
    }

    /// Collect settings from key/value rows.
    ///
    /// Later rows win when a key repeats.
    pub fn from_rows<I, K, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::default();
        for (key, value) in rows {
            match key.as_ref() {
                keys::PIX_KEY => settings.key = value.into(),
                keys::PIX_NAME => settings.name = value.into(),
                keys::PIX_CITY => settings.city = value.into(),
                _ => {}
            }
        }
        settings
    }

    /// Read `PIX_KEY`, `PIX_NAME` and `PIX_CITY` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            key: lookup(env::PIX_KEY).unwrap_or_default(),
            name: lookup(env::PIX_NAME).unwrap_or_default(),
            city: lookup(env::PIX_CITY).unwrap_or_default(),
        }
    }

    /// Setting keys whose values are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (keys::PIX_KEY, &self.key),
            (keys::PIX_NAME, &self.name),
            (keys::PIX_CITY, &self.city),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
