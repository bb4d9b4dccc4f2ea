//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use supermix_pix::{PixConfig, PixGenerator, PixSettings};

/// Settings rows as the site stores them, PIX rows mixed with unrelated ones.
pub const SAMPLE_ROWS: &[(&str, &str)] = &[
    ("company_name", "Supermix Concreto"),
    ("pix_key", "pix@supermix.com.br"),
    ("whatsapp", "5562999999999"),
    ("pix_name", "Supermix Concreto Usinado Ltda"),
    ("pix_city", "Goiânia"),
    ("footer_text", "Concreto de qualidade"),
];

/// A merchant with settings and a configuration.
pub struct TestFixture {
    pub settings: PixSettings,
    pub config: PixConfig,
}

impl TestFixture {
    /// Fixture loaded from [`SAMPLE_ROWS`] with the default configuration.
    pub fn new() -> Self {
        Self {
            settings: PixSettings::from_rows(SAMPLE_ROWS.iter().copied()),
            config: PixConfig::default(),
        }
    }

    /// Fixture for an explicit merchant.
    pub fn with_settings(key: &str, name: &str, city: &str) -> Self {
        Self {
            settings: PixSettings::new(key, name, city),
            config: PixConfig::default(),
        }
    }

    /// Turn input validation off.
    pub fn without_validation(mut self) -> Self {
        self.config.validate_inputs = false;
        self
    }

    /// Override the transaction id.
    pub fn transaction_id(mut self, txid: &str) -> Self {
        self.config.transaction_id = txid.to_string();
        self
    }

    /// A generator for this merchant.
    pub fn generator(&self) -> PixGenerator {
        PixGenerator::new(self.settings.clone(), self.config.clone())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixtures for several merchants, one per key type.
pub fn merchant_fixtures() -> Vec<TestFixture> {
    vec![
        TestFixture::with_settings("pix@supermix.com.br", "Supermix Concreto", "Goiânia"),
        TestFixture::with_settings("62999887766", "Supermix Anápolis", "Anápolis"),
        TestFixture::with_settings("+5561988776655", "Supermix Brasília", "Brasília"),
        TestFixture::with_settings("12.345.678/0001-95", "Supermix Concreto SA", "Goiânia"),
        TestFixture::with_settings(
            "123e4567-e12b-12d1-a456-426655440000",
            "Supermix Uberlândia",
            "Uberlândia",
        ),
    ]
}
