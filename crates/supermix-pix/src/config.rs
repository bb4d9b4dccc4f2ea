//! Generator configuration.

use serde::{Deserialize, Serialize};
use supermix_pix_core::payload::{DEFAULT_MCC, DEFAULT_TRANSACTION_ID};
use supermix_pix_core::PayloadBuilder;

/// Configuration for [`PixGenerator`](crate::PixGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixConfig {
    /// Transaction id written into the additional data template.
    pub transaction_id: String,
    /// Merchant category code (tag 52).
    pub merchant_category_code: String,
    /// Whether to reject incomplete settings and non-positive amounts
    /// before building.
    pub validate_inputs: bool,
    /// QR rendering options.
    pub qr: QrOptions,
}

impl Default for PixConfig {
    fn default() -> Self {
        Self {
            transaction_id: DEFAULT_TRANSACTION_ID.to_string(),
            merchant_category_code: DEFAULT_MCC.to_string(),
            validate_inputs: true,
            qr: QrOptions::default(),
        }
    }
}

impl PixConfig {
    /// A payload builder carrying this configuration's static fields.
    pub fn payload_builder(&self) -> PayloadBuilder {
        PayloadBuilder::new()
            .transaction_id(self.transaction_id.clone())
            .merchant_category_code(self.merchant_category_code.clone())
    }
}

/// How the QR image is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Minimum width and height of the image, in pixels.
    pub min_dimension: u32,
    /// Draw the white border around the symbol.
    pub quiet_zone: bool,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for QrOptions {
    /// Sized for on-screen preview.
    fn default() -> Self {
        Self {
            min_dimension: 300,
            quiet_zone: true,
            dark_color: "#000000".to_string(),
            light_color: "#FFFFFF".to_string(),
        }
    }
}

impl QrOptions {
    /// Smaller image for embedding in printed order summaries.
    pub fn compact() -> Self {
        Self {
            min_dimension: 200,
            ..Self::default()
        }
    }
}
