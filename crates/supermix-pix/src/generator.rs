//! The generator: settings + configuration in, copy-and-paste code and QR
//! image out.

use serde::{Deserialize, Serialize};
use supermix_pix_core::{
    normalize_city, normalize_name, Amount, DecodedPayload, KeyKind, PayloadBuilder, PixPayload,
};
use tracing::{debug, warn};

use crate::config::PixConfig;
use crate::error::Result;
use crate::qr;
use crate::settings::PixSettings;
use crate::validation::validate_request;

/// A generated code in both of its forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixCode {
    /// Text for the "copia e cola" field.
    pub payload: PixPayload,
    /// QR image of the same text.
    pub svg: String,
}

/// Generates PIX codes for one merchant.
///
/// Holds no mutable state; a single generator can be shared across threads.
#[derive(Debug, Clone)]
pub struct PixGenerator {
    settings: PixSettings,
    config: PixConfig,
    builder: PayloadBuilder,
}

impl PixGenerator {
    pub fn new(settings: PixSettings, config: PixConfig) -> Self {
        let builder = config.payload_builder();
        Self {
            settings,
            config,
            builder,
        }
    }

    pub fn settings(&self) -> &PixSettings {
        &self.settings
    }

    pub fn config(&self) -> &PixConfig {
        &self.config
    }

    /// Build the payload text for `amount`.
    ///
    /// With `validate_inputs` on, incomplete settings and non-positive
    /// amounts are rejected; otherwise this cannot fail.
    pub fn payload(&self, amount: impl Into<Amount>) -> Result<PixPayload> {
        let amount = amount.into();

        if self.config.validate_inputs {
            if let Err(e) = validate_request(&self.settings, amount) {
                warn!(error = %e, "rejected PIX request");
                return Err(e.into());
            }
        }

        debug!(
            key_kind = %KeyKind::classify(&self.settings.key),
            name = %normalize_name(&self.settings.name),
            city = %normalize_city(&self.settings.city),
            amount = %amount,
            "building PIX payload"
        );

        let payload = self.builder.build(
            &self.settings.key,
            &self.settings.name,
            &self.settings.city,
            amount,
        );

        debug!(len = payload.len(), crc = payload.crc(), "PIX payload built");
        Ok(payload)
    }

    /// Build the payload and render its QR image.
    pub fn generate(&self, amount: impl Into<Amount>) -> Result<PixCode> {
        let payload = self.payload(amount)?;
        let svg = qr::render_svg(payload.as_str(), &self.config.qr)?;
        Ok(PixCode { payload, svg })
    }

    /// Render a terminal QR for `amount`, alongside its payload.
    pub fn generate_terminal(&self, amount: impl Into<Amount>) -> Result<(PixPayload, String)> {
        let payload = self.payload(amount)?;
        let text = qr::render_terminal(payload.as_str())?;
        Ok((payload, text))
    }

    /// Read a code back and check its CRC.
    pub fn verify(code: &str) -> Result<DecodedPayload> {
        Ok(DecodedPayload::parse(code)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixError;
    use crate::validation::ValidationError;

    fn acme() -> PixGenerator {
        PixGenerator::new(
            PixSettings::new("pix@example.com", "ACME CONCRETO", "SAO PAULO"),
            PixConfig::default(),
        )
    }

    #[test]
    fn test_payload_matches_core() {
        let payload = acme().payload(100.0).unwrap();
        assert_eq!(
            payload.as_str(),
            supermix_pix_core::build_pix_payload(
                "pix@example.com",
                "ACME CONCRETO",
                "SAO PAULO",
                100.0
            )
        );
    }

    #[test]
    fn test_generate_renders_svg() {
        let code = acme().generate(100.0).unwrap();
        assert!(code.svg.contains("<svg"));
        assert_eq!(code.payload.crc(), "5282");
    }

    #[test]
    fn test_validation_rejects_zero_amount() {
        let err = acme().payload(0.0).unwrap_err();
        assert!(matches!(
            err,
            PixError::Validation(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_validation_rejects_incomplete_settings() {
        let generator = PixGenerator::new(
            PixSettings::new("pix@example.com", "", ""),
            PixConfig::default(),
        );
        let err = generator.payload(10.0).unwrap_err();
        assert!(matches!(
            err,
            PixError::Validation(ValidationError::IncompleteSettings { .. })
        ));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let generator = PixGenerator::new(
            PixSettings::new("pix@example.com", "", ""),
            PixConfig {
                validate_inputs: false,
                ..PixConfig::default()
            },
        );
        let payload = generator.payload(0.0).unwrap();
        assert!(payload.as_str().contains("54040.00"));
        assert!(payload.as_str().contains("59006000"));
    }

    #[test]
    fn test_config_transaction_id_flows_into_payload() {
        let generator = PixGenerator::new(
            PixSettings::new("pix@example.com", "ACME", "SAO PAULO"),
            PixConfig {
                transaction_id: "PEDIDO0042".to_string(),
                ..PixConfig::default()
            },
        );
        let decoded = PixGenerator::verify(generator.payload(10.0).unwrap().as_str()).unwrap();
        assert_eq!(decoded.transaction_id(), Some("PEDIDO0042"));
    }

    #[test]
    fn test_verify_rejects_tampered_code() {
        let code = acme().payload(100.0).unwrap().into_string().replace("100.00", "1.0000");
        assert!(matches!(
            PixGenerator::verify(&code),
            Err(PixError::Decode(_))
        ));
    }

    #[test]
    fn test_terminal_render() {
        let (payload, text) = acme().generate_terminal(25.0).unwrap();
        assert!(payload.as_str().contains("540525.00"));
        assert!(!text.is_empty());
    }
}
