//! Optional checks run before a payload is built.
//!
//! The builder itself accepts anything. These checks catch the mistakes an
//! admin is likely to make when configuring PIX: blank settings and a zero
//! or negative amount.

use supermix_pix_core::Amount;
use thiserror::Error;

use crate::settings::PixSettings;

/// Reasons a request is rejected before building.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("PIX settings incomplete, missing: {}", .missing.join(", "))]
    IncompleteSettings { missing: Vec<&'static str> },

    #[error("amount must be a finite value above zero, got {0}")]
    InvalidAmount(Amount),
}

/// Every setting must be non-blank.
pub fn validate_settings(settings: &PixSettings) -> Result<(), ValidationError> {
    let missing = settings.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::IncompleteSettings { missing })
    }
}

/// The amount must be finite and strictly positive.
pub fn validate_amount(amount: impl Into<Amount>) -> Result<(), ValidationError> {
    let amount = amount.into();
    if amount.is_positive() {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount(amount))
    }
}

/// Settings first, then amount.
pub fn validate_request(
    settings: &PixSettings,
    amount: impl Into<Amount>,
) -> Result<(), ValidationError> {
    validate_settings(settings)?;
    validate_amount(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::keys;

    fn complete() -> PixSettings {
        PixSettings::new("pix@example.com", "ACME CONCRETO", "SAO PAULO")
    }

    #[test]
    fn test_complete_settings_pass() {
        assert!(validate_settings(&complete()).is_ok());
    }

    #[test]
    fn test_incomplete_settings() {
        let err = validate_settings(&PixSettings::new("pix@example.com", "", " ")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::IncompleteSettings {
                missing: vec![keys::PIX_NAME, keys::PIX_CITY]
            }
        );
        assert_eq!(
            err.to_string(),
            "PIX settings incomplete, missing: pix_name, pix_city"
        );
    }

    #[test]
    fn test_amounts() {
        assert!(validate_amount(10.0).is_ok());
        assert!(validate_amount(Amount::from(0.01)).is_ok());
        assert!(validate_amount(Amount::from(0.0)).is_err());
        assert!(validate_amount(Amount::from(-5.0)).is_err());
        assert!(validate_amount(Amount::from(f64::NAN)).is_err());
    }

    #[test]
    fn test_invalid_amount_message() {
        let err = validate_amount(Amount::from(-5.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "amount must be a finite value above zero, got -5.00"
        );
    }

    #[test]
    fn test_settings_checked_before_amount() {
        let err = validate_request(&PixSettings::default(), Amount::from(0.0)).unwrap_err();
        assert!(matches!(err, ValidationError::IncompleteSettings { .. }));

        let err = validate_request(&complete(), Amount::from(0.0)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount(_)));
    }
}
