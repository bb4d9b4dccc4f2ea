//! PIX key handling.
//!
//! Keys are passed through untouched except for one rule: a key whose digits
//! look like a Brazilian phone number without country code (10 or 11 digits)
//! gets `+55` prepended. No other validation happens here.
//!
//! The digit-count rule also matches 11-digit CPF numbers, so a CPF used as
//! a key is prefixed too. That behavior is kept as-is and pinned by tests.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Brazilian international calling-code prefix.
pub const COUNTRY_PREFIX: &str = "+55";

/// Apply the phone-number rule to a PIX key.
///
/// ```
/// use supermix_pix_core::key::normalize_key;
///
/// assert_eq!(normalize_key("11987654321"), "+5511987654321");
/// assert_eq!(normalize_key("+5511987654321"), "+5511987654321");
/// assert_eq!(normalize_key("email@x.com"), "email@x.com");
/// ```
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    let digits = key.chars().filter(|c| c.is_ascii_digit()).count();

    if matches!(digits, 10 | 11) && !key.starts_with(COUNTRY_PREFIX) {
        Cow::Owned(format!("{COUNTRY_PREFIX}{key}"))
    } else {
        Cow::Borrowed(key)
    }
}

/// Best-effort classification of a key, for display and logging.
///
/// This never influences the encoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Contains an `@`.
    Email,
    /// `+55` followed by 10 or 11 digits.
    Phone,
    /// 11 (CPF) or 14 (CNPJ) digits, optionally punctuated.
    TaxId,
    /// 32 hex digits in the UUID layout (EVP key).
    Random,
    /// Anything else.
    Unknown,
}

impl KeyKind {
    /// Classify a key as typed by the merchant.
    pub fn classify(key: &str) -> Self {
        let key = key.trim();
        let digits = key.chars().filter(|c| c.is_ascii_digit()).count();

        if key.contains('@') {
            Self::Email
        } else if key.starts_with(COUNTRY_PREFIX) && matches!(digits, 12 | 13) {
            Self::Phone
        } else if is_uuid(key) {
            Self::Random
        } else if matches!(digits, 11 | 14)
            && key.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/'))
        {
            Self::TaxId
        } else if matches!(digits, 10 | 11)
            && key
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        {
            Self::Phone
        } else {
            Self::Unknown
        }
    }

    /// Short label used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::TaxId => "tax_id",
            Self::Random => "random",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_uuid(key: &str) -> bool {
    let groups: Vec<&str> = key.split('-').collect();
    groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_mobile_gets_prefix() {
        assert_eq!(normalize_key("11987654321"), "+5511987654321");
    }

    #[test]
    fn test_bare_landline_gets_prefix() {
        assert_eq!(normalize_key("1133334444"), "+551133334444");
    }

    #[test]
    fn test_prefixed_phone_unchanged() {
        assert!(matches!(normalize_key("+5511987654321"), Cow::Borrowed(_)));
        assert_eq!(normalize_key("+5511987654321"), "+5511987654321");
    }

    #[test]
    fn test_prefix_goes_in_front_of_key_as_typed() {
        assert_eq!(normalize_key("(11) 98765-4321"), "+55(11) 98765-4321");
    }

    #[test]
    fn test_other_shapes_pass_through() {
        assert_eq!(normalize_key("email@x.com"), "email@x.com");
        assert_eq!(normalize_key("12.345.678/0001-90"), "12.345.678/0001-90");
        assert_eq!(
            normalize_key("123e4567-e12b-12d1-a456-426655440000"),
            "123e4567-e12b-12d1-a456-426655440000"
        );
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_eleven_digit_cpf_is_prefixed_too() {
        // The digit-count rule cannot tell a CPF from a mobile number.
        assert_eq!(normalize_key("12345678900"), "+5512345678900");
        assert_eq!(normalize_key("123.456.789-00"), "+55123.456.789-00");
    }

    #[test]
    fn test_classify() {
        assert_eq!(KeyKind::classify("pix@example.com"), KeyKind::Email);
        assert_eq!(KeyKind::classify("+5511987654321"), KeyKind::Phone);
        assert_eq!(KeyKind::classify("(11) 98765-4321"), KeyKind::Phone);
        assert_eq!(KeyKind::classify("123.456.789-00"), KeyKind::TaxId);
        assert_eq!(KeyKind::classify("12.345.678/0001-90"), KeyKind::TaxId);
        assert_eq!(
            KeyKind::classify("123e4567-e12b-12d1-a456-426655440000"),
            KeyKind::Random
        );
        assert_eq!(KeyKind::classify("whatever"), KeyKind::Unknown);
    }

    #[test]
    fn test_classify_bare_eleven_digits_prefers_tax_id() {
        assert_eq!(KeyKind::classify("12345678900"), KeyKind::TaxId);
        assert_eq!(KeyKind::classify("1133334444"), KeyKind::Phone);
    }
}
