//! Static PIX payload ("copia e cola") construction.
//!
//! Field order is fixed. QR readers parse sequentially and some validators
//! reject templates that appear out of order:
//!
//! ```text
//! 00 payload format indicator   "01"
//! 01 point of initiation        "12" (static, reusable)
//! 26 merchant account info      { 00 GUI, 01 key }
//! 52 merchant category code     "0000"
//! 53 currency                   "986"
//! 54 amount                     "1234.50"
//! 58 country                    "BR"
//! 59 merchant name              normalized, <= 25
//! 60 merchant city              normalized, <= 15
//! 62 additional data            { 05 transaction id }
//! 63 CRC16                      4 hex digits over everything before them
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::crc::crc16_hex;
use crate::key::normalize_key;
use crate::normalize::{normalize_city, normalize_name};
use crate::tlv::{ids, template, write_field};

/// Payload format indicator value.
pub const PAYLOAD_FORMAT: &str = "01";

/// Point of initiation method for a static, reusable code.
pub const STATIC_INITIATION: &str = "12";

/// Globally unique identifier of the PIX arrangement.
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// ISO 4217 numeric code for BRL.
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166 country code.
pub const COUNTRY_BR: &str = "BR";

/// Merchant category code meaning "not informed".
pub const DEFAULT_MCC: &str = "0000";

/// Transaction id carried in the additional data template.
pub const DEFAULT_TRANSACTION_ID: &str = "SUPERMIXCONCRETO";

/// Tag and length of the CRC field, the last thing the checksum covers.
pub const CRC_PREFIX: &str = "6304";

/// Length of the CRC value.
pub const CRC_LEN: usize = 4;

/// A finished payload. Its last four characters are the CRC.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixPayload(String);

impl PixPayload {
    /// The payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing checksum digits.
    pub fn crc(&self) -> &str {
        self.0.get(self.crc_start()..).unwrap_or_default()
    }

    /// Everything the checksum was computed over.
    pub fn checksummed_part(&self) -> &str {
        self.0.get(..self.crc_start()).unwrap_or_default()
    }

    fn crc_start(&self) -> usize {
        self.0.len().saturating_sub(CRC_LEN)
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// False for anything the builder produced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PixPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PixPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PixPayload> for String {
    fn from(payload: PixPayload) -> Self {
        payload.0
    }
}

/// Builder for static PIX payloads.
///
/// The defaults produce exactly the fixed layout; the transaction id and
/// merchant category code can be overridden per merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadBuilder {
    transaction_id: String,
    merchant_category_code: String,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self {
            transaction_id: DEFAULT_TRANSACTION_ID.to_string(),
            merchant_category_code: DEFAULT_MCC.to_string(),
        }
    }
}

impl PayloadBuilder {
    /// A builder with the default transaction id and category code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transaction id (tag 62, sub-tag 05).
    pub fn transaction_id(mut self, txid: impl Into<String>) -> Self {
        self.transaction_id = txid.into();
        self
    }

    /// Set the merchant category code (tag 52).
    pub fn merchant_category_code(mut self, mcc: impl Into<String>) -> Self {
        self.merchant_category_code = mcc.into();
        self
    }

    /// Build the payload. Never fails.
    pub fn build(
        &self,
        key: &str,
        name: &str,
        city: &str,
        amount: impl Into<Amount>,
    ) -> PixPayload {
        let key = normalize_key(key);
        let name = normalize_name(name);
        let city = normalize_city(city);
        let amount = amount.into().to_field_value();

        let mut payload = String::with_capacity(160);
        write_field(&mut payload, ids::PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT);
        write_field(&mut payload, ids::POINT_OF_INITIATION_METHOD, STATIC_INITIATION);
        payload.push_str(&template(
            ids::MERCHANT_ACCOUNT_INFORMATION,
            &[
                (ids::merchant_account::GUI, PIX_GUI),
                (ids::merchant_account::KEY, key.as_ref()),
            ],
        ));
        write_field(
            &mut payload,
            ids::MERCHANT_CATEGORY_CODE,
            &self.merchant_category_code,
        );
        write_field(&mut payload, ids::TRANSACTION_CURRENCY, CURRENCY_BRL);
        write_field(&mut payload, ids::TRANSACTION_AMOUNT, &amount);
        write_field(&mut payload, ids::COUNTRY_CODE, COUNTRY_BR);
        write_field(&mut payload, ids::MERCHANT_NAME, &name);
        write_field(&mut payload, ids::MERCHANT_CITY, &city);
        payload.push_str(&template(
            ids::ADDITIONAL_DATA_FIELD_TEMPLATE,
            &[(ids::additional_data::REFERENCE_LABEL, self.transaction_id.as_str())],
        ));

        payload.push_str(CRC_PREFIX);
        let crc = crc16_hex(&payload);
        payload.push_str(&crc);

        PixPayload(payload)
    }
}

/// Build a static PIX payload with the default parameters.
///
/// ```
/// use supermix_pix_core::build_pix_payload;
///
/// let code = build_pix_payload("pix@example.com", "ACME CONCRETO", "SAO PAULO", 100.00);
/// assert!(code.starts_with("000201"));
/// assert!(code.ends_with("63045282"));
/// ```
pub fn build_pix_payload(key: &str, name: &str, city: &str, amount: f64) -> String {
    PayloadBuilder::default()
        .build(key, name, city, amount)
        .into_string()
}
