//! Reading payloads back into fields.
//!
//! The builder never needs this; it exists so callers can check a code
//! before rendering it and so tests can pin the length and CRC invariants.

use serde::{Deserialize, Serialize};

use crate::crc::crc16_hex;
use crate::error::DecodeError;
use crate::payload::{CRC_LEN, CRC_PREFIX};
use crate::tlv::{ids, LENGTH_LEN, TAG_LEN};

/// One top-level or template field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub tag: String,
    pub value: String,
}

/// Split `input` into a flat list of TLV fields.
pub fn parse_fields(input: &str) -> Result<Vec<Field>, DecodeError> {
    let mut fields = Vec::new();
    let mut offset = 0;

    while offset < input.len() {
        let tag = input
            .get(offset..offset + TAG_LEN)
            .ok_or(DecodeError::Truncated { offset })?;
        if !tag.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidTag {
                offset,
                tag: tag.to_string(),
            });
        }

        let len_at = offset + TAG_LEN;
        let prefix = input
            .get(len_at..len_at + LENGTH_LEN)
            .ok_or(DecodeError::Truncated { offset: len_at })?;
        let len: usize = prefix
            .parse()
            .ok()
            .filter(|_| prefix.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| DecodeError::InvalidLength {
                offset: len_at,
                prefix: prefix.to_string(),
            })?;

        let value_at = len_at + LENGTH_LEN;
        let value = input
            .get(value_at..value_at + len)
            .ok_or(DecodeError::Truncated { offset: value_at })?;

        fields.push(Field {
            tag: tag.to_string(),
            value: value.to_string(),
        });
        offset = value_at + len;
    }

    Ok(fields)
}

/// Parse the value of a template field (26 or 62).
pub fn parse_template(value: &str) -> Result<Vec<Field>, DecodeError> {
    parse_fields(value)
}

/// Check that the payload ends with `6304XXXX` and that `XXXX` matches.
///
/// Hex digits are compared case-insensitively since some issuers emit
/// lower-case checksums. Only the trailer is checked, so a code whose
/// fields fail to parse can still pass here.
pub fn verify_crc(payload: &str) -> Result<(), DecodeError> {
    let split = payload
        .len()
        .checked_sub(CRC_LEN)
        .ok_or(DecodeError::MissingCrc)?;
    let (body, actual) = match (payload.get(..split), payload.get(split..)) {
        (Some(body), Some(actual)) => (body, actual),
        _ => return Err(DecodeError::MissingCrc),
    };
    if !body.ends_with(CRC_PREFIX) {
        return Err(DecodeError::MissingCrc);
    }

    let expected = crc16_hex(body);
    if expected.eq_ignore_ascii_case(actual) {
        Ok(())
    } else {
        Err(DecodeError::CrcMismatch {
            expected,
            actual: actual.to_string(),
        })
    }
}

/// A checked, parsed payload with typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPayload {
    pub fields: Vec<Field>,
    pub merchant_account: Vec<Field>,
    pub additional_data: Vec<Field>,
}

impl DecodedPayload {
    /// Verify the CRC, then parse the fields and both templates.
    ///
    /// A key of 78 bytes or more pushes the tag 26 length past two digits.
    /// The builder still writes such a code with a valid CRC, but it cannot
    /// be parsed back and this returns an error.
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        verify_crc(payload)?;
        let fields = parse_fields(payload)?;

        let merchant_account = match find(&fields, ids::MERCHANT_ACCOUNT_INFORMATION) {
            Some(value) => parse_template(value)?,
            None => {
                return Err(DecodeError::MissingField(
                    ids::MERCHANT_ACCOUNT_INFORMATION.to_string(),
                ))
            }
        };
        let additional_data = match find(&fields, ids::ADDITIONAL_DATA_FIELD_TEMPLATE) {
            Some(value) => parse_template(value)?,
            None => Vec::new(),
        };

        Ok(Self {
            fields,
            merchant_account,
            additional_data,
        })
    }

    /// Value of a top-level field.
    pub fn get(&self, tag: &str) -> Option<&str> {
        find(&self.fields, tag)
    }

    /// The arrangement identifier, e.g. `BR.GOV.BCB.PIX`.
    pub fn gui(&self) -> Option<&str> {
        find(&self.merchant_account, ids::merchant_account::GUI)
    }

    /// The PIX key as encoded (after phone normalization).
    pub fn key(&self) -> Option<&str> {
        find(&self.merchant_account, ids::merchant_account::KEY)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(ids::MERCHANT_NAME)
    }

    pub fn city(&self) -> Option<&str> {
        self.get(ids::MERCHANT_CITY)
    }

    pub fn amount(&self) -> Option<&str> {
        self.get(ids::TRANSACTION_AMOUNT)
    }

    pub fn transaction_id(&self) -> Option<&str> {
        find(&self.additional_data, ids::additional_data::REFERENCE_LABEL)
    }

    pub fn crc(&self) -> Option<&str> {
        self.get(ids::CRC16)
    }
}

fn find<'a>(fields: &'a [Field], tag: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.tag == tag)
        .map(|f| f.value.as_str())
}
