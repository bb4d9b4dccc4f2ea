//! EMV tag-length-value primitives.
//!
//! Every field is `TAG ++ LEN ++ VALUE`: a 2-digit tag, the byte length of
//! the value as a zero-padded 2-digit decimal, then the value. Templates
//! (tags 26 and 62) carry further TLV fields as their value.
//!
//! Lengths above 99 are written with as many digits as they need rather than
//! truncated. Such a payload will not parse, but writing never fails.

/// Field identifiers used in a static PIX payload.
pub mod ids {
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    pub const POINT_OF_INITIATION_METHOD: &str = "01";
    pub const MERCHANT_ACCOUNT_INFORMATION: &str = "26";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const TRANSACTION_CURRENCY: &str = "53";
    pub const TRANSACTION_AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA_FIELD_TEMPLATE: &str = "62";
    pub const CRC16: &str = "63";

    /// Sub-fields of the merchant account information template (26).
    pub mod merchant_account {
        pub const GUI: &str = "00";
        pub const KEY: &str = "01";
    }

    /// Sub-fields of the additional data field template (62).
    pub mod additional_data {
        pub const REFERENCE_LABEL: &str = "05";
    }
}

/// Width of a tag.
pub const TAG_LEN: usize = 2;

/// Width of a length prefix.
pub const LENGTH_LEN: usize = 2;

/// Largest value length a 2-digit length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// Append one field to `buf`.
pub fn write_field(buf: &mut String, tag: &str, value: &str) {
    buf.push_str(tag);
    buf.push_str(&format!("{:02}", value.len()));
    buf.push_str(value);
}

/// Serialize a single field.
pub fn field(tag: &str, value: &str) -> String {
    let mut buf = String::with_capacity(TAG_LEN + LENGTH_LEN + value.len());
    write_field(&mut buf, tag, value);
    buf
}

/// Serialize a template: the inner fields are written in the given order and
/// wrapped in an outer field whose length covers all of them.
pub fn template(tag: &str, fields: &[(&str, &str)]) -> String {
    let mut inner = String::new();
    for (sub_tag, value) in fields {
        write_field(&mut inner, sub_tag, value);
    }
    field(tag, &inner)
}
