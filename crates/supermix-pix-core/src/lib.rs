//! # Supermix PIX Core
//!
//! Pure primitives for static PIX payloads: the EMV tag-length-value layout,
//! its CRC-16/CCITT-FALSE trailer, and the text rules the fields depend on.
//!
//! This crate contains no I/O and keeps no state between calls. Every
//! builder function is total: any string input produces a syntactically
//! valid payload, possibly a degenerate one.
//!
//! ## Pipeline
//!
//! ```text
//! name, city ─► normalize ─────┐
//! key ────────► normalize_key ─┼─► PayloadBuilder ─► crc16 ─► payload
//! amount ─────► format_amount ─┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use supermix_pix_core::{build_pix_payload, crc16_hex};
//!
//! let code = build_pix_payload("pix@example.com", "Supermix Concreto", "Goiânia", 350.0);
//! let (body, crc) = code.split_at(code.len() - 4);
//! assert_eq!(crc16_hex(body), crc);
//! ```

pub mod amount;
pub mod crc;
pub mod decode;
pub mod error;
pub mod key;
pub mod normalize;
pub mod payload;
pub mod tlv;

pub use amount::{format_amount, format_decimal, Amount};
pub use crc::{crc16, crc16_hex, Crc16};
pub use decode::{parse_fields, parse_template, verify_crc, DecodedPayload, Field};
pub use error::DecodeError;
pub use key::{normalize_key, KeyKind};
pub use normalize::{normalize, normalize_city, normalize_name, MAX_CITY_LEN, MAX_NAME_LEN};
pub use payload::{build_pix_payload, PayloadBuilder, PixPayload};
