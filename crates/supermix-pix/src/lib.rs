//! # Supermix PIX
//!
//! PIX payment codes for Supermix orders: the merchant's PIX settings go in,
//! a copy-and-paste payload and its QR image come out.
//!
//! ## Overview
//!
//! - **Settings**: the merchant's key, name and city, read from settings rows
//!   or the environment ([`PixSettings`])
//! - **Validation**: optional checks before building ([`validation`])
//! - **Payload**: the EMV/TLV string with its CRC trailer (re-exported from
//!   [`core`])
//! - **QR**: SVG and terminal rendering ([`qr`])
//!
//! ## Usage
//!
//! ```rust
//! use supermix_pix::{PixConfig, PixGenerator, PixSettings};
//!
//! let settings = PixSettings::new("pix@example.com", "Supermix Concreto", "Goiânia");
//! let generator = PixGenerator::new(settings, PixConfig::default());
//!
//! let code = generator.generate(1250.0).unwrap();
//! assert!(code.payload.as_str().starts_with("000201"));
//! assert!(code.svg.contains("<svg"));
//! ```
//!
//! ## Re-exports
//!
//! - `supermix_pix::core` - the pure payload primitives

pub mod config;
pub mod error;
pub mod generator;
pub mod qr;
pub mod settings;
pub mod validation;

pub use supermix_pix_core as core;

pub use config::{PixConfig, QrOptions};
pub use error::{PixError, Result};
pub use generator::{PixCode, PixGenerator};
pub use settings::PixSettings;
pub use validation::ValidationError;

pub use supermix_pix_core::{
    build_pix_payload, crc16, crc16_hex, normalize, normalize_key, Amount, DecodedPayload,
    KeyKind, PayloadBuilder, PixPayload,
};
