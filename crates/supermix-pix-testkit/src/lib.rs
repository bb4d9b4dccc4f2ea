//! # Supermix PIX Testkit
//!
//! Testing utilities for Supermix PIX.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with their exact expected payloads
//! - **Generators**: Proptest strategies for keys, payee text and amounts
//! - **Fixtures**: Merchants with settings and a ready generator
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the payload byte-for-byte, CRC included:
//!
//! ```rust
//! use supermix_pix_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     assert_eq!(vector.build(), vector.expected_payload);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use supermix_pix_testkit::generators::PayloadParams;
//!
//! proptest! {
//!     #[test]
//!     fn payload_is_deterministic(params: PayloadParams) {
//!         let a = supermix_pix_core::build_pix_payload(&params.key, &params.name, &params.city, params.amount);
//!         let b = supermix_pix_core::build_pix_payload(&params.key, &params.name, &params.city, params.amount);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use supermix_pix_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let code = fixture.generator().generate(350.0).unwrap();
//! assert!(code.svg.contains("<svg"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{merchant_fixtures, TestFixture, SAMPLE_ROWS};
pub use generators::PayloadParams;
pub use vectors::{all_vectors, verify_all_vectors, vectors_json, GoldenVector};
