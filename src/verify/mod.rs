// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! The verify module provides a [`Verifier`] that checks the signature of a
//! decoded attestation statement against the leaf certificate of its `x5c`
//! chain, and checks that the certificate was issued for the expected
//! hostname.
//!
//! # Example
//!
//! ```no_run
//! use safetynet::token::Token;
//! use safetynet::verify::{Verifier, VerifierConfig};
//!
//! let jws = std::fs::read_to_string("statement.jws").expect("reading token");
//! let t = Token::decode(jws.trim()).expect("decoding token");
//!
//! let v = Verifier::new(VerifierConfig::default()).expect("configuring verifier");
//!
//! let va = v.verify(t).expect("verifying token");
//!
//! // the claims-set can now be trusted
//! println!("CTS profile match: {}", va.cts_profile_match);
//! ```

pub use self::algorithm::Algorithm;
pub use self::config::VerifierConfig;
pub use self::config::ATTESTATION_HOSTNAME;
pub use self::errors::Error;
pub use self::verifier::VerifiedAttestation;
pub use self::verifier::Verifier;

mod algorithm;
mod certificate;
mod config;
mod errors;
mod verifier;
