// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Android SafetyNet attestation statement decoding and verification.
//!
//! An attestation statement is a compact JWS whose header carries the signing
//! certificate chain (`x5c`).  This crate provides an API to:
//! * Decode the statement into its header, claims-set and signature
//! * Verify the signature with the leaf certificate's public key and check
//!   that the certificate was issued for `attest.android.com`
//! * Chain an online verification service answer with the local checks
//! * Apply caller policy (nonce, package, freshness) to a verified statement
//!
//! Revocation, full chain validation and replay protection are left to the
//! caller.
//!
//! # Example
//!
//! ```no_run
//! use safetynet::verify::Verifier;
//!
//! let jws = std::fs::read_to_string("statement.jws").expect("reading token");
//!
//! let va = safetynet::parse_and_verify(jws.trim(), &Verifier::default())
//!     .expect("verifying statement");
//!
//! println!("basic integrity: {}", va.basic_integrity);
//! ```

pub use self::errors::Error;

pub mod online;
pub mod policy;
pub mod token;
pub mod verify;

mod errors;
#[cfg(test)]
mod testutil;

/// Decode a compact attestation statement and verify it with `verifier`
pub fn parse_and_verify(
    jws: &str,
    verifier: &verify::Verifier,
) -> Result<verify::VerifiedAttestation, Error> {
    let t = token::Token::decode(jws)?;

    Ok(verifier.verify(t)?)
}
