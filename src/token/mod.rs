// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! The token module provides a [`Token`] object holding the decoded (but not
//! yet verified) components of a SafetyNet attestation statement in compact
//! JWS serialization.
//!
//! # Example
//!
//! ```no_run
//! use safetynet::token::Token;
//!
//! let jws = std::fs::read_to_string("statement.jws").expect("reading token");
//!
//! let t = Token::decode(jws.trim()).expect("decoding token");
//!
//! // header and claims are available, but must not be trusted before
//! // verification
//! println!("alg: {}, chain length: {}", t.header.alg, t.header.x5c.len());
//! println!("timestamp: {}", t.statement.timestamp_ms);
//! ```

pub use self::compact::Token;
pub use self::errors::Error;
pub use self::header::Header;
pub use self::statement::AttestationStatement;
pub use self::statement::EvaluationType;

mod base64;
mod compact;
mod errors;
mod header;
mod statement;
