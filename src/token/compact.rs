// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::base64;
use super::errors::Error;
use super::header::Header;
use super::statement::AttestationStatement;

const SEGMENT_DELIMITER: char = '.';
const SEGMENT_COUNT: usize = 3;

/// Collects all the components of a compact JWS attestation token.  Nothing
/// in here has been verified yet.
#[derive(Debug, Clone)]
pub struct Token {
    /// Decoded JOSE header
    pub header: Header,
    /// Decoded (untrusted) claims-set
    pub statement: AttestationStatement,
    /// The JWS signing input: the header and payload segments exactly as
    /// transmitted, joined by the delimiter
    pub signed: Vec<u8>,
    /// The signature segment as transmitted (base64url).  It is only decoded
    /// by the verifier, so that a damaged signature is reported as such.
    pub signature: String,
}

impl Token {
    /// Split a compact serialization into its three segments and decode
    /// header and payload.
    pub fn decode(token: &str) -> Result<Token, Error> {
        let segments: Vec<&str> = token.split(SEGMENT_DELIMITER).collect();

        if segments.len() != SEGMENT_COUNT {
            return Err(Error::MalformedToken(format!(
                "expecting {SEGMENT_COUNT} segments, got {}",
                segments.len()
            )));
        }

        let (raw_header, raw_payload, raw_signature) = (segments[0], segments[1], segments[2]);

        let header = Header::decode(&base64::decode_segment(raw_header, "header")?)?;
        let statement =
            AttestationStatement::decode(&base64::decode_segment(raw_payload, "payload")?)?;

        // the signature covers the transmitted bytes, never a re-serialization
        let signed_len = raw_header.len() + 1 + raw_payload.len();
        let signed = token.as_bytes()[..signed_len].to_vec();

        Ok(Token {
            header,
            statement,
            signed,
            signature: raw_signature.to_string(),
        })
    }
}
