// SPDX-License-Identifier: Apache-2.0

use base64::{engine::general_purpose, Engine as _};

use super::errors::Error;

/// decodes one base64url (unpadded) segment of a compact token
pub fn decode_segment(v: &str, segment: &str) -> Result<Vec<u8>, Error> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(v)
        .map_err(|e| Error::MalformedToken(format!("{segment} segment: {e}")))
}

/// decodes a claim carried as standard (padded) base64 inside the payload
pub fn decode_claim(v: &str, claim: &str) -> Result<Vec<u8>, Error> {
    general_purpose::STANDARD
        .decode(v)
        .map_err(|e| Error::MalformedClaim(format!("{claim}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_url_safe_unpadded() {
        assert_eq!(decode_segment("e30", "payload").unwrap(), b"{}");
        assert_eq!(decode_segment("-_8", "signature").unwrap(), [0xfb, 0xff]);
    }

    #[test]
    fn padded_segment_rejected() {
        let e = decode_segment("e30=", "header").unwrap_err();
        assert!(matches!(e, Error::MalformedToken(m) if m.starts_with("header segment")));
    }

    #[test]
    fn claim_is_standard_base64() {
        assert_eq!(decode_claim("+/8=", "nonce").unwrap(), [0xfb, 0xff]);
        assert!(matches!(
            decode_claim("-_8", "nonce"),
            Err(Error::MalformedClaim(_))
        ));
    }
}
