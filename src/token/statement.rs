// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::base64;
use super::errors::Error;
use serde::{Deserialize, Serialize};

const BASIC: &str = "BASIC";
const HARDWARE_BACKED: &str = "HARDWARE_BACKED";

/// Kind of evaluation the attestation service used to compute the integrity
/// verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationType {
    Basic,
    HardwareBacked,
    Other(String),
}

impl From<&str> for EvaluationType {
    fn from(v: &str) -> Self {
        match v {
            BASIC => EvaluationType::Basic,
            HARDWARE_BACKED => EvaluationType::HardwareBacked,
            other => EvaluationType::Other(other.to_string()),
        }
    }
}

/// The claims-set of an attestation statement.  Decoding is best-effort:
/// unknown claims are ignored and absent claims take their default value.
/// Nothing in here is trustworthy until the enclosing token has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttestationStatement {
    /// Caller supplied nonce, standard base64
    pub nonce: String,
    /// Time the response was generated, milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    /// Package name of the calling app
    pub apk_package_name: String,
    /// SHA-256 of the calling app's APK, standard base64
    pub apk_digest_sha256: String,
    /// SHA-256 of each signing certificate of the calling app, standard base64
    pub apk_certificate_digest_sha256: Vec<String>,
    pub cts_profile_match: bool,
    pub basic_integrity: bool,
    /// Comma separated evaluation types, e.g. "BASIC,HARDWARE_BACKED"
    pub evaluation_type: String,
    /// Remediation hint, only present when an integrity verdict is negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

impl AttestationStatement {
    /// Decode a JSON encoded claims-set
    pub fn decode(buf: &[u8]) -> Result<AttestationStatement, Error> {
        serde_json::from_slice(buf).map_err(|e| Error::MalformedToken(format!("payload: {e}")))
    }

    /// Best-effort nonce accessor: returns an empty vector if the nonce is not
    /// valid base64.  Use [AttestationStatement::decode_nonce] to tell the two
    /// cases apart.
    pub fn read_nonce(&self) -> Vec<u8> {
        self.decode_nonce().unwrap_or_default()
    }

    pub fn decode_nonce(&self) -> Result<Vec<u8>, Error> {
        base64::decode_claim(&self.nonce, "nonce")
    }

    pub fn decode_apk_digest(&self) -> Result<Vec<u8>, Error> {
        base64::decode_claim(&self.apk_digest_sha256, "apkDigestSha256")
    }

    pub fn decode_apk_certificate_digests(&self) -> Result<Vec<Vec<u8>>, Error> {
        self.apk_certificate_digest_sha256
            .iter()
            .map(|d| base64::decode_claim(d, "apkCertificateDigestSha256"))
            .collect()
    }

    /// The service may omit package information when it cannot reliably
    /// determine it
    pub fn has_package_info(&self) -> bool {
        !self.apk_package_name.is_empty() && !self.apk_digest_sha256.is_empty()
    }

    pub fn evaluation_types(&self) -> Vec<EvaluationType> {
        self.evaluation_type
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(EvaluationType::from)
            .collect()
    }

    pub fn is_hardware_backed(&self) -> bool {
        self.evaluation_types()
            .contains(&EvaluationType::HardwareBacked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NONCE: &str =
        "jlFGG2IS+XG3BAXq2jAOGIO6nkYiAAlFU2FmZXR5IE5ldCBTYW1wbGU6IDE2MTE2NDQ0MzY0NDM=";

    const TEST_PAYLOAD_OK: &str = r#"{
        "nonce": "jlFGG2IS+XG3BAXq2jAOGIO6nkYiAAlFU2FmZXR5IE5ldCBTYW1wbGU6IDE2MTE2NDQ0MzY0NDM=",
        "timestampMs": 1611644438128,
        "apkPackageName": "com.example.android.safetynetsample",
        "apkDigestSha256": "2Mw9XIdMEDNcbQgKCWOt7kNMd+eT7mhPmW4gdR7oGtE=",
        "ctsProfileMatch": true,
        "apkCertificateDigestSha256": ["Ha9VUnEU6sxyQrI2YSTgNlxJSpXp5+hylqhUhP+1PHU="],
        "basicIntegrity": true,
        "evaluationType": "BASIC",
        "somethingNew": {"ignored": true}
    }"#;

    #[test]
    fn decode_ok() {
        let s = AttestationStatement::decode(TEST_PAYLOAD_OK.as_bytes()).unwrap();

        assert_eq!(s.nonce, TEST_NONCE);
        assert_eq!(s.timestamp_ms, 1611644438128);
        assert_eq!(s.apk_package_name, "com.example.android.safetynetsample");
        assert_eq!(s.apk_certificate_digest_sha256.len(), 1);
        assert!(s.cts_profile_match);
        assert!(s.basic_integrity);
        assert_eq!(s.evaluation_types(), vec![EvaluationType::Basic]);
        assert!(!s.is_hardware_backed());
        assert_eq!(s.advice, None);
    }

    #[test]
    fn missing_claims_default() {
        let s = AttestationStatement::decode(br#"{"nonce":"AAAA"}"#).unwrap();

        assert_eq!(s.nonce, "AAAA");
        assert_eq!(s.timestamp_ms, 0);
        assert!(!s.cts_profile_match);
        assert!(s.apk_certificate_digest_sha256.is_empty());
        assert!(!s.has_package_info());
        assert!(s.evaluation_types().is_empty());
    }

    #[test]
    fn wrong_typed_claim() {
        let e = AttestationStatement::decode(br#"{"timestampMs":"yesterday"}"#).unwrap_err();
        assert!(matches!(e, Error::MalformedToken(_)));
    }

    #[test]
    fn read_nonce_ok() {
        let s = AttestationStatement {
            nonce: TEST_NONCE.to_string(),
            ..Default::default()
        };

        let n = s.read_nonce();
        assert!(n.ends_with(b"Safety Net Sample: 1611644436443"));
        assert_eq!(s.decode_nonce().unwrap(), n);
    }

    #[test]
    fn read_nonce_is_best_effort() {
        let s = AttestationStatement {
            nonce: "%%% not base64 %%%".to_string(),
            ..Default::default()
        };

        assert!(s.read_nonce().is_empty());
        assert!(matches!(s.decode_nonce(), Err(Error::MalformedClaim(_))));
    }

    #[test]
    fn digests() {
        let s = AttestationStatement::decode(TEST_PAYLOAD_OK.as_bytes()).unwrap();

        assert_eq!(s.decode_apk_digest().unwrap().len(), 32);

        let certs = s.decode_apk_certificate_digests().unwrap();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].len(), 32);
    }

    #[test]
    fn hardware_backed_evaluation() {
        let s = AttestationStatement {
            evaluation_type: "BASIC, HARDWARE_BACKED".to_string(),
            ..Default::default()
        };

        assert_eq!(
            s.evaluation_types(),
            vec![EvaluationType::Basic, EvaluationType::HardwareBacked]
        );
        assert!(s.is_hardware_backed());
    }

    #[test]
    fn advice_carried() {
        let s = AttestationStatement::decode(
            br#"{"ctsProfileMatch":false,"advice":"LOCK_BOOTLOADER"}"#,
        )
        .unwrap();

        assert_eq!(s.advice.as_deref(), Some("LOCK_BOOTLOADER"));
    }
}
