// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Caller policy for verified attestation statements.
//!
//! Signature verification only establishes that the statement comes from the
//! attestation service.  Whether it answers *this* request (nonce), for
//! *this* app (package name, signing certificates), recently enough, and with
//! acceptable integrity verdicts is up to the caller, who expresses it with a
//! [`Policy`].  Nothing in here is applied implicitly.

pub use self::errors::Error;

mod errors;

use crate::verify::VerifiedAttestation;
use std::collections::BTreeSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Expectations on a verified statement.  Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// The nonce sent with the attestation request
    pub nonce: Option<Vec<u8>>,
    /// The caller app's package name
    pub apk_package_name: Option<String>,
    /// SHA-256 digests of the caller app's signing certificates (all of them,
    /// order does not matter)
    pub apk_certificate_digests: Option<Vec<Vec<u8>>>,
    /// Maximum age of the statement
    pub max_age: Option<Duration>,
    pub require_cts_profile_match: bool,
    pub require_basic_integrity: bool,
    pub require_hardware_backed: bool,
}

impl Policy {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn nonce(mut self, v: &[u8]) -> Self {
        self.nonce = Some(v.to_vec());
        self
    }

    pub fn apk_package_name(mut self, v: &str) -> Self {
        self.apk_package_name = Some(v.to_string());
        self
    }

    pub fn apk_certificate_digests(mut self, v: Vec<Vec<u8>>) -> Self {
        self.apk_certificate_digests = Some(v);
        self
    }

    pub fn max_age(mut self, v: Duration) -> Self {
        self.max_age = Some(v);
        self
    }

    pub fn require_cts_profile_match(mut self) -> Self {
        self.require_cts_profile_match = true;
        self
    }

    pub fn require_basic_integrity(mut self) -> Self {
        self.require_basic_integrity = true;
        self
    }

    pub fn require_hardware_backed(mut self) -> Self {
        self.require_hardware_backed = true;
        self
    }

    /// Check `va` against this policy using the system clock
    pub fn check(&self, va: &VerifiedAttestation) -> Result<(), Error> {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .map_err(|e| Error::Stale(format!("system clock before Unix epoch: {e}")))?;

        self.check_at(va, now_ms)
    }

    /// Check `va` against this policy, `now_ms` being the current time in
    /// milliseconds since the Unix epoch
    pub fn check_at(&self, va: &VerifiedAttestation, now_ms: i64) -> Result<(), Error> {
        if let Some(expected) = &self.nonce {
            let nonce = va
                .decode_nonce()
                .map_err(|e| Error::NonceMismatch(e.to_string()))?;
            if nonce != *expected {
                return Err(Error::NonceMismatch(
                    "nonce differs from the one sent".to_string(),
                ));
            }
        }

        if let Some(expected) = &self.apk_package_name {
            if va.apk_package_name != *expected {
                return Err(Error::PackageMismatch(format!(
                    "got {:?}, expecting {:?}",
                    va.apk_package_name, expected
                )));
            }
        }

        if let Some(expected) = &self.apk_certificate_digests {
            let got: BTreeSet<Vec<u8>> = va
                .decode_apk_certificate_digests()
                .map_err(|e| Error::ApkCertificateMismatch(e.to_string()))?
                .into_iter()
                .collect();
            let want: BTreeSet<Vec<u8>> = expected.iter().cloned().collect();
            if got != want {
                return Err(Error::ApkCertificateMismatch(format!(
                    "got [{}], expecting [{}]",
                    hex_list(&got),
                    hex_list(&want)
                )));
            }
        }

        if let Some(max_age) = self.max_age {
            let age = now_ms.saturating_sub(va.timestamp_ms);
            let limit = i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX);
            if age > limit {
                return Err(Error::Stale(format!(
                    "statement is {age} ms old, limit is {limit} ms"
                )));
            }
        }

        if self.require_cts_profile_match && !va.cts_profile_match {
            return Err(Error::IntegrityCheckFailed(
                "CTS profile does not match".to_string(),
            ));
        }

        if self.require_basic_integrity && !va.basic_integrity {
            return Err(Error::IntegrityCheckFailed(
                "basic integrity not met".to_string(),
            ));
        }

        if self.require_hardware_backed && !va.is_hardware_backed() {
            return Err(Error::IntegrityCheckFailed(format!(
                "evaluation type {:?} is not hardware backed",
                va.evaluation_type
            )));
        }

        Ok(())
    }
}

fn hex_list(v: &BTreeSet<Vec<u8>>) -> String {
    v.iter().map(hex::encode).collect::<Vec<_>>().join(", ")
}
