// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::algorithm::Algorithm;
use super::errors::Error;
use serde::Deserialize;

/// Hostname the attestation service's signing certificate is issued for
pub const ATTESTATION_HOSTNAME: &str = "attest.android.com";

/// Algorithms accepted when no explicit allow-list is configured
pub const DEFAULT_ALGORITHMS: [Algorithm; 2] = [Algorithm::RS256, Algorithm::ES256];

/// Fixed parameters of a [super::Verifier]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Expected subject common name of the leaf certificate (exact match)
    pub required_hostname: String,

    /// JWS algorithm identifiers a token may be signed with
    pub allowed_algorithms: Vec<String>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            required_hostname: ATTESTATION_HOSTNAME.to_string(),
            allowed_algorithms: DEFAULT_ALGORITHMS.iter().map(Algorithm::to_string).collect(),
        }
    }
}

impl VerifierConfig {
    /// Default configuration with a different required hostname
    pub fn with_hostname(hostname: &str) -> Self {
        Self {
            required_hostname: hostname.to_string(),
            ..Default::default()
        }
    }

    /// Load a configuration from JSON.  Absent keys take their default value.
    pub fn load_json(j: &str) -> Result<Self, Error> {
        serde_json::from_str(j).map_err(|e| Error::Config(e.to_string()))
    }
}
