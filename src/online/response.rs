// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use serde::{Deserialize, Serialize};

/// Body of a request to the online verification service
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// The attestation statement, in compact JWS serialization
    pub signed_attestation: String,
}

impl VerificationRequest {
    pub fn new(jws: &str) -> Self {
        Self {
            signed_attestation: jws.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Transport(e.to_string()))
    }
}

/// Body of the online verification service's answer
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    #[serde(default)]
    pub is_valid_signature: bool,

    /// Only set when the service failed to process the request
    #[serde(default)]
    pub error: Option<VerificationErrorResponse>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct VerificationErrorResponse {
    pub code: i64,
    pub message: String,
    pub status: String,
}

impl VerificationResponse {
    pub fn from_json(j: &str) -> Result<Self, Error> {
        serde_json::from_str(j).map_err(|e| Error::MalformedResponse(e.to_string()))
    }
}
