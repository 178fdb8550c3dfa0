// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use super::response::{VerificationRequest, VerificationResponse};

/// Interface to a remote service that checks attestation statement
/// signatures.  Implementations own the transport (HTTP client, API key,
/// timeouts).
pub trait IVerificationService {
    /// Submit `request` and return the service's decoded answer
    fn verify_remote(&self, request: &VerificationRequest) -> Result<VerificationResponse, Error>;
}
