// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Nonce mismatch: {0}")]
    NonceMismatch(String),
    #[error("Package mismatch: {0}")]
    PackageMismatch(String),
    #[error("APK certificate mismatch: {0}")]
    ApkCertificateMismatch(String),
    #[error("Stale statement: {0}")]
    Stale(String),
    #[error("Integrity check failed: {0}")]
    IntegrityCheckFailed(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NonceMismatch(e)
            | Error::PackageMismatch(e)
            | Error::ApkCertificateMismatch(e)
            | Error::Stale(e)
            | Error::IntegrityCheckFailed(e) => {
                write!(f, "{}", e)
            }
        }
    }
}
