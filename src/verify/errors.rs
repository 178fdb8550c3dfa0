// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing certificate: {0}")]
    MissingCertificate(String),
    #[error("Certificate parse error: {0}")]
    CertificateParse(String),
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("Signature invalid: {0}")]
    SignatureInvalid(String),
    #[error("Hostname mismatch: {0}")]
    HostnameMismatch(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingCertificate(e)
            | Error::CertificateParse(e)
            | Error::UnsupportedKeyType(e)
            | Error::SignatureInvalid(e)
            | Error::HostnameMismatch(e)
            | Error::Config(e) => {
                write!(f, "{}", e)
            }
        }
    }
}
