// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    #[error("Missing header field: {0}")]
    MissingHeaderField(String),
    #[error("Malformed claim: {0}")]
    MalformedClaim(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedToken(e) | Error::MissingHeaderField(e) | Error::MalformedClaim(e) => {
                write!(f, "{}", e)
            }
        }
    }
}
