// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed service response: {0}")]
    MalformedResponse(String),
    #[error("Verification service error {code}: {message}")]
    Service { code: i64, message: String },
    #[error("The verification service could not verify the statement signature")]
    RejectedByService,
    #[error("Local verification failed: {0}")]
    Offline(#[from] crate::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Transport(e) | Error::MalformedResponse(e) => write!(f, "{}", e),
            Error::Service { code, message } => write!(f, "{}: {}", code, message),
            Error::RejectedByService => write!(f, "rejected by service"),
            Error::Offline(e) => write!(f, "{:?}", e),
        }
    }
}
