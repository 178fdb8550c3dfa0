// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use crate::token;
use crate::verify;

#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] token::Error),
    #[error(transparent)]
    Verify(#[from] verify::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "{:?}", e),
            Error::Verify(e) => write!(f, "{:?}", e),
        }
    }
}
