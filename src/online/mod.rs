// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! The online module describes the boundary with a remote verification
//! service.  A positive answer from the service is never enough on its own:
//! [`parse_and_verify_online`] always runs the full local verification before
//! handing out a [`VerifiedAttestation`].

pub use self::errors::Error;
pub use self::iverificationservice::IVerificationService;
pub use self::response::VerificationErrorResponse;
pub use self::response::VerificationRequest;
pub use self::response::VerificationResponse;

mod errors;
mod iverificationservice;
mod response;

use crate::verify::{VerifiedAttestation, Verifier};

/// Ask `service` to check `jws`, then decode and verify it locally with
/// `verifier`
pub fn parse_and_verify_online(
    service: &impl IVerificationService,
    verifier: &Verifier,
    jws: &str,
) -> Result<VerifiedAttestation, Error> {
    let rsp = service.verify_remote(&VerificationRequest::new(jws))?;

    if let Some(e) = rsp.error {
        return Err(Error::Service {
            code: e.code,
            message: e.message,
        });
    }

    if !rsp.is_valid_signature {
        return Err(Error::RejectedByService);
    }

    Ok(crate::parse_and_verify(jws, verifier)?)
}
