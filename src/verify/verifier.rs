// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::algorithm::Algorithm;
use super::certificate;
use super::config::{VerifierConfig, ATTESTATION_HOSTNAME, DEFAULT_ALGORITHMS};
use super::errors::Error;
use crate::token::{AttestationStatement, Header, Token};
use base64::{engine::general_purpose, Engine as _};
use openssl::x509::X509;
use std::ops::Deref;

/// An attestation statement whose signature and signing certificate have been
/// checked.  The only way to obtain one is [Verifier::verify].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAttestation {
    statement: AttestationStatement,
}

impl VerifiedAttestation {
    pub fn statement(&self) -> &AttestationStatement {
        &self.statement
    }

    pub fn into_statement(self) -> AttestationStatement {
        self.statement
    }
}

impl Deref for VerifiedAttestation {
    type Target = AttestationStatement;

    fn deref(&self) -> &Self::Target {
        &self.statement
    }
}

/// Offline verifier for attestation statements.  It only holds immutable
/// configuration and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Verifier {
    hostname: String,
    algorithms: Vec<Algorithm>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            hostname: ATTESTATION_HOSTNAME.to_string(),
            algorithms: DEFAULT_ALGORITHMS.to_vec(),
        }
    }
}

impl Verifier {
    /// Build a verifier from the supplied configuration.  Fails if the
    /// hostname is empty or the algorithm allow-list is empty or names an
    /// unsupported algorithm.
    pub fn new(config: VerifierConfig) -> Result<Self, Error> {
        if config.required_hostname.is_empty() {
            return Err(Error::Config("required hostname is empty".to_string()));
        }

        if config.allowed_algorithms.is_empty() {
            return Err(Error::Config("no allowed algorithms".to_string()));
        }

        let mut algorithms = Vec::with_capacity(config.allowed_algorithms.len());
        for a in config.allowed_algorithms.iter() {
            let alg = a
                .parse::<Algorithm>()
                .map_err(|e| Error::Config(format!("allowed algorithms: {e}")))?;
            if !algorithms.contains(&alg) {
                algorithms.push(alg);
            }
        }

        Ok(Self {
            hostname: config.required_hostname,
            algorithms,
        })
    }

    /// The subject common name the leaf certificate must carry
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    fn resolve_algorithm(&self, alg: &str) -> Result<Algorithm, Error> {
        let a = alg.parse::<Algorithm>()?;

        if !self.algorithms.contains(&a) {
            return Err(Error::SignatureInvalid(format!(
                "algorithm {a} is not allowed"
            )));
        }

        Ok(a)
    }

    /// Check `signature` (the base64url signature segment) over `signed` with
    /// the leaf certificate of the header's `x5c` chain, then check that the
    /// leaf was issued for the configured hostname.  On success, the leaf
    /// certificate is returned.  Only the leaf is looked at: the rest of the
    /// chain is not validated.
    pub fn verify_signature(
        &self,
        header: &Header,
        signed: &[u8],
        signature: &str,
    ) -> Result<X509, Error> {
        if header.x5c.is_empty() {
            return Err(Error::MissingCertificate(
                "x5c header has no certificates".to_string(),
            ));
        }

        let leaf = certificate::parse_leaf(&header.x5c)?;

        let pkey = leaf
            .public_key()
            .map_err(|e| Error::CertificateParse(format!("leaf public key: {e}")))?;

        let alg = self.resolve_algorithm(&header.alg)?;

        alg.verify(&pkey, signed, &decode_signature(signature)?)?;

        let cn = certificate::common_name(&leaf)?;
        if cn != self.hostname {
            return Err(Error::HostnameMismatch(format!(
                "certificate issued for {cn:?}, expecting {:?}",
                self.hostname
            )));
        }

        Ok(leaf)
    }

    /// Cryptographically verify a decoded token and, on success, promote its
    /// claims-set to a [VerifiedAttestation].
    pub fn verify(&self, token: Token) -> Result<VerifiedAttestation, Error> {
        self.verify_signature(&token.header, &token.signed, &token.signature)?;

        Ok(VerifiedAttestation {
            statement: token.statement,
        })
    }
}

// a segment that does not decode cannot be a valid signature
fn decode_signature(segment: &str) -> Result<Vec<u8>, Error> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| Error::SignatureInvalid(format!("signature segment: {e}")))
}
