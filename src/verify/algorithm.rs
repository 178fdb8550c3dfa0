// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use openssl::bn::BigNum;
use openssl::ecdsa::EcdsaSig;
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{Id, PKeyRef, Public};
use openssl::rsa::Padding;
use openssl::sign::{RsaPssSaltlen, Verifier};
use std::fmt;
use std::str::FromStr;

const ALG_NONE: &str = "none";

/// The closed set of JWS signature algorithms this crate knows how to verify.
/// There is no variant for unsigned tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    RS256,
    RS384,
    RS512,
    PS256,
    PS384,
    PS512,
    ES256,
    ES384,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RS256" => Ok(Algorithm::RS256),
            "RS384" => Ok(Algorithm::RS384),
            "RS512" => Ok(Algorithm::RS512),
            "PS256" => Ok(Algorithm::PS256),
            "PS384" => Ok(Algorithm::PS384),
            "PS512" => Ok(Algorithm::PS512),
            "ES256" => Ok(Algorithm::ES256),
            "ES384" => Ok(Algorithm::ES384),
            x if x.eq_ignore_ascii_case(ALG_NONE) => Err(Error::SignatureInvalid(
                "unsigned tokens (alg \"none\") are not accepted".to_string(),
            )),
            x => Err(Error::SignatureInvalid(format!("unknown algorithm {x:?}"))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Algorithm {
    fn digest(&self) -> MessageDigest {
        match self {
            Algorithm::RS256 | Algorithm::PS256 | Algorithm::ES256 => MessageDigest::sha256(),
            Algorithm::RS384 | Algorithm::PS384 | Algorithm::ES384 => MessageDigest::sha384(),
            Algorithm::RS512 | Algorithm::PS512 => MessageDigest::sha512(),
        }
    }

    fn is_pss(&self) -> bool {
        matches!(
            self,
            Algorithm::PS256 | Algorithm::PS384 | Algorithm::PS512
        )
    }

    // (curve, size in bytes of each of r and s)
    fn ec_params(&self) -> Option<(Nid, usize)> {
        match self {
            Algorithm::ES256 => Some((Nid::X9_62_PRIME256V1, 32)),
            Algorithm::ES384 => Some((Nid::SECP384R1, 48)),
            _ => None,
        }
    }

    /// Check that `pkey` is usable with this algorithm
    pub fn check_key(&self, pkey: &PKeyRef<Public>) -> Result<(), Error> {
        match self.ec_params() {
            None => {
                if pkey.id() != Id::RSA {
                    return Err(Error::UnsupportedKeyType(format!(
                        "{self} needs an RSA key, found {:?}",
                        pkey.id()
                    )));
                }
            }
            Some((curve, _)) => {
                let ec = pkey.ec_key().map_err(|_| {
                    Error::UnsupportedKeyType(format!(
                        "{self} needs an EC key, found {:?}",
                        pkey.id()
                    ))
                })?;

                let found = ec.group().curve_name();
                if found != Some(curve) {
                    return Err(Error::UnsupportedKeyType(format!(
                        "{self} needs curve {curve:?}, found {found:?}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Verify `signature` over `signed` using `pkey`.  ECDSA signatures are
    /// expected in the JWS fixed-size `r || s` form.
    pub fn verify(
        &self,
        pkey: &PKeyRef<Public>,
        signed: &[u8],
        signature: &[u8],
    ) -> Result<(), Error> {
        self.check_key(pkey)?;

        let der;
        let signature = match self.ec_params() {
            Some((_, n)) => {
                der = ecdsa_sig_to_der(signature, n)?;
                der.as_slice()
            }
            None => signature,
        };

        let ok = self
            .verify_with_openssl(pkey, signed, signature)
            .map_err(|e| Error::SignatureInvalid(format!("{self}: {e}")))?;

        if !ok {
            return Err(Error::SignatureInvalid(format!(
                "{self} signature does not match"
            )));
        }

        Ok(())
    }

    fn verify_with_openssl(
        &self,
        pkey: &PKeyRef<Public>,
        signed: &[u8],
        signature: &[u8],
    ) -> Result<bool, ErrorStack> {
        let mut verifier = Verifier::new(self.digest(), pkey)?;

        if self.is_pss() {
            verifier.set_rsa_padding(Padding::PKCS1_PSS)?;
            verifier.set_rsa_pss_saltlen(RsaPssSaltlen::DIGEST_LENGTH)?;
        }

        verifier.update(signed)?;
        verifier.verify(signature)
    }
}

fn ecdsa_sig_to_der(signature: &[u8], n: usize) -> Result<Vec<u8>, Error> {
    if signature.len() != 2 * n {
        return Err(Error::SignatureInvalid(format!(
            "expecting {} bytes of ECDSA signature, got {}",
            2 * n,
            signature.len()
        )));
    }

    let to_der = || -> Result<Vec<u8>, ErrorStack> {
        let r = BigNum::from_slice(&signature[..n])?;
        let s = BigNum::from_slice(&signature[n..])?;
        EcdsaSig::from_private_components(r, s)?.to_der()
    };

    to_der().map_err(|e| Error::SignatureInvalid(format!("ECDSA signature: {e}")))
}
