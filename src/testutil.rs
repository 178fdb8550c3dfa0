// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures: keys, self-signed certificates and signed statements

use crate::token::AttestationStatement;
use base64::{engine::general_purpose, Engine as _};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private, Public};
use openssl::rsa::Rsa;
use openssl::x509::{X509Builder, X509NameBuilder, X509};
use serde::Serialize;
use std::sync::OnceLock;

pub const ATTEST_HOSTNAME: &str = "attest.android.com";

pub const TEST_NONCE: &str =
    "jlFGG2IS+XG3BAXq2jAOGIO6nkYiAAlFU2FmZXR5IE5ldCBTYW1wbGU6IDE2MTE2NDQ0MzY0NDM=";

pub fn rsa_key() -> PKey<Private> {
    static KEY: OnceLock<PKey<Private>> = OnceLock::new();
    KEY.get_or_init(|| PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap())
        .clone()
}

pub fn ec_key() -> PKey<Private> {
    static KEY: OnceLock<PKey<Private>> = OnceLock::new();
    KEY.get_or_init(|| {
        let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
        PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap()
    })
    .clone()
}

pub fn public(key: &PKey<Private>) -> PKey<Public> {
    PKey::public_key_from_der(&key.public_key_to_der().unwrap()).unwrap()
}

/// Self-signed certificate for `key` with the given subject CNs, in order
pub fn self_signed(key: &PKey<Private>, cns: &[&str]) -> X509 {
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_nid(Nid::ORGANIZATIONNAME, "Test")
        .unwrap();
    for cn in cns {
        name.append_entry_by_nid(Nid::COMMONNAME, cn).unwrap();
    }
    let name = name.build();

    let mut b = X509Builder::new().unwrap();
    b.set_version(2).unwrap();
    let serial = BigNum::from_u32(1).unwrap().to_asn1_integer().unwrap();
    b.set_serial_number(&serial).unwrap();
    b.set_subject_name(&name).unwrap();
    b.set_issuer_name(&name).unwrap();
    b.set_pubkey(key).unwrap();
    b.set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    b.set_not_after(&Asn1Time::days_from_now(365).unwrap())
        .unwrap();
    b.sign(key, MessageDigest::sha256()).unwrap();

    b.build()
}

/// A signing key with its self-signed certificate
pub struct Signer {
    pub key: PKey<Private>,
    pub cert: X509,
}

impl Signer {
    pub fn rsa(cn: &str) -> Self {
        let key = rsa_key();
        let cert = self_signed(&key, &[cn]);
        Self { key, cert }
    }

    pub fn ec(cn: &str) -> Self {
        let key = ec_key();
        let cert = self_signed(&key, &[cn]);
        Self { key, cert }
    }

    /// The certificate as an `x5c` entry
    pub fn x5c(&self) -> String {
        general_purpose::STANDARD.encode(self.cert.to_der().unwrap())
    }

    pub fn sign(&self, alg: Algorithm, claims: &impl Serialize) -> String {
        let key = match alg {
            Algorithm::ES256 | Algorithm::ES384 => {
                EncodingKey::from_ec_pem(&self.key.private_key_to_pem_pkcs8().unwrap())
            }
            _ => EncodingKey::from_rsa_pem(&self.key.rsa().unwrap().private_key_to_pem().unwrap()),
        }
        .unwrap();

        let mut header = Header::new(alg);
        header.x5c = Some(vec![self.x5c()]);

        encode(&header, claims, &key).unwrap()
    }
}

/// The statement of the reference scenario
pub fn test_statement() -> AttestationStatement {
    AttestationStatement {
        nonce: TEST_NONCE.to_string(),
        timestamp_ms: 1611644438128,
        apk_package_name: "com.example.android.safetynetsample".to_string(),
        apk_digest_sha256: "2Mw9XIdMEDNcbQgKCWOt7kNMd+eT7mhPmW4gdR7oGtE=".to_string(),
        apk_certificate_digest_sha256: vec![
            "Ha9VUnEU6sxyQrI2YSTgNlxJSpXp5+hylqhUhP+1PHU=".to_string()
        ],
        cts_profile_match: true,
        basic_integrity: true,
        evaluation_type: "BASIC".to_string(),
        advice: None,
    }
}

fn b64url(v: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(v)
}

fn segments(jws: &str) -> Vec<&str> {
    let s: Vec<&str> = jws.split('.').collect();
    assert_eq!(s.len(), 3);
    s
}

/// Swap the header of `jws`, keeping payload and signature
pub fn replace_header(jws: &str, header_json: &str) -> String {
    let s = segments(jws);
    format!("{}.{}.{}", b64url(header_json.as_bytes()), s[1], s[2])
}

/// Swap the payload of `jws`, keeping header and signature
pub fn replace_payload(jws: &str, claims: &impl Serialize) -> String {
    let s = segments(jws);
    let payload = serde_json::to_vec(claims).unwrap();
    format!("{}.{}.{}", s[0], b64url(&payload), s[2])
}

/// An unsigned token with the given header
pub fn unsigned(header_json: &str, claims: &impl Serialize) -> String {
    let payload = serde_json::to_vec(claims).unwrap();
    format!("{}.{}.", b64url(header_json.as_bytes()), b64url(&payload))
}

/// The base64url alphabet
pub const B64URL_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Replace the last character of the signature segment with `c`
pub fn replace_last_char(jws: &str, c: char) -> String {
    let mut s = jws.to_string();
    s.pop().unwrap();
    s.push(c);
    s
}
