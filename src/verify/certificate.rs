// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use openssl::nid::Nid;
use openssl::x509::{X509Ref, X509};

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";
const PEM_LINE_LEN: usize = 64;

/// Wrap a base64 DER certificate (an `x5c` entry) in the textual encoding of
/// RFC 7468
pub fn to_pem(der_b64: &str) -> String {
    let body: Vec<char> = der_b64.chars().filter(|c| !c.is_whitespace()).collect();

    let mut pem = String::with_capacity(body.len() + body.len() / PEM_LINE_LEN + 64);
    pem.push_str(PEM_BEGIN);
    pem.push('\n');
    for line in body.chunks(PEM_LINE_LEN) {
        pem.extend(line);
        pem.push('\n');
    }
    pem.push_str(PEM_END);
    pem.push('\n');

    pem
}

/// Parse the first certificate of an `x5c` chain
pub fn parse_leaf(x5c: &[String]) -> Result<X509, Error> {
    let leaf = x5c.first().ok_or_else(|| {
        Error::MissingCertificate("x5c header has no certificates".to_string())
    })?;

    X509::from_pem(to_pem(leaf).as_bytes())
        .map_err(|e| Error::CertificateParse(format!("leaf certificate: {e}")))
}

/// The subject common name of `cert`.  A subject without a CN, or with more
/// than one, has no usable common name.
pub fn common_name(cert: &X509Ref) -> Result<String, Error> {
    let mut entries = cert.subject_name().entries_by_nid(Nid::COMMONNAME);

    let cn = entries.next().ok_or_else(|| {
        Error::HostnameMismatch("certificate has no common name".to_string())
    })?;

    if entries.next().is_some() {
        return Err(Error::HostnameMismatch(
            "certificate has more than one common name".to_string(),
        ));
    }

    cn.data()
        .as_utf8()
        .map(|s| s.to_string())
        .map_err(|e| Error::HostnameMismatch(format!("common name: {e}")))
}
