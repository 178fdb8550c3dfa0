// Copyright 2023 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use serde_json::{Map, Value};

const ALG_LABEL: &str = "alg";
const X5C_LABEL: &str = "x5c";

/// The JOSE header of an attestation statement.  Only the two parameters
/// needed for verification are retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    /// Signature algorithm identifier, e.g. "RS256".  Untrusted: it is only
    /// used to select a verification primitive from a fixed allow-list.
    pub alg: String,
    /// Certificate chain as standard base64 DER, leaf first
    pub x5c: Vec<String>,
}

impl Header {
    /// Decode a JSON encoded JOSE header.  Both `alg` and `x5c` are mandatory
    /// and must have the right type; there is no fallback to empty values.
    pub fn decode(buf: &[u8]) -> Result<Header, Error> {
        let v: Value = serde_json::from_slice(buf)
            .map_err(|e| Error::MalformedToken(format!("header: {e}")))?;

        if let Value::Object(contents) = v {
            Header::parse(&contents)
        } else {
            Err(Error::MalformedToken(
                "header: expecting JSON object".to_string(),
            ))
        }
    }

    fn parse(contents: &Map<String, Value>) -> Result<Header, Error> {
        let alg = match contents.get(ALG_LABEL) {
            Some(Value::String(s)) => s.clone(),
            _ => return Err(Error::MissingHeaderField(ALG_LABEL.to_string())),
        };

        let x5c = match contents.get(X5C_LABEL) {
            Some(Value::Array(certs)) => to_tstr_array(certs, X5C_LABEL)?,
            _ => return Err(Error::MissingHeaderField(X5C_LABEL.to_string())),
        };

        Ok(Header { alg, x5c })
    }

    /// The first certificate in the chain, if any
    pub fn leaf(&self) -> Option<&str> {
        self.x5c.first().map(String::as_str)
    }
}

fn to_tstr_array(v: &[Value], n: &str) -> Result<Vec<String>, Error> {
    v.iter()
        .map(|x| match x {
            Value::String(s) => Ok(s.clone()),
            _ => Err(Error::MissingHeaderField(n.to_string())),
        })
        .collect()
}
