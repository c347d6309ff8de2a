// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::ALGORITHM;
use awsv4_core::time::DateTime;
use awsv4_core::utils::Redact;
use bytes::Bytes;
use http::Method;
use std::fmt::{Debug, Display, Formatter};

/// Everything the kernel needs to sign one request.
///
/// A `Signable` is built fresh for every sign call and only ever borrowed by
/// the kernel.
///
/// ## Payload
///
/// - `body_hash` wins if present, it's used verbatim.
/// - Otherwise the sha256 of `body` is used.
/// - Otherwise the sha256 of an empty payload is used.
#[derive(Clone)]
pub struct Signable {
    /// Region embedded in the credential scope, like `us-east-1`.
    pub region: String,
    /// Service embedded in the credential scope, like `s3`.
    pub service: String,
    /// HTTP method.
    pub method: Method,
    /// HTTP path as it's sent on the wire. Empty path is signed as `/`.
    pub path: String,
    /// Query pairs before encoding, in any order.
    pub query: Vec<(String, String)>,
    /// Header pairs to sign, in any order.
    pub headers: Vec<(String, String)>,
    /// Raw body bytes.
    pub body: Option<Bytes>,
    /// Precomputed body hash or a placeholder like `UNSIGNED-PAYLOAD`.
    pub body_hash: Option<String>,
    /// Access key id.
    pub access_key: String,
    /// Secret access key.
    pub secret_key: String,
    /// Signing time.
    pub time: DateTime,
}

impl Debug for Signable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signable")
            .field("region", &self.region)
            .field("service", &self.service)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|b| b.len()))
            .field("body_hash", &self.body_hash)
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("time", &self.time)
            .finish()
    }
}

/// The result of signing a [`Signable`].
///
/// Render it with [`V4Signature::authorization`] or `to_string()`:
///
/// ```text
/// AWS4-HMAC-SHA256 Credential=<access_key>/<credential_scope>, SignedHeaders=<signed_headers>, Signature=<signature>
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct V4Signature {
    access_key: String,
    credential_scope: String,
    signed_headers: String,
    signature: String,
}

impl V4Signature {
    pub(crate) fn new(
        access_key: String,
        credential_scope: String,
        signed_headers: String,
        signature: String,
    ) -> Self {
        Self {
            access_key,
            credential_scope,
            signed_headers,
            signature,
        }
    }

    /// Always `AWS4-HMAC-SHA256`.
    pub fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    /// `<yyyyMMdd>/<region>/<service>/aws4_request`
    pub fn credential_scope(&self) -> &str {
        &self.credential_scope
    }

    /// Lowercase header names joined by `;`.
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Lowercase hex signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Access key id the signature was made with.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Render the value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        self.to_string()
    }
}

impl Display for V4Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, self.access_key, self.credential_scope, self.signed_headers, self.signature
        )
    }
}

impl Debug for V4Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4Signature")
            .field("access_key", &Redact::from(&self.access_key))
            .field("credential_scope", &self.credential_scope)
            .field("signed_headers", &self.signed_headers)
            .field("signature", &self.signature)
            .finish()
    }
}
