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

//! SigV4 signing kernel.
//!
//! Pure functions from a [`Signable`] to a [`V4Signature`]:
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)
//! - [Create a string to sign](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-string-to-sign)
//! - [Calculate the signature](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#calculate-signature)

use crate::constants::{ALGORITHM, AWS4_REQUEST, EMPTY_STRING_SHA256};
use crate::encode::encode;
use crate::signable::{Signable, V4Signature};
use awsv4_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use awsv4_core::time::{format_date, format_iso8601};
use awsv4_core::Result;
use log::debug;
use std::fmt::Write;

/// Output of [`derive_string_to_sign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToSign {
    /// The string the signing key signs.
    pub string_to_sign: String,
    /// Lowercase header names joined by `;`.
    pub signed_headers: String,
    /// `<yyyyMMdd>/<region>/<service>/aws4_request`
    pub credential_scope: String,
}

/// Derive the signing key.
///
/// ```text
/// kSecret  = "AWS4" + secret
/// kDate    = HMAC(kSecret, date_stamp)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
pub fn derive_signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

/// Build the canonical query string.
///
/// Keys and values are encoded independently, then pairs are sorted by the
/// encoded key. Pairs with the same key keep their input order.
pub fn canonical_query(query: &[(String, String)]) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut pairs = query
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect::<Vec<_>>();
    pairs.sort_by(|(l, _), (r, _)| l.cmp(r));

    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers block and the signed headers list.
///
/// Names are lowercased, values trimmed, pairs sorted by name. The block has
/// one `name:value` line per pair without a trailing newline.
pub fn canonical_headers(headers: &[(String, String)]) -> (String, String) {
    let mut pairs = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim()))
        .collect::<Vec<_>>();
    pairs.sort_by(|(l, _), (r, _)| l.cmp(r));

    let block = pairs
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect::<Vec<_>>()
        .join("\n");
    let signed_headers = pairs
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    (block, signed_headers)
}

/// Resolve the payload hash of a signable.
pub fn payload_hash(signable: &Signable) -> String {
    match (&signable.body_hash, &signable.body) {
        (Some(hash), _) => hash.clone(),
        (None, Some(body)) => hex_sha256(body),
        (None, None) => EMPTY_STRING_SHA256.to_string(),
    }
}

/// Build the canonical request.
///
/// Returns the canonical request and the signed headers list.
///
/// ```text
/// GET
/// /test.txt
///
/// host:examplebucket.s3.amazonaws.com
/// x-amz-date:20130524T000000Z
///
/// host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
pub fn derive_canonical_request(signable: &Signable) -> Result<(String, String)> {
    let (headers, signed_headers) = canonical_headers(&signable.headers);

    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);
    writeln!(f, "{}", signable.method)?;
    if signable.path.is_empty() {
        writeln!(f, "/")?;
    } else {
        writeln!(f, "{}", signable.path)?;
    }
    writeln!(f, "{}", canonical_query(&signable.query))?;
    writeln!(f, "{headers}")?;
    writeln!(f)?;
    writeln!(f, "{signed_headers}")?;
    write!(f, "{}", payload_hash(signable))?;

    Ok((f, signed_headers))
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20130524T000000Z
/// 20130524/us-east-1/s3/aws4_request
/// <hex(sha256(canonical_request))>
/// ```
pub fn derive_string_to_sign(signable: &Signable) -> Result<StringToSign> {
    let (creq, signed_headers) = derive_canonical_request(signable)?;
    debug!("calculated canonical request: {creq}");

    // Scope: "20220313/<region>/<service>/aws4_request"
    let credential_scope = format!(
        "{}/{}/{}/{}",
        format_date(signable.time),
        signable.region,
        signable.service,
        AWS4_REQUEST
    );
    debug!("calculated scope: {credential_scope}");

    let mut f = String::with_capacity(128);
    writeln!(f, "{ALGORITHM}")?;
    writeln!(f, "{}", format_iso8601(signable.time))?;
    writeln!(f, "{credential_scope}")?;
    write!(f, "{}", hex_sha256(creq.as_bytes()))?;
    debug!("calculated string to sign: {f}");

    Ok(StringToSign {
        string_to_sign: f,
        signed_headers,
        credential_scope,
    })
}

/// Sign the signable.
pub fn sign(signable: &Signable) -> Result<V4Signature> {
    let sts = derive_string_to_sign(signable)?;

    let signing_key = derive_signing_key(
        &signable.secret_key,
        &format_date(signable.time),
        &signable.region,
        &signable.service,
    );
    let signature = hex_hmac_sha256(&signing_key, sts.string_to_sign.as_bytes());

    Ok(V4Signature::new(
        signable.access_key.clone(),
        sts.credential_scope,
        sts.signed_headers,
        signature,
    ))
}
