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

use crate::body::{remove_chunked_encoding, BodyStrategy};
use crate::constants::{UNSIGNED_HEADERS, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use crate::kernel;
use crate::{Config, Credential, Signable};
use awsv4_core::time::{format_http_date, format_iso8601};
use awsv4_core::{Context, Error, Result, SigningCredential};
use bytes::Bytes;
use http::header::{AUTHORIZATION, DATE, HOST};
use http::uri::Authority;
use http::{HeaderMap, HeaderValue, Request};
use http_body::Body;
use http_body_util::{Either, Full};
use log::debug;

/// Body of a signed request.
///
/// - `Left`: the original body, untouched.
/// - `Right`: the bytes read by [`BodyStrategy::Default`], exactly as they were hashed.
pub type SignedBody<B> = Either<B, Full<Bytes>>;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer only holds static configuration, it's safe to share one
/// signer between concurrent sign calls.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
    credential: Credential,
}

impl RequestSigner {
    /// Create a new signer for `service` in `region`.
    pub fn new(service: &str, region: &str, credential: Credential) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            credential,
        }
    }

    /// Create a new signer for `service` from a loaded config.
    pub fn from_config(service: &str, cfg: &Config) -> Result<Self> {
        let region = cfg.region()?;
        let credential = cfg.credential()?;
        debug!("signer: service: {service}, region: {region}");

        Ok(Self::new(service, region, credential))
    }

    /// Service name used in the credential scope.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region used in the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign the request.
    ///
    /// The returned request carries `x-amz-date`, `authorization` and `date`
    /// headers. Nothing is returned if any step fails, so a request with a
    /// wrong signature is never produced.
    pub async fn sign<B>(
        &self,
        ctx: &Context,
        req: Request<B>,
        body: BodyStrategy,
    ) -> Result<Request<SignedBody<B>>>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        if !self.credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        let now = ctx.now().await?;
        let (mut parts, req_body) = req.into_parts();

        // Work on a copy, headers only land on the request once signed.
        let mut headers = parts.headers.clone();
        headers.insert(X_AMZ_DATE, HeaderValue::try_from(format_iso8601(now))?);
        // `date` is rewritten to the signing time below and never signed.
        headers.remove(DATE);

        let buffered = matches!(body, BodyStrategy::Default);
        let resolved = body.resolve(req_body).await?;
        if buffered {
            remove_chunked_encoding(&mut headers)?;
        }

        if let Some(token) = &self.credential.session_token {
            let mut value = HeaderValue::from_str(token)?;
            // Set token value sensitive to valid leaking.
            value.set_sensitive(true);
            headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }

        let path = match parts.uri.path() {
            "" => "/".to_string(),
            v => v.to_string(),
        };
        let query = parts
            .uri
            .query()
            .map(|v| {
                form_urlencoded::parse(v.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        let signable = Signable {
            region: self.region.clone(),
            service: self.service.clone(),
            method: parts.method.clone(),
            path,
            query,
            headers: headers_to_sign(&headers, parts.uri.authority())?,
            body: resolved.bytes,
            body_hash: resolved.hash,
            access_key: self.credential.access_key_id.clone(),
            secret_key: self.credential.secret_access_key.clone(),
            time: now,
        };
        debug!(
            "signing request: {} {} for {}/{}",
            signable.method, signable.path, signable.service, signable.region
        );

        let signature = kernel::sign(&signable)?;

        let mut authorization = HeaderValue::from_str(&signature.authorization())?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(DATE, HeaderValue::try_from(format_http_date(now))?);

        parts.headers = headers;
        Ok(Request::from_parts(parts, resolved.body))
    }
}

/// Collect the header pairs to sign.
///
/// Headers the transport may rewrite are skipped. Repeated headers are joined
/// by `,`. `host` is derived from the authority when the request has none.
fn headers_to_sign(
    headers: &HeaderMap,
    authority: Option<&Authority>,
) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(headers.keys_len() + 1);

    for name in headers.keys() {
        if UNSIGNED_HEADERS.contains(name) {
            continue;
        }

        let values = headers
            .get_all(name)
            .iter()
            .map(|v| v.to_str())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        pairs.push((name.as_str().to_string(), values.join(",")));
    }

    if !headers.contains_key(HOST) {
        if let Some(authority) = authority {
            let host = match authority.port() {
                Some(port) => format!("{}:{}", authority.host(), port),
                None => authority.host().to_string(),
            };
            pairs.push((HOST.as_str().to_string(), host));
        }
    }

    Ok(pairs)
}
