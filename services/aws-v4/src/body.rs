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

use crate::constants::UNSIGNED_PAYLOAD;
use awsv4_core::{Error, Result};
use bytes::Bytes;
use http::header::TRANSFER_ENCODING;
use http::{HeaderMap, HeaderValue};
use http_body::Body;
use http_body_util::{BodyExt, Either, Full};
use log::debug;

/// BodyStrategy decides how the payload hash is resolved for one sign call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyStrategy {
    /// Don't look at the body, the hash of an empty payload is signed.
    IgnoreBody,
    /// Sign the given hash verbatim.
    ///
    /// It could be a hex sha256 digest or a placeholder like `UNSIGNED-PAYLOAD`,
    /// no validation is performed.
    PreComputed(String),
    /// Read the whole body from the request and sign its sha256.
    ///
    /// The request is sent with exactly the bytes that were read.
    Default,
    /// Sign the sha256 of the given bytes, the request body is left untouched.
    HasBody(Bytes),
}

impl BodyStrategy {
    /// Sign with `UNSIGNED-PAYLOAD` as payload hash.
    pub fn unsigned_payload() -> Self {
        BodyStrategy::PreComputed(UNSIGNED_PAYLOAD.to_string())
    }
}

/// Body and hash resolved from a [`BodyStrategy`].
pub(crate) struct ResolvedBody<B> {
    pub bytes: Option<Bytes>,
    pub hash: Option<String>,
    pub body: Either<B, Full<Bytes>>,
}

impl BodyStrategy {
    pub(crate) async fn resolve<B>(self, body: B) -> Result<ResolvedBody<B>>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let resolved = match self {
            BodyStrategy::IgnoreBody => ResolvedBody {
                bytes: None,
                hash: None,
                body: Either::Left(body),
            },
            BodyStrategy::PreComputed(hash) => ResolvedBody {
                bytes: None,
                hash: Some(hash),
                body: Either::Left(body),
            },
            BodyStrategy::HasBody(bytes) => ResolvedBody {
                bytes: Some(bytes),
                hash: None,
                body: Either::Left(body),
            },
            BodyStrategy::Default => {
                let bytes = body
                    .collect()
                    .await
                    .map_err(|e| {
                        let e: Box<dyn std::error::Error + Send + Sync> = e.into();
                        Error::unexpected(format!("failed to read request body: {e}"))
                            .with_source(anyhow::anyhow!(e))
                    })?
                    .to_bytes();
                debug!("read {} bytes from request body", bytes.len());

                ResolvedBody {
                    bytes: Some(bytes.clone()),
                    hash: None,
                    body: Either::Right(Full::new(bytes)),
                }
            }
        };

        Ok(resolved)
    }
}

/// Remove the `chunked` coding from `Transfer-Encoding` headers.
///
/// Used once the body has been buffered entirely. Other codings are kept in
/// order; a header left without codings is removed.
///
/// ```
/// use awsv4_signer::remove_chunked_encoding;
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("transfer-encoding", "chunked, gzip".parse().unwrap());
/// remove_chunked_encoding(&mut headers).unwrap();
/// assert_eq!(headers["transfer-encoding"], "gzip");
/// ```
pub fn remove_chunked_encoding(headers: &mut HeaderMap) -> Result<()> {
    let values = headers
        .get_all(TRANSFER_ENCODING)
        .iter()
        .map(|v| v.to_str())
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("chunked"))
        .map(str::to_string)
        .collect::<Vec<_>>();

    if headers.remove(TRANSFER_ENCODING).is_none() {
        return Ok(());
    }
    if !values.is_empty() {
        headers.insert(TRANSFER_ENCODING, HeaderValue::from_str(&values.join(", "))?);
    }

    Ok(())
}
