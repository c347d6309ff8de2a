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

//! Signatures checked against the AWS S3 documentation examples.

use super::{example_context, example_signer, signature_of, EXAMPLE_ACCESS_KEY};
use anyhow::Result;
use awsv4_core::{Clock, Context, Error, ErrorKind};
use awsv4_signer::{BodyStrategy, Credential, RequestSigner, EMPTY_STRING_SHA256};
use http::header::{AUTHORIZATION, DATE, USER_AGENT};
use http::Request;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_case::test_case;

fn get_object() -> Result<Request<String>> {
    Ok(Request::get("https://examplebucket.s3.amazonaws.com/test.txt")
        .header("range", "bytes=0-9")
        .header("x-amz-content-sha256", EMPTY_STRING_SHA256)
        .header(USER_AGENT, "aws-sdk-rust/1.0")
        .body(String::new())?)
}

#[test_case(BodyStrategy::Default; "read body")]
#[test_case(BodyStrategy::IgnoreBody; "ignore body")]
#[test_case(BodyStrategy::PreComputed(EMPTY_STRING_SHA256.to_string()); "pre computed")]
#[test_case(BodyStrategy::HasBody(bytes::Bytes::new()); "has body")]
#[tokio::test]
async fn test_get_object(body: BodyStrategy) -> Result<()> {
    let req = example_signer()
        .sign(&example_context(), get_object()?, body)
        .await?;

    assert_eq!(
        req.headers()[AUTHORIZATION],
        format!(
            "AWS4-HMAC-SHA256 Credential={EXAMPLE_ACCESS_KEY}/20130524/us-east-1/s3/aws4_request, \
             SignedHeaders=host;range;x-amz-content-sha256;x-amz-date, \
             Signature=f0e8bdb87c964420e857bd35b5d6ed310bd44f0170aba48dd91039c6036bdb41"
        )
        .as_str()
    );
    assert_eq!(req.headers()["x-amz-date"], "20130524T000000Z");
    assert_eq!(req.headers()[DATE], "Fri, 24 May 2013 00:00:00 GMT");
    // Not signed, but still sent.
    assert_eq!(req.headers()[USER_AGENT], "aws-sdk-rust/1.0");
    Ok(())
}

#[tokio::test]
async fn test_unsigned_payload() -> Result<()> {
    let req = Request::get("https://examplebucket.s3.amazonaws.com/").body(String::new())?;

    let req = example_signer()
        .sign(&example_context(), req, BodyStrategy::unsigned_payload())
        .await?;

    assert_eq!(
        signature_of(&req),
        "b1694a01c444af9149b83b5f55e98679977d25860d14db8a566198bc5c2442dc"
    );
    Ok(())
}

#[tokio::test]
async fn test_unsigned_headers_do_not_change_signature() -> Result<()> {
    let plain = Request::get("https://examplebucket.s3.amazonaws.com/").body(String::new())?;
    let noisy = Request::get("https://examplebucket.s3.amazonaws.com/")
        .header("accept-encoding", "gzip, br")
        .header(USER_AGENT, "curl/8.0")
        .header(AUTHORIZATION, "Bearer stale")
        .body(String::new())?;

    let signer = example_signer();
    let plain = signer
        .sign(&example_context(), plain, BodyStrategy::IgnoreBody)
        .await?;
    let noisy = signer
        .sign(&example_context(), noisy, BodyStrategy::IgnoreBody)
        .await?;

    assert_eq!(signature_of(&plain), signature_of(&noisy));
    assert_eq!(
        signature_of(&plain),
        "a9fbf544a39d0dde459000ebc7dcb80edb69e7a2b61d92296e36ea4114bea7a0"
    );
    // The stale authorization is replaced.
    assert_eq!(noisy.headers().get_all(AUTHORIZATION).iter().count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_existing_date_header_is_replaced() -> Result<()> {
    let req = Request::get("https://examplebucket.s3.amazonaws.com/")
        .header(DATE, "Mon, 01 Jan 2001 00:00:00 GMT")
        .body(String::new())?;

    let req = example_signer()
        .sign(&example_context(), req, BodyStrategy::IgnoreBody)
        .await?;

    assert_eq!(req.headers().get_all(DATE).iter().count(), 1);
    assert_eq!(req.headers()[DATE], "Fri, 24 May 2013 00:00:00 GMT");
    let authorization = req.headers()[AUTHORIZATION].to_str()?;
    assert!(
        authorization.contains("SignedHeaders=host;x-amz-date,"),
        "{authorization}"
    );
    assert_eq!(
        signature_of(&req),
        "a9fbf544a39d0dde459000ebc7dcb80edb69e7a2b61d92296e36ea4114bea7a0"
    );
    Ok(())
}

#[tokio::test]
async fn test_query_order_does_not_change_signature() -> Result<()> {
    let signer = example_signer();

    let mut signatures = Vec::new();
    for uri in [
        "https://examplebucket.s3.amazonaws.com/?max-keys=2&prefix=J",
        "https://examplebucket.s3.amazonaws.com/?prefix=J&max-keys=2",
    ] {
        let req = Request::get(uri).body(String::new())?;
        let req = signer
            .sign(&example_context(), req, BodyStrategy::IgnoreBody)
            .await?;
        signatures.push(signature_of(&req));
    }

    assert_eq!(signatures[0], signatures[1]);
    Ok(())
}

#[tokio::test]
async fn test_session_token_is_signed() -> Result<()> {
    let signer = RequestSigner::new(
        "s3",
        "us-east-1",
        Credential::new(EXAMPLE_ACCESS_KEY, super::EXAMPLE_SECRET_KEY)
            .with_session_token("FwoGZXIvYXdzEXAMPLETOKEN"),
    );
    let req = Request::get("https://examplebucket.s3.amazonaws.com/").body(String::new())?;

    let req = signer
        .sign(&example_context(), req, BodyStrategy::IgnoreBody)
        .await?;

    assert_eq!(
        req.headers()["x-amz-security-token"],
        "FwoGZXIvYXdzEXAMPLETOKEN"
    );
    assert_ne!(
        signature_of(&req),
        "a9fbf544a39d0dde459000ebc7dcb80edb69e7a2b61d92296e36ea4114bea7a0"
    );
    Ok(())
}

#[derive(Debug)]
struct BrokenClock;

#[async_trait::async_trait]
impl Clock for BrokenClock {
    async fn now(&self) -> awsv4_core::Result<awsv4_core::time::DateTime> {
        Err(Error::unexpected("clock is not synchronized"))
    }
}

#[tokio::test]
async fn test_clock_failure() -> Result<()> {
    let ctx = Context::new().with_clock(BrokenClock);
    let req = Request::get("https://examplebucket.s3.amazonaws.com/").body(String::new())?;

    let err = example_signer()
        .sign(&ctx, req, BodyStrategy::IgnoreBody)
        .await
        .expect_err("broken clock must fail");

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.message(), "clock is not synchronized");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_sign() -> Result<()> {
    let signer = Arc::new(example_signer());
    let ctx = example_context();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let signer = signer.clone();
        let ctx = ctx.clone();
        tasks.push(tokio::spawn(async move {
            let req = Request::get("https://examplebucket.s3.amazonaws.com/")
                .body(String::new())
                .expect("must be valid request");
            let req = signer
                .sign(&ctx, req, BodyStrategy::IgnoreBody)
                .await
                .expect("sign must succeed");
            signature_of(&req)
        }));
    }

    for task in tasks {
        assert_eq!(
            task.await?,
            "a9fbf544a39d0dde459000ebc7dcb80edb69e7a2b61d92296e36ea4114bea7a0"
        );
    }
    Ok(())
}
