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

//! Tests against a real S3 compatible endpoint.
//!
//! Enabled by `AWSV4_TEST=on`, `AWSV4_URL` points to a bucket. Credential
//! and region are read from the usual `AWS_*` env.

use super::read_body;
use anyhow::Result;
use awsv4_core::{Context, OsEnv};
use awsv4_signer::{BodyStrategy, Config, RequestSigner};
use http::{Request, StatusCode};
use log::{debug, warn};
use reqwest::Client;
use std::env;

fn init_live_test() -> Option<(Context, RequestSigner, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("AWSV4_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new().with_env(OsEnv);
    let cfg = Config::default().from_env(&ctx);
    let service = env::var("AWSV4_SERVICE").unwrap_or_else(|_| "s3".to_string());
    let signer = RequestSigner::from_config(&service, &cfg).expect("config must be valid");
    let url = env::var("AWSV4_URL").expect("env AWSV4_URL must set");

    Some((ctx, signer, url))
}

async fn send(
    ctx: &Context,
    signer: &RequestSigner,
    req: Request<String>,
    body: BodyStrategy,
) -> Result<StatusCode> {
    let req = signer.sign(ctx, req, body).await?;
    debug!("signed request: {req:?}");

    let (parts, body) = req.into_parts();
    let req = Request::from_parts(parts, read_body(Request::new(body)).await?);

    let resp = Client::new().execute(req.try_into()?).await?;
    let status = resp.status();
    debug!("got response: {status}, {}", resp.text().await?);
    Ok(status)
}

#[tokio::test]
async fn test_head_object() -> Result<()> {
    let Some((ctx, signer, url)) = init_live_test() else {
        warn!("AWSV4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::head(format!("{url}/not_exist_file")).body(String::new())?;
    let status = send(&ctx, &signer, req, BodyStrategy::IgnoreBody).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    Ok(())
}

#[tokio::test]
async fn test_put_object() -> Result<()> {
    let Some((ctx, signer, url)) = init_live_test() else {
        warn!("AWSV4_TEST is not set, skipped");
        return Ok(());
    };

    let body = "Hello, World!";
    let req = Request::put(format!("{url}/put_object_test"))
        .header(
            "x-amz-content-sha256",
            awsv4_core::hash::hex_sha256(body.as_bytes()),
        )
        .body(body.to_string())?;
    let status = send(&ctx, &signer, req, BodyStrategy::Default).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}

#[tokio::test]
async fn test_list_bucket() -> Result<()> {
    let Some((ctx, signer, url)) = init_live_test() else {
        warn!("AWSV4_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::get(format!("{url}?list-type=2&delimiter=/&encoding-type=url"))
        .header("x-amz-content-sha256", awsv4_signer::UNSIGNED_PAYLOAD)
        .body(String::new())?;
    let status = send(&ctx, &signer, req, BodyStrategy::unsigned_payload()).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}
