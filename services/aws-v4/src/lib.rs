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

//! AWS Signature Version 4 request signer.
//!
//! This crate signs `http::Request`s for AWS and AWS compatible services
//! like S3, SQS or Aliyun OSS.
//!
//! ## Quick Start
//!
//! ```no_run
//! use awsv4_core::{Context, OsEnv};
//! use awsv4_signer::{BodyStrategy, Config, RequestSigner};
//!
//! # async fn example() -> awsv4_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let cfg = Config::default().from_env(&ctx);
//! let signer = RequestSigner::from_config("s3", &cfg)?;
//!
//! let req = http::Request::get("https://s3.us-east-1.amazonaws.com/")
//!     .body(String::new())
//!     .expect("request must be valid");
//! let req = signer.sign(&ctx, req, BodyStrategy::Default).await?;
//! assert!(req.headers().contains_key("authorization"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Payload
//!
//! [`BodyStrategy`] decides which payload hash gets signed:
//!
//! - [`BodyStrategy::IgnoreBody`]: the hash of an empty payload.
//! - [`BodyStrategy::PreComputed`]: a caller supplied hash, for example [`UNSIGNED_PAYLOAD`].
//! - [`BodyStrategy::Default`]: the request body is read and hashed.
//! - [`BodyStrategy::HasBody`]: the hash of caller supplied bytes.
//!
//! ## Lower level
//!
//! [`kernel`] exposes each derivation step over a plain [`Signable`], which is
//! useful to check a signature against published test vectors.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::ALGORITHM;
pub use constants::EMPTY_STRING_SHA256;
pub use constants::UNSIGNED_PAYLOAD;

mod body;
pub use body::remove_chunked_encoding;
pub use body::BodyStrategy;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod signable;
pub use signable::Signable;
pub use signable::V4Signature;

mod sign_request;
pub use sign_request::RequestSigner;
pub use sign_request::SignedBody;

pub mod encode;
pub mod endpoint;
pub mod kernel;
