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

//! Core components for signing requests with AWS Signature Version 4.
//!
//! This crate holds the pieces that don't depend on a specific request
//! layout: the error type, hashing and time primitives, and the [`Context`]
//! that carries the injectable environment and clock.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for environment access and the clock
//! - **Traits**: [`Env`] for environment variables, [`Clock`] for reading the signing time,
//!   [`SigningCredential`] for validating credentials
//! - **Error**: A single [`Error`] type with an [`ErrorKind`] shared by all crates
//!
//! ## Example
//!
//! ```
//! use awsv4_core::time::{format_date, format_iso8601, parse_rfc3339};
//! use awsv4_core::{Context, FixedClock};
//!
//! # async fn example() -> awsv4_core::Result<()> {
//! let t = parse_rfc3339("2013-05-24T00:00:00Z")?;
//! let ctx = Context::new().with_clock(FixedClock::new(t));
//!
//! let now = ctx.now().await?;
//! assert_eq!(format_date(now), "20130524");
//! assert_eq!(format_iso8601(now), "20130524T000000Z");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Clock;
pub use context::Context;
pub use context::Env;
pub use context::FixedClock;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;
pub use context::SystemClock;

mod api;
pub use api::SigningCredential;

mod error;
pub use error::{Error, ErrorKind, Result};
