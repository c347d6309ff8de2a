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

//! Percent encoding for canonical query strings.
//!
//! ASCII alphanumerics and `.`, `-`, `*`, `_` pass through, space becomes
//! `+`, every other character is emitted as its UTF-8 bytes in `%XX` form
//! with uppercase hex digits.
//!
//! This is the `application/x-www-form-urlencoded` convention, not the AWS
//! UriEncode rule: `~` gets escaped and space is not `%20`.

use crate::constants::FORM_QUERY_ENCODE_SET;
use awsv4_core::{Error, Result};
use percent_encoding::utf8_percent_encode;

/// Encode `input` for use as a query key or value.
///
/// ```
/// use awsv4_signer::encode::encode;
///
/// assert_eq!(encode("a b/c"), "a+b%2Fc");
/// ```
pub fn encode(input: &str) -> String {
    let encoded = utf8_percent_encode(input, &FORM_QUERY_ENCODE_SET).to_string();
    if encoded.contains(' ') {
        encoded.replace(' ', "+")
    } else {
        encoded
    }
}

/// Encode an input that may be absent.
///
/// Absent input is an error, it's never treated as an empty string.
pub fn try_encode(input: Option<&str>) -> Result<String> {
    input
        .map(encode)
        .ok_or_else(|| Error::request_invalid("input to percent encode is absent"))
}
