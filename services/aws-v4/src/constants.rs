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

use http::header::{HeaderName, ACCEPT_ENCODING, AUTHORIZATION, USER_AGENT};
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// The only algorithm this crate signs with.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Terminator of every credential scope.
pub const AWS4_REQUEST: &str = "aws4_request";

/// Placeholder payload hash telling the service the body is not signed.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Hex encoded sha256 of an empty payload.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

// Headers used in aws services.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

/// Headers that are never signed.
///
/// The transport may rewrite them after signing.
pub const UNSIGNED_HEADERS: [HeaderName; 3] = [ACCEPT_ENCODING, AUTHORIZATION, USER_AGENT];

// Env values used in aws services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// AsciiSet for the form style query encoding used in canonical requests.
///
/// - Keep 'A'-'Z', 'a'-'z', '0'-'9', '.', '-', '*', '_' and ' ' as is.
/// - Space is rewritten to '+' after encoding.
///
/// AWS UriEncode keeps '~' and uses "%20" for space instead, see
/// <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>.
pub static FORM_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');
