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

//! Base URLs of services that accept SigV4.

use std::fmt::{Display, Formatter};

/// Region is an opaque region id like `us-east-1` or `oss-cn-hangzhou`.
///
/// It's embedded verbatim in the credential scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Create a region from its id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The region id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider of an AWS compatible API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Amazon Web Services: `https://{service}.{region}.amazonaws.com`
    Aws,
    /// Aliyun: `https://{service}-{region}.aliyuncs.com`
    Aliyun,
}

impl Provider {
    /// The domain services of this provider live under.
    pub fn domain(&self) -> &'static str {
        match self {
            Provider::Aws => "amazonaws.com",
            Provider::Aliyun => "aliyuncs.com",
        }
    }
}

/// Build the base url of `service` in `region`.
///
/// ```
/// use awsv4_signer::endpoint::{service_url, Provider, Region};
///
/// let url = service_url(Provider::Aws, "s3", &Region::from("us-east-1"));
/// assert_eq!(url, "https://s3.us-east-1.amazonaws.com");
/// ```
pub fn service_url(provider: Provider, service: &str, region: &Region) -> String {
    match provider {
        Provider::Aws => format!("https://{service}.{region}.{}", provider.domain()),
        Provider::Aliyun => format!("https://{service}-{region}.{}", provider.domain()),
    }
}
