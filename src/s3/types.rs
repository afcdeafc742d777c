// S3Wire - wire-exact request builders for Amazon S3 compatible object storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use bytes::Bytes;
use http::Method;
use std::fmt;
use std::str::FromStr;

/// Contains part number and etag of multipart upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub number: u16,
    pub etag: String,
}

/// Who pays for the request. Closed set; S3 confirms only `requester`.
///
/// Extending the permitted set is a matter of adding a variant and its two
/// match arms below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestPayer {
    Requester,
}

impl RequestPayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPayer::Requester => "requester",
        }
    }
}

impl fmt::Display for RequestPayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestPayer {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requester" => Ok(RequestPayer::Requester),
            _ => Err(ValidationErr::InvalidEnumValue {
                field: "RequestPayer",
                value: s.to_string(),
            }),
        }
    }
}

/// Transport-agnostic descriptor of one outbound S3 HTTP request.
///
/// Produced by [`ToS3Request::to_s3request`] and consumable by any HTTP
/// client: method, already-encoded path, query parameters, header mapping
/// and body bytes. Holds no connection state and performs no I/O.
#[derive(Clone, Debug)]
pub struct S3Request {
    pub method: Method,
    pub path: String,
    pub query_params: Multimap,
    pub headers: Multimap,
    pub body: Bytes,
}

impl S3Request {
    pub fn new(method: Method) -> Self {
        S3Request {
            method,
            path: String::from("/"),
            query_params: Multimap::new(),
            headers: Multimap::new(),
            body: Bytes::new(),
        }
    }

    pub fn path(mut self, path: String) -> Self {
        self.path = path;
        self
    }

    pub fn query_params(mut self, query_params: Multimap) -> Self {
        self.query_params = query_params;
        self
    }

    pub fn headers(mut self, headers: Multimap) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Renders path and query string for handoff to a transport. The query
    /// string uses the canonical key order so the rendering is stable
    /// across builds of the same input.
    pub fn uri(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }
        format!(
            "{}?{}",
            self.path,
            self.query_params.get_canonical_query_string()
        )
    }
}

/// Trait for converting a request builder into a concrete S3 HTTP request.
///
/// Implemented by all request builders in this crate. The conversion is a
/// pure, synchronous, single-pass transform: required fields are validated
/// first, then headers, query parameters, path and body are assembled. Any
/// failure aborts the whole build; a partial [`S3Request`] is never
/// returned.
pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}
