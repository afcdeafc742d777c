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

//! # S3Wire (`s3wire`)
//!
//! This crate builds the wire-exact HTTP request for the S3
//! `CompleteMultipartUpload` operation: method, percent-encoded path, query
//! string, header set and XML request body, from a strongly-typed parameter
//! builder.
//!
//! The request builder ([`s3::builders::CompleteMultipartUpload`]) implements
//! the [`s3::types::ToS3Request`] trait, which converts it into a transport
//! agnostic [`s3::types::S3Request`] descriptor. Signing, endpoint
//! resolution, retries and the HTTP client itself are deliberately out of
//! scope; the descriptor can be handed to any transport.
//!
//! ## Basic Usage
//!
//! ```
//! use s3wire::s3::builders::CompleteMultipartUpload;
//! use s3wire::s3::types::{Part, ToS3Request};
//!
//! let req = CompleteMultipartUpload::new("my-bucket", "path/to/object", "upload-id")
//!     .multipart_upload(vec![Part {
//!         number: 1,
//!         etag: "etag1".to_string(),
//!     }])
//!     .to_s3request()
//!     .expect("request build failed");
//!
//! assert_eq!(req.uri(), "/my-bucket/path/to/object?uploadId=upload-id");
//! ```
//!
//! ## Design
//! - The builder accumulates optional fields through consuming fluent setters
//! - Required fields (bucket, object key, upload id) are validated before any
//!   header or URI work; the build is all-or-nothing
//! - The XML body preserves caller-supplied part order and escapes entity-tag
//!   content so the output is well-formed for arbitrary input

pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
