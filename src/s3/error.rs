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

//! Error definitions for request construction

use thiserror::Error;

/// Errors raised while converting a request builder into an [`S3Request`].
///
/// All variants are raised synchronously at build time and are not
/// retryable: the caller must fix the input before resubmitting. No partial
/// request is ever surfaced alongside one of these.
///
/// [`S3Request`]: crate::s3::types::S3Request
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    /// A mandatory field was absent at build time. Carries the wire-level
    /// field name (`Bucket`, `Key` or `UploadId`).
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A field's value is not among its permitted set. Carries the field
    /// name and the offending value.
    #[error("invalid value '{value}' for field {field}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
    },

    /// The XML body serializer could not produce well-formed output for the
    /// given input. Fatal and unexpected rather than transient.
    #[error("xml serialization failed: {0}")]
    XmlError(String),
}
