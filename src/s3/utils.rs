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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;

pub use urlencoding::encode as url_encode;

use crate::s3::error::ValidationErr;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

// Encode set for object keys: everything non-alphanumeric except the RFC
// 3986 unreserved marks, and except '/'. Object keys are hierarchical, so
// the path separators inside a key must survive encoding unescaped.
const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Checks that a bucket name was supplied.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::MissingRequiredField("Bucket"));
    }
    Ok(())
}

/// Checks that an object key was supplied.
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::MissingRequiredField("Key"));
    }
    Ok(())
}

/// Checks that an upload id was supplied.
pub fn check_upload_id(upload_id: &str) -> Result<(), ValidationErr> {
    if upload_id.is_empty() {
        return Err(ValidationErr::MissingRequiredField("UploadId"));
    }
    Ok(())
}

/// Builds the request path `/<bucket>/<key>` with the bucket fully
/// percent-encoded and the object key encoded through
/// [`urlencode_object_key`], keeping its internal `/` separators.
///
/// Re-checks field presence so no caller can reach path construction with a
/// missing bucket or key; the first missing field in declaration order wins.
pub fn build_object_path(bucket: &str, key: &str) -> Result<String, ValidationErr> {
    check_bucket_name(bucket)?;
    check_object_name(key)?;

    let mut path = String::with_capacity(bucket.len() + key.len() + 2);
    path.push('/');
    path.push_str(&url_encode(bucket));
    if !key.starts_with('/') {
        path.push('/');
    }
    path.push_str(&urlencode_object_key(key));
    Ok(path)
}

/// Escapes text for use as XML character data.
///
/// `&`, `<` and `>` become entity references; everything else passes
/// through, so re-parsing yields the original string. Returns
/// `Cow::Borrowed` when no escaping is needed (common case). Control
/// characters outside TAB/LF/CR cannot be represented in XML 1.0 at all and
/// fail with [`ValidationErr::XmlError`].
pub fn escape_xml_text(s: &str) -> Result<Cow<'_, str>, ValidationErr> {
    for c in s.chars() {
        if c < '\u{20}' && c != '\t' && c != '\n' && c != '\r' {
            return Err(ValidationErr::XmlError(format!(
                "control character U+{:04X} is not representable in XML 1.0",
                c as u32
            )));
        }
    }

    if !s.contains(['&', '<', '>']) {
        return Ok(Cow::Borrowed(s));
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Ok(Cow::Owned(escaped))
}
