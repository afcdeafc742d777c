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

use bytes::{Bytes, BytesMut};
use http::Method;

use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::sse::SseCustomerKey;
use crate::s3::types::{Part, RequestPayer, S3Request, ToS3Request};
use crate::s3::utils::{
    build_object_path, check_bucket_name, check_object_name, check_upload_id, escape_xml_text,
};

const COMPLETE_MULTIPART_UPLOAD_XMLNS: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Argument builder for the S3 `CompleteMultipartUpload` API operation.
///
/// Finalizes a multipart upload by referencing the already-uploaded parts
/// by number and entity tag. Bucket, object key and upload id are required;
/// everything else is optional and emitted on the wire only when set.
///
/// The builder is an immutable snapshot: each setter consumes `self` and
/// returns the updated value, and [`to_s3request`](ToS3Request::to_s3request)
/// consumes the final snapshot exactly once. Building the same snapshot
/// twice (via `clone`) yields byte-identical requests.
#[derive(Clone, Debug, Default)]
pub struct CompleteMultipartUpload {
    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
    bucket: String,
    object: String,
    upload_id: String,
    multipart_upload: Option<Vec<Part>>,

    checksum_crc32: Option<String>,
    checksum_crc32c: Option<String>,
    checksum_sha1: Option<String>,
    checksum_sha256: Option<String>,

    request_payer: Option<String>,
    expected_bucket_owner: Option<String>,

    if_match: Option<String>,
    if_none_match: Option<String>,

    sse_customer_algorithm: Option<String>,
    sse_customer_key: Option<String>,
    sse_customer_key_md5: Option<String>,
}

impl CompleteMultipartUpload {
    pub fn new(bucket: &str, object: &str, upload_id: &str) -> Self {
        CompleteMultipartUpload {
            bucket: bucket.to_string(),
            object: object.to_string(),
            upload_id: upload_id.to_string(),
            ..Default::default()
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    /// Ordered list of completed parts. The given order is semantically
    /// meaningful and is emitted verbatim, never re-sorted by part number.
    pub fn multipart_upload(mut self, parts: Vec<Part>) -> Self {
        self.multipart_upload = Some(parts);
        self
    }

    /// Pre-encoded CRC32 digest of the assembled object.
    pub fn checksum_crc32(mut self, digest: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(digest.into());
        self
    }

    /// Pre-encoded CRC32C digest of the assembled object.
    pub fn checksum_crc32c(mut self, digest: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(digest.into());
        self
    }

    /// Pre-encoded SHA1 digest of the assembled object.
    pub fn checksum_sha1(mut self, digest: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(digest.into());
        self
    }

    /// Pre-encoded SHA256 digest of the assembled object.
    pub fn checksum_sha256(mut self, digest: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(digest.into());
        self
    }

    /// Payer designation; validated against [`RequestPayer`] at build time.
    pub fn request_payer(mut self, request_payer: impl Into<String>) -> Self {
        self.request_payer = Some(request_payer.into());
        self
    }

    pub fn expected_bucket_owner(mut self, owner: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(owner.into());
        self
    }

    /// Conditional-write predicate, passed through verbatim (`*` included).
    pub fn if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    /// Conditional-write predicate, passed through verbatim (`*` included).
    pub fn if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.if_none_match = Some(etag.into());
        self
    }

    pub fn sse_customer_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.sse_customer_algorithm = Some(algorithm.into());
        self
    }

    pub fn sse_customer_key(mut self, key: impl Into<String>) -> Self {
        self.sse_customer_key = Some(key.into());
        self
    }

    pub fn sse_customer_key_md5(mut self, key_md5: impl Into<String>) -> Self {
        self.sse_customer_key_md5 = Some(key_md5.into());
        self
    }

    /// Applies all three SSE-C fields from a derived [`SseCustomerKey`].
    /// Equivalent to calling the three individual setters.
    pub fn sse(self, sse: &SseCustomerKey) -> Self {
        self.sse_customer_algorithm(sse.algorithm())
            .sse_customer_key(sse.key())
            .sse_customer_key_md5(sse.key_md5())
    }
}

/// Serializes the completed-parts list into the request body.
///
/// Compact UTF-8, no XML declaration; one `<Part>` per entry in the order
/// given. Entity tags are escaped so the output stays well-formed for
/// arbitrary caller-supplied strings.
fn serialize_parts(parts: &[Part]) -> Result<Bytes, ValidationErr> {
    // Capacity based on the part count - attempting to avoid extra
    // allocations while building the XML payload.
    let mut data = BytesMut::with_capacity(100 * parts.len() + 100);
    data.extend_from_slice(b"<CompleteMultipartUpload xmlns=\"");
    data.extend_from_slice(COMPLETE_MULTIPART_UPLOAD_XMLNS.as_bytes());
    data.extend_from_slice(b"\">");
    for part in parts {
        data.extend_from_slice(b"<Part><PartNumber>");
        data.extend_from_slice(part.number.to_string().as_bytes());
        data.extend_from_slice(b"</PartNumber><ETag>");
        data.extend_from_slice(escape_xml_text(&part.etag)?.as_bytes());
        data.extend_from_slice(b"</ETag></Part>");
    }
    data.extend_from_slice(b"</CompleteMultipartUpload>");
    Ok(data.freeze())
}

impl ToS3Request for CompleteMultipartUpload {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        check_upload_id(&self.upload_id)?;

        let mut headers = Multimap::new();
        headers.add(CONTENT_TYPE, "application/xml");
        if let Some(v) = &self.checksum_crc32 {
            headers.add(X_AMZ_CHECKSUM_CRC32, v.as_str());
        }
        if let Some(v) = &self.checksum_crc32c {
            headers.add(X_AMZ_CHECKSUM_CRC32C, v.as_str());
        }
        if let Some(v) = &self.checksum_sha1 {
            headers.add(X_AMZ_CHECKSUM_SHA1, v.as_str());
        }
        if let Some(v) = &self.checksum_sha256 {
            headers.add(X_AMZ_CHECKSUM_SHA256, v.as_str());
        }
        if let Some(v) = &self.request_payer {
            let payer: RequestPayer = v.parse()?;
            headers.add(X_AMZ_REQUEST_PAYER, payer.as_str());
        }
        if let Some(v) = &self.expected_bucket_owner {
            headers.add(X_AMZ_EXPECTED_BUCKET_OWNER, v.as_str());
        }
        if let Some(v) = &self.if_match {
            headers.add(IF_MATCH, v.as_str());
        }
        if let Some(v) = &self.if_none_match {
            headers.add(IF_NONE_MATCH, v.as_str());
        }
        // The three SSE-C fields are independent; consistency between them
        // is left to the service.
        if let Some(v) = &self.sse_customer_algorithm {
            headers.add(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM, v.as_str());
        }
        if let Some(v) = &self.sse_customer_key {
            headers.add(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY, v.as_str());
        }
        if let Some(v) = &self.sse_customer_key_md5 {
            headers.add(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5, v.as_str());
        }
        if let Some(v) = self.extra_headers {
            headers.add_missing(v);
        }

        let mut query_params = Multimap::new();
        query_params.add("uploadId", self.upload_id.as_str());
        if let Some(v) = self.extra_query_params {
            query_params.add_missing(v);
        }

        let path = build_object_path(&self.bucket, &self.object)?;

        let body = match &self.multipart_upload {
            Some(parts) => serialize_parts(parts)?,
            None => Bytes::new(),
        };

        log::debug!(
            "built CompleteMultipartUpload request: POST {} ({} part(s), {} body bytes)",
            path,
            self.multipart_upload.as_ref().map_or(0, Vec::len),
            body.len()
        );

        Ok(S3Request::new(Method::POST)
            .path(path)
            .query_params(query_params)
            .headers(headers)
            .body(body))
    }
}
