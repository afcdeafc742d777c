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

//! Server side encryption with customer-provided key (SSE-C) helpers

use crate::s3::utils::{b64encode, md5sum_hash};

/// Pre-computed SSE-C header triple derived from a raw symmetric key.
///
/// The service expects the algorithm name, the base64-encoded key material
/// and the base64-encoded MD5 digest of the raw key. This type derives all
/// three from one 256-bit key so callers do not have to encode them by
/// hand. The three values stay independent on the wire; nothing here is
/// cross-checked at build time.
#[derive(Clone, Debug)]
pub struct SseCustomerKey {
    algorithm: String,
    key: String,
    key_md5: String,
}

impl SseCustomerKey {
    pub fn new(key: &str) -> Self {
        Self {
            algorithm: String::from("AES256"),
            key: b64encode(key),
            key_md5: md5sum_hash(key.as_bytes()),
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn key_md5(&self) -> &str {
        &self.key_md5
    }
}
