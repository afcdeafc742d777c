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

use http::Method;
use s3wire::s3::builders::CompleteMultipartUpload;
use s3wire::s3::error::ValidationErr;
use s3wire::s3::header_constants::*;
use s3wire::s3::multimap_ext::{Multimap, MultimapExt};
use s3wire::s3::sse::SseCustomerKey;
use s3wire::s3::types::{Part, S3Request, ToS3Request};
use s3wire::s3::utils::{b64encode, md5sum_hash};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parts(entries: &[(u16, &str)]) -> Vec<Part> {
    entries
        .iter()
        .map(|(number, etag)| Part {
            number: *number,
            etag: etag.to_string(),
        })
        .collect()
}

fn build(builder: CompleteMultipartUpload) -> S3Request {
    builder.to_s3request().expect("request build failed")
}

#[test]
fn test_method_and_basic_shape() {
    init();
    let req = build(CompleteMultipartUpload::new("bucket", "object", "upload-id"));
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/bucket/object");
    assert_eq!(req.uri(), "/bucket/object?uploadId=upload-id");
    assert_eq!(
        req.headers.get(CONTENT_TYPE),
        Some(&"application/xml".to_string())
    );
}

#[test]
fn test_path_preserves_key_separators_and_encodes_reserved_characters() {
    init();
    let req = build(CompleteMultipartUpload::new(
        "b",
        "dir one/file?two/x&y",
        "u",
    ));
    assert_eq!(req.path, "/b/dir%20one/file%3Ftwo/x%26y");
    // The query value goes through standard query encoding.
    let req = build(CompleteMultipartUpload::new("b", "k", "id with spaces"));
    assert_eq!(req.uri(), "/b/k?uploadId=id%20with%20spaces");
}

#[test]
fn test_missing_required_fields_fail_in_declaration_order() {
    init();
    assert_eq!(
        CompleteMultipartUpload::new("", "", "").to_s3request().unwrap_err(),
        ValidationErr::MissingRequiredField("Bucket")
    );
    assert_eq!(
        CompleteMultipartUpload::new("bucket", "", "").to_s3request().unwrap_err(),
        ValidationErr::MissingRequiredField("Key")
    );
    assert_eq!(
        CompleteMultipartUpload::new("bucket", "object", "")
            .to_s3request()
            .unwrap_err(),
        ValidationErr::MissingRequiredField("UploadId")
    );
}

#[test]
fn test_request_payer_validation() {
    init();
    let err = CompleteMultipartUpload::new("b", "k", "u")
        .request_payer("bogus")
        .to_s3request()
        .unwrap_err();
    assert_eq!(
        err,
        ValidationErr::InvalidEnumValue {
            field: "RequestPayer",
            value: "bogus".to_string(),
        }
    );

    let req = build(CompleteMultipartUpload::new("b", "k", "u").request_payer("requester"));
    assert_eq!(
        req.headers.get(X_AMZ_REQUEST_PAYER),
        Some(&"requester".to_string())
    );
}

#[test]
fn test_each_checksum_field_yields_exactly_its_own_header() {
    init();
    let all = [
        X_AMZ_CHECKSUM_CRC32,
        X_AMZ_CHECKSUM_CRC32C,
        X_AMZ_CHECKSUM_SHA1,
        X_AMZ_CHECKSUM_SHA256,
    ];

    let cases: [(&str, fn(CompleteMultipartUpload) -> CompleteMultipartUpload); 4] = [
        (X_AMZ_CHECKSUM_CRC32, |b| b.checksum_crc32("digest")),
        (X_AMZ_CHECKSUM_CRC32C, |b| b.checksum_crc32c("digest")),
        (X_AMZ_CHECKSUM_SHA1, |b| b.checksum_sha1("digest")),
        (X_AMZ_CHECKSUM_SHA256, |b| b.checksum_sha256("digest")),
    ];

    for (header, set) in cases {
        let req = build(set(CompleteMultipartUpload::new("b", "k", "u")));
        for name in all {
            if name == header {
                assert_eq!(req.headers.get(name), Some(&"digest".to_string()));
            } else {
                assert!(req.headers.get(name).is_none(), "unexpected {name}");
            }
        }
    }

    let req = build(CompleteMultipartUpload::new("b", "k", "u"));
    for name in all {
        assert!(req.headers.get(name).is_none(), "unexpected {name}");
    }
}

#[test]
fn test_conditional_headers_pass_through_verbatim() {
    init();
    let req = build(
        CompleteMultipartUpload::new("b", "k", "u")
            .if_match("\"etag-value\"")
            .if_none_match("*"),
    );
    assert_eq!(req.headers.get(IF_MATCH), Some(&"\"etag-value\"".to_string()));
    assert_eq!(req.headers.get(IF_NONE_MATCH), Some(&"*".to_string()));
}

#[test]
fn test_expected_bucket_owner_header() {
    init();
    let req = build(
        CompleteMultipartUpload::new("b", "k", "u").expected_bucket_owner("123456789012"),
    );
    assert_eq!(
        req.headers.get(X_AMZ_EXPECTED_BUCKET_OWNER),
        Some(&"123456789012".to_string())
    );
}

#[test]
fn test_sse_customer_fields_are_independent() {
    init();
    let req = build(CompleteMultipartUpload::new("b", "k", "u").sse_customer_algorithm("AES256"));
    assert_eq!(
        req.headers.get(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM),
        Some(&"AES256".to_string())
    );
    assert!(
        req.headers
            .get(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY)
            .is_none()
    );
    assert!(
        req.headers
            .get(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5)
            .is_none()
    );
}

#[test]
fn test_sse_customer_key_helper_sets_all_three_headers() {
    init();
    let raw_key = "01234567890123456789012345678901";
    let sse = SseCustomerKey::new(raw_key);
    let req = build(CompleteMultipartUpload::new("b", "k", "u").sse(&sse));
    assert_eq!(
        req.headers.get(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM),
        Some(&"AES256".to_string())
    );
    assert_eq!(
        req.headers.get(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY),
        Some(&b64encode(raw_key))
    );
    assert_eq!(
        req.headers.get(X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5),
        Some(&md5sum_hash(raw_key.as_bytes()))
    );
}

#[test]
fn test_body_is_empty_without_parts_list() {
    init();
    let req = build(CompleteMultipartUpload::new("b", "k", "u"));
    assert_eq!(req.body.len(), 0);
}

#[test]
fn test_body_preserves_caller_part_order() {
    init();
    let req = build(
        CompleteMultipartUpload::new("b", "k", "u")
            .multipart_upload(parts(&[(1, "etag1"), (3, "etag3"), (2, "etag2")])),
    );
    let expected = "<CompleteMultipartUpload xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
                    <Part><PartNumber>1</PartNumber><ETag>etag1</ETag></Part>\
                    <Part><PartNumber>3</PartNumber><ETag>etag3</ETag></Part>\
                    <Part><PartNumber>2</PartNumber><ETag>etag2</ETag></Part>\
                    </CompleteMultipartUpload>";
    assert_eq!(req.body.as_ref(), expected.as_bytes());
}

#[test]
fn test_etag_escaping_round_trips_through_xml_parser() {
    init();
    let etag = "abc&def<ghi>jkl";
    let req = build(
        CompleteMultipartUpload::new("b", "k", "u").multipart_upload(parts(&[(7, etag)])),
    );

    let root = xmltree::Element::parse(req.body.as_ref()).expect("body must be well-formed");
    assert_eq!(root.name, "CompleteMultipartUpload");
    let part = root.get_child("Part").expect("<Part> missing");
    assert_eq!(
        part.get_child("PartNumber").unwrap().get_text().unwrap(),
        "7"
    );
    assert_eq!(part.get_child("ETag").unwrap().get_text().unwrap(), etag);
}

#[test]
fn test_unrepresentable_etag_fails_serialization() {
    init();
    let err = CompleteMultipartUpload::new("b", "k", "u")
        .multipart_upload(parts(&[(1, "bad\u{0}etag")]))
        .to_s3request()
        .unwrap_err();
    assert!(matches!(err, ValidationErr::XmlError(_)));
}

#[test]
fn test_extra_headers_and_query_params_cannot_clobber_operation_keys() {
    init();
    let mut extra_headers = Multimap::new();
    extra_headers.add(CONTENT_TYPE, "text/plain");
    extra_headers.add("x-custom-header", "custom");

    let mut extra_query = Multimap::new();
    extra_query.add("uploadId", "spoofed");
    extra_query.add("trace", "1");

    let req = build(
        CompleteMultipartUpload::new("b", "k", "u")
            .extra_headers(Some(extra_headers))
            .extra_query_params(Some(extra_query)),
    );

    assert_eq!(
        req.headers.get_vec(CONTENT_TYPE),
        Some(&vec!["application/xml".to_string()])
    );
    assert_eq!(
        req.headers.get("x-custom-header"),
        Some(&"custom".to_string())
    );
    assert_eq!(
        req.query_params.get_vec("uploadId"),
        Some(&vec!["u".to_string()])
    );
    assert_eq!(req.uri(), "/b/k?trace=1&uploadId=u");
}

#[test]
fn test_build_is_idempotent() {
    init();
    let builder = CompleteMultipartUpload::new("bucket", "dir/object name", "upload id")
        .multipart_upload(parts(&[(2, "e2"), (1, "e1")]))
        .checksum_sha256("digest")
        .request_payer("requester")
        .if_none_match("*");

    let first = build(builder.clone());
    let second = build(builder);

    assert_eq!(first.method, second.method);
    assert_eq!(first.uri(), second.uri());
    assert_eq!(first.body, second.body);

    let sort = |m: &Multimap| {
        let mut pairs: Vec<(String, String)> = m
            .iter_all()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.clone(), v.clone())))
            .collect();
        pairs.sort();
        pairs
    };
    assert_eq!(sort(&first.headers), sort(&second.headers));
}
