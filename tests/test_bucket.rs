// Rust client for the Ceph RADOS Gateway Admin Ops API
// Copyright 2026 radosgw-rs contributors
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

use radosgw::admin::config::BucketConfig;
use radosgw::admin::error::Error;
use radosgw::admin::response::{CheckBucketResponse, GetBucketResponse, HasAdminFields};
use radosgw::admin::types::AdminApi;
use radosgw_common::TestContext;
use radosgw_common::fixtures;
use radosgw_common::matchers::{ParamCount, SubresourceMarker};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn bucket_names_only() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .and(query_param("uid", "alice"))
        .and(query_param_is_missing("stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(["b1", "b2"]))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp: GetBucketResponse = ctx
        .client
        .get_bucket(BucketConfig::builder().uid("alice").build())
        .build()
        .send()
        .await
        .unwrap();
    let names: Vec<&str> = resp.buckets().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["b1", "b2"]);
    assert!(resp.buckets().iter().all(|b| b.stats.is_none()));
}

#[tokio::test]
async fn single_bucket_name() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(["b1"]))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_bucket(BucketConfig::builder().uid("alice").build())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.buckets().len(), 1);
    assert_eq!(resp.buckets()[0].name, "b1");
}

#[tokio::test]
async fn bucket_stats_listing() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .and(query_param("stats", "True"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            fixtures::bucket_stats("b1", "alice"),
            fixtures::bucket_stats("b2", "alice"),
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_bucket(BucketConfig::builder().stats(true).build())
        .build()
        .send()
        .await
        .unwrap();
    let buckets = resp.into_buckets();
    assert_eq!(buckets.len(), 2);
    let stats = buckets[1].stats.as_ref().unwrap();
    assert_eq!(stats.bucket, "b2");
    assert_eq!(stats.owner, "alice");
    assert_eq!(stats.usage["rgw.main"].num_objects, 1);
    assert_eq!(stats.bucket_quota.max_objects, -1);
}

#[tokio::test]
async fn single_bucket_stats_object() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .and(query_param("bucket", "b1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::bucket_stats("b1", "alice")),
        )
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_bucket(BucketConfig::builder().bucket("b1").stats(true).build())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.buckets().len(), 1);
    assert_eq!(resp.buckets()[0].name, "");
    assert_eq!(resp.buckets()[0].stats.as_ref().unwrap().bucket, "b1");
}

#[tokio::test]
async fn empty_listing_yields_one_empty_record() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_bucket(BucketConfig::default())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.buckets().len(), 1);
    assert_eq!(resp.buckets()[0].name, "");
    assert!(resp.buckets()[0].stats.is_none());
}

#[tokio::test]
async fn malformed_listing_is_a_decode_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([42])))
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .get_bucket(BucketConfig::default())
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn check_bucket_returns_report_text() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .and(SubresourceMarker("index"))
        .and(query_param("bucket", "b1"))
        .and(query_param("fix", "True"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]\n{}"))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp: CheckBucketResponse = ctx
        .client
        .check_bucket(BucketConfig::builder().bucket("b1").fix(true).build())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.report(), "[]\n{}");
    assert_eq!(resp.request().subresource(), Some("index"));
}

#[tokio::test]
async fn remove_object_uses_marker() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/bucket"))
        .and(SubresourceMarker("object"))
        .and(query_param("bucket", "b1"))
        .and(query_param("object", "photos/cat.jpg"))
        .and(ParamCount("object", 2))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .remove_object(
            BucketConfig::builder()
                .bucket("b1")
                .object("photos/cat.jpg")
                .build(),
        )
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn remove_and_unlink_bucket() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/bucket"))
        .and(query_param("bucket", "b1"))
        .and(query_param("purge-objects", "True"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/bucket"))
        .and(query_param("bucket", "b2"))
        .and(query_param("uid", "alice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .remove_bucket(BucketConfig::builder().bucket("b1").purge_objects(true).build())
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .unlink_bucket(BucketConfig::builder().bucket("b2").uid("alice").build())
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn bucket_policy_is_decoded() {
    let ctx = TestContext::new().await;
    let policy = json!({
        "acl": {
            "acl_user_map": [{"user": "alice", "acl": 15}],
            "acl_group_map": [],
            "grant_map": [{
                "id": "alice",
                "grant": {
                    "type": {"type": 0},
                    "id": "alice",
                    "email": "",
                    "permission": {"flags": 15},
                    "name": "alice display",
                    "group": 0,
                    "url_spec": ""
                }
            }]
        },
        "owner": {"id": "alice", "display_name": "alice display"}
    });
    Mock::given(method("GET"))
        .and(path("/admin/bucket"))
        .and(SubresourceMarker("policy"))
        .and(query_param("bucket", "b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(policy))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_bucket_policy(BucketConfig::builder().bucket("b1").build())
        .build()
        .send()
        .await
        .unwrap();
    let policy = resp.policy();
    assert_eq!(policy.owner.id, "alice");
    assert_eq!(policy.acl.grant_map.len(), 1);
    assert_eq!(policy.acl.grant_map[0].grant.permission.flags, 15);
}

#[tokio::test]
async fn object_policy_requires_object() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .get_object_policy(BucketConfig::builder().bucket("b1").build())
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "validation error: Object field is required");
}
