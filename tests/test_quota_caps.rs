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

use radosgw::admin::config::{CapConfig, QuotaConfig};
use radosgw::admin::types::AdminApi;
use radosgw_common::TestContext;
use radosgw_common::matchers::SubresourceMarker;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn get_quotas() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/user"))
        .and(SubresourceMarker("quota"))
        .and(query_param("uid", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bucket_quota": {"enabled": false, "max_size_kb": -1, "max_objects": -1},
            "user_quota": {"enabled": true, "max_size_kb": 1024, "max_objects": 100}
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_quotas(QuotaConfig::builder().uid("alice").build())
        .build()
        .send()
        .await
        .unwrap();
    let quotas = resp.quotas();
    assert!(!quotas.bucket_quota.enabled);
    assert!(quotas.user_quota.enabled);
    assert_eq!(quotas.user_quota.max_size_kb, 1024);
    assert_eq!(quotas.user_quota.max_objects, 100);
}

#[tokio::test]
async fn update_user_quota() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path("/admin/user"))
        .and(SubresourceMarker("quota"))
        .and(query_param("quota-type", "user"))
        .and(query_param("max-objects", "100"))
        .and(query_param("enabled", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let config = QuotaConfig::builder()
        .uid("alice")
        .quota_type("user")
        .max_objects("100")
        .enabled("true")
        .build();
    ctx.client.update_quota(config).build().send().await.unwrap();
}

#[tokio::test]
async fn update_bucket_quota() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path("/admin/bucket"))
        .and(SubresourceMarker("quota"))
        .and(query_param("bucket", "b1"))
        .and(query_param("uid", "alice"))
        .and(query_param("max-size-kb", "2048"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let config = QuotaConfig::builder()
        .uid("alice")
        .bucket("b1")
        .max_size_kb("2048")
        .build();
    ctx.client.update_bucket_quota(config).build().send().await.unwrap();
}

#[tokio::test]
async fn add_and_remove_capabilities() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path("/admin/user"))
        .and(SubresourceMarker("caps"))
        .and(query_param("user-caps", "usage=read;users=*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "usage", "perm": "read"},
            {"type": "users", "perm": "*"}
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/user"))
        .and(SubresourceMarker("caps"))
        .and(query_param("user-caps", "users=*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "usage", "perm": "read"}
        ])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .add_capability(
            CapConfig::builder()
                .uid("alice")
                .user_caps("usage=read;users=*")
                .build(),
        )
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.caps().len(), 2);
    assert_eq!(resp.caps()[1].cap_type, "users");

    let resp = ctx
        .client
        .del_capability(CapConfig::builder().uid("alice").user_caps("users=*").build())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.caps().len(), 1);
}

#[tokio::test]
async fn capability_requires_caps() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .add_capability(CapConfig::builder().uid("alice").build())
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "validation error: UserCaps field is required");
}
