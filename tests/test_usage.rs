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

use chrono::{TimeZone, Utc};
use radosgw::admin::config::UsageConfig;
use radosgw::admin::types::AdminApi;
use radosgw_common::TestContext;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn default_usage_hides_entries_and_summary() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/usage"))
        .and(query_param("show-entries", "False"))
        .and(query_param("show-summary", "False"))
        .and(query_param("format", "json"))
        .and(query_param_is_missing("uid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .get_usage(UsageConfig::default())
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.usage().entries.is_empty());
    assert!(resp.usage().summary.is_empty());
}

#[tokio::test]
async fn usage_range_and_summary() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/admin/usage"))
        .and(query_param("uid", "alice"))
        .and(query_param("start", "2024-03-01 00:00:00"))
        .and(query_param("end", "2024-04-01 12:30:00"))
        .and(query_param_is_missing("show-summary"))
        .and(query_param("show-entries", "False"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [],
            "summary": [{
                "user": "alice",
                "categories": [{
                    "category": "get_obj",
                    "bytes_sent": 100,
                    "bytes_received": 0,
                    "ops": 2,
                    "successful_ops": 2
                }],
                "total": {"bytes_sent": 100, "bytes_received": 0, "ops": 2, "successful_ops": 2}
            }]
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let config = UsageConfig::builder()
        .uid("alice")
        .start(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        .end(Utc.with_ymd_and_hms(2024, 4, 1, 12, 30, 0).unwrap())
        .show_summary(true)
        .build();
    let usage = ctx
        .client
        .get_usage(config)
        .build()
        .send()
        .await
        .unwrap()
        .into_usage();
    assert_eq!(usage.summary.len(), 1);
    assert_eq!(usage.summary[0].user, "alice");
    assert_eq!(usage.summary[0].categories[0].category, "get_obj");
    assert_eq!(usage.summary[0].total.ops, 2);
}

#[tokio::test]
async fn delete_usage_for_everyone() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/usage"))
        .and(query_param("remove-all", "True"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .delete_usage(UsageConfig::builder().remove_all(true).build())
        .build()
        .send()
        .await
        .unwrap();
}
