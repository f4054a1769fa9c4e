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

//! Canned gateway replies.

use serde_json::{Value, json};

pub fn user(uid: &str) -> Value {
    json!({
        "user_id": uid,
        "display_name": format!("{uid} display"),
        "email": "",
        "suspended": 0,
        "max_buckets": 1000,
        "subusers": [],
        "keys": [{
            "user": uid,
            "access_key": format!("{uid}-AK"),
            "secret_key": format!("{uid}-SK")
        }],
        "swift_keys": [],
        "caps": [{"type": "usage", "perm": "read"}]
    })
}

pub fn bucket_stats(name: &str, owner: &str) -> Value {
    json!({
        "bucket": name,
        "pool": "default.rgw.buckets.data",
        "index_pool": "default.rgw.buckets.index",
        "id": format!("{name}.1"),
        "marker": format!("{name}.1"),
        "owner": owner,
        "ver": "0#1",
        "master_ver": "0#0",
        "mtime": "2024-01-01 00:00:00.000000Z",
        "max_marker": "0#",
        "usage": {
            "rgw.main": {
                "size_kb": 4,
                "size_kb_actual": 4,
                "num_objects": 1
            }
        },
        "bucket_quota": {
            "enabled": false,
            "max_size_kb": -1,
            "max_objects": -1
        }
    })
}

pub fn error(code: &str) -> Value {
    json!({"Code": code, "RequestId": "tx-test", "HostId": "host-test"})
}
