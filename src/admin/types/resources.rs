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

//! Resource models returned by the admin API
//!
//! Every field defaults when missing from the reply; gateway versions differ in
//! which fields they send.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// S3 key pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    pub user: String,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftKey {
    pub user: String,
    pub secret_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubUser {
    pub id: String,
    pub permissions: String,
}

/// Administrative capability, e.g. `users=read`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capability {
    #[serde(rename = "type")]
    pub cap_type: String,
    pub perm: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    pub enabled: bool,
    pub check_on_raw: bool,
    /// Bytes; negative when unlimited
    pub max_size: i64,
    pub max_size_kb: i64,
    pub max_objects: i64,
}

/// User and bucket quotas of one user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quotas {
    pub bucket_quota: Quota,
    pub user_quota: Quota,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    /// 1 when suspended
    pub suspended: i32,
    pub max_buckets: i64,
    pub subusers: Vec<SubUser>,
    pub keys: Vec<Key>,
    pub swift_keys: Vec<SwiftKey>,
    pub caps: Vec<Capability>,
    pub op_mask: String,
    pub default_placement: String,
    pub placement_tags: Vec<String>,
    pub bucket_quota: Quota,
    pub user_quota: Quota,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl User {
    pub fn is_suspended(&self) -> bool {
        self.suspended != 0
    }
}

/// Space used by one category of a bucket (e.g. `rgw.main`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketUsage {
    pub size: u64,
    pub size_actual: u64,
    pub size_utilized: u64,
    pub size_kb: u64,
    pub size_kb_actual: u64,
    pub size_kb_utilized: u64,
    pub num_objects: u64,
}

/// Bucket statistics as returned with `stats=True`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketStats {
    pub bucket: String,
    pub pool: String,
    pub index_pool: String,
    pub id: String,
    pub marker: String,
    pub owner: String,
    pub ver: String,
    pub master_ver: String,
    pub mtime: String,
    pub max_marker: String,
    pub usage: BTreeMap<String, BucketUsage>,
    pub bucket_quota: Quota,
}

/// One entry of a bucket listing. Listings without statistics carry only the
/// name; a statistics-only reply has an empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BucketStats>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub id: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclUser {
    pub user: String,
    pub acl: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclGroup {
    pub group: i64,
    pub acl: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantType {
    #[serde(rename = "type")]
    pub kind: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    pub flags: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grant {
    #[serde(rename = "type")]
    pub grant_type: GrantType,
    pub id: String,
    pub email: String,
    pub permission: Permission,
    pub name: String,
    pub group: i64,
    pub url_spec: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantEntry {
    pub id: String,
    pub grant: Grant,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Acl {
    pub acl_user_map: Vec<AclUser>,
    pub acl_group_map: Vec<AclGroup>,
    pub grant_map: Vec<GrantEntry>,
}

/// Access control policy of a bucket or object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub acl: Acl,
    pub owner: Owner,
}

/// Traffic counters of one category (e.g. `get_obj`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageCategory {
    pub category: String,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub ops: u64,
    pub successful_ops: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageBucket {
    pub bucket: String,
    pub time: String,
    pub epoch: i64,
    pub categories: Vec<UsageCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageEntry {
    pub owner: String,
    pub buckets: Vec<UsageBucket>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageTotal {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub ops: u64,
    pub successful_ops: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSummary {
    pub user: String,
    pub categories: Vec<UsageCategory>,
    pub total: UsageTotal,
}

/// Bandwidth usage report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub entries: Vec<UsageEntry>,
    pub summary: Vec<UsageSummary>,
}
