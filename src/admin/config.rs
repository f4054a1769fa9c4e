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

//! Per-operation configuration values
//!
//! Each type lists its fields with a query parameter name and an encoding
//! rule (see [`crate::admin::encoding`]). Fields left at their default are
//! omitted from the request, with the exception of the `show_*` flags of
//! [`UsageConfig`].

use crate::admin::encoding::{
    BOOL_IF_NOT_NIL, ConfigField, FieldValue, IF_BOOL_IS_FALSE, IF_BOOL_IS_TRUE,
    IF_STRING_IS_NOT_EMPTY, IF_TIME_IS_NOT_NIL_CEPH, ITOA_IF_NOT_NIL, QueryConfig,
};
use crate::admin::utils::UtcTime;
use typed_builder::TypedBuilder;

fn string_field<'a>(param: &'static str, value: &'a str) -> ConfigField<'a> {
    ConfigField::new(param, IF_STRING_IS_NOT_EMPTY, FieldValue::Str(value))
}

fn flag_field(param: &'static str, value: bool) -> ConfigField<'static> {
    ConfigField::new(param, IF_BOOL_IS_TRUE, FieldValue::Bool(value))
}

/// Bandwidth usage query (`/usage`).
#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct UsageConfig {
    /// User to report on; all users when empty
    #[builder(default, setter(into))]
    pub uid: String,
    #[builder(default, setter(strip_option))]
    pub start: Option<UtcTime>,
    /// Exclusive end of the range
    #[builder(default, setter(strip_option))]
    pub end: Option<UtcTime>,
    /// When false the request carries `show-entries=False`
    #[builder(default)]
    pub show_entries: bool,
    /// When false the request carries `show-summary=False`
    #[builder(default)]
    pub show_summary: bool,
    /// Acknowledges removal of usage data of every user
    #[builder(default)]
    pub remove_all: bool,
}

impl QueryConfig for UsageConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("uid", &self.uid),
            ConfigField::new("start", IF_TIME_IS_NOT_NIL_CEPH, FieldValue::OptTime(self.start.as_ref())),
            ConfigField::new("end", IF_TIME_IS_NOT_NIL_CEPH, FieldValue::OptTime(self.end.as_ref())),
            ConfigField::new("show-entries", IF_BOOL_IS_FALSE, FieldValue::Bool(self.show_entries)),
            ConfigField::new("show-summary", IF_BOOL_IS_FALSE, FieldValue::Bool(self.show_summary)),
            flag_field("remove-all", self.remove_all),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct UserConfig {
    #[builder(default, setter(into))]
    pub uid: String,
    #[builder(default, setter(into))]
    pub display_name: String,
    #[builder(default, setter(into))]
    pub email: String,
    /// `s3` (default) or `swift`
    #[builder(default, setter(into))]
    pub key_type: String,
    #[builder(default, setter(into))]
    pub access_key: String,
    #[builder(default, setter(into))]
    pub secret_key: String,
    /// Capabilities in the `type=perm;type=perm` form
    #[builder(default, setter(into))]
    pub user_caps: String,
    #[builder(default, setter(strip_option))]
    pub max_buckets: Option<i64>,
    #[builder(default)]
    pub generate_key: bool,
    #[builder(default, setter(strip_option))]
    pub suspended: Option<bool>,
    /// Also remove the user's buckets and objects
    #[builder(default)]
    pub purge_data: bool,
}

impl QueryConfig for UserConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("uid", &self.uid),
            string_field("display-name", &self.display_name),
            string_field("email", &self.email),
            string_field("key-type", &self.key_type),
            string_field("access-key", &self.access_key),
            string_field("secret-key", &self.secret_key),
            string_field("user-caps", &self.user_caps),
            ConfigField::new("max-buckets", ITOA_IF_NOT_NIL, FieldValue::OptInt(self.max_buckets)),
            flag_field("generate-key", self.generate_key),
            ConfigField::new("suspended", BOOL_IF_NOT_NIL, FieldValue::OptBool(self.suspended)),
            flag_field("purge-data", self.purge_data),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct SubUserConfig {
    #[builder(default, setter(into))]
    pub uid: String,
    #[builder(default, setter(into))]
    pub subuser: String,
    /// `swift` (default) or `s3`
    #[builder(default, setter(into))]
    pub key_type: String,
    /// One of `read`, `write`, `readwrite`, `full`
    #[builder(default, setter(into))]
    pub access: String,
    #[builder(default, setter(into))]
    pub secret: String,
    #[builder(default, setter(into))]
    pub secret_key: String,
    #[builder(default)]
    pub generate_secret: bool,
    #[builder(default)]
    pub purge_keys: bool,
}

impl QueryConfig for SubUserConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("uid", &self.uid),
            string_field("subuser", &self.subuser),
            string_field("key-type", &self.key_type),
            string_field("access", &self.access),
            string_field("secret", &self.secret),
            string_field("secret-key", &self.secret_key),
            flag_field("generate-secret", self.generate_secret),
            flag_field("purge-keys", self.purge_keys),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct KeyConfig {
    #[builder(default, setter(into))]
    pub uid: String,
    #[builder(default, setter(into))]
    pub subuser: String,
    #[builder(default, setter(into))]
    pub key_type: String,
    #[builder(default, setter(into))]
    pub access_key: String,
    #[builder(default, setter(into))]
    pub secret_key: String,
    #[builder(default)]
    pub generate_secret: bool,
}

impl QueryConfig for KeyConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("uid", &self.uid),
            string_field("subuser", &self.subuser),
            string_field("key-type", &self.key_type),
            string_field("access-key", &self.access_key),
            string_field("secret-key", &self.secret_key),
            flag_field("generate-secret", self.generate_secret),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct BucketConfig {
    #[builder(default, setter(into))]
    pub bucket: String,
    #[builder(default, setter(into))]
    pub uid: String,
    /// Return bucket statistics
    #[builder(default)]
    pub stats: bool,
    /// Check multipart object accounting
    #[builder(default)]
    pub check_objects: bool,
    /// Also fix the bucket index when checking
    #[builder(default)]
    pub fix: bool,
    /// Remove the bucket's objects before deleting it
    #[builder(default)]
    pub purge_objects: bool,
    #[builder(default, setter(into))]
    pub object: String,
}

impl QueryConfig for BucketConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("bucket", &self.bucket),
            string_field("uid", &self.uid),
            flag_field("stats", self.stats),
            flag_field("check-objects", self.check_objects),
            flag_field("fix", self.fix),
            flag_field("purge-objects", self.purge_objects),
            string_field("object", &self.object),
        ]
    }
}

/// Quota settings. Values are passed to the gateway as given; a negative
/// limit disables it.
#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct QuotaConfig {
    #[builder(default, setter(into))]
    pub uid: String,
    #[builder(default, setter(into))]
    pub bucket: String,
    #[builder(default, setter(into))]
    pub max_objects: String,
    #[builder(default, setter(into))]
    pub max_size_kb: String,
    #[builder(default, setter(into))]
    pub enabled: String,
    /// `user` or `bucket`
    #[builder(default, setter(into))]
    pub quota_type: String,
}

impl QueryConfig for QuotaConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("uid", &self.uid),
            string_field("bucket", &self.bucket),
            string_field("max-objects", &self.max_objects),
            string_field("max-size-kb", &self.max_size_kb),
            string_field("enabled", &self.enabled),
            string_field("quota-type", &self.quota_type),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct CapConfig {
    #[builder(default, setter(into))]
    pub uid: String,
    /// Capabilities in the `type=perm;type=perm` form
    #[builder(default, setter(into))]
    pub user_caps: String,
}

impl QueryConfig for CapConfig {
    fn fields(&self) -> Vec<ConfigField<'_>> {
        vec![
            string_field("uid", &self.uid),
            string_field("user-caps", &self.user_caps),
        ]
    }
}
