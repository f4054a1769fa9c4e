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

use crate::admin::builders::{
    GetQuotas, GetQuotasBldr, UpdateBucketQuota, UpdateBucketQuotaBldr, UpdateQuota,
    UpdateQuotaBldr,
};
use crate::admin::client::RadosClient;
use crate::admin::config::QuotaConfig;

impl RadosClient {
    /// Creates a [`GetQuotas`] request builder, returning both the bucket and
    /// user quota of `uid`.
    pub fn get_quotas(&self, config: QuotaConfig) -> GetQuotasBldr {
        GetQuotas::builder().client(self.clone()).config(config)
    }

    /// Creates an [`UpdateQuota`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::config::QuotaConfig;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let config = QuotaConfig::builder()
    ///         .uid("alice")
    ///         .quota_type("user")
    ///         .max_size_kb("1048576")
    ///         .enabled("true")
    ///         .build();
    ///     client.update_quota(config).build().send().await.unwrap();
    /// }
    /// ```
    pub fn update_quota(&self, config: QuotaConfig) -> UpdateQuotaBldr {
        UpdateQuota::builder().client(self.clone()).config(config)
    }

    /// Creates an [`UpdateBucketQuota`] request builder for a single bucket.
    pub fn update_bucket_quota(&self, config: QuotaConfig) -> UpdateBucketQuotaBldr {
        UpdateBucketQuota::builder().client(self.clone()).config(config)
    }
}
