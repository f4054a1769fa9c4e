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

use crate::admin::builders::{DeleteUsage, DeleteUsageBldr, GetUsage, GetUsageBldr};
use crate::admin::client::RadosClient;
use crate::admin::config::UsageConfig;

impl RadosClient {
    /// Creates a [`GetUsage`] request builder.
    ///
    /// To execute the request, call [`GetUsage::send()`](crate::admin::types::AdminApi::send),
    /// which returns a [`Result`] containing a [`GetUsageResponse`](crate::admin::response::GetUsageResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::config::UsageConfig;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let config = UsageConfig::builder().show_summary(true).build();
    ///     let resp = client.get_usage(config).build().send().await.unwrap();
    ///     for summary in &resp.usage().summary {
    ///         println!("{}: {} ops", summary.user, summary.total.ops);
    ///     }
    /// }
    /// ```
    pub fn get_usage(&self, config: UsageConfig) -> GetUsageBldr {
        GetUsage::builder().client(self.clone()).config(config)
    }

    /// Creates a [`DeleteUsage`] request builder. Removing usage for every
    /// user requires [`UsageConfig::remove_all`].
    pub fn delete_usage(&self, config: UsageConfig) -> DeleteUsageBldr {
        DeleteUsage::builder().client(self.clone()).config(config)
    }
}
