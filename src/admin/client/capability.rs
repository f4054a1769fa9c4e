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

use crate::admin::builders::{AddCapability, AddCapabilityBldr, DelCapability, DelCapabilityBldr};
use crate::admin::client::RadosClient;
use crate::admin::config::CapConfig;

impl RadosClient {
    /// Creates an [`AddCapability`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::config::CapConfig;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let config = CapConfig::builder().uid("alice").user_caps("usage=read").build();
    ///     let resp = client.add_capability(config).build().send().await.unwrap();
    ///     for cap in resp.caps() {
    ///         println!("{}={}", cap.cap_type, cap.perm);
    ///     }
    /// }
    /// ```
    pub fn add_capability(&self, config: CapConfig) -> AddCapabilityBldr {
        AddCapability::builder().client(self.clone()).config(config)
    }

    pub fn del_capability(&self, config: CapConfig) -> DelCapabilityBldr {
        DelCapability::builder().client(self.clone()).config(config)
    }
}
