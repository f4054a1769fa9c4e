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
    CreateSubUser, CreateSubUserBldr, RemoveSubUser, RemoveSubUserBldr, UpdateSubUser,
    UpdateSubUserBldr,
};
use crate::admin::client::RadosClient;
use crate::admin::config::SubUserConfig;

impl RadosClient {
    /// Creates a [`CreateSubUser`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::config::SubUserConfig;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let config = SubUserConfig::builder()
    ///         .uid("alice")
    ///         .subuser("alice:swift")
    ///         .access("full")
    ///         .build();
    ///     let resp = client.create_subuser(config).build().send().await.unwrap();
    ///     for subuser in resp.subusers() {
    ///         println!("{}: {}", subuser.id, subuser.permissions);
    ///     }
    /// }
    /// ```
    pub fn create_subuser(&self, config: SubUserConfig) -> CreateSubUserBldr {
        CreateSubUser::builder().client(self.clone()).config(config)
    }

    pub fn update_subuser(&self, config: SubUserConfig) -> UpdateSubUserBldr {
        UpdateSubUser::builder().client(self.clone()).config(config)
    }

    pub fn remove_subuser(&self, config: SubUserConfig) -> RemoveSubUserBldr {
        RemoveSubUser::builder().client(self.clone()).config(config)
    }
}
