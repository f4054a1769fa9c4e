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

use crate::admin::builders::{CreateKey, CreateKeyBldr, RemoveKey, RemoveKeyBldr};
use crate::admin::client::RadosClient;
use crate::admin::config::KeyConfig;

impl RadosClient {
    /// Creates a [`CreateKey`] request builder.
    ///
    /// The response lists every key of the user, not only the new one.
    pub fn create_key(&self, config: KeyConfig) -> CreateKeyBldr {
        CreateKey::builder().client(self.clone()).config(config)
    }

    /// Creates a [`RemoveKey`] request builder. The key is found by
    /// `access_key` alone.
    pub fn remove_key(&self, config: KeyConfig) -> RemoveKeyBldr {
        RemoveKey::builder().client(self.clone()).config(config)
    }
}
