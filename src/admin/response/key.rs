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

use crate::admin::types::{AdminRequest, Key};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [create_key()](crate::admin::client::RadosClient::create_key) API
#[derive(Clone, Debug)]
pub struct CreateKeyResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    keys: Vec<Key>,
}

impl_has_admin_fields!(CreateKeyResponse);
impl_from_admin_json_response!(CreateKeyResponse => keys);

impl CreateKeyResponse {
    /// All keys of the same type as the one created.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }
}

/// Response of [remove_key()](crate::admin::client::RadosClient::remove_key) API
#[derive(Clone, Debug)]
pub struct RemoveKeyResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(RemoveKeyResponse);
impl_from_admin_response!(RemoveKeyResponse);
