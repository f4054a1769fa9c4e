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

use crate::admin::types::{AdminRequest, Capability};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [add_capability()](crate::admin::client::RadosClient::add_capability) API
#[derive(Clone, Debug)]
pub struct AddCapabilityResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    caps: Vec<Capability>,
}

/// Response of [del_capability()](crate::admin::client::RadosClient::del_capability) API
#[derive(Clone, Debug)]
pub struct DelCapabilityResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    caps: Vec<Capability>,
}

impl_has_admin_fields!(AddCapabilityResponse, DelCapabilityResponse);
impl_from_admin_json_response!(
    AddCapabilityResponse => caps,
    DelCapabilityResponse => caps,
);

impl AddCapabilityResponse {
    /// Capabilities of the user after the change.
    pub fn caps(&self) -> &[Capability] {
        &self.caps
    }
}

impl DelCapabilityResponse {
    /// Capabilities of the user after the change.
    pub fn caps(&self) -> &[Capability] {
        &self.caps
    }
}
