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

use crate::admin::types::{AdminRequest, SubUser};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [create_subuser()](crate::admin::client::RadosClient::create_subuser) API
#[derive(Clone, Debug)]
pub struct CreateSubUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    subusers: Vec<SubUser>,
}

/// Response of [update_subuser()](crate::admin::client::RadosClient::update_subuser) API
#[derive(Clone, Debug)]
pub struct UpdateSubUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    subusers: Vec<SubUser>,
}

impl_has_admin_fields!(CreateSubUserResponse, UpdateSubUserResponse);
impl_from_admin_json_response!(
    CreateSubUserResponse => subusers,
    UpdateSubUserResponse => subusers,
);

impl CreateSubUserResponse {
    /// All subusers of the user after the change.
    pub fn subusers(&self) -> &[SubUser] {
        &self.subusers
    }
}

impl UpdateSubUserResponse {
    pub fn subusers(&self) -> &[SubUser] {
        &self.subusers
    }
}

/// Response of [remove_subuser()](crate::admin::client::RadosClient::remove_subuser) API
#[derive(Clone, Debug)]
pub struct RemoveSubUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(RemoveSubUserResponse);
impl_from_admin_response!(RemoveSubUserResponse);
