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

use crate::admin::types::{AdminRequest, Usage};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [get_usage()](crate::admin::client::RadosClient::get_usage) API
#[derive(Clone, Debug)]
pub struct GetUsageResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    usage: Usage,
}

impl_has_admin_fields!(GetUsageResponse);
impl_from_admin_json_response!(GetUsageResponse => usage);

impl GetUsageResponse {
    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    pub fn into_usage(self) -> Usage {
        self.usage
    }
}

/// Response of [delete_usage()](crate::admin::client::RadosClient::delete_usage) API
#[derive(Clone, Debug)]
pub struct DeleteUsageResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(DeleteUsageResponse);
impl_from_admin_response!(DeleteUsageResponse);
