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

use crate::admin::types::{AdminRequest, Quotas};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [get_quotas()](crate::admin::client::RadosClient::get_quotas) API
#[derive(Clone, Debug)]
pub struct GetQuotasResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    quotas: Quotas,
}

impl_has_admin_fields!(GetQuotasResponse);
impl_from_admin_json_response!(GetQuotasResponse => quotas);

impl GetQuotasResponse {
    pub fn quotas(&self) -> &Quotas {
        &self.quotas
    }
}

/// Response of [update_quota()](crate::admin::client::RadosClient::update_quota) API
#[derive(Clone, Debug)]
pub struct UpdateQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of [update_bucket_quota()](crate::admin::client::RadosClient::update_bucket_quota) API
#[derive(Clone, Debug)]
pub struct UpdateBucketQuotaResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(UpdateQuotaResponse, UpdateBucketQuotaResponse);
impl_from_admin_response!(UpdateQuotaResponse, UpdateBucketQuotaResponse);
