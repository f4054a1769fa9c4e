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

use crate::admin::bucket_decoder::decode_buckets;
use crate::admin::error::Error;
use crate::admin::types::{AdminRequest, Bucket, FromAdminResponse, Policy, RawResponse};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [get_bucket()](crate::admin::client::RadosClient::get_bucket) API
#[derive(Clone, Debug)]
pub struct GetBucketResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    buckets: Vec<Bucket>,
}

impl_has_admin_fields!(GetBucketResponse);

impl FromAdminResponse for GetBucketResponse {
    fn from_admin_response(
        request: AdminRequest,
        response: Result<RawResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let buckets = decode_buckets(&resp.body)?;
        Ok(Self {
            request,
            headers: resp.headers,
            body: resp.body,
            buckets,
        })
    }
}

impl GetBucketResponse {
    /// Buckets in reply order. With `stats` set, each carries its statistics.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}

/// Response of [check_bucket()](crate::admin::client::RadosClient::check_bucket) API
#[derive(Clone, Debug)]
pub struct CheckBucketResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(CheckBucketResponse);
impl_from_admin_response!(CheckBucketResponse);

impl CheckBucketResponse {
    /// The index check report, as returned by the gateway.
    pub fn report(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Response of [get_bucket_policy()](crate::admin::client::RadosClient::get_bucket_policy) API
#[derive(Clone, Debug)]
pub struct GetBucketPolicyResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    policy: Policy,
}

/// Response of [get_object_policy()](crate::admin::client::RadosClient::get_object_policy) API
#[derive(Clone, Debug)]
pub struct GetObjectPolicyResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    policy: Policy,
}

impl_has_admin_fields!(GetBucketPolicyResponse, GetObjectPolicyResponse);
impl_from_admin_json_response!(
    GetBucketPolicyResponse => policy,
    GetObjectPolicyResponse => policy,
);

impl GetBucketPolicyResponse {
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl GetObjectPolicyResponse {
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

/// Response of [remove_bucket()](crate::admin::client::RadosClient::remove_bucket) API
#[derive(Clone, Debug)]
pub struct RemoveBucketResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of [unlink_bucket()](crate::admin::client::RadosClient::unlink_bucket) API
#[derive(Clone, Debug)]
pub struct UnlinkBucketResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of [remove_object()](crate::admin::client::RadosClient::remove_object) API
#[derive(Clone, Debug)]
pub struct RemoveObjectResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(
    RemoveBucketResponse,
    UnlinkBucketResponse,
    RemoveObjectResponse
);
impl_from_admin_response!(
    RemoveBucketResponse,
    UnlinkBucketResponse,
    RemoveObjectResponse
);
