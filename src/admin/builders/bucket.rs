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

use crate::admin::builders::{AdminCommon, AdminCommonBuilder, check_required, to_query};
use crate::admin::client::RadosClient;
use crate::admin::config::BucketConfig;
use crate::admin::error::Error;
use crate::admin::response::{CheckBucketResponse, GetBucketPolicyResponse, GetBucketResponse, GetObjectPolicyResponse, RemoveBucketResponse, RemoveObjectResponse, UnlinkBucketResponse};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;

/// Argument builder for [get_bucket()](crate::admin::client::RadosClient::get_bucket) API
pub type GetBucket = AdminCommon<BucketConfig, GetBucketPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetBucketPhantomData;

pub type GetBucketBldr =
    AdminCommonBuilder<BucketConfig, GetBucketPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for GetBucket {
    type Response = GetBucketResponse;
}

impl ToAdminRequest for GetBucket {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/bucket")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [remove_bucket()](crate::admin::client::RadosClient::remove_bucket) API
pub type RemoveBucket = AdminCommon<BucketConfig, RemoveBucketPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RemoveBucketPhantomData;

pub type RemoveBucketBldr =
    AdminCommonBuilder<BucketConfig, RemoveBucketPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for RemoveBucket {
    type Response = RemoveBucketResponse;
}

impl ToAdminRequest for RemoveBucket {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/bucket")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [unlink_bucket()](crate::admin::client::RadosClient::unlink_bucket) API
pub type UnlinkBucket = AdminCommon<BucketConfig, UnlinkBucketPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct UnlinkBucketPhantomData;

pub type UnlinkBucketBldr =
    AdminCommonBuilder<BucketConfig, UnlinkBucketPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for UnlinkBucket {
    type Response = UnlinkBucketResponse;
}

impl ToAdminRequest for UnlinkBucket {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path("/bucket")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [check_bucket()](crate::admin::client::RadosClient::check_bucket) API
pub type CheckBucket = AdminCommon<BucketConfig, CheckBucketPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct CheckBucketPhantomData;

pub type CheckBucketBldr =
    AdminCommonBuilder<BucketConfig, CheckBucketPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for CheckBucket {
    type Response = CheckBucketResponse;
}

impl ToAdminRequest for CheckBucket {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/bucket")
            .subresource("index")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [remove_object()](crate::admin::client::RadosClient::remove_object) API
pub type RemoveObject = AdminCommon<BucketConfig, RemoveObjectPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RemoveObjectPhantomData;

pub type RemoveObjectBldr =
    AdminCommonBuilder<BucketConfig, RemoveObjectPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for RemoveObject {
    type Response = RemoveObjectResponse;
}

impl ToAdminRequest for RemoveObject {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;
        check_required(&self.config.object, "Object")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/bucket")
            .subresource("object")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [get_bucket_policy()](crate::admin::client::RadosClient::get_bucket_policy) API
pub type GetBucketPolicy = AdminCommon<BucketConfig, GetBucketPolicyPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetBucketPolicyPhantomData;

pub type GetBucketPolicyBldr =
    AdminCommonBuilder<BucketConfig, GetBucketPolicyPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for GetBucketPolicy {
    type Response = GetBucketPolicyResponse;
}

impl ToAdminRequest for GetBucketPolicy {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/bucket")
            .subresource("policy")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [get_object_policy()](crate::admin::client::RadosClient::get_object_policy) API
pub type GetObjectPolicy = AdminCommon<BucketConfig, GetObjectPolicyPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetObjectPolicyPhantomData;

pub type GetObjectPolicyBldr =
    AdminCommonBuilder<BucketConfig, GetObjectPolicyPhantomData, ((RadosClient,), (BucketConfig,), ())>;

impl AdminApi for GetObjectPolicy {
    type Response = GetObjectPolicyResponse;
}

impl ToAdminRequest for GetObjectPolicy {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;
        check_required(&self.config.object, "Object")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/bucket")
            .subresource("policy")
            .query_params(to_query(&self.config)?)
            .build())
    }
}
