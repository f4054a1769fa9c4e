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
use crate::admin::config::QuotaConfig;
use crate::admin::error::Error;
use crate::admin::response::{GetQuotasResponse, UpdateBucketQuotaResponse, UpdateQuotaResponse};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;

/// Argument builder for [get_quotas()](crate::admin::client::RadosClient::get_quotas) API
pub type GetQuotas = AdminCommon<QuotaConfig, GetQuotasPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetQuotasPhantomData;

pub type GetQuotasBldr =
    AdminCommonBuilder<QuotaConfig, GetQuotasPhantomData, ((RadosClient,), (QuotaConfig,), ())>;

impl AdminApi for GetQuotas {
    type Response = GetQuotasResponse;
}

impl ToAdminRequest for GetQuotas {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/user")
            .subresource("quota")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [update_quota()](crate::admin::client::RadosClient::update_quota) API
pub type UpdateQuota = AdminCommon<QuotaConfig, UpdateQuotaPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct UpdateQuotaPhantomData;

pub type UpdateQuotaBldr =
    AdminCommonBuilder<QuotaConfig, UpdateQuotaPhantomData, ((RadosClient,), (QuotaConfig,), ())>;

impl AdminApi for UpdateQuota {
    type Response = UpdateQuotaResponse;
}

impl ToAdminRequest for UpdateQuota {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;
        check_required(&self.config.quota_type, "QuotaType")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .subresource("quota")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [update_bucket_quota()](crate::admin::client::RadosClient::update_bucket_quota) API
pub type UpdateBucketQuota = AdminCommon<QuotaConfig, UpdateBucketQuotaPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct UpdateBucketQuotaPhantomData;

pub type UpdateBucketQuotaBldr =
    AdminCommonBuilder<QuotaConfig, UpdateBucketQuotaPhantomData, ((RadosClient,), (QuotaConfig,), ())>;

impl AdminApi for UpdateBucketQuota {
    type Response = UpdateBucketQuotaResponse;
}

impl ToAdminRequest for UpdateBucketQuota {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.bucket, "Bucket")?;
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/bucket")
            .subresource("quota")
            .query_params(to_query(&self.config)?)
            .build())
    }
}
