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

use crate::admin::builders::{AdminCommon, AdminCommonBuilder, to_query};
use crate::admin::client::RadosClient;
use crate::admin::config::UsageConfig;
use crate::admin::error::Error;
use crate::admin::response::{DeleteUsageResponse, GetUsageResponse};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;

/// Argument builder for [get_usage()](crate::admin::client::RadosClient::get_usage) API
pub type GetUsage = AdminCommon<UsageConfig, GetUsagePhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetUsagePhantomData;

pub type GetUsageBldr =
    AdminCommonBuilder<UsageConfig, GetUsagePhantomData, ((RadosClient,), (UsageConfig,), ())>;

impl AdminApi for GetUsage {
    type Response = GetUsageResponse;
}

impl ToAdminRequest for GetUsage {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/usage")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [delete_usage()](crate::admin::client::RadosClient::delete_usage) API
pub type DeleteUsage = AdminCommon<UsageConfig, DeleteUsagePhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct DeleteUsagePhantomData;

pub type DeleteUsageBldr =
    AdminCommonBuilder<UsageConfig, DeleteUsagePhantomData, ((RadosClient,), (UsageConfig,), ())>;

impl AdminApi for DeleteUsage {
    type Response = DeleteUsageResponse;
}

impl ToAdminRequest for DeleteUsage {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/usage")
            .query_params(to_query(&self.config)?)
            .build())
    }
}
