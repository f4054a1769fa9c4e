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
use crate::admin::config::SubUserConfig;
use crate::admin::error::Error;
use crate::admin::response::{CreateSubUserResponse, RemoveSubUserResponse, UpdateSubUserResponse};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;

/// Argument builder for [create_subuser()](crate::admin::client::RadosClient::create_subuser) API
pub type CreateSubUser = AdminCommon<SubUserConfig, CreateSubUserPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct CreateSubUserPhantomData;

pub type CreateSubUserBldr =
    AdminCommonBuilder<SubUserConfig, CreateSubUserPhantomData, ((RadosClient,), (SubUserConfig,), ())>;

impl AdminApi for CreateSubUser {
    type Response = CreateSubUserResponse;
}

impl ToAdminRequest for CreateSubUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .subresource("subuser")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [update_subuser()](crate::admin::client::RadosClient::update_subuser) API
pub type UpdateSubUser = AdminCommon<SubUserConfig, UpdateSubUserPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct UpdateSubUserPhantomData;

pub type UpdateSubUserBldr =
    AdminCommonBuilder<SubUserConfig, UpdateSubUserPhantomData, ((RadosClient,), (SubUserConfig,), ())>;

impl AdminApi for UpdateSubUser {
    type Response = UpdateSubUserResponse;
}

impl ToAdminRequest for UpdateSubUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;
        check_required(&self.config.subuser, "SubUser")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path("/user")
            .subresource("subuser")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [remove_subuser()](crate::admin::client::RadosClient::remove_subuser) API
pub type RemoveSubUser = AdminCommon<SubUserConfig, RemoveSubUserPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RemoveSubUserPhantomData;

pub type RemoveSubUserBldr =
    AdminCommonBuilder<SubUserConfig, RemoveSubUserPhantomData, ((RadosClient,), (SubUserConfig,), ())>;

impl AdminApi for RemoveSubUser {
    type Response = RemoveSubUserResponse;
}

impl ToAdminRequest for RemoveSubUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;
        check_required(&self.config.subuser, "SubUser")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/user")
            .subresource("subuser")
            .query_params(to_query(&self.config)?)
            .build())
    }
}
