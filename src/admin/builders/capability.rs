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
use crate::admin::config::CapConfig;
use crate::admin::error::Error;
use crate::admin::response::{AddCapabilityResponse, DelCapabilityResponse};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;

/// Argument builder for [add_capability()](crate::admin::client::RadosClient::add_capability) API
pub type AddCapability = AdminCommon<CapConfig, AddCapabilityPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct AddCapabilityPhantomData;

pub type AddCapabilityBldr =
    AdminCommonBuilder<CapConfig, AddCapabilityPhantomData, ((RadosClient,), (CapConfig,), ())>;

impl AdminApi for AddCapability {
    type Response = AddCapabilityResponse;
}

impl ToAdminRequest for AddCapability {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;
        check_required(&self.config.user_caps, "UserCaps")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .subresource("caps")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [del_capability()](crate::admin::client::RadosClient::del_capability) API
pub type DelCapability = AdminCommon<CapConfig, DelCapabilityPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct DelCapabilityPhantomData;

pub type DelCapabilityBldr =
    AdminCommonBuilder<CapConfig, DelCapabilityPhantomData, ((RadosClient,), (CapConfig,), ())>;

impl AdminApi for DelCapability {
    type Response = DelCapabilityResponse;
}

impl ToAdminRequest for DelCapability {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;
        check_required(&self.config.user_caps, "UserCaps")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/user")
            .subresource("caps")
            .query_params(to_query(&self.config)?)
            .build())
    }
}
