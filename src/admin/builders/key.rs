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
use crate::admin::config::KeyConfig;
use crate::admin::error::Error;
use crate::admin::response::{CreateKeyResponse, RemoveKeyResponse};
use crate::admin::types::{AdminApi, AdminRequest, ToAdminRequest};
use http::Method;

/// Argument builder for [create_key()](crate::admin::client::RadosClient::create_key) API
pub type CreateKey = AdminCommon<KeyConfig, CreateKeyPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct CreateKeyPhantomData;

pub type CreateKeyBldr =
    AdminCommonBuilder<KeyConfig, CreateKeyPhantomData, ((RadosClient,), (KeyConfig,), ())>;

impl AdminApi for CreateKey {
    type Response = CreateKeyResponse;
}

impl ToAdminRequest for CreateKey {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .subresource("key")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [remove_key()](crate::admin::client::RadosClient::remove_key) API
pub type RemoveKey = AdminCommon<KeyConfig, RemoveKeyPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RemoveKeyPhantomData;

pub type RemoveKeyBldr =
    AdminCommonBuilder<KeyConfig, RemoveKeyPhantomData, ((RadosClient,), (KeyConfig,), ())>;

impl AdminApi for RemoveKey {
    type Response = RemoveKeyResponse;
}

impl ToAdminRequest for RemoveKey {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.access_key, "AccessKey")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/user")
            .subresource("key")
            .query_params(to_query(&self.config)?)
            .build())
    }
}
