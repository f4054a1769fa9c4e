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

use crate::admin::builders::{AdminCommon, AdminCommonBuilder, check_required, json_query, to_query};
use crate::admin::client::RadosClient;
use crate::admin::config::UserConfig;
use crate::admin::error::Error;
use crate::admin::multimap_ext::MultimapExt;
use crate::admin::response::{
    CreateUserResponse, GetUidsResponse, GetUserResponse, GetUsersResponse, RemoveUserResponse,
    UpdateUserResponse,
};
use crate::admin::types::{AdminApi, AdminRequest, FromAdminResponse, ToAdminRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for [get_user()](crate::admin::client::RadosClient::get_user) API
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUser {
    #[builder(!default)] // force required
    client: RadosClient,
    /// Left out of the request when empty
    #[builder(default, setter(into))]
    uid: String,
}

pub type GetUserBldr = GetUserBuilder<((RadosClient,), (String,))>;

impl AdminApi for GetUser {
    type Response = GetUserResponse;
}

impl ToAdminRequest for GetUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        let mut query = json_query();
        if !self.uid.is_empty() {
            query.add("uid", self.uid);
        }
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/user")
            .query_params(query)
            .build())
    }
}

/// Argument builder for [get_uids()](crate::admin::client::RadosClient::get_uids) API
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUids {
    #[builder(!default)] // force required
    client: RadosClient,
}

pub type GetUidsBldr = GetUidsBuilder<((RadosClient,),)>;

impl AdminApi for GetUids {
    type Response = GetUidsResponse;
}

impl ToAdminRequest for GetUids {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("/metadata/user")
            .query_params(json_query())
            .build())
    }
}

/// Argument builder for [get_users()](crate::admin::client::RadosClient::get_users) API
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUsers {
    #[builder(!default)] // force required
    client: RadosClient,
}

pub type GetUsersBldr = GetUsersBuilder<((RadosClient,),)>;

impl GetUsers {
    /// Lists all user identifiers, then fetches each user in turn.
    ///
    /// Stops at the first user that cannot be fetched.
    pub async fn send(self) -> Result<GetUsersResponse, Error> {
        let client = self.client.clone();
        let req = GetUids::builder().client(self.client).build().to_admin_request()?;
        let resp = req.execute().await;
        let uids = GetUidsResponse::from_admin_response(req, resp)?;

        let mut users = Vec::with_capacity(uids.uids().len());
        for uid in uids.uids() {
            let user = client.get_user(uid.as_str()).build().send().await?;
            users.push(user.into_user());
        }
        Ok(GetUsersResponse::new(uids, users))
    }
}

/// Argument builder for [create_user()](crate::admin::client::RadosClient::create_user) API
pub type CreateUser = AdminCommon<UserConfig, CreateUserPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct CreateUserPhantomData;

pub type CreateUserBldr =
    AdminCommonBuilder<UserConfig, CreateUserPhantomData, ((RadosClient,), (UserConfig,), ())>;

impl AdminApi for CreateUser {
    type Response = CreateUserResponse;
}

impl ToAdminRequest for CreateUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;
        check_required(&self.config.display_name, "DisplayName")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path("/user")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [update_user()](crate::admin::client::RadosClient::update_user) API
pub type UpdateUser = AdminCommon<UserConfig, UpdateUserPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct UpdateUserPhantomData;

pub type UpdateUserBldr =
    AdminCommonBuilder<UserConfig, UpdateUserPhantomData, ((RadosClient,), (UserConfig,), ())>;

impl AdminApi for UpdateUser {
    type Response = UpdateUserResponse;
}

impl ToAdminRequest for UpdateUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path("/user")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

/// Argument builder for [remove_user()](crate::admin::client::RadosClient::remove_user) API
pub type RemoveUser = AdminCommon<UserConfig, RemoveUserPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RemoveUserPhantomData;

pub type RemoveUserBldr =
    AdminCommonBuilder<UserConfig, RemoveUserPhantomData, ((RadosClient,), (UserConfig,), ())>;

impl AdminApi for RemoveUser {
    type Response = RemoveUserResponse;
}

impl ToAdminRequest for RemoveUser {
    fn to_admin_request(self) -> Result<AdminRequest, Error> {
        check_required(&self.config.uid, "UID")?;

        Ok(AdminRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path("/user")
            .query_params(to_query(&self.config)?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::error::ValidationErr;

    fn client() -> RadosClient {
        RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap()
    }

    #[test]
    fn get_user_omits_empty_uid() {
        let req = client().get_user("").build().to_admin_request().unwrap();
        assert_eq!(req.query_params().to_query_string(), "format=json");

        let req = client().get_user("alice").build().to_admin_request().unwrap();
        assert_eq!(req.query_params().to_query_string(), "format=json&uid=alice");
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.path(), "/user");
    }

    #[test]
    fn create_user_requires_uid_and_display_name() {
        let err = client()
            .create_user(UserConfig::builder().display_name("Alice").build())
            .build()
            .to_admin_request()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationErr::MissingField { field: "UID" })
        ));

        let err = client()
            .create_user(UserConfig::builder().uid("alice").build())
            .build()
            .to_admin_request()
            .unwrap_err();
        assert_eq!(err.to_string(), "validation error: DisplayName field is required");
    }

    #[test]
    fn create_user_request_shape() {
        let req = client()
            .create_user(
                UserConfig::builder()
                    .uid("alice")
                    .display_name("Alice")
                    .email("alice@example.com")
                    .build(),
            )
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.subresource(), None);
        assert_eq!(
            req.query_params().to_query_string(),
            "display-name=Alice&email=alice%40example.com&format=json&uid=alice"
        );
    }

    #[test]
    fn update_and_remove_use_their_verbs() {
        let config = UserConfig::builder().uid("alice").purge_data(true).build();
        let req = client()
            .update_user(config.clone())
            .build()
            .to_admin_request()
            .unwrap();
        assert_eq!(req.method(), &Method::POST);

        let req = client().remove_user(config).build().to_admin_request().unwrap();
        assert_eq!(req.method(), &Method::DELETE);
        assert_eq!(
            req.query_params().to_query_string(),
            "format=json&purge-data=True&uid=alice"
        );

        assert!(
            client()
                .remove_user(UserConfig::default())
                .build()
                .to_admin_request()
                .is_err()
        );
    }

    #[test]
    fn get_uids_lists_metadata() {
        let req = client().get_uids().build().to_admin_request().unwrap();
        assert_eq!(req.path(), "/metadata/user");
        assert_eq!(req.query_params().to_query_string(), "format=json");
    }
}
