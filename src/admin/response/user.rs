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

use crate::admin::types::{AdminRequest, User};
use bytes::Bytes;
use http::HeaderMap;

/// Response of [get_user()](crate::admin::client::RadosClient::get_user) API
#[derive(Clone, Debug)]
pub struct GetUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    user: User,
}

/// Response of [create_user()](crate::admin::client::RadosClient::create_user) API
#[derive(Clone, Debug)]
pub struct CreateUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    user: User,
}

/// Response of [update_user()](crate::admin::client::RadosClient::update_user) API
#[derive(Clone, Debug)]
pub struct UpdateUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    user: User,
}

impl_has_admin_fields!(GetUserResponse, CreateUserResponse, UpdateUserResponse);
impl_from_admin_json_response!(
    GetUserResponse => user,
    CreateUserResponse => user,
    UpdateUserResponse => user,
);

impl GetUserResponse {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }
}

impl CreateUserResponse {
    /// The new user, including generated keys.
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }
}

impl UpdateUserResponse {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }
}

/// Response of [remove_user()](crate::admin::client::RadosClient::remove_user) API
#[derive(Clone, Debug)]
pub struct RemoveUserResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_admin_fields!(RemoveUserResponse);
impl_from_admin_response!(RemoveUserResponse);

/// Response of [get_uids()](crate::admin::client::RadosClient::get_uids) API
#[derive(Clone, Debug)]
pub struct GetUidsResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    uids: Vec<String>,
}

impl_has_admin_fields!(GetUidsResponse);
impl_from_admin_json_response!(GetUidsResponse => uids);

impl GetUidsResponse {
    pub fn uids(&self) -> &[String] {
        &self.uids
    }
}

/// Response of [get_users()](crate::admin::client::RadosClient::get_users) API
///
/// The request, headers and body are those of the identifier listing.
#[derive(Clone, Debug)]
pub struct GetUsersResponse {
    request: AdminRequest,
    headers: HeaderMap,
    body: Bytes,
    users: Vec<User>,
}

impl_has_admin_fields!(GetUsersResponse);

impl GetUsersResponse {
    pub(crate) fn new(uids: GetUidsResponse, users: Vec<User>) -> Self {
        Self {
            request: uids.request,
            headers: uids.headers,
            body: uids.body,
            users,
        }
    }

    /// Users in the order their identifiers were listed.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn into_users(self) -> Vec<User> {
        self.users
    }
}
