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

use crate::admin::builders::{
    CreateUser, CreateUserBldr, GetUids, GetUidsBldr, GetUser, GetUserBldr, GetUsers, GetUsersBldr,
    RemoveUser, RemoveUserBldr, UpdateUser, UpdateUserBldr,
};
use crate::admin::client::RadosClient;
use crate::admin::config::UserConfig;

impl RadosClient {
    /// Creates a [`GetUser`] request builder. An empty `uid` is left out of
    /// the request, in which case the gateway answers for the signing user.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let resp = client.get_user("alice").build().send().await.unwrap();
    ///     println!("{} has {} keys", resp.user().user_id, resp.user().keys.len());
    /// }
    /// ```
    pub fn get_user<S: Into<String>>(&self, uid: S) -> GetUserBldr {
        GetUser::builder().client(self.clone()).uid(uid)
    }

    /// Creates a [`GetUids`] request builder, listing every user identifier.
    pub fn get_uids(&self) -> GetUidsBldr {
        GetUids::builder().client(self.clone())
    }

    /// Creates a [`GetUsers`] request builder.
    ///
    /// [`GetUsers::send()`] lists all identifiers, then fetches each user,
    /// so it issues one request per user.
    pub fn get_users(&self) -> GetUsersBldr {
        GetUsers::builder().client(self.clone())
    }

    /// Creates a [`CreateUser`] request builder.
    ///
    /// To execute the request, call [`CreateUser::send()`](crate::admin::types::AdminApi::send),
    /// which returns a [`Result`] containing a [`CreateUserResponse`](crate::admin::response::CreateUserResponse).
    /// `uid` and `display_name` must be set.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::config::UserConfig;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let config = UserConfig::builder()
    ///         .uid("alice")
    ///         .display_name("Alice")
    ///         .max_buckets(10)
    ///         .build();
    ///     let resp = client.create_user(config).build().send().await.unwrap();
    ///     println!("created user '{}'", resp.user().user_id);
    /// }
    /// ```
    pub fn create_user(&self, config: UserConfig) -> CreateUserBldr {
        CreateUser::builder().client(self.clone()).config(config)
    }

    /// Creates an [`UpdateUser`] request builder. Only `uid` is required.
    pub fn update_user(&self, config: UserConfig) -> UpdateUserBldr {
        UpdateUser::builder().client(self.clone()).config(config)
    }

    /// Creates a [`RemoveUser`] request builder.
    pub fn remove_user(&self, config: UserConfig) -> RemoveUserBldr {
        RemoveUser::builder().client(self.clone()).config(config)
    }
}
