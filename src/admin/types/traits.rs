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

//! Core traits for admin request and response handling.

use super::admin_request::{AdminRequest, RawResponse};
use crate::admin::error::Error;
use async_trait::async_trait;

/// Converts a request builder into an [`AdminRequest`].
///
/// Implementations check the required fields of their configuration value and
/// translate it into query parameters. Both steps happen before anything is
/// sent, so a failure here never reaches the network.
pub trait ToAdminRequest: Sized {
    fn to_admin_request(self) -> Result<AdminRequest, Error>;
}

/// Builds a typed response from the reply to an [`AdminRequest`].
pub trait FromAdminResponse: Sized {
    /// `response` is the outcome of [`AdminRequest::execute`]; errors are
    /// passed through unchanged.
    fn from_admin_response(
        request: AdminRequest,
        response: Result<RawResponse, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all admin request builders.
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
///     let resp = client
///         .create_user(UserConfig::builder().uid("alice").display_name("Alice").build())
///         .build()
///         .send()
///         .await
///         .unwrap();
///     println!("created {}", resp.user().user_id);
/// }
/// ```
#[async_trait]
pub trait AdminApi: ToAdminRequest {
    type Response: FromAdminResponse;

    /// Validates, signs and sends the request, then decodes the reply.
    async fn send(self) -> Result<Self::Response, Error> {
        let req: AdminRequest = self.to_admin_request()?;
        let resp: Result<RawResponse, Error> = req.execute().await;
        Self::Response::from_admin_response(req, resp)
    }
}
