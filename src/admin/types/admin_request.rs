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

use crate::admin::client::RadosClient;
use crate::admin::error::Error;
use crate::admin::multimap_ext::Multimap;
use bytes::Bytes;
use http::{HeaderMap, Method};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic admin request
pub struct AdminRequest {
    #[builder(!default)] // force required
    pub(crate) client: RadosClient,

    #[builder(!default)] // force required
    method: Method,

    /// Resource path, e.g. `/user`
    #[builder(setter(into))]
    path: String,

    /// Prefix the path with the client's admin prefix
    #[builder(default = true)]
    use_prefix: bool,

    /// Bare marker placed first in the query string, e.g. `subuser`
    #[builder(default, setter(into, strip_option))]
    subresource: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,
}

impl AdminRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn subresource(&self) -> Option<&str> {
        self.subresource.as_deref()
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    /// Execute the request. Only used in [`AdminApi::send()`](super::AdminApi::send).
    pub async fn execute(&self) -> Result<RawResponse, Error> {
        self.client
            .execute(
                &self.method,
                &self.path,
                self.use_prefix,
                self.subresource.as_deref(),
                &self.query_params,
            )
            .await
    }
}

/// Fully read reply of a successful call.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}
