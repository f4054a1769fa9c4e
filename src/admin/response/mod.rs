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

//! Responses for [`RadosClient`](crate::admin::client::RadosClient) APIs

use crate::admin::types::AdminRequest;
use bytes::Bytes;
use http::HeaderMap;

/// Implements [`HasAdminFields`] for the specified types.
macro_rules! impl_has_admin_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::admin::response::HasAdminFields for $ty {
                #[inline]
                fn request(&self) -> &$crate::admin::types::AdminRequest {
                    &self.request
                }

                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Implements `FromAdminResponse` for responses whose body is not decoded.
macro_rules! impl_from_admin_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::admin::types::FromAdminResponse for $ty {
                fn from_admin_response(
                    request: $crate::admin::types::AdminRequest,
                    response: Result<$crate::admin::types::RawResponse, $crate::admin::error::Error>,
                ) -> Result<Self, $crate::admin::error::Error> {
                    let resp = response?;
                    Ok(Self {
                        request,
                        headers: resp.headers,
                        body: resp.body,
                    })
                }
            }
        )*
    };
}

/// Implements `FromAdminResponse` for responses whose JSON body is decoded
/// into the named field.
macro_rules! impl_from_admin_json_response {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl $crate::admin::types::FromAdminResponse for $ty {
                fn from_admin_response(
                    request: $crate::admin::types::AdminRequest,
                    response: Result<$crate::admin::types::RawResponse, $crate::admin::error::Error>,
                ) -> Result<Self, $crate::admin::error::Error> {
                    let resp = response?;
                    let $field = serde_json::from_slice(&resp.body)?;
                    Ok(Self {
                        request,
                        headers: resp.headers,
                        body: resp.body,
                        $field,
                    })
                }
            }
        )*
    };
}

mod bucket;
mod capability;
mod key;
mod quota;
mod subuser;
mod usage;
mod user;

pub use bucket::*;
pub use capability::*;
pub use key::*;
pub use quota::*;
pub use subuser::*;
pub use usage::*;
pub use user::*;

/// Fields kept on every response.
pub trait HasAdminFields {
    /// The request that was sent.
    fn request(&self) -> &AdminRequest;
    /// HTTP headers returned by the gateway.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body.
    fn body(&self) -> &Bytes;
}
