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

//! # RADOS Gateway admin client (`radosgw`)
//!
//! An async client for the admin operations API of the Ceph RADOS Gateway:
//! users, subusers, keys, buckets, quotas, capabilities and usage.
//!
//! Each operation has a request builder (e.g. [`admin::builders::CreateUser`],
//! [`admin::builders::GetBucket`]) created from a [`admin::RadosClient`] and a
//! configuration record. Builders implement [`admin::types::AdminApi`], whose
//! async [`send`](crate::admin::types::AdminApi::send) signs the request, sends it and
//! decodes the reply.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use radosgw::admin::RadosClient;
//! use radosgw::admin::config::BucketConfig;
//! use radosgw::admin::types::AdminApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None)
//!         .expect("invalid settings");
//!
//!     let resp = client
//!         .get_bucket(BucketConfig::builder().uid("alice").build())
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     for bucket in resp.buckets() {
//!         println!("{}", bucket.name);
//!     }
//! }
//! ```
//!
//! ## Query encoding
//!
//! Configuration records are turned into query parameters through named
//! encoding rules (see [`admin::encoding`]). Custom rules can be added to the
//! process-wide registry with [`admin::encoding::register_rule`].

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod admin;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
