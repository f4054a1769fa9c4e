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

//! Client for the RADOS Gateway admin operations API

pub mod api_error;
mod bucket_decoder;
pub mod builders;
pub mod client;
pub mod config;
pub mod creds;
pub mod encoding;
pub mod error;
pub mod http;
pub mod multimap_ext;
pub mod response;
pub mod signer;
pub mod types;
pub mod utils;


pub use bucket_decoder::decode_buckets;
pub use client::{RadosClient, RadosClientBuilder};
