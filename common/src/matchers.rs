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

//! Request matchers for the mock gateway.

use wiremock::{Match, Request};

/// Matches when the raw query string starts with the bare `marker`,
/// e.g. `subuser&...`.
pub struct SubresourceMarker(pub &'static str);

impl Match for SubresourceMarker {
    fn matches(&self, request: &Request) -> bool {
        match request.url.query() {
            Some(query) => query == self.0 || query.starts_with(&format!("{}&", self.0)),
            None => false,
        }
    }
}

/// Matches requests carrying a query-string Signature V4.
pub struct Presigned;

impl Match for Presigned {
    fn matches(&self, request: &Request) -> bool {
        let mut algorithm = false;
        let mut signature = false;
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "X-Amz-Algorithm" => algorithm = value == "AWS4-HMAC-SHA256",
                "X-Amz-Signature" => signature = value.len() == 64,
                _ => {}
            }
        }
        algorithm && signature
    }
}

/// Matches when `key` appears in the query exactly `count` times.
pub struct ParamCount(pub &'static str, pub usize);

impl Match for ParamCount {
    fn matches(&self, request: &Request) -> bool {
        request.url.query_pairs().filter(|(k, _)| k == self.0).count() == self.1
    }
}
