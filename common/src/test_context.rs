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

use radosgw::admin::RadosClient;
use radosgw::admin::RadosClientBuilder;
use radosgw::admin::creds::StaticProvider;
use radosgw::admin::http::BaseUrl;
use wiremock::MockServer;

pub const ACCESS_KEY: &str = "test-access";
pub const SECRET_KEY: &str = "test-secret";

/// A mock gateway together with a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: RadosClient,
}

impl TestContext {
    /// Starts a mock gateway serving the admin API under `/admin`.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = RadosClient::new(&server.uri(), ACCESS_KEY, SECRET_KEY, None).unwrap();
        log::debug!("mock gateway at {}", server.uri());
        Self { server, client }
    }

    /// Starts a mock gateway whose admin API lives under `/{prefix}`.
    pub async fn with_prefix(prefix: &str) -> Self {
        let server = MockServer::start().await;
        let base_url: BaseUrl = server.uri().parse().unwrap();
        let client = RadosClientBuilder::new(base_url)
            .provider(Some(StaticProvider::new(ACCESS_KEY, SECRET_KEY)))
            .admin_prefix(prefix)
            .build()
            .unwrap();
        Self { server, client }
    }

    /// Full request path of an admin resource, e.g. `/admin/user`.
    pub fn admin_path(&self, resource: &str) -> String {
        format!("/{}{}", self.client.admin_prefix(), resource)
    }
}
