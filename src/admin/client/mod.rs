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

//! Admin API client for the RADOS Gateway.

use bytes::Bytes;
use http::{HeaderMap, Method};
use log::{debug, warn};
use std::mem;
use std::sync::Arc;

use crate::admin::api_error::ApiErrorResponse;
use crate::admin::creds::{Provider, StaticProvider};
use crate::admin::error::{ConstructionErr, Error, NetworkError, ServerError};
use crate::admin::http::BaseUrl;
use crate::admin::multimap_ext::Multimap;
use crate::admin::signer::presign_v4;
use crate::admin::types::RawResponse;
use crate::admin::utils::utc_now;

mod bucket;
mod capability;
mod key;
mod quota;
mod subuser;
mod usage;
mod user;

/// Path prefix of the admin API on the gateway.
pub const DEFAULT_ADMIN_PREFIX: &str = "admin";

/// Region used in the signing scope. The gateway accepts any region unless
/// configured otherwise.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Seconds a request signature stays valid.
pub const DEFAULT_SIGNATURE_EXPIRY: u32 = 60;

/// Client Builder manufactures a [`RadosClient`] using given parameters.
#[derive(Debug)]
pub struct RadosClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    admin_prefix: String,
    region: String,
    signature_expiry: u32,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
}

impl RadosClientBuilder {
    /// Creates a builder given the gateway's base URL.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            admin_prefix: DEFAULT_ADMIN_PREFIX.to_string(),
            region: DEFAULT_REGION.to_string(),
            signature_expiry: DEFAULT_SIGNATURE_EXPIRY,
            ignore_cert_check: None,
            app_info: None,
        }
    }

    /// Set the credential provider. Required.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the admin path prefix. Surrounding slashes are dropped; an empty
    /// prefix keeps the default `admin`.
    pub fn admin_prefix(mut self, prefix: &str) -> Self {
        let prefix = prefix.trim_matches('/');
        if !prefix.is_empty() {
            self.admin_prefix = prefix.to_string();
        }
        self
    }

    /// Set the region used in the signing scope.
    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// Set how many seconds each request signature stays valid.
    pub fn signature_expiry(mut self, seconds: u32) -> Self {
        self.signature_expiry = seconds;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<RadosClient, Error> {
        let provider = match self.provider {
            Some(p) if !p.fetch().is_incomplete() => p,
            _ => return Err(ConstructionErr::MissingSettings.into()),
        };

        let mut builder = reqwest::Client::builder().no_gzip();

        let mut user_agent = String::from("RadosGW (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") radosgw-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        Ok(RadosClient {
            http_client: builder.build().map_err(ConstructionErr::HttpClient)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                admin_prefix: self.admin_prefix,
                region: self.region,
                signature_expiry: self.signature_expiry,
            }),
        })
    }
}

/// Client for the RADOS Gateway admin operations API.
///
/// Every request is signed with AWS Signature V4 in query-string form, using a
/// fresh timestamp and a short expiry. The client is cheap to clone and can be
/// shared between tasks.
#[derive(Clone, Debug)]
pub struct RadosClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Arc<dyn Provider + Send + Sync + 'static>,
    pub(crate) admin_prefix: String,
    pub(crate) region: String,
    pub(crate) signature_expiry: u32,
}

impl RadosClient {
    /// Returns a client for the gateway at `host`.
    ///
    /// `host` may omit the scheme (`https` is assumed) and may carry a port.
    /// `admin_prefix` defaults to `admin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use radosgw::admin::client::RadosClient;
    ///
    /// let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    /// assert_eq!(client.admin_prefix(), "admin");
    ///
    /// assert!(RadosClient::new("http://127.0.0.1:7480", "", "secret", None).is_err());
    /// ```
    pub fn new(
        host: &str,
        access_key: &str,
        secret_key: &str,
        admin_prefix: Option<&str>,
    ) -> Result<Self, Error> {
        if host.is_empty() || access_key.is_empty() || secret_key.is_empty() {
            return Err(ConstructionErr::MissingSettings.into());
        }
        let base_url: BaseUrl = host.parse()?;
        let mut builder = RadosClientBuilder::new(base_url)
            .provider(Some(StaticProvider::new(access_key, secret_key)));
        if let Some(prefix) = admin_prefix {
            builder = builder.admin_prefix(prefix);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn admin_prefix(&self) -> &str {
        &self.shared.admin_prefix
    }

    fn full_path(&self, path: &str, use_prefix: bool) -> String {
        if use_prefix {
            format!("/{}{}", self.shared.admin_prefix, path)
        } else {
            path.to_string()
        }
    }

    /// Signs and sends one request, then reads the whole reply.
    ///
    /// Fails with [`ServerError::Status`] on any status other than 200, and
    /// with [`ServerError::Api`] when a 200 reply carries an error code.
    pub(crate) async fn execute(
        &self,
        method: &Method,
        path: &str,
        use_prefix: bool,
        subresource: Option<&str>,
        query_params: &Multimap,
    ) -> Result<RawResponse, Error> {
        let full_path = self.full_path(path, use_prefix);
        let mut url = self
            .shared
            .base_url
            .build_url(&full_path, subresource, query_params.clone());

        // the bare marker is signed as an empty-valued parameter
        let mut signed = query_params.clone();
        if let Some(sub) = subresource {
            signed.insert(sub.to_string(), String::new());
        }
        let creds = self.shared.provider.fetch();
        presign_v4(
            method,
            &url.host_header_value(),
            &url.encoded_path(),
            &self.shared.region,
            &mut signed,
            &creds.access_key,
            &creds.secret_key,
            utc_now(),
            self.shared.signature_expiry,
        );
        if let Some(sub) = subresource
            && let Some(values) = signed.get_vec_mut(sub)
            && let Some(pos) = values.iter().position(String::is_empty)
        {
            values.remove(pos);
            if values.is_empty() {
                signed.remove(sub);
            }
        }
        url.query = signed;

        debug!("{method} {}", url.encoded_path());
        let mut resp = self
            .http_client
            .request(method.clone(), url.to_string())
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;
        debug!("{method} {} -> {status}", url.encoded_path());

        let api_error = ApiErrorResponse::parse(status, &headers, &body);
        if let Some(e) = &api_error {
            warn!("{method} {}: gateway returned {}", url.encoded_path(), e.raw_code());
        }

        if status != 200 {
            return Err(ServerError::Status {
                status,
                error: api_error,
                body,
            }
            .into());
        }
        if let Some(e) = api_error {
            return Err(ServerError::Api(e).into());
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
