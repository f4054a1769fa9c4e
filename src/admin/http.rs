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

//! Gateway endpoint and request URLs

use crate::admin::error::ConstructionErr;
use crate::admin::multimap_ext::{Multimap, MultimapExt};
use crate::admin::utils::urlencode_path;
use std::fmt;
use std::str::FromStr;

/// Request URL: endpoint, path, optional subresource marker and query.
#[derive(Clone, Debug)]
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    /// Rendered bare and first in the query string, e.g. `?subuser&uid=...`
    pub subresource: Option<String>,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Path as sent on the wire, percent-encoded.
    pub fn encoded_path(&self) -> String {
        if self.path.starts_with('/') {
            urlencode_path(&self.path)
        } else {
            urlencode_path(&format!("/{}", self.path))
        }
    }

    pub fn query_string(&self) -> String {
        let rest = self.query.to_query_string();
        match &self.subresource {
            Some(sub) if rest.is_empty() => sub.clone(),
            Some(sub) => format!("{sub}&{rest}"),
            None => rest,
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host_header_value())?;
        f.write_str(&self.encoded_path())?;

        let query = self.query_string();
        if !query.is_empty() {
            f.write_str("?")?;
            f.write_str(&query)?;
        }
        Ok(())
    }
}

/// Gateway endpoint parsed from the host setting.
///
/// A host without a scheme is taken to be `https`. A path in the host, such
/// as `http://proxy:8080/rgw`, is kept and prefixed to every request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    path: String,
}

impl FromStr for BaseUrl {
    type Err = ConstructionErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use radosgw::admin::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "rgw.example.com".parse().unwrap();
    /// let base_url: BaseUrl = "http://127.0.0.1:7480".parse().unwrap();
    /// let base_url: BaseUrl = "http://[::1]:7480".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ConstructionErr> {
        if s.trim().is_empty() {
            return Err(ConstructionErr::MissingSettings);
        }

        let with_scheme = if s.contains("://") {
            s.to_string()
        } else {
            format!("https://{s}")
        };
        let url = url::Url::parse(&with_scheme).map_err(|source| ConstructionErr::InvalidHost {
            host: s.to_string(),
            source,
        })?;

        let https = match url.scheme() {
            "http" => false,
            "https" => true,
            other => {
                return Err(ConstructionErr::InvalidBaseUrl(format!(
                    "scheme must be http or https, got {other}"
                )));
            }
        };

        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(ConstructionErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        if url.query().is_some() {
            return Err(ConstructionErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        // url::Url reports no port when it is the scheme default
        let port = url.port().unwrap_or(0);
        let path = url.path().trim_end_matches('/').to_string();

        Ok(BaseUrl {
            https,
            host,
            port,
            path,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port, or 0 when the scheme default is used.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Builds a request URL for `path`, which is appended to the base path.
    pub fn build_url(&self, path: &str, subresource: Option<&str>, query: Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: format!("{}{}", self.path, path),
            subresource: subresource.map(str::to_string),
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_without_scheme_defaults_to_https() {
        let base: BaseUrl = "rgw.example.com".parse().unwrap();
        assert!(base.https);
        assert_eq!(base.host(), "rgw.example.com");
        assert_eq!(base.port(), 0);
        assert_eq!(base.host_header_value(), "rgw.example.com");
    }

    #[test]
    fn explicit_port_goes_into_host_header() {
        let base: BaseUrl = "http://127.0.0.1:7480".parse().unwrap();
        assert!(!base.https);
        assert_eq!(base.host_header_value(), "127.0.0.1:7480");

        let base: BaseUrl = "http://rgw:80".parse().unwrap();
        assert_eq!(base.host_header_value(), "rgw");
    }

    #[test]
    fn ipv6_host_keeps_brackets() {
        let base: BaseUrl = "http://[::1]:7480".parse().unwrap();
        assert_eq!(base.host_header_value(), "[::1]:7480");
    }

    #[test]
    fn invalid_hosts_are_rejected() {
        assert!(matches!(
            "ftp://rgw".parse::<BaseUrl>(),
            Err(ConstructionErr::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            "http://rgw?x=1".parse::<BaseUrl>(),
            Err(ConstructionErr::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            "http://rgw:notaport".parse::<BaseUrl>(),
            Err(ConstructionErr::InvalidHost { .. })
        ));
        assert!(matches!(
            "".parse::<BaseUrl>(),
            Err(ConstructionErr::MissingSettings)
        ));
    }

    #[test]
    fn url_puts_subresource_first() {
        let base: BaseUrl = "http://rgw:7480/gw/".parse().unwrap();
        let mut query = Multimap::new();
        query.add("uid", "alice");
        query.add("format", "json");
        let url = base.build_url("/admin/user", Some("subuser"), query);
        assert_eq!(
            url.to_string(),
            "http://rgw:7480/gw/admin/user?subuser&format=json&uid=alice"
        );

        let url = base.build_url("/admin/user", Some("key"), Multimap::new());
        assert_eq!(url.to_string(), "http://rgw:7480/gw/admin/user?key");

        let url = base.build_url("/admin/usage", None, Multimap::new());
        assert_eq!(url.to_string(), "http://rgw:7480/gw/admin/usage");
    }
}
