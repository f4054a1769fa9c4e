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

//! Error definitions for admin operations

use crate::admin::api_error::{ApiErrorCode, ApiErrorResponse};
use crate::admin::encoding::EncodingError;
use bytes::Bytes;
use thiserror::Error;

/// Errors raised while building a [`RadosClient`](crate::admin::client::RadosClient).
#[derive(Debug, Error)]
pub enum ConstructionErr {
    #[error("host, access key and secret key must all be non-empty")]
    MissingSettings,

    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors raised before a request is sent, when a required field is missing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    #[error("{field} field is required")]
    MissingField { field: &'static str },
}

impl ValidationErr {
    pub fn missing(field: &'static str) -> Self {
        ValidationErr::MissingField { field }
    }
}

/// Transport failures. The request may or may not have reached the gateway.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors reported by the gateway itself.
#[derive(Debug)]
pub enum ServerError {
    /// The response had status 200 but its body carried an error code.
    Api(ApiErrorResponse),

    /// The response status was not 200.
    Status {
        status: u16,
        error: Option<ApiErrorResponse>,
        body: Bytes,
    },
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::Api(e) => e.status(),
            ServerError::Status { status, .. } => *status,
        }
    }

    pub fn api_error(&self) -> Option<&ApiErrorResponse> {
        match self {
            ServerError::Api(e) => Some(e),
            ServerError::Status { error, .. } => error.as_ref(),
        }
    }

    /// Raw response body.
    pub fn body(&self) -> &Bytes {
        match self {
            ServerError::Api(e) => e.body(),
            ServerError::Status { body, .. } => body,
        }
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Api(e) => write!(f, "{}", e.raw_code()),
            ServerError::Status { status, error, .. } => match error {
                Some(e) => write!(f, "[{status}]: {}", e.raw_code()),
                None => write!(f, "[{status}]: no error code in response"),
            },
        }
    }
}

impl std::error::Error for ServerError {}

#[derive(Debug, Error)]
pub enum Error {
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionErr),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("server error: {0}")]
    Server(#[from] ServerError),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Http(err))
    }
}

impl Error {
    /// HTTP status of the response, for errors raised after one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Server(e) => Some(e.status_code()),
            _ => None,
        }
    }

    /// Error code sent by the gateway, if any.
    pub fn api_error_code(&self) -> Option<&ApiErrorCode> {
        match self {
            Error::Server(e) => e.api_error().map(|e| e.code()),
            _ => None,
        }
    }
}
