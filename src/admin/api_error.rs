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

//! Error bodies returned by the gateway (`{"Code": "..."}`).

use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use serde_json::Value;
use std::convert::Infallible;
use std::str::FromStr;

/// Error codes returned by the admin API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiErrorCode {
    #[default]
    NoError,
    /// The user does not exist
    NoSuchUser,
    /// The key does not exist
    NoSuchKey,
    /// The bucket does not exist
    NoSuchBucket,
    /// The subuser does not exist
    NoSuchSubUser,
    /// The access key of the request signer is unknown
    InvalidAccessKeyId,
    /// The signature did not verify, or has expired
    SignatureDoesNotMatch,
    /// The signer lacks the capability needed for this operation
    AccessDenied,
    /// The clock skew between client and gateway is too large
    RequestTimeTooSkewed,
    UserAlreadyExists,
    SubUserExists,
    KeyExists,
    EmailExists,
    InvalidArgument,
    InvalidCapability,
    InvalidAccess,
    InvalidKeyType,
    InvalidSecretKey,
    BucketNotEmpty,
    BucketAlreadyExists,
    ObjectRemovalFailed,
    /// Any code not listed above, kept verbatim
    OtherError(String),
}

impl FromStr for ApiErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "" | "noerror" => ApiErrorCode::NoError,
            "nosuchuser" => ApiErrorCode::NoSuchUser,
            "nosuchkey" => ApiErrorCode::NoSuchKey,
            "nosuchbucket" => ApiErrorCode::NoSuchBucket,
            "nosuchsubuser" => ApiErrorCode::NoSuchSubUser,
            "invalidaccesskeyid" => ApiErrorCode::InvalidAccessKeyId,
            "signaturedoesnotmatch" => ApiErrorCode::SignatureDoesNotMatch,
            "accessdenied" => ApiErrorCode::AccessDenied,
            "requesttimetooskewed" => ApiErrorCode::RequestTimeTooSkewed,
            "useralreadyexists" => ApiErrorCode::UserAlreadyExists,
            "subuserexists" => ApiErrorCode::SubUserExists,
            "keyexists" => ApiErrorCode::KeyExists,
            "emailexists" => ApiErrorCode::EmailExists,
            "invalidargument" => ApiErrorCode::InvalidArgument,
            "invalidcapability" => ApiErrorCode::InvalidCapability,
            "invalidaccess" => ApiErrorCode::InvalidAccess,
            "invalidkeytype" => ApiErrorCode::InvalidKeyType,
            "invalidsecretkey" => ApiErrorCode::InvalidSecretKey,
            "bucketnotempty" => ApiErrorCode::BucketNotEmpty,
            "bucketalreadyexists" => ApiErrorCode::BucketAlreadyExists,
            "objectremovalfailed" => ApiErrorCode::ObjectRemovalFailed,
            _ => ApiErrorCode::OtherError(s.to_owned()),
        })
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorCode::NoError => write!(f, "NoError"),
            ApiErrorCode::NoSuchUser => write!(f, "NoSuchUser"),
            ApiErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            ApiErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            ApiErrorCode::NoSuchSubUser => write!(f, "NoSuchSubUser"),
            ApiErrorCode::InvalidAccessKeyId => write!(f, "InvalidAccessKeyId"),
            ApiErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            ApiErrorCode::AccessDenied => write!(f, "AccessDenied"),
            ApiErrorCode::RequestTimeTooSkewed => write!(f, "RequestTimeTooSkewed"),
            ApiErrorCode::UserAlreadyExists => write!(f, "UserAlreadyExists"),
            ApiErrorCode::SubUserExists => write!(f, "SubUserExists"),
            ApiErrorCode::KeyExists => write!(f, "KeyExists"),
            ApiErrorCode::EmailExists => write!(f, "EmailExists"),
            ApiErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
            ApiErrorCode::InvalidCapability => write!(f, "InvalidCapability"),
            ApiErrorCode::InvalidAccess => write!(f, "InvalidAccess"),
            ApiErrorCode::InvalidKeyType => write!(f, "InvalidKeyType"),
            ApiErrorCode::InvalidSecretKey => write!(f, "InvalidSecretKey"),
            ApiErrorCode::BucketNotEmpty => write!(f, "BucketNotEmpty"),
            ApiErrorCode::BucketAlreadyExists => write!(f, "BucketAlreadyExists"),
            ApiErrorCode::ObjectRemovalFailed => write!(f, "ObjectRemovalFailed"),
            ApiErrorCode::OtherError(code) => write!(f, "{code}"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "RequestId", default)]
    request_id: String,
    #[serde(rename = "HostId", default)]
    host_id: String,
}

/// Error response decoded from a gateway reply.
#[derive(Clone, Debug)]
pub struct ApiErrorResponse {
    status: u16,
    code: ApiErrorCode,
    raw_code: String,
    request_id: String,
    host_id: String,
    headers: HeaderMap,
    body: Bytes,
}

impl ApiErrorResponse {
    /// Decodes `body` as an error reply.
    ///
    /// Returns `None` when the body is not a JSON object or carries no (or an
    /// empty) `Code`, which is the case for every successful reply.
    pub fn parse(status: u16, headers: &HeaderMap, body: &Bytes) -> Option<Self> {
        // arrays would otherwise decode positionally into the struct
        let object = match serde_json::from_slice::<Value>(body).ok()? {
            Value::Object(map) => map,
            _ => return None,
        };
        let parsed: ApiErrorBody = serde_json::from_value(Value::Object(object)).ok()?;
        if parsed.code.is_empty() {
            return None;
        }
        let code = ApiErrorCode::from_str(&parsed.code).unwrap_or_default();
        Some(Self {
            status,
            code,
            raw_code: parsed.code,
            request_id: parsed.request_id,
            host_id: parsed.host_id,
            headers: headers.clone(),
            body: body.clone(),
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn code(&self) -> &ApiErrorCode {
        &self.code
    }

    /// The code exactly as the gateway sent it.
    pub fn raw_code(&self) -> &str {
        &self.raw_code
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &'static str) -> Option<ApiErrorResponse> {
        ApiErrorResponse::parse(200, &HeaderMap::new(), &Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn parses_code_and_ids() {
        let e = parse(r#"{"Code":"NoSuchUser","RequestId":"tx1","HostId":"h1"}"#).unwrap();
        assert_eq!(e.code(), &ApiErrorCode::NoSuchUser);
        assert_eq!(e.raw_code(), "NoSuchUser");
        assert_eq!(e.request_id(), "tx1");
        assert_eq!(e.host_id(), "h1");
        assert_eq!(e.status(), 200);
    }

    #[test]
    fn successful_bodies_are_not_errors() {
        assert!(parse(r#"{"user_id":"u","display_name":"d"}"#).is_none());
        assert!(parse(r#"["u1","u2"]"#).is_none());
        assert!(parse(r#"{"Code":""}"#).is_none());
        assert!(parse("").is_none());
        assert!(parse("not json").is_none());
    }

    #[test]
    fn string_arrays_are_not_errors() {
        assert!(parse(r#"["b1"]"#).is_none());
        assert!(parse(r#"["alice","bob"]"#).is_none());
        assert!(parse(r#"["a","b","c"]"#).is_none());
        assert!(parse(r#"[{"Code":"NoSuchKey"}]"#).is_none());
    }

    #[test]
    fn non_string_code_is_ignored() {
        assert!(parse(r#"{"Code":404}"#).is_none());
    }

    #[test]
    fn unknown_codes_are_kept_verbatim() {
        let e = parse(r#"{"Code":"SomethingNew"}"#).unwrap();
        assert_eq!(e.code(), &ApiErrorCode::OtherError("SomethingNew".into()));
        assert_eq!(e.code().to_string(), "SomethingNew");
    }

    #[test]
    fn codes_match_case_insensitively() {
        assert_eq!(
            "nosuchkey".parse::<ApiErrorCode>().unwrap(),
            ApiErrorCode::NoSuchKey
        );
        assert_eq!(ApiErrorCode::NoSuchKey.to_string(), "NoSuchKey");
    }
}
