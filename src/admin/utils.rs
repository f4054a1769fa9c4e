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

//! Various utility and helper functions

use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};
pub use urlencoding::decode as urldecode;
pub use urlencoding::encode as urlencode;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA256 of an empty payload.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Payload hash marker used by query-string (presigned) signatures.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Gets the `YYYY-MM-DD HH:MM:SS` form the gateway accepts for usage ranges.
pub fn to_ceph_time(time: &UtcTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes a request path, keeping `/` separators intact.
pub fn urlencode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ENCODE_SET).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ceph_time_is_zero_padded_without_zone() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(to_ceph_time(&t), "2024-03-05 07:08:09");
    }

    #[test]
    fn amz_and_signer_dates() {
        let t = Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap();
        assert_eq!(to_amz_date(t), "20130524T000000Z");
        assert_eq!(to_signer_date(t), "20130524");
    }

    #[test]
    fn empty_payload_hash() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn path_encoding_keeps_separators() {
        assert_eq!(urlencode_path("/admin/user"), "/admin/user");
        assert_eq!(urlencode_path("/my admin/user"), "/my%20admin/user");
    }
}
