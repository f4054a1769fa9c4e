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

//! Argument builders for [`RadosClient`](crate::admin::client::RadosClient) APIs

mod admin_common;
mod bucket;
mod capability;
mod key;
mod quota;
mod subuser;
mod usage;
mod user;

pub use admin_common::*;
pub use bucket::*;
pub use capability::*;
pub use key::*;
pub use quota::*;
pub use subuser::*;
pub use usage::*;
pub use user::*;

use crate::admin::encoding::{QueryConfig, translate};
use crate::admin::error::{Error, ValidationErr};
use crate::admin::multimap_ext::{Multimap, MultimapExt};

/// Fails with [`ValidationErr::MissingField`] when `value` is empty.
pub(crate) fn check_required(value: &str, field: &'static str) -> Result<(), ValidationErr> {
    if value.is_empty() {
        return Err(ValidationErr::missing(field));
    }
    Ok(())
}

/// Translates `config` and adds `format=json`. The first field error wins.
pub(crate) fn to_query<C: QueryConfig + ?Sized>(config: &C) -> Result<Multimap, Error> {
    let mut query = translate(config).into_result()?;
    query.add("format", "json");
    Ok(query)
}

/// Query carrying only `format=json`.
pub(crate) fn json_query() -> Multimap {
    let mut query = Multimap::new();
    query.add("format", "json");
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::config::{BucketConfig, UserConfig};

    #[test]
    fn default_config_query_is_only_format() {
        assert_eq!(
            to_query(&UserConfig::default()).unwrap().to_query_string(),
            "format=json"
        );
        assert_eq!(
            to_query(&BucketConfig::default()).unwrap().to_query_string(),
            "format=json"
        );
        assert_eq!(json_query().to_query_string(), "format=json");
    }

    #[test]
    fn missing_field_is_named() {
        assert_eq!(
            check_required("", "UID").unwrap_err().to_string(),
            "UID field is required"
        );
        assert!(check_required("alice", "UID").is_ok());
    }
}
