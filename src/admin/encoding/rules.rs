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

//! Built-in encoding rules

use super::{EncodingError, FieldValue};
use crate::admin::utils::to_ceph_time;

pub const IF_STRING_IS_NOT_EMPTY: &str = "ifStringIsNotEmpty";
pub const IF_BOOL_IS_TRUE: &str = "ifBoolIsTrue";
pub const IF_BOOL_IS_FALSE: &str = "ifBoolIsFalse";
pub const ITOA_IF_NOT_NIL: &str = "itoaIfNotNil";
pub const ITOA: &str = "itoa";
pub const BOOL_IF_NOT_NIL: &str = "boolIfNotNil";
pub const IF_TIME_IS_NOT_NIL_CEPH: &str = "ifTimeIsNotNilCeph";

const TRUE: &str = "True";
const FALSE: &str = "False";

fn bool_str(b: bool) -> String {
    (if b { TRUE } else { FALSE }).to_string()
}

/// Emits the string verbatim unless it is empty.
pub fn if_string_is_not_empty(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::Str(s) if s.is_empty() => Ok(None),
        FieldValue::Str(s) => Ok(Some(s.to_string())),
        v => Err(EncodingError::unexpected(IF_STRING_IS_NOT_EMPTY, "string", v)),
    }
}

/// Emits `True` when the flag is set.
pub fn if_bool_is_true(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::Bool(true) => Ok(Some(bool_str(true))),
        FieldValue::Bool(false) => Ok(None),
        v => Err(EncodingError::unexpected(IF_BOOL_IS_TRUE, "bool", v)),
    }
}

/// Emits `False` when the flag is clear.
pub fn if_bool_is_false(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::Bool(false) => Ok(Some(bool_str(false))),
        FieldValue::Bool(true) => Ok(None),
        v => Err(EncodingError::unexpected(IF_BOOL_IS_FALSE, "bool", v)),
    }
}

pub fn itoa_if_not_nil(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::OptInt(n) => Ok(n.map(|n| n.to_string())),
        v => Err(EncodingError::unexpected(ITOA_IF_NOT_NIL, "optional integer", v)),
    }
}

pub fn itoa(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::Int(n) => Ok(Some(n.to_string())),
        v => Err(EncodingError::unexpected(ITOA, "integer", v)),
    }
}

pub fn bool_if_not_nil(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::OptBool(b) => Ok(b.map(bool_str)),
        v => Err(EncodingError::unexpected(BOOL_IF_NOT_NIL, "optional bool", v)),
    }
}

/// Emits the time as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn if_time_is_not_nil_ceph(value: &FieldValue) -> Result<Option<String>, EncodingError> {
    match value {
        FieldValue::OptTime(t) => Ok(t.map(to_ceph_time)),
        v => Err(EncodingError::unexpected(IF_TIME_IS_NOT_NIL_CEPH, "optional time", v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn string_rule() {
        assert_eq!(if_string_is_not_empty(&FieldValue::Str("")), Ok(None));
        assert_eq!(
            if_string_is_not_empty(&FieldValue::Str("john doe")),
            Ok(Some("john doe".to_string()))
        );
    }

    #[test]
    fn bool_rules_mirror_each_other() {
        assert_eq!(if_bool_is_false(&FieldValue::Bool(true)), Ok(None));
        assert_eq!(
            if_bool_is_false(&FieldValue::Bool(false)),
            Ok(Some("False".to_string()))
        );
        assert_eq!(if_bool_is_true(&FieldValue::Bool(false)), Ok(None));
        assert_eq!(
            if_bool_is_true(&FieldValue::Bool(true)),
            Ok(Some("True".to_string()))
        );
    }

    #[test]
    fn optional_rules_omit_unset_values() {
        assert_eq!(itoa_if_not_nil(&FieldValue::OptInt(None)), Ok(None));
        assert_eq!(
            itoa_if_not_nil(&FieldValue::OptInt(Some(-3))),
            Ok(Some("-3".to_string()))
        );
        assert_eq!(itoa(&FieldValue::Int(0)), Ok(Some("0".to_string())));
        assert_eq!(bool_if_not_nil(&FieldValue::OptBool(None)), Ok(None));
        assert_eq!(
            bool_if_not_nil(&FieldValue::OptBool(Some(false))),
            Ok(Some("False".to_string()))
        );
    }

    #[test]
    fn ceph_time_rule() {
        assert_eq!(if_time_is_not_nil_ceph(&FieldValue::OptTime(None)), Ok(None));
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(
            if_time_is_not_nil_ceph(&FieldValue::OptTime(Some(&t))),
            Ok(Some("2024-03-05 07:08:09".to_string()))
        );
    }

    #[test]
    fn wrong_kind_is_an_error() {
        assert_eq!(
            if_string_is_not_empty(&FieldValue::Bool(true)),
            Err(EncodingError::UnexpectedType {
                rule: IF_STRING_IS_NOT_EMPTY,
                expected: "string",
                found: "bool",
            })
        );
        assert!(if_bool_is_true(&FieldValue::Str("true")).is_err());
        assert!(if_bool_is_false(&FieldValue::OptBool(Some(false))).is_err());
        assert!(itoa_if_not_nil(&FieldValue::Int(1)).is_err());
        assert!(itoa(&FieldValue::OptInt(Some(1))).is_err());
        assert!(bool_if_not_nil(&FieldValue::Bool(true)).is_err());
        assert!(if_time_is_not_nil_ceph(&FieldValue::Str("2024-01-01")).is_err());
    }

    quickcheck! {
        fn prop_non_empty_strings_pass_through(s: String) -> bool {
            let out = if_string_is_not_empty(&FieldValue::Str(&s)).unwrap();
            if s.is_empty() { out.is_none() } else { out.as_deref() == Some(s.as_str()) }
        }

        fn prop_itoa_round_trips(n: i64) -> bool {
            itoa_if_not_nil(&FieldValue::OptInt(Some(n))).unwrap()
                .and_then(|s| s.parse::<i64>().ok()) == Some(n)
        }

        fn prop_bool_rules_emit_at_most_one(b: bool) -> bool {
            let t = if_bool_is_true(&FieldValue::Bool(b)).unwrap();
            let f = if_bool_is_false(&FieldValue::Bool(b)).unwrap();
            t.is_some() != f.is_some()
        }
    }
}
