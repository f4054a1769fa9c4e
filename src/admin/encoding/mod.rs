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

//! Field encoding rules and the configuration-to-query translator
//!
//! Each configuration type lists its fields through [`QueryConfig`]. Every
//! field names a query parameter and an encoding rule; the rule turns the
//! field value into an optional query value. Rules are looked up by name in a
//! [`RuleRegistry`], either the process-wide one or one supplied by the caller.

mod registry;
mod rules;
mod translate;

pub use registry::*;
pub use rules::*;
pub use translate::*;

use crate::admin::utils::UtcTime;
use thiserror::Error;

/// A borrowed view of one configuration field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Bool(bool),
    OptBool(Option<bool>),
    Int(i64),
    OptInt(Option<i64>),
    OptTime(Option<&'a UtcTime>),
}

impl FieldValue<'_> {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "string",
            FieldValue::Bool(_) => "bool",
            FieldValue::OptBool(_) => "optional bool",
            FieldValue::Int(_) => "integer",
            FieldValue::OptInt(_) => "optional integer",
            FieldValue::OptTime(_) => "optional time",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("rule {rule} expects a {expected} value, got {found}")]
    UnexpectedType {
        rule: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Invalid(String),

    #[error("field {param}: {source}")]
    Field {
        param: &'static str,
        #[source]
        source: Box<EncodingError>,
    },
}

impl EncodingError {
    pub(crate) fn unexpected(rule: &'static str, expected: &'static str, value: &FieldValue) -> Self {
        EncodingError::UnexpectedType {
            rule,
            expected,
            found: value.kind(),
        }
    }
}
