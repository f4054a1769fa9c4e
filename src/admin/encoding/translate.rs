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

use super::registry::{RuleRegistry, with_global_rules};
use super::{EncodingError, FieldValue};
use crate::admin::multimap_ext::{Multimap, MultimapExt};
use log::debug;

/// One field of a configuration value: query parameter, rule name and value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigField<'a> {
    pub param: &'static str,
    pub rule: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> ConfigField<'a> {
    pub fn new(param: &'static str, rule: &'static str, value: FieldValue<'a>) -> Self {
        Self { param, rule, value }
    }
}

/// A configuration value that can be turned into query parameters.
pub trait QueryConfig {
    /// Fields in declaration order.
    fn fields(&self) -> Vec<ConfigField<'_>>;
}

/// Result of translating a configuration value.
#[derive(Clone, Debug, Default)]
pub struct Translation {
    pub params: Multimap,
    /// Per-field failures, in field order.
    pub errors: Vec<EncodingError>,
}

impl Translation {
    /// Returns the parameters, or the first field error.
    pub fn into_result(self) -> Result<Multimap, EncodingError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.params),
        }
    }
}

/// Translates `config` using the process-wide registry.
pub fn translate<C: QueryConfig + ?Sized>(config: &C) -> Translation {
    with_global_rules(|registry| translate_with(registry, config))
}

/// Translates `config` using `registry`.
///
/// Fields whose rule is not registered are left out. A failing field is
/// recorded and the remaining fields are still translated.
pub fn translate_with<C: QueryConfig + ?Sized>(registry: &RuleRegistry, config: &C) -> Translation {
    let mut translation = Translation::default();
    for field in config.fields() {
        let Some(rule) = registry.get(field.rule) else {
            debug!("no encoding rule named {}, skipping {}", field.rule, field.param);
            continue;
        };
        match rule(&field.value) {
            Ok(Some(value)) => translation.params.add(field.param, value),
            Ok(None) => {}
            Err(err) => translation.errors.push(EncodingError::Field {
                param: field.param,
                source: Box::new(err),
            }),
        }
    }
    translation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::encoding::{IF_BOOL_IS_TRUE, IF_STRING_IS_NOT_EMPTY, ITOA_IF_NOT_NIL};

    struct Sample {
        name: String,
        flag: bool,
        count: Option<i64>,
    }

    impl QueryConfig for Sample {
        fn fields(&self) -> Vec<ConfigField<'_>> {
            vec![
                ConfigField::new("name", IF_STRING_IS_NOT_EMPTY, FieldValue::Str(&self.name)),
                ConfigField::new("flag", IF_BOOL_IS_TRUE, FieldValue::Bool(self.flag)),
                ConfigField::new("count", ITOA_IF_NOT_NIL, FieldValue::OptInt(self.count)),
                ConfigField::new("extra", "noSuchRule", FieldValue::Str("ignored")),
            ]
        }
    }

    struct Mistyped;

    impl QueryConfig for Mistyped {
        fn fields(&self) -> Vec<ConfigField<'_>> {
            vec![
                ConfigField::new("a", IF_STRING_IS_NOT_EMPTY, FieldValue::Bool(true)),
                ConfigField::new("b", IF_STRING_IS_NOT_EMPTY, FieldValue::Str("kept")),
                ConfigField::new("c", IF_BOOL_IS_TRUE, FieldValue::Str("x")),
            ]
        }
    }

    #[test]
    fn translates_set_fields_only() {
        let t = translate(&Sample {
            name: "alice".into(),
            flag: true,
            count: Some(5),
        });
        assert!(t.errors.is_empty());
        assert_eq!(t.params.to_query_string(), "count=5&flag=True&name=alice");
    }

    #[test]
    fn unset_fields_and_unknown_rules_are_omitted() {
        let t = translate(&Sample {
            name: String::new(),
            flag: false,
            count: None,
        });
        assert!(t.errors.is_empty());
        assert!(t.params.is_empty());
    }

    #[test]
    fn errors_are_collected_without_stopping() {
        let t = translate_with(&RuleRegistry::with_builtins(), &Mistyped);
        assert_eq!(t.errors.len(), 2);
        assert_eq!(t.params.get("b").map(String::as_str), Some("kept"));
        match &t.errors[0] {
            EncodingError::Field { param, .. } => assert_eq!(*param, "a"),
            other => panic!("unexpected error {other:?}"),
        }
        let first = t.into_result().unwrap_err();
        assert!(first.to_string().starts_with("field a:"));
    }

    #[test]
    fn explicit_registry_is_used() {
        let mut registry = RuleRegistry::new();
        registry.register(IF_STRING_IS_NOT_EMPTY, |_: &FieldValue<'_>| {
            Ok(Some("fixed".to_string()))
        });
        let t = translate_with(
            &registry,
            &Sample {
                name: String::new(),
                flag: true,
                count: Some(1),
            },
        );
        // only the overridden rule exists in this registry
        assert_eq!(t.params.to_query_string(), "name=fixed");
    }
}
