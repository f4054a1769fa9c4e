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

//! Named encoding rules
//!
//! The process-wide registry starts with the built-in rules. Additional rules
//! should be registered during start-up, before requests are issued; the
//! registry is read on every call after that.

use super::rules::*;
use super::{EncodingError, FieldValue};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Turns one field value into an optional query value.
pub type EncodingRule =
    Arc<dyn Fn(&FieldValue<'_>) -> Result<Option<String>, EncodingError> + Send + Sync>;

/// Rule names mapped to rules. Names are case-sensitive.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, EncodingRule>,
}

impl RuleRegistry {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registry holding the built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(IF_STRING_IS_NOT_EMPTY, if_string_is_not_empty);
        registry.register(IF_BOOL_IS_TRUE, if_bool_is_true);
        registry.register(IF_BOOL_IS_FALSE, if_bool_is_false);
        registry.register(ITOA_IF_NOT_NIL, itoa_if_not_nil);
        registry.register(ITOA, itoa);
        registry.register(BOOL_IF_NOT_NIL, bool_if_not_nil);
        registry.register(IF_TIME_IS_NOT_NIL_CEPH, if_time_is_not_nil_ceph);
        registry
    }

    /// Adds a rule, replacing any rule already registered under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, rule: F)
    where
        F: Fn(&FieldValue<'_>) -> Result<Option<String>, EncodingError> + Send + Sync + 'static,
    {
        self.rules.insert(name.into(), Arc::new(rule));
    }

    pub fn lookup(&self, name: &str) -> Option<EncodingRule> {
        self.rules.get(name).cloned()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&EncodingRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.rules.keys().collect();
        names.sort();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}

lazy_static! {
    static ref GLOBAL_RULES: RwLock<RuleRegistry> = RwLock::new(RuleRegistry::with_builtins());
}

/// Adds a rule to the process-wide registry. Last registration wins.
pub fn register_rule<F>(name: impl Into<String>, rule: F)
where
    F: Fn(&FieldValue<'_>) -> Result<Option<String>, EncodingError> + Send + Sync + 'static,
{
    GLOBAL_RULES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, rule);
}

/// Looks up a rule in the process-wide registry.
pub fn lookup_rule(name: &str) -> Option<EncodingRule> {
    GLOBAL_RULES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .lookup(name)
}

/// Runs `f` with shared access to the process-wide registry.
pub fn with_global_rules<R>(f: impl FnOnce(&RuleRegistry) -> R) -> R {
    let guard = GLOBAL_RULES.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}
