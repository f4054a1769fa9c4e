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

use crate::admin::utils::urlencode;
use multimap::MultiMap;

/// Multimap for string key and string value
pub type Multimap = MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            for value in values {
                self.insert(key.clone(), value);
            }
        }
    }

    fn to_query_string(&self) -> String {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        let mut query = String::new();
        for key in keys {
            if let Some(values) = self.get_vec(key) {
                for value in values {
                    if !query.is_empty() {
                        query.push('&');
                    }
                    query.push_str(&urlencode(key));
                    query.push('=');
                    query.push_str(&urlencode(value));
                }
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, values) in self.iter_all() {
            for value in values {
                pairs.push((urlencode(key).into_owned(), urlencode(value).into_owned()));
            }
        }
        pairs.sort();

        let mut query = String::new();
        for (key, value) in pairs {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&key);
            query.push('=');
            query.push_str(&value);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_encoded_and_ordered() {
        let mut m = Multimap::new();
        m.add("uid", "john doe");
        m.add("format", "json");
        assert_eq!(m.to_query_string(), "format=json&uid=john%20doe");
    }

    #[test]
    fn canonical_query_string_sorts_by_key_then_value() {
        let mut m = Multimap::new();
        m.add("b", "2");
        m.add("a", "z");
        m.add("a", "y");
        m.add("subuser", "");
        assert_eq!(m.get_canonical_query_string(), "a=y&a=z&b=2&subuser=");
    }

    #[test]
    fn add_multimap_merges_all_values() {
        let mut m = Multimap::new();
        m.add("uid", "a");
        let mut other = Multimap::new();
        other.add("format", "json");
        m.add_multimap(other);
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("format").map(String::as_str), Some("json"));
    }
}
