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

//! Decoder for the bucket listing reply
//!
//! `GET /bucket` answers in one of two shapes depending on the query:
//! an array mixing bucket names and statistics objects, or a single
//! statistics object. Both are turned into a list of [`Bucket`] records.

use crate::admin::types::{Bucket, BucketStats};
use serde_json::Value;

/// One element of a listing array.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingElement {
    Name(String),
    Stats(Box<BucketStats>),
}

impl ListingElement {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::String(name) => Ok(ListingElement::Name(name)),
            other => Ok(ListingElement::Stats(Box::new(serde_json::from_value(other)?))),
        }
    }
}

/// Accumulates listing elements into bucket records.
#[derive(Debug, Default)]
struct ListingState {
    current: Bucket,
    done: Vec<Bucket>,
}

impl ListingState {
    fn flush(&mut self) {
        let record = std::mem::take(&mut self.current);
        self.done.push(record);
    }

    fn accept(&mut self, element: ListingElement) {
        match element {
            ListingElement::Name(name) => {
                if !self.current.name.is_empty() {
                    self.flush();
                }
                self.current.name = name;
            }
            ListingElement::Stats(stats) => {
                if self.current.stats.is_some() {
                    self.flush();
                }
                self.current.stats = Some(*stats);
            }
        }
    }

    fn finish(mut self) -> Vec<Bucket> {
        self.flush();
        self.done
    }
}

/// Decodes a bucket listing body.
///
/// A name starts a new record; statistics attach to the current record. The
/// in-progress record is always emitted at the end, so an empty array yields
/// one empty record. A bare object yields one record with an empty name.
pub fn decode_buckets(body: &[u8]) -> Result<Vec<Bucket>, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => {
            let mut state = ListingState::default();
            for item in items {
                state.accept(ListingElement::from_value(item)?);
            }
            Ok(state.finish())
        }
        other => Ok(vec![Bucket {
            name: String::new(),
            stats: Some(serde_json::from_value(other)?),
        }]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str) -> BucketStats {
        BucketStats {
            bucket: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn interleaved_names_and_stats() {
        let buckets =
            decode_buckets(br#"["b1", {"bucket": "b1", "owner": "alice"}, "b2"]"#).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "b1");
        assert_eq!(buckets[0].stats.as_ref().unwrap().owner, "alice");
        assert_eq!(buckets[1], Bucket { name: "b2".into(), stats: None });
    }

    #[test]
    fn plain_name_list() {
        let buckets = decode_buckets(br#"["a", "b", "c"]"#).unwrap();
        let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(buckets.iter().all(|b| b.stats.is_none()));
    }

    #[test]
    fn consecutive_stats_start_new_records() {
        let buckets = decode_buckets(br#"[{"bucket": "x"}, {"bucket": "y"}]"#).unwrap();
        assert_eq!(
            buckets,
            vec![
                Bucket { name: String::new(), stats: Some(stats("x")) },
                Bucket { name: String::new(), stats: Some(stats("y")) },
            ]
        );
    }

    #[test]
    fn bare_object_is_one_unnamed_record() {
        let buckets = decode_buckets(br#"{"bucket": "x", "usage": {"rgw.main": {"num_objects": 3}}}"#)
            .unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name, "");
        let stats = buckets[0].stats.as_ref().unwrap();
        assert_eq!(stats.bucket, "x");
        assert_eq!(stats.usage["rgw.main"].num_objects, 3);
    }

    #[test]
    fn empty_array_yields_one_empty_record() {
        assert_eq!(decode_buckets(b"[]").unwrap(), vec![Bucket::default()]);
    }

    #[test]
    fn single_name_is_one_record() {
        assert_eq!(
            decode_buckets(br#"["only"]"#).unwrap(),
            vec![Bucket { name: "only".into(), stats: None }]
        );
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(decode_buckets(b"not json").is_err());
        assert!(decode_buckets(b"[1]").is_err());
        assert!(decode_buckets(br#""just a string""#).is_err());
    }
}
