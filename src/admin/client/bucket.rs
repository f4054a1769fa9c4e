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

use crate::admin::builders::{
    CheckBucket, CheckBucketBldr, GetBucket, GetBucketBldr, GetBucketPolicy, GetBucketPolicyBldr,
    GetObjectPolicy, GetObjectPolicyBldr, RemoveBucket, RemoveBucketBldr, RemoveObject,
    RemoveObjectBldr, UnlinkBucket, UnlinkBucketBldr,
};
use crate::admin::client::RadosClient;
use crate::admin::config::BucketConfig;

impl RadosClient {
    /// Creates a [`GetBucket`] request builder.
    ///
    /// The gateway answers with bucket names, bucket statistics, or a mix of
    /// both depending on `stats`, `bucket` and `uid`. Every shape is decoded
    /// into a list of [`Bucket`](crate::admin::types::Bucket) records.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use radosgw::admin::client::RadosClient;
    /// use radosgw::admin::config::BucketConfig;
    /// use radosgw::admin::types::AdminApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = RadosClient::new("http://127.0.0.1:7480", "access", "secret", None).unwrap();
    ///     let config = BucketConfig::builder().uid("alice").stats(true).build();
    ///     let resp = client.get_bucket(config).build().send().await.unwrap();
    ///     for bucket in resp.buckets() {
    ///         println!("{} {:?}", bucket.name, bucket.stats.as_ref().map(|s| &s.owner));
    ///     }
    /// }
    /// ```
    pub fn get_bucket(&self, config: BucketConfig) -> GetBucketBldr {
        GetBucket::builder().client(self.clone()).config(config)
    }

    /// Creates a [`RemoveBucket`] request builder.
    pub fn remove_bucket(&self, config: BucketConfig) -> RemoveBucketBldr {
        RemoveBucket::builder().client(self.clone()).config(config)
    }

    /// Creates an [`UnlinkBucket`] request builder, detaching `bucket` from
    /// its owner `uid`.
    pub fn unlink_bucket(&self, config: BucketConfig) -> UnlinkBucketBldr {
        UnlinkBucket::builder().client(self.clone()).config(config)
    }

    /// Creates a [`CheckBucket`] request builder. The index report is
    /// returned as text.
    pub fn check_bucket(&self, config: BucketConfig) -> CheckBucketBldr {
        CheckBucket::builder().client(self.clone()).config(config)
    }

    pub fn remove_object(&self, config: BucketConfig) -> RemoveObjectBldr {
        RemoveObject::builder().client(self.clone()).config(config)
    }

    pub fn get_bucket_policy(&self, config: BucketConfig) -> GetBucketPolicyBldr {
        GetBucketPolicy::builder().client(self.clone()).config(config)
    }

    pub fn get_object_policy(&self, config: BucketConfig) -> GetObjectPolicyBldr {
        GetObjectPolicy::builder().client(self.clone()).config(config)
    }
}
