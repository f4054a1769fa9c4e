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

use crate::admin::client::RadosClient;
use std::marker::PhantomData;
use typed_builder::TypedBuilder;

/// Common parameters of operations driven by a configuration value.
///
/// `C` is the configuration type, `T` marks the operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct AdminCommon<C, T> {
    #[builder(!default)] // force required
    pub(crate) client: RadosClient,

    #[builder(!default)] // force required
    pub(crate) config: C,

    #[builder(default)]
    _operation: PhantomData<T>,
}
