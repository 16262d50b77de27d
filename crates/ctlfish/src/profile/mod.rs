/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

// The profile module owns the local connection profile document: the
// persisted store, and the resolver that picks a profile for a command
// and applies add/update semantics on top of the store.

pub mod error;
pub mod model;
pub mod resolver;
pub mod store;

pub use error::ProfileError;
pub use model::{ConnectionProfile, ProfileChanges, ProfileFields, Protocol};
pub use store::ProfileStore;
