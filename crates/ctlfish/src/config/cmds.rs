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

use tracing::debug;

use super::args::{AddOptions, GetOptions, RemoveOptions, SetOptions};
use crate::errors::CtlfishCliResult;
use crate::profile::{
    ConnectionProfile, ProfileChanges, ProfileError, ProfileFields, ProfileStore, resolver,
};
use crate::table::TableWriter;

pub const HEADERS: &[&str] = &[" ", "name", "user", "endpoint"];

fn add_row(
    store: &ProfileStore,
    name: &str,
    profile: &ConnectionProfile,
    table: &mut dyn TableWriter,
) {
    let marker = if store.get_default_name() == name { "*" } else { " " };
    table.add_row(vec![
        marker.to_string(),
        name.to_string(),
        profile.username.clone(),
        profile.endpoint(),
    ]);
}

pub fn get(
    opts: &GetOptions,
    store: &ProfileStore,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    match opts.name.as_deref() {
        Some(name) => {
            let (key, profile) = store
                .get_entry(name)
                .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;
            add_row(store, key, profile, table);
        }
        None => {
            for (name, profile) in store.list() {
                add_row(store, name, profile, table);
            }
        }
    }
    Ok(())
}

pub fn add(
    opts: &AddOptions,
    store: &mut ProfileStore,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let fields = ProfileFields {
        host: opts.host.clone().unwrap_or_default(),
        port: opts.port,
        protocol: opts.protocol.clone(),
        username: opts.user.clone().unwrap_or_default(),
        password: opts.password.clone().unwrap_or_default(),
        secure: opts.secure,
    };
    let profile = resolver::add_profile(store, &opts.name, fields, opts.default)?;
    debug!("Stored connection '{}' in {}", opts.name, store.path().display());

    add_row(store, &opts.name, &profile, table);
    Ok(())
}

pub fn remove(opts: &RemoveOptions, store: &mut ProfileStore) -> CtlfishCliResult<()> {
    store.remove(&opts.name)?;
    Ok(())
}

pub fn set(
    opts: &SetOptions,
    store: &mut ProfileStore,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let changes = ProfileChanges {
        host: opts.host.clone(),
        port: opts.port,
        protocol: opts.protocol.clone(),
        username: opts.user.clone(),
        password: opts.password.clone(),
        secure: opts.secure,
        default: opts.default,
    };
    let (key, profile) = resolver::update_profile(store, &opts.name, changes)?;

    add_row(store, &key, &profile, table);
    Ok(())
}
