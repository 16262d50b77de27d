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

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use super::{ConnectionProfile, ProfileError};

/// File name of the connection document in the user's home directory.
pub const DEFAULT_FILE_NAME: &str = ".ctlfish.yaml";

// ProfileDocument is the on-disk layout of the connection file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct ProfileDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    default: String,
    #[serde(default, deserialize_with = "null_as_default")]
    systems: BTreeMap<String, ConnectionProfile>,
}

// A hand-edited file may carry `systems:` or `default:` with no value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// ProfileStore holds the named connection profiles loaded from the
/// connection file. Every mutation writes the whole document back out.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    document: ProfileDocument,
}

impl ProfileStore {
    /// `$HOME/.ctlfish.yaml`
    pub fn default_path() -> Result<PathBuf, ProfileError> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_FILE_NAME))
            .ok_or(ProfileError::NoHomeDirectory)
    }

    /// load reads the connection file at `path`, creating an empty one
    /// (and any missing parent directories) if it doesn't exist yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let path = path.into();
        if !path.exists() {
            let store = ProfileStore {
                path,
                document: ProfileDocument::default(),
            };
            if let Some(parent) = store.path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|source| ProfileError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            store.persist()?;
            debug!("Created connection file {}", store.path.display());
            return Ok(store);
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ProfileError::Io {
            path: path.clone(),
            source,
        })?;
        let mut document: ProfileDocument = if contents.trim().is_empty() {
            ProfileDocument::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|source| ProfileError::Yaml {
                path: path.clone(),
                source,
            })?
        };

        if !document.default.is_empty() && !document.systems.contains_key(&document.default) {
            warn!(
                "Default connection '{}' in {} does not exist, ignoring it",
                document.default,
                path.display()
            );
            document.default.clear();
        }

        debug!(
            "Loaded {} connection(s) from {}",
            document.systems.len(),
            path.display()
        );
        Ok(ProfileStore { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ProfileError> {
        let contents = serde_yaml::to_string(&self.document).map_err(|source| ProfileError::Yaml {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, contents).map_err(|source| ProfileError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Wrote connection file {}", self.path.display());
        Ok(())
    }

    /// get looks a profile up by name, falling back to the first profile
    /// (in name order) whose host is `name`.
    pub fn get(&self, name: &str) -> Option<&ConnectionProfile> {
        self.get_entry(name).map(|(_, profile)| profile)
    }

    /// Same lookup as `get`, also returning the name the profile is stored under.
    pub fn get_entry(&self, name: &str) -> Option<(&str, &ConnectionProfile)> {
        if let Some((key, profile)) = self.document.systems.get_key_value(name) {
            return Some((key.as_str(), profile));
        }
        self.document
            .systems
            .iter()
            .find(|(_, profile)| profile.host == name)
            .map(|(key, profile)| (key.as_str(), profile))
    }

    pub fn list(&self) -> &BTreeMap<String, ConnectionProfile> {
        &self.document.systems
    }

    pub fn len(&self) -> usize {
        self.document.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.systems.is_empty()
    }

    pub fn add(
        &mut self,
        name: &str,
        profile: ConnectionProfile,
        make_default: bool,
    ) -> Result<(), ProfileError> {
        if self.document.systems.contains_key(name) {
            return Err(ProfileError::DuplicateName(name.to_string()));
        }
        self.document.systems.insert(name.to_string(), profile);
        if make_default {
            self.document.default = name.to_string();
        }
        self.persist()
    }

    pub fn replace(&mut self, name: &str, profile: ConnectionProfile) -> Result<(), ProfileError> {
        match self.document.systems.get_mut(name) {
            Some(existing) => *existing = profile,
            None => return Err(ProfileError::NotFound(name.to_string())),
        }
        self.persist()
    }

    /// remove deletes the named profile, clearing the default if it pointed
    /// there. Removing a name that isn't stored is not an error.
    pub fn remove(&mut self, name: &str) -> Result<(), ProfileError> {
        if self.document.systems.remove(name).is_none() {
            debug!("No connection named '{name}' to remove");
            return Ok(());
        }
        if self.document.default == name {
            self.document.default.clear();
        }
        self.persist()
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), ProfileError> {
        if !self.document.systems.contains_key(name) {
            return Err(ProfileError::NotFound(name.to_string()));
        }
        self.document.default = name.to_string();
        self.persist()
    }

    pub fn clear_default(&mut self) -> Result<(), ProfileError> {
        self.document.default.clear();
        self.persist()
    }

    /// Name of the default profile, empty when none is set.
    pub fn get_default_name(&self) -> &str {
        &self.document.default
    }

    /// is_default compares by value (host and credentials) against the
    /// profile used when no name is given: the configured default, or the
    /// only stored profile when no default is set.
    pub fn is_default(&self, profile: &ConnectionProfile) -> bool {
        let default = match self.document.systems.get(&self.document.default) {
            Some(default) => Some(default),
            None if self.document.systems.len() == 1 => self.document.systems.values().next(),
            None => None,
        };
        default.is_some_and(|default| default.same_target(profile))
    }
}
