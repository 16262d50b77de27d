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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProfileError;

/// Highest port accepted for a connection. Kept at the historical limit
/// rather than 65535.
pub const MAX_PORT: u64 = 32768;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    pub fn default_port(&self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(ProfileError::parse(
                s,
                "protocol must be either 'http' or 'https'",
            )),
        }
    }
}

/// ConnectionProfile is one named entry of the `systems` map in the
/// connection file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Enforce certificate validation. BMCs mostly present self-signed
    /// certificates, so this is off unless asked for.
    #[serde(default)]
    pub secure: bool,
}

impl ConnectionProfile {
    pub fn endpoint(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    // Two profiles point at the same account on the same system when host
    // and credentials match, regardless of the name they are stored under.
    pub fn same_target(&self, other: &ConnectionProfile) -> bool {
        self.host == other.host && self.username == other.username && self.password == other.password
    }
}

/// ProfileFields are the raw values supplied when adding a connection,
/// before any defaulting. A port of 0 means the port was not given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileFields {
    pub host: String,
    pub port: u64,
    pub protocol: String,
    pub username: String,
    pub password: String,
    pub secure: bool,
}

impl Default for ProfileFields {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 0,
            protocol: Protocol::Https.to_string(),
            username: String::new(),
            password: String::new(),
            secure: false,
        }
    }
}

/// ProfileChanges carries a partial update of a stored connection. Only the
/// fields that are Some are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub host: Option<String>,
    pub port: Option<u64>,
    pub protocol: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub secure: Option<bool>,
    pub default: Option<bool>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        *self == ProfileChanges::default()
    }
}
