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

use super::model::MAX_PORT;
use super::{ConnectionProfile, ProfileChanges, ProfileError, ProfileFields, ProfileStore, Protocol};

/// ParsedEndpoint is what `parse_endpoint` pulls out of a
/// `scheme://host[:port][/path]` string. A port of 0 or no port at all
/// leaves `port` empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEndpoint {
    pub protocol: Protocol,
    pub host: String,
    pub port: Option<u16>,
}

/// resolve picks the profile a command runs against:
/// the explicit name if one was given, else the lone profile when no
/// default is configured, else the configured default.
pub fn resolve<'a>(
    store: &'a ProfileStore,
    explicit_name: Option<&str>,
) -> Result<&'a ConnectionProfile, ProfileError> {
    if let Some(name) = explicit_name {
        return store
            .get(name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()));
    }

    let default = store.get_default_name();
    if default.is_empty() && store.len() == 1 {
        return store
            .list()
            .values()
            .next()
            .ok_or(ProfileError::NoDefaultConfigured);
    }

    if default.is_empty() {
        return Err(ProfileError::NoDefaultConfigured);
    }
    store.get(default).ok_or(ProfileError::NoDefaultConfigured)
}

pub fn parse_endpoint(input: &str) -> Result<ParsedEndpoint, ProfileError> {
    let Some((scheme, rest)) = input.split_once("://") else {
        return Err(ProfileError::parse(input, "expected scheme://host[:port]"));
    };
    let protocol: Protocol = scheme
        .parse()
        .map_err(|_| ProfileError::parse(input, format!("unsupported scheme '{scheme}'")))?;

    // Anything after the authority is a resource path, like /redfish/v1.
    let authority = rest.split('/').next().unwrap_or_default();

    let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
        // [v6 address]:port
        let Some((addr, after)) = bracketed.split_once(']') else {
            return Err(ProfileError::parse(input, "unterminated '[' in host"));
        };
        let port = match after.strip_prefix(':') {
            Some(port) => Some(port),
            None if after.is_empty() => None,
            None => return Err(ProfileError::parse(input, "unexpected text after host")),
        };
        (format!("[{addr}]"), port)
    } else {
        match authority.split_once(':') {
            Some((host, port)) => (host.to_string(), Some(port)),
            None => (authority.to_string(), None),
        }
    };

    if host.is_empty() || host == "[]" {
        return Err(ProfileError::parse(input, "missing host"));
    }

    let port = match port {
        None => None,
        Some(port) => {
            let value: u64 = port
                .parse()
                .map_err(|e| ProfileError::parse(input, format!("invalid port '{port}': {e}")))?;
            if value > MAX_PORT {
                return Err(ProfileError::InvalidPort(value));
            }
            // MAX_PORT fits in u16, 0 means "not given".
            u16::try_from(value).ok().filter(|p| *p != 0)
        }
    };

    Ok(ParsedEndpoint {
        protocol,
        host,
        port,
    })
}

fn check_port(port: u64) -> Result<u16, ProfileError> {
    if port > MAX_PORT {
        return Err(ProfileError::InvalidPort(port));
    }
    u16::try_from(port).map_err(|_| ProfileError::InvalidPort(port))
}

/// add_profile applies the field defaulting rules and stores a new profile
/// under `name`. Fails if `name` already resolves, by name or by host.
pub fn add_profile(
    store: &mut ProfileStore,
    name: &str,
    fields: ProfileFields,
    make_default: bool,
) -> Result<ConnectionProfile, ProfileError> {
    if store.get(name).is_some() {
        return Err(ProfileError::DuplicateName(name.to_string()));
    }

    let mut port = check_port(fields.port)?;
    let mut protocol: Protocol = fields.protocol.parse()?;
    let mut host = if fields.host.is_empty() {
        name.to_string()
    } else {
        fields.host
    };

    if host.contains("://") {
        let parsed = parse_endpoint(&host)?;
        protocol = parsed.protocol;
        host = parsed.host;
        if let Some(parsed_port) = parsed.port {
            port = parsed_port;
        }
    }

    if port == 0 {
        port = protocol.default_port();
    }

    let profile = ConnectionProfile {
        host,
        port,
        protocol,
        username: fields.username,
        password: fields.password,
        secure: fields.secure,
    };
    store.add(name, profile.clone(), make_default)?;
    debug!("Added connection '{name}' for {}", profile.endpoint());
    Ok(profile)
}

/// update_profile applies `changes` to the profile `name` resolves to and
/// returns the name it is stored under with its new value. Everything is
/// validated before the store is touched.
pub fn update_profile(
    store: &mut ProfileStore,
    name: &str,
    changes: ProfileChanges,
) -> Result<(String, ConnectionProfile), ProfileError> {
    let (key, current) = store
        .get_entry(name)
        .map(|(key, profile)| (key.to_string(), profile.clone()))
        .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;

    let explicit_port = changes.port.map(check_port).transpose()?;
    let was_default = store.is_default(&current);

    let mut next = current.clone();
    let mut parsed_port = None;
    if let Some(protocol) = changes.protocol.as_deref() {
        next.protocol = protocol.parse()?;
    }
    if let Some(host) = changes.host {
        if host.contains("://") {
            let parsed = parse_endpoint(&host)?;
            next.protocol = parsed.protocol;
            next.host = parsed.host;
            parsed_port = parsed.port;
        } else {
            next.host = if host.is_empty() { key.clone() } else { host };
        }
    }
    // A port in the endpoint string wins over --port, as on add.
    if let Some(port) = parsed_port {
        next.port = port;
    } else if let Some(port) = explicit_port {
        next.port = if port == 0 {
            next.protocol.default_port()
        } else {
            port
        };
    }
    if let Some(username) = changes.username {
        next.username = username;
    }
    if let Some(password) = changes.password {
        next.password = password;
    }
    if let Some(secure) = changes.secure {
        next.secure = secure;
    }

    store.replace(&key, next.clone())?;

    match changes.default {
        Some(true) => store.set_default(&key)?,
        Some(false) if store.get_default_name() == key => store.clear_default()?,
        Some(false) => {}
        None if was_default && store.get_default_name() != key => store.set_default(&key)?,
        None => {}
    }

    debug!("Updated connection '{key}'");
    Ok((key, next))
}
