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

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("connection '{0}' was not found.")]
    NotFound(String),

    #[error(
        "a connection named '{0}' already exists. Remove and re-add it, or update it with 'config set'."
    )]
    DuplicateName(String),

    #[error("port value of {0} is not valid, it must be between 0 and 32768.")]
    InvalidPort(u64),

    #[error("failed to parse endpoint string '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error(
        "unable to get system connection information.\nSet default to use or provide on command line with -c [NAME]."
    )]
    NoDefaultConfigured,

    #[error("unable to locate the home directory for the connection file")]
    NoHomeDirectory,

    #[error("error accessing connection file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading connection file {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl ProfileError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        ProfileError::ParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
