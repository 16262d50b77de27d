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

use redfish_client::RedfishError;

use crate::profile::ProfileError;

#[derive(thiserror::Error, Debug)]
pub enum CtlfishCliError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("{kind} '{name}' was not found.")]
    NotFound { kind: &'static str, name: String },

    #[error("failed to connect to '{endpoint}': {source}")]
    ConnectionError {
        endpoint: String,
        source: RedfishError,
    },

    /// The remote service rejected a reset or an update.
    #[error("{0}")]
    RemoteOperationError(String),

    #[error("{context}: {source}")]
    RemoteRequestError {
        context: String,
        source: RedfishError,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Generic Error: {0}")]
    GenericError(String),

    #[error("I/O error. Does the file exist? {0}")]
    IOError(#[from] std::io::Error),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Error while writing into string: {0}")]
    StringWriteError(#[from] std::fmt::Error),
}

impl CtlfishCliError {
    pub fn not_found(kind: &'static str, name: &str) -> Self {
        CtlfishCliError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    // remote_operation prefers the message from the Redfish error body over
    // the transport error text.
    pub fn remote_operation(prefix: &str, err: RedfishError) -> Self {
        let message = err.remote_message().unwrap_or_else(|| err.to_string());
        CtlfishCliError::RemoteOperationError(format!("{prefix}: {message}"))
    }

    pub fn remote_request(context: &str) -> impl FnOnce(RedfishError) -> Self + '_ {
        move |source| CtlfishCliError::RemoteRequestError {
            context: context.to_string(),
            source,
        }
    }
}

pub type CtlfishCliResult<T> = Result<T, CtlfishCliError>;

#[cfg(test)]
mod tests {
    use redfish_client::HttpStatusCode;

    use super::*;

    #[test]
    fn remote_operation_uses_redfish_message() {
        let err = RedfishError::HTTPErrorCode {
            url: "https://bmc/redfish/v1/Chassis/1U/Actions/Chassis.Reset".to_string(),
            status_code: HttpStatusCode::CONFLICT,
            response_body: r#"{"error":{"code":"Base.1.8.GeneralError","message":"Chassis is busy"}}"#
                .to_string(),
        };

        let cli_err = CtlfishCliError::remote_operation("error performing reset", err);

        assert_eq!(cli_err.to_string(), "error performing reset: Chassis is busy");
    }

    #[test]
    fn remote_operation_falls_back_to_transport_text() {
        let err = RedfishError::APIError {
            url: "https://bmc/".to_string(),
            status: HttpStatusCode::BAD_GATEWAY,
            message: "upstream closed".to_string(),
        };

        let cli_err = CtlfishCliError::remote_operation("error performing reset", err);

        assert!(cli_err.to_string().contains("upstream closed"));
    }

    #[test]
    fn profile_errors_display_unchanged() {
        let err: CtlfishCliError = ProfileError::DuplicateName("lab1".to_string()).into();

        assert_eq!(
            err.to_string(),
            ProfileError::DuplicateName("lab1".to_string()).to_string()
        );
    }
}
