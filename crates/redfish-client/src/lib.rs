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

mod redfish_api;
pub mod redfish_model;

use std::time::Duration;

use reqwest::header::{
    ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, IF_MATCH, LOCATION, USER_AGENT,
};
use reqwest::{Client as HttpClient, ClientBuilder, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::redfish_api::RedfishApi;
pub use crate::redfish_model::*;
pub use reqwest::StatusCode as HttpStatusCode;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_CONTENT_LENGTH: u64 = 20 * 1024 * 1024;
const X_AUTH_TOKEN: HeaderName = HeaderName::from_static("x-auth-token");

pub const SERVICE_ROOT: &str = "/redfish/v1/";
pub const DEFAULT_SESSIONS: &str = "/redfish/v1/SessionService/Sessions";

#[derive(thiserror::Error, Debug)]
pub enum RedfishError {
    #[error("Network error talking to Redfish service at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("HTTP {status_code} at {url}: {response_body}")]
    HTTPErrorCode {
        url: String,
        status_code: StatusCode,
        response_body: String,
    },

    #[error("API error {status}: {message} at {url}")]
    APIError {
        url: String,
        status: StatusCode,
        message: String,
    },

    #[error("API error {status}: no response at {url}")]
    APINoResponseError { url: String, status: StatusCode },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize request body for {url}. Obj: {object_debug}. {source}")]
    JsonSerializeError {
        url: String,
        object_debug: String,
        source: serde_json::Error,
    },

    #[error("Remote returned empty body at {url}, {source}")]
    NoContent { url: String, source: reqwest::Error },

    #[error("Login failure at {url}: {reason}")]
    LoginFailure { url: String, reason: String },

    #[error("Response from {url} is missing the {header} header")]
    MissingHeader { url: String, header: String },

    #[error("Reqwest error: '{0}'")]
    ReqwestError(#[from] reqwest::Error),
}

impl RedfishError {
    /// The message the Redfish service put in its error body, if any.
    pub fn remote_message(&self) -> Option<String> {
        match self {
            RedfishError::HTTPErrorCode { response_body, .. } => {
                serde_json::from_str::<RedfishErrorBody>(response_body)
                    .ok()
                    .and_then(|body| body.error.message())
            }
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            RedfishError::HTTPErrorCode { status_code, .. } => Some(*status_code),
            RedfishError::APIError { status, .. } => Some(*status),
            RedfishError::APINoResponseError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Endpoint is the base URL of a Redfish service (`https://bmc:443`)
/// together with the credentials used to open a session on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RedfishClientPoolBuilder {
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl RedfishClientPoolBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(&self) -> Result<RedfishClientPool, RedfishError> {
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()?;

        Ok(RedfishClientPool { client })
    }
}

#[derive(Debug, Clone)]
pub struct RedfishClientPool {
    client: HttpClient,
}

impl RedfishClientPool {
    pub fn builder(accept_invalid_certs: bool) -> RedfishClientPoolBuilder {
        RedfishClientPoolBuilder {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs,
        }
    }

    /// create_client reads the service root, opens a session with the
    /// endpoint credentials and returns a client bound to that session.
    /// The caller owns the session and must call `logout`.
    pub async fn create_client(&self, endpoint: Endpoint) -> Result<Box<dyn Redfish>, RedfishError> {
        let api = RedfishApiClient::new(self.client.clone(), endpoint);
        let (_status, root): (StatusCode, ServiceRoot) = api.get(SERVICE_ROOT).await?;
        let session = api.login(root.sessions_path()).await?;
        Ok(Box::new(RedfishApi::new(api.with_session(session), root)))
    }
}

/// An authenticated Redfish session: the token sent as `X-Auth-Token` and
/// the session resource to DELETE on logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub token: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub body: String,
    pub code: StatusCode,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone)]
pub struct RedfishApiClient {
    endpoint: Endpoint,
    client: HttpClient,
    session: Option<SessionToken>,
}

impl RedfishApiClient {
    pub fn new(client: HttpClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            session: None,
        }
    }

    pub fn with_session(mut self, session: SessionToken) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    // url_for joins an odata path onto the endpoint. Absolute URLs, which
    // some services return in Location headers, are used as given.
    fn url_for(&self, api: &str) -> String {
        if api.starts_with("http://") || api.starts_with("https://") {
            return api.to_string();
        }
        format!(
            "{}/{}",
            self.endpoint.url.trim_end_matches('/'),
            api.trim_start_matches('/')
        )
    }

    pub async fn login(&self, sessions: &str) -> Result<SessionToken, RedfishError> {
        let url = self.url_for(sessions);
        let credentials = SessionCredentials {
            user_name: self.endpoint.username.clone().unwrap_or_default(),
            password: self.endpoint.password.clone().unwrap_or_default(),
        };
        let response = match self
            .send(&Method::POST, sessions, Some(&credentials), None)
            .await
        {
            Ok(response) => response,
            Err(RedfishError::HTTPErrorCode {
                status_code: status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN),
                response_body,
                ..
            }) => {
                let body = serde_json::from_str::<RedfishErrorBody>(&response_body)
                    .ok()
                    .and_then(|b| b.error.message());
                return Err(RedfishError::LoginFailure {
                    url,
                    reason: body.unwrap_or_else(|| status.to_string()),
                });
            }
            Err(e) => return Err(e),
        };

        let token = header_str(&response.headers, &X_AUTH_TOKEN).ok_or_else(|| {
            RedfishError::MissingHeader {
                url: url.clone(),
                header: X_AUTH_TOKEN.to_string(),
            }
        })?;

        // Location is mandatory per DSP0266 but some services only put the
        // session id in the body.
        let location = header_str(&response.headers, &LOCATION).or_else(|| {
            serde_json::from_str::<ODataId>(&response.body)
                .ok()
                .map(|id| id.odata_id)
                .filter(|id| !id.is_empty())
        });
        debug!("Opened Redfish session at {url}, location {location:?}");

        Ok(SessionToken { token, location })
    }

    pub async fn get<T>(&self, api: &str) -> Result<(StatusCode, T), RedfishError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let (status_code, resp_opt) = self.req::<T, String>(Method::GET, api, None, None).await?;
        match resp_opt {
            Some(response_body) => Ok((status_code, response_body)),
            None => Err(RedfishError::APINoResponseError {
                url: self.url_for(api),
                status: status_code,
            }),
        }
    }

    // POST is sent exactly once, never retried.
    pub async fn post<B>(&self, api: &str, data: B) -> Result<StatusCode, RedfishError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let response = self.send(&Method::POST, api, Some(&data), None).await?;
        Ok(response.code)
    }

    pub async fn patch<B>(
        &self,
        api: &str,
        data: B,
        etag: Option<&str>,
    ) -> Result<StatusCode, RedfishError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let (status_code, _) = self
            .req::<serde_json::Value, B>(Method::PATCH, api, Some(data), etag)
            .await?;
        Ok(status_code)
    }

    pub async fn delete(&self, api: &str) -> Result<StatusCode, RedfishError> {
        let (status_code, _) = self
            .req::<serde_json::Value, String>(Method::DELETE, api, None, None)
            .await?;
        Ok(status_code)
    }

    async fn req<T, B>(
        &self,
        method: Method,
        api: &str,
        body: Option<B>,
        etag: Option<&str>,
    ) -> Result<(StatusCode, Option<T>), RedfishError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        let response = match self.send(&method, api, body.as_ref(), etag).await {
            Ok(x) => x,
            Err(RedfishError::NetworkError { .. }) => {
                debug!("Network error, retrying");
                self.send(&method, api, body.as_ref(), etag).await?
            }
            Err(e) => return Err(e),
        };

        let mut res = None;
        if !response.body.is_empty() {
            match serde_json::from_str(&response.body) {
                Ok(v) => res.insert(v),
                Err(e) => {
                    return Err(RedfishError::JsonDeserializeError {
                        url: self.url_for(api),
                        body: response.body,
                        source: e,
                    });
                }
            };
        }
        Ok((response.code, res))
    }

    async fn send<B>(
        &self,
        method: &Method,
        api: &str,
        body: Option<&B>,
        etag: Option<&str>,
    ) -> Result<RawResponse, RedfishError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let url = self.url_for(api);

        let body_enc = match body {
            Some(b) => {
                let body_enc =
                    serde_json::to_string(b).map_err(|e| RedfishError::JsonSerializeError {
                        url: url.clone(),
                        object_debug: format!("{b:?}"),
                        source: e,
                    })?;
                Some(body_enc)
            }
            None => None,
        };

        let http_client = self.client.clone();
        let mut req_b = match *method {
            Method::GET => http_client.get(&url),
            Method::POST => http_client.post(&url),
            Method::PATCH => http_client.patch(&url),
            Method::DELETE => http_client.delete(&url),
            _ => unreachable!("Only GET, POST, PATCH and DELETE http methods are used."),
        };
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("application/json"));
        req_b = req_b.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static("ctlfish/0.1"));
        if let Some(session) = self.session.as_ref() {
            req_b = req_b.header(X_AUTH_TOKEN, session.token.as_str());
        }
        if let Some(etag) = etag {
            req_b = req_b.header(IF_MATCH, etag);
        }
        if let Some(b) = body_enc {
            req_b = req_b.body(b);
        }

        debug!("TX {method} {url}");
        let response = req_b.send().await.map_err(|e| RedfishError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        // check content length in case of junk responses
        if let Some(len) = response.content_length()
            && len > MAX_CONTENT_LENGTH
        {
            return Err(RedfishError::APIError {
                url,
                status: status_code,
                message: format!("Content length {len} exceeds 20MB limit"),
            });
        }
        let headers = response.headers().clone();
        let response_buffer = response
            .bytes()
            .await
            .map_err(|e| RedfishError::NoContent {
                url: url.clone(),
                source: e,
            })?;
        let response_body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status_code} {}", truncate(&response_body, 1500));

        if !status_code.is_success() {
            return Err(RedfishError::HTTPErrorCode {
                url,
                status_code,
                response_body,
            });
        }

        Ok(RawResponse {
            body: response_body,
            code: status_code,
            headers,
        })
    }
}

fn header_str(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .filter(|v| !v.is_empty())
}

fn truncate(s: &str, len: usize) -> &str {
    let mut end = len.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[async_trait::async_trait]
pub trait Redfish: Send + Sync + 'static {
    async fn get_chassis_all(&self) -> Result<Vec<Chassis>, RedfishError>;
    async fn get_systems(&self) -> Result<Vec<ComputerSystem>, RedfishError>;
    async fn get_drives(&self, chassis: &Chassis) -> Result<Vec<Drive>, RedfishError>;
    async fn get_account_service(&self) -> Result<AccountService, RedfishError>;
    async fn get_accounts(&self) -> Result<Vec<ManagerAccount>, RedfishError>;
    async fn get_roles(&self) -> Result<Vec<Role>, RedfishError>;
    async fn reset_chassis(
        &self,
        chassis: &Chassis,
        reset_type: ResetType,
    ) -> Result<(), RedfishError>;
    async fn reset_system(
        &self,
        system: &ComputerSystem,
        reset_type: ResetType,
    ) -> Result<(), RedfishError>;
    async fn update_account(
        &self,
        account: &ManagerAccount,
        update: &AccountUpdate,
    ) -> Result<(), RedfishError>;
    async fn logout(&self) -> Result<(), RedfishError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> RedfishApiClient {
        RedfishApiClient::new(
            HttpClient::new(),
            Endpoint {
                url: url.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn url_for_joins_odata_paths() {
        let c = client("https://bmc.lab:8443/");
        assert_eq!(
            c.url_for("/redfish/v1/Chassis"),
            "https://bmc.lab:8443/redfish/v1/Chassis"
        );
        assert_eq!(
            c.url_for("redfish/v1/Systems"),
            "https://bmc.lab:8443/redfish/v1/Systems"
        );
    }

    #[test]
    fn url_for_keeps_absolute_urls() {
        let c = client("https://bmc.lab:443");
        assert_eq!(
            c.url_for("https://other:443/redfish/v1/SessionService/Sessions/7"),
            "https://other:443/redfish/v1/SessionService/Sessions/7"
        );
    }

    #[test]
    fn remote_message_prefers_error_message() {
        let err = RedfishError::HTTPErrorCode {
            url: "https://bmc/redfish/v1/Systems/1/Actions/ComputerSystem.Reset".to_string(),
            status_code: StatusCode::BAD_REQUEST,
            response_body: r#"{"error":{"code":"Base.1.8.GeneralError","message":"Reset not allowed in current state","@Message.ExtendedInfo":[{"Message":"The action was rejected."}]}}"#.to_string(),
        };
        assert_eq!(
            err.remote_message().as_deref(),
            Some("Reset not allowed in current state")
        );
    }

    #[test]
    fn remote_message_falls_back_to_extended_info() {
        let err = RedfishError::HTTPErrorCode {
            url: "https://bmc/".to_string(),
            status_code: StatusCode::BAD_REQUEST,
            response_body: r#"{"error":{"code":"Base.1.8.GeneralError","@Message.ExtendedInfo":[{"Message":"Password does not meet complexity rules."}]}}"#.to_string(),
        };
        assert_eq!(
            err.remote_message().as_deref(),
            Some("Password does not meet complexity rules.")
        );
    }

    #[test]
    fn remote_message_absent_for_non_json_body() {
        let err = RedfishError::HTTPErrorCode {
            url: "https://bmc/".to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            response_body: "<html>oops</html>".to_string(),
        };
        assert!(err.remote_message().is_none());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "h");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
