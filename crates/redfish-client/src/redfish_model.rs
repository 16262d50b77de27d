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

use serde::{Deserialize, Serialize};

/// Use Option<type> to avoid breaking serde deserialize ops on receiving json responses with
/// some properties missing. Vendors differ a lot in what they populate.
/// Id and Name are required by the Redfish schema and default to empty.

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ODataId {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "Members", default)]
    pub members: Vec<ODataId>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRootLinks {
    pub sessions: Option<ODataId>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRoot {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    pub redfish_version: Option<String>,
    pub chassis: Option<ODataId>,
    pub systems: Option<ODataId>,
    pub account_service: Option<ODataId>,
    pub links: Option<ServiceRootLinks>,
}

impl ServiceRoot {
    pub fn sessions_path(&self) -> &str {
        self.links
            .as_ref()
            .and_then(|l| l.sessions.as_ref())
            .map(|s| s.odata_id.as_str())
            .unwrap_or(crate::DEFAULT_SESSIONS)
    }

    pub fn chassis_path(&self) -> &str {
        self.chassis
            .as_ref()
            .map(|c| c.odata_id.as_str())
            .unwrap_or("/redfish/v1/Chassis")
    }

    pub fn systems_path(&self) -> &str {
        self.systems
            .as_ref()
            .map(|s| s.odata_id.as_str())
            .unwrap_or("/redfish/v1/Systems")
    }

    pub fn account_service_path(&self) -> &str {
        self.account_service
            .as_ref()
            .map(|a| a.odata_id.as_str())
            .unwrap_or("/redfish/v1/AccountService")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    pub health: Option<String>,
    pub state: Option<String>,
}

impl Status {
    pub fn health(status: &Option<Status>) -> String {
        status
            .as_ref()
            .and_then(|s| s.health.clone())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetAction {
    #[serde(default)]
    pub target: String,
    #[serde(
        rename = "ResetType@Redfish.AllowableValues",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowable_values: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChassisActions {
    #[serde(rename = "#Chassis.Reset")]
    pub reset: Option<ResetAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChassisLinks {
    #[serde(default)]
    pub drives: Vec<ODataId>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Chassis {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub chassis_type: Option<String>,
    pub power_state: Option<String>,
    pub status: Option<Status>,
    pub links: Option<ChassisLinks>,
    /// Drives collection, newer schema versions only.
    pub drives: Option<ODataId>,
    pub actions: Option<ChassisActions>,
}

impl Chassis {
    pub fn reset_target(&self) -> String {
        self.actions
            .as_ref()
            .and_then(|a| a.reset.as_ref())
            .map(|r| r.target.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("{}/Actions/Chassis.Reset", self.odata_id))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorSummary {
    pub count: Option<u32>,
    pub model: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySummary {
    #[serde(rename = "TotalSystemMemoryGiB")]
    pub total_system_memory_gib: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerSystemActions {
    #[serde(rename = "#ComputerSystem.Reset")]
    pub reset: Option<ResetAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerSystem {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub power_state: Option<String>,
    #[serde(rename = "IndicatorLED")]
    pub indicator_led: Option<String>,
    pub status: Option<Status>,
    pub processor_summary: Option<ProcessorSummary>,
    pub memory_summary: Option<MemorySummary>,
    pub actions: Option<ComputerSystemActions>,
}

impl ComputerSystem {
    pub fn reset_target(&self) -> String {
        self.actions
            .as_ref()
            .and_then(|a| a.reset.as_ref())
            .map(|r| r.target.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("{}/Actions/ComputerSystem.Reset", self.odata_id))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Drive {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub capacity_bytes: Option<i64>,
    pub status: Option<Status>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub media_type: Option<String>,
    pub protocol: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountService {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    pub service_enabled: Option<bool>,
    pub min_password_length: Option<usize>,
    pub max_password_length: Option<usize>,
    pub accounts: Option<ODataId>,
    pub roles: Option<ODataId>,
}

impl AccountService {
    pub fn accounts_path(&self) -> String {
        self.accounts
            .as_ref()
            .map(|a| a.odata_id.clone())
            .unwrap_or_else(|| format!("{}/Accounts", self.odata_id.trim_end_matches('/')))
    }

    pub fn roles_path(&self) -> String {
        self.roles
            .as_ref()
            .map(|r| r.odata_id.clone())
            .unwrap_or_else(|| format!("{}/Roles", self.odata_id.trim_end_matches('/')))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagerAccount {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    #[serde(rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_name: String,
    pub role_id: Option<String>,
    pub enabled: Option<bool>,
    pub locked: Option<bool>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Role {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub role_id: Option<String>,
    pub is_predefined: Option<bool>,
}

/// AccountUpdate carries only the properties being changed; anything left
/// as None is omitted from the PATCH body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.password.is_none() && self.role_id.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetType {
    On,
    ForceOff,
    GracefulShutdown,
    GracefulRestart,
    ForceRestart,
    Nmi,
    ForceOn,
    PushPowerButton,
    #[default]
    PowerCycle,
}

impl fmt::Display for ResetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetRequest {
    pub reset_type: ResetType,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionCredentials {
    pub user_name: String,
    pub password: String,
}

impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageInfo {
    #[serde(rename = "MessageId")]
    pub message_id: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RedfishErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "@Message.ExtendedInfo", default)]
    pub extended_info: Vec<MessageInfo>,
}

impl RedfishErrorDetail {
    pub fn message(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| self.extended_info.iter().find_map(|i| i.message.clone()))
    }
}

/// Body of a Redfish error response (DSP0266 "Error responses").
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RedfishErrorBody {
    pub error: RedfishErrorDetail,
}
