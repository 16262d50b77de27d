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

// In-memory Redfish service used by the command tests. It serves a small
// fixed inventory and records the calls made against it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use redfish_client::*;

#[derive(Clone, Debug, Default)]
pub struct Calls {
    log: Arc<Mutex<Vec<String>>>,
    updates: Arc<Mutex<Vec<(String, AccountUpdate)>>>,
}

impl Calls {
    fn record(&self, call: impl Into<String>) {
        self.log.lock().unwrap().push(call.into());
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn all(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, AccountUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeRedfish {
    pub chassis: Vec<Chassis>,
    pub systems: Vec<ComputerSystem>,
    pub drives: HashMap<String, Vec<Drive>>,
    pub account_service: AccountService,
    pub accounts: Vec<ManagerAccount>,
    pub roles: Vec<Role>,
    /// Error body returned for any reset or account update.
    pub reset_error: Option<String>,
    pub fail_logout: bool,
    pub calls: Calls,
}

fn status(health: &str) -> Option<Status> {
    Some(Status {
        health: Some(health.to_string()),
        state: Some("Enabled".to_string()),
    })
}

fn drive(id: &str, name: &str, capacity: i64) -> Drive {
    Drive {
        odata_id: format!("/redfish/v1/Chassis/1U/Drives/{id}"),
        id: id.to_string(),
        name: name.to_string(),
        capacity_bytes: Some(capacity),
        status: status("OK"),
        manufacturer: Some("Contoso".to_string()),
        model: Some("3000GT8".to_string()),
        serial_number: Some(format!("12345{id}")),
        ..Default::default()
    }
}

fn role(id: &str) -> Role {
    Role {
        odata_id: format!("/redfish/v1/AccountService/Roles/{id}"),
        id: id.to_string(),
        name: format!("{id} Role"),
        role_id: Some(id.to_string()),
        is_predefined: Some(true),
    }
}

impl FakeRedfish {
    /// lab is a one-system rack server with an attached storage enclosure.
    pub fn lab() -> Self {
        let mut drives = HashMap::new();
        drives.insert(
            "1U".to_string(),
            vec![
                drive("0", "SATA Bay 0", 899_527_000_000),
                drive("1", "SATA Bay 1", 512),
            ],
        );
        drives.insert(
            "Enclosure".to_string(),
            vec![Drive {
                manufacturer: None,
                model: None,
                serial_number: None,
                ..drive("5", "NVMe Bay 5", 1_600_321_314_816)
            }],
        );

        FakeRedfish {
            chassis: vec![
                Chassis {
                    odata_id: "/redfish/v1/Chassis/1U".to_string(),
                    id: "1U".to_string(),
                    name: "Computer System Chassis".to_string(),
                    power_state: Some("On".to_string()),
                    status: status("OK"),
                    ..Default::default()
                },
                Chassis {
                    odata_id: "/redfish/v1/Chassis/Enclosure".to_string(),
                    id: "Enclosure".to_string(),
                    name: "Storage Enclosure".to_string(),
                    power_state: Some("Off".to_string()),
                    status: status("Warning"),
                    ..Default::default()
                },
            ],
            systems: vec![ComputerSystem {
                odata_id: "/redfish/v1/Systems/437XR1138R2".to_string(),
                id: "437XR1138R2".to_string(),
                name: "WebFrontEnd483".to_string(),
                description: Some("Web Front End node".to_string()),
                power_state: Some("On".to_string()),
                indicator_led: Some("Off".to_string()),
                status: status("OK"),
                processor_summary: Some(ProcessorSummary {
                    count: Some(2),
                    model: None,
                }),
                memory_summary: Some(MemorySummary {
                    total_system_memory_gib: Some(96.0),
                }),
                ..Default::default()
            }],
            drives,
            account_service: AccountService {
                odata_id: "/redfish/v1/AccountService".to_string(),
                service_enabled: Some(true),
                min_password_length: Some(8),
                max_password_length: Some(20),
                ..Default::default()
            },
            accounts: vec![
                ManagerAccount {
                    odata_id: "/redfish/v1/AccountService/Accounts/1".to_string(),
                    id: "1".to_string(),
                    name: "User Account".to_string(),
                    user_name: "Administrator".to_string(),
                    role_id: Some("Administrator".to_string()),
                    enabled: Some(true),
                    description: Some("Built-in administrator".to_string()),
                    ..Default::default()
                },
                ManagerAccount {
                    odata_id: "/redfish/v1/AccountService/Accounts/2".to_string(),
                    etag: Some("W/\"6c3a\"".to_string()),
                    id: "2".to_string(),
                    name: "User Account".to_string(),
                    user_name: "operator".to_string(),
                    role_id: Some("ReadOnly".to_string()),
                    enabled: Some(false),
                    ..Default::default()
                },
            ],
            roles: vec![role("Administrator"), role("Operator"), role("ReadOnly")],
            ..Default::default()
        }
    }

    /// Handle on the call log that stays valid after the fake is boxed.
    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }

    fn rejection(&self, url: &str) -> Result<(), RedfishError> {
        match &self.reset_error {
            Some(body) => Err(RedfishError::HTTPErrorCode {
                url: url.to_string(),
                status_code: HttpStatusCode::BAD_REQUEST,
                response_body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Redfish for FakeRedfish {
    async fn get_chassis_all(&self) -> Result<Vec<Chassis>, RedfishError> {
        self.calls.record("get_chassis_all");
        Ok(self.chassis.clone())
    }

    async fn get_systems(&self) -> Result<Vec<ComputerSystem>, RedfishError> {
        self.calls.record("get_systems");
        Ok(self.systems.clone())
    }

    async fn get_drives(&self, chassis: &Chassis) -> Result<Vec<Drive>, RedfishError> {
        self.calls.record(format!("get_drives {}", chassis.id));
        Ok(self.drives.get(&chassis.id).cloned().unwrap_or_default())
    }

    async fn get_account_service(&self) -> Result<AccountService, RedfishError> {
        self.calls.record("get_account_service");
        Ok(self.account_service.clone())
    }

    async fn get_accounts(&self) -> Result<Vec<ManagerAccount>, RedfishError> {
        self.calls.record("get_accounts");
        Ok(self.accounts.clone())
    }

    async fn get_roles(&self) -> Result<Vec<Role>, RedfishError> {
        self.calls.record("get_roles");
        Ok(self.roles.clone())
    }

    async fn reset_chassis(
        &self,
        chassis: &Chassis,
        reset_type: ResetType,
    ) -> Result<(), RedfishError> {
        self.calls
            .record(format!("reset_chassis {} {reset_type}", chassis.id));
        self.rejection(&chassis.reset_target())
    }

    async fn reset_system(
        &self,
        system: &ComputerSystem,
        reset_type: ResetType,
    ) -> Result<(), RedfishError> {
        self.calls
            .record(format!("reset_system {} {reset_type}", system.id));
        self.rejection(&system.reset_target())
    }

    async fn update_account(
        &self,
        account: &ManagerAccount,
        update: &AccountUpdate,
    ) -> Result<(), RedfishError> {
        self.calls.record(format!("update_account {}", account.id));
        self.calls
            .updates
            .lock()
            .unwrap()
            .push((account.id.clone(), update.clone()));
        self.rejection(&account.odata_id)
    }

    async fn logout(&self) -> Result<(), RedfishError> {
        self.calls.record("logout");
        if self.fail_logout {
            return Err(RedfishError::HTTPErrorCode {
                url: "/redfish/v1/SessionService/Sessions/1".to_string(),
                status_code: HttpStatusCode::INTERNAL_SERVER_ERROR,
                response_body: String::new(),
            });
        }
        Ok(())
    }
}
