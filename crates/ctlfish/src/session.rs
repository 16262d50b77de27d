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

use redfish_client::{
    AccountService, AccountUpdate, Chassis, ComputerSystem, Drive, Endpoint, ManagerAccount,
    Redfish, RedfishClientPool, ResetType, Role,
};
use tracing::{debug, warn};

use crate::errors::{CtlfishCliError, CtlfishCliResult};
use crate::profile::ConnectionProfile;

/// What a reset is issued against.
#[derive(Clone, Copy, Debug)]
pub enum ResetTarget<'a> {
    Chassis(&'a Chassis),
    System(&'a ComputerSystem),
}

/// Session is an authenticated connection to one Redfish service, scoped
/// to a single command. `close` must be called once the command is done,
/// whether it succeeded or not.
pub struct Session {
    endpoint: String,
    redfish: Box<dyn Redfish>,
    closed: bool,
}

impl Session {
    /// open logs in to the endpoint described by `profile`. Certificate
    /// validation is skipped unless the profile is marked secure.
    pub async fn open(profile: &ConnectionProfile) -> CtlfishCliResult<Session> {
        let endpoint = profile.endpoint();
        let connection_error = |source| CtlfishCliError::ConnectionError {
            endpoint: endpoint.clone(),
            source,
        };

        let pool = RedfishClientPool::builder(!profile.secure)
            .build()
            .map_err(connection_error)?;
        let redfish = pool
            .create_client(Endpoint {
                url: endpoint.clone(),
                username: Some(profile.username.clone()),
                password: Some(profile.password.clone()),
            })
            .await
            .map_err(connection_error)?;

        debug!("Opened Redfish session to {endpoint}");
        Ok(Session::new(endpoint, redfish))
    }

    pub fn new(endpoint: String, redfish: Box<dyn Redfish>) -> Self {
        Session {
            endpoint,
            redfish,
            closed: false,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn list_chassis(&self) -> CtlfishCliResult<Vec<Chassis>> {
        self.redfish
            .get_chassis_all()
            .await
            .map_err(CtlfishCliError::remote_request(
                "failed to retrieve chassis information",
            ))
    }

    pub async fn list_systems(&self) -> CtlfishCliResult<Vec<ComputerSystem>> {
        self.redfish
            .get_systems()
            .await
            .map_err(CtlfishCliError::remote_request(
                "failed to retrieve system information",
            ))
    }

    /// Drives are not a top level collection; they are gathered from every
    /// chassis in turn.
    pub async fn list_drives(&self) -> CtlfishCliResult<Vec<Drive>> {
        let mut drives = Vec::new();
        for chassis in self.list_chassis().await? {
            let found = self.redfish.get_drives(&chassis).await.map_err(
                CtlfishCliError::remote_request("failed to retrieve drive information"),
            )?;
            drives.extend(found);
        }
        Ok(drives)
    }

    pub async fn account_service(&self) -> CtlfishCliResult<AccountService> {
        self.redfish
            .get_account_service()
            .await
            .map_err(CtlfishCliError::remote_request(
                "failed to access account service",
            ))
    }

    pub async fn list_accounts(&self) -> CtlfishCliResult<Vec<ManagerAccount>> {
        self.redfish
            .get_accounts()
            .await
            .map_err(CtlfishCliError::remote_request(
                "failed to retrieve user information",
            ))
    }

    pub async fn list_roles(&self) -> CtlfishCliResult<Vec<Role>> {
        self.redfish
            .get_roles()
            .await
            .map_err(CtlfishCliError::remote_request(
                "unable to retrieve available roles",
            ))
    }

    pub async fn reset(&self, target: ResetTarget<'_>, mode: ResetType) -> CtlfishCliResult<()> {
        let result = match target {
            ResetTarget::Chassis(chassis) => self.redfish.reset_chassis(chassis, mode).await,
            ResetTarget::System(system) => self.redfish.reset_system(system, mode).await,
        };
        result.map_err(|e| CtlfishCliError::remote_operation("error performing reset", e))
    }

    pub async fn update_account(
        &self,
        account: &ManagerAccount,
        changes: &AccountUpdate,
    ) -> CtlfishCliResult<()> {
        self.redfish
            .update_account(account, changes)
            .await
            .map_err(|e| {
                CtlfishCliError::remote_operation(
                    &format!("error updating user '{}'", account.user_name),
                    e,
                )
            })
    }

    /// close logs out of the service. Only the first call does anything;
    /// a failed logout is logged and otherwise ignored.
    pub async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.redfish.logout().await {
            warn!("Failed to log out of {}: {e}", self.endpoint);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.closed {
            warn!("Session to {} dropped without logging out", self.endpoint);
        }
    }
}
