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

use reqwest::StatusCode;
use tracing::debug;

use crate::redfish_model::*;
use crate::{Redfish, RedfishApiClient, RedfishError};

// Macro for GET operations that expand a Members collection into its items
macro_rules! get_members {
    ($self:expr, $collection:expr, $item_type:ty) => {{
        let (_status, collection): (StatusCode, Collection) = $self.client.get($collection).await?;
        let mut result: Vec<$item_type> = Vec::with_capacity(collection.members.len());
        for member in collection.members.iter() {
            let (_status, item): (StatusCode, $item_type) =
                $self.client.get(&member.odata_id).await?;
            result.push(item);
        }
        Ok(result)
    }};
}

#[derive(Clone, Debug)]
pub struct RedfishApi {
    pub client: RedfishApiClient,
    root: ServiceRoot,
}

impl RedfishApi {
    pub fn new(client: RedfishApiClient, root: ServiceRoot) -> Self {
        Self { client, root }
    }
}

#[async_trait::async_trait]
impl Redfish for RedfishApi {
    async fn get_chassis_all(&self) -> Result<Vec<Chassis>, RedfishError> {
        get_members!(self, self.root.chassis_path(), Chassis)
    }

    async fn get_systems(&self) -> Result<Vec<ComputerSystem>, RedfishError> {
        get_members!(self, self.root.systems_path(), ComputerSystem)
    }

    async fn get_drives(&self, chassis: &Chassis) -> Result<Vec<Drive>, RedfishError> {
        // Links.Drives is the older layout, the Drives collection the newer one.
        let links: Vec<ODataId> = chassis
            .links
            .as_ref()
            .map(|l| l.drives.clone())
            .unwrap_or_default();
        if !links.is_empty() {
            let mut drives = Vec::with_capacity(links.len());
            for link in links.iter() {
                let (_status, drive): (StatusCode, Drive) = self.client.get(&link.odata_id).await?;
                drives.push(drive);
            }
            return Ok(drives);
        }

        match chassis.drives.as_ref() {
            Some(collection) => get_members!(self, &collection.odata_id, Drive),
            None => Ok(Vec::new()),
        }
    }

    async fn get_account_service(&self) -> Result<AccountService, RedfishError> {
        let (_status, service): (StatusCode, AccountService) = self
            .client
            .get(self.root.account_service_path())
            .await?;
        Ok(service)
    }

    async fn get_accounts(&self) -> Result<Vec<ManagerAccount>, RedfishError> {
        let service = self.get_account_service().await?;
        get_members!(self, &service.accounts_path(), ManagerAccount)
    }

    async fn get_roles(&self) -> Result<Vec<Role>, RedfishError> {
        let service = self.get_account_service().await?;
        get_members!(self, &service.roles_path(), Role)
    }

    async fn reset_chassis(
        &self,
        chassis: &Chassis,
        reset_type: ResetType,
    ) -> Result<(), RedfishError> {
        let target = chassis.reset_target();
        self.client.post(&target, ResetRequest { reset_type }).await?;
        Ok(())
    }

    async fn reset_system(
        &self,
        system: &ComputerSystem,
        reset_type: ResetType,
    ) -> Result<(), RedfishError> {
        let target = system.reset_target();
        self.client.post(&target, ResetRequest { reset_type }).await?;
        Ok(())
    }

    async fn update_account(
        &self,
        account: &ManagerAccount,
        update: &AccountUpdate,
    ) -> Result<(), RedfishError> {
        if update.is_empty() {
            return Ok(());
        }
        self.client
            .patch(&account.odata_id, update, account.etag.as_deref())
            .await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), RedfishError> {
        let Some(location) = self.client.session().and_then(|s| s.location.clone()) else {
            debug!("No session location to delete");
            return Ok(());
        };
        self.client.delete(&location).await?;
        Ok(())
    }
}
