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

use redfish_client::ResetType;
use tracing::debug;

use super::args::ResetOptions;
use crate::errors::{CtlfishCliError, CtlfishCliResult};
use crate::session::{ResetTarget, Session};

pub async fn chassis(opts: &ResetOptions, session: &Session) -> CtlfishCliResult<()> {
    let all = session.list_chassis().await?;
    let chassis = all
        .iter()
        .find(|c| c.id == opts.name || c.name == opts.name)
        .ok_or_else(|| CtlfishCliError::not_found("chassis", &opts.name))?;

    debug!("Resetting chassis {} at {}", chassis.id, session.endpoint());
    session
        .reset(ResetTarget::Chassis(chassis), ResetType::PowerCycle)
        .await
}

pub async fn system(opts: &ResetOptions, session: &Session) -> CtlfishCliResult<()> {
    let all = session.list_systems().await?;
    let system = all
        .iter()
        .find(|s| s.id == opts.name || s.name == opts.name)
        .ok_or_else(|| CtlfishCliError::not_found("system", &opts.name))?;

    debug!("Resetting system {} at {}", system.id, session.endpoint());
    session
        .reset(ResetTarget::System(system), ResetType::PowerCycle)
        .await
}
