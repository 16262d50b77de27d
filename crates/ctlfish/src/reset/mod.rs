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

pub mod args;
pub mod cmds;

pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CtlfishCliResult;

// A successful reset prints nothing.
impl Dispatch for Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> CtlfishCliResult<()> {
        let mut session = ctx.open_session().await?;
        let result = match &self {
            Cmd::Chassis(opts) => cmds::chassis(opts, &session).await,
            Cmd::System(opts) => cmds::system(opts, &session).await,
        };
        session.close().await;
        result
    }
}
