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

use crate::async_write_table;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CtlfishCliResult;

// config works on the local connection file only and never opens a session.
impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CtlfishCliResult<()> {
        let mut table = ctx.table(cmds::HEADERS);
        match &self {
            Cmd::Get(opts) => cmds::get(opts, &ctx.store, table.as_mut())?,
            Cmd::Add(opts) => cmds::add(opts, &mut ctx.store, table.as_mut())?,
            Cmd::Remove(opts) => return cmds::remove(opts, &mut ctx.store),
            Cmd::Set(opts) => cmds::set(opts, &mut ctx.store, table.as_mut())?,
        }

        async_write_table!(ctx.output_file, table)?;
        Ok(())
    }
}
