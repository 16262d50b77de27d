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

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "Get information about chassis objects.", visible_alias = "c")]
    Chassis(GetOptions),
    #[clap(about = "Get system information.", visible_aliases = ["systems", "s"])]
    System(GetOptions),
    #[clap(about = "Get drive information.", visible_aliases = ["drives", "d"])]
    Drive(GetOptions),
    #[clap(about = "Get user account information.", visible_aliases = ["users", "u"])]
    User(GetOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct GetOptions {
    #[clap(
        value_name = "NAME_OR_ID",
        help = "Only show the item with this name or id. Everything is listed when omitted."
    )]
    pub name: Option<String>,
}
