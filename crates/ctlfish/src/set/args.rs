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
    #[clap(
        about = "Set user information.",
        long_about = "Updates the password, role, or username of a user account.",
        visible_alias = "u"
    )]
    User(UserOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    #[clap(value_name = "NAME_OR_ID", help = "Id, name or login name of the account.")]
    pub name: String,

    #[clap(short, long, help = "New username for the user.")]
    pub username: Option<String>,

    #[clap(short, long, help = "New password for the user.")]
    pub password: Option<String>,

    #[clap(short, long, help = "The user role to apply.")]
    pub role: Option<String>,
}
