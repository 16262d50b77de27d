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
use clap::builder::BoolishValueParser;

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(
        about = "Get saved connection information.",
        long_about = "Shows the named connection, or every stored connection when no name is given."
    )]
    Get(GetOptions),
    #[clap(
        about = "Add new connection information.",
        long_about = "Adds a new connection under the given name. Credentials are not checked until the connection is used."
    )]
    Add(AddOptions),
    #[clap(about = "Remove stored connection information.", visible_alias = "rm")]
    Remove(RemoveOptions),
    #[clap(
        about = "Set connection information.",
        long_about = "Updates the stored connection with the given name. Only the flags given are changed."
    )]
    Set(SetOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct GetOptions {
    #[clap(value_name = "NAME", help = "Connection to show.")]
    pub name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    #[clap(value_name = "NAME", help = "Name to store the connection under.")]
    pub name: String,

    #[clap(
        short = 'e',
        long,
        help = "The host name or IP address of the system. A full endpoint such as https://bmc:8443 is also accepted. Defaults to NAME."
    )]
    pub host: Option<String>,

    #[clap(
        short,
        long,
        default_value_t = 0,
        hide_default_value = true,
        help = "Port used to connect (defaults to 443, or port 80 if 'http' protocol is specified)."
    )]
    pub port: u64,

    #[clap(long, default_value = "https", help = "Protocol to use (https or http).")]
    pub protocol: String,

    #[clap(short, long, help = "The user name to connect as.")]
    pub user: Option<String>,

    #[clap(short = 's', long, help = "The password to connect with.")]
    pub password: Option<String>,

    #[clap(
        long,
        help = "Enforce certificate validation with https connections (default allows self-signed certs)."
    )]
    pub secure: bool,

    #[clap(long, help = "Set this connection as the default.")]
    pub default: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveOptions {
    #[clap(value_name = "NAME", help = "Connection to remove.")]
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SetOptions {
    #[clap(value_name = "NAME", help = "Connection to update.")]
    pub name: String,

    #[clap(short = 'e', long, help = "The host name or IP address of the system.")]
    pub host: Option<String>,

    #[clap(
        short,
        long,
        help = "Port used to connect. 0 picks the default port of the protocol."
    )]
    pub port: Option<u64>,

    #[clap(long, help = "Protocol to use (https or http).")]
    pub protocol: Option<String>,

    #[clap(short, long, help = "The user name to connect as.")]
    pub user: Option<String>,

    #[clap(short = 's', long, help = "The password to connect with.")]
    pub password: Option<String>,

    #[clap(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Enforce certificate validation (--secure or --secure=false)."
    )]
    pub secure: Option<bool>,

    #[clap(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Make this the default connection (--default or --default=false)."
    )]
    pub default: Option<bool>,
}
