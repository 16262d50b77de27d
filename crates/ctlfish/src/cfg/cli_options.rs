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

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::{config, get, reset, set, version};

#[derive(Parser, Debug)]
#[clap(name = "ctlfish")]
#[clap(
    about = "Manage Redfish and Swordfish systems.",
    long_about = "ctlfish is a command line client for Redfish and Swordfish systems management endpoints.\n\nConnection details are kept in a local file, see 'ctlfish config --help'."
)]
pub struct CliOptions {
    #[clap(short, long, global = true, env = "CTLFISH_CONNECTION")]
    #[clap(
        help = "Name (or host) of the stored connection to use. Defaults to the configured default connection."
    )]
    pub connection: Option<String>,

    #[clap(long, global = true, env = "CTLFISH_CONFIG", value_hint = ValueHint::FilePath)]
    #[clap(help = "Connection file to use. Defaults to $HOME/.ctlfish.yaml.")]
    pub config: Option<PathBuf>,

    #[clap(short, long, global = true, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(short, long, global = true, value_hint = ValueHint::FilePath)]
    #[clap(help = "Write command output to this file instead of stdout. The file must not exist.")]
    pub output: Option<String>,

    #[clap(short, long, global = true, action = ArgAction::Count)]
    #[clap(help = "Log more detail to stderr. Repeat for more (-dd).")]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: Option<CliCommand>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    Json,
    Csv,
    AsciiTable,
    Yaml,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Get information from a system.", subcommand, visible_alias = "g")]
    Get(get::Cmd),
    #[clap(about = "Reset a chassis or system.", subcommand, visible_alias = "r")]
    Reset(reset::Cmd),
    #[clap(about = "Change settings on a system.", subcommand, visible_alias = "s")]
    Set(set::Cmd),
    #[clap(about = "Manage system connection information.", subcommand)]
    Config(config::Cmd),
    #[clap(about = "Print the ctlfish version.")]
    Version(version::Opts),
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    // verify_cli_structure runs clap's debug_assert() over the whole
    // tree, which also catches short flags reused between the global
    // options and a subcommand.
    #[test]
    fn verify_cli_structure() {
        CliOptions::command().debug_assert();
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let opts = CliOptions::try_parse_from([
            "ctlfish", "get", "chassis", "-c", "lab1", "--format", "json", "-dd",
        ])
        .expect("should parse");

        assert_eq!(opts.connection.as_deref(), Some("lab1"));
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.debug, 2);
        assert!(matches!(opts.commands, Some(CliCommand::Get(_))));
    }

    #[test]
    fn parse_verb_aliases() {
        for (verb, args) in [
            ("g", vec!["ctlfish", "g", "c"]),
            ("r", vec!["ctlfish", "r", "s", "437XR1138R2"]),
            ("s", vec!["ctlfish", "s", "u", "operator", "-r", "Operator"]),
        ] {
            let opts = CliOptions::try_parse_from(args).unwrap_or_else(|e| panic!("{verb}: {e}"));
            assert!(opts.commands.is_some());
        }
    }

    #[test]
    fn parse_config_path() {
        let opts = CliOptions::try_parse_from([
            "ctlfish",
            "--config",
            "/tmp/ctlfish.yaml",
            "config",
            "get",
        ])
        .expect("should parse");

        assert_eq!(opts.config, Some(PathBuf::from("/tmp/ctlfish.yaml")));
        assert_eq!(opts.format, OutputFormat::AsciiTable);
    }

    #[test]
    fn reject_unknown_format() {
        assert!(CliOptions::try_parse_from(["ctlfish", "--format", "xml", "version"]).is_err());
    }
}
