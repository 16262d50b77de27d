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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};

use super::args::*;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_chassis_no_args ensures chassis parses without a name.
#[test]
fn parse_chassis_no_args() {
    let cmd = Cmd::try_parse_from(["get", "chassis"]).expect("should parse chassis");

    match cmd {
        Cmd::Chassis(opts) => assert!(opts.name.is_none()),
        _ => panic!("expected Chassis variant"),
    }
}

// parse_chassis_alias ensures the c alias parses with a name.
#[test]
fn parse_chassis_alias() {
    let cmd = Cmd::try_parse_from(["get", "c", "1U"]).expect("should parse c");

    match cmd {
        Cmd::Chassis(opts) => assert_eq!(opts.name, Some("1U".to_string())),
        _ => panic!("expected Chassis variant"),
    }
}

// parse_system_aliases ensures system, systems and s all
// land on the System variant.
#[test]
fn parse_system_aliases() {
    for alias in ["system", "systems", "s"] {
        let cmd = Cmd::try_parse_from(["get", alias, "437XR1138R2"])
            .unwrap_or_else(|e| panic!("should parse {alias}: {e}"));

        match cmd {
            Cmd::System(opts) => assert_eq!(opts.name, Some("437XR1138R2".to_string())),
            _ => panic!("expected System variant for {alias}"),
        }
    }
}

// parse_drive_aliases ensures drive, drives and d parse.
#[test]
fn parse_drive_aliases() {
    for alias in ["drive", "drives", "d"] {
        let cmd = Cmd::try_parse_from(["get", alias]).expect("should parse drive alias");

        assert!(matches!(cmd, Cmd::Drive(GetOptions { name: None })));
    }
}

// parse_user_aliases ensures user, users and u parse.
#[test]
fn parse_user_aliases() {
    for alias in ["user", "users", "u"] {
        let cmd = Cmd::try_parse_from(["get", alias, "operator"]).expect("should parse user alias");

        match cmd {
            Cmd::User(opts) => assert_eq!(opts.name.as_deref(), Some("operator")),
            _ => panic!("expected User variant for {alias}"),
        }
    }
}

// parse_extra_arg_fails ensures only one name is accepted.
#[test]
fn parse_extra_arg_fails() {
    let result = Cmd::try_parse_from(["get", "chassis", "1U", "Enclosure"]);

    assert!(result.is_err(), "should fail with two names");
}

// parse_unknown_kind_fails ensures an unknown kind is rejected.
#[test]
fn parse_unknown_kind_fails() {
    let result = Cmd::try_parse_from(["get", "volumes"]);

    assert!(result.is_err(), "should fail on unknown kind");
}
