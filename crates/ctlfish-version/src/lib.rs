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

use std::path::Path;
use std::process::Command;

/// Reported when the build could not determine a version from git or `VERSION`.
pub const DEV_VERSION: &str = "v0.0.0-dev";

/// Set build script environment variables. Call this from a build script.
pub fn build() {
    println!(
        "cargo:rustc-env=CTLFISH_BUILD_USER={}",
        std::env::var("USER").unwrap_or_default()
    );
    println!(
        "cargo:rustc-env=CTLFISH_BUILD_HOSTNAME={}",
        std::env::var("HOSTNAME").unwrap_or_default()
    );
    println!(
        "cargo:rustc-env=CTLFISH_BUILD_DATE={}",
        run("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) // like 'date --iso-8601=seconds --utc' but portable across GNU/BSD
    );
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    println!(
        "cargo:rustc-env=CTLFISH_BUILD_RUSTC_VERSION={}",
        run(&rustc, &["--version"])
    );
    println!("cargo:rerun-if-env-changed=VERSION");

    // A release build sets VERSION explicitly and doesn't need git at all.
    if let Ok(version) = std::env::var("VERSION") {
        println!("cargo:rustc-env=CTLFISH_BUILD_GIT_TAG={version}");
        println!(
            "cargo:rustc-env=CTLFISH_BUILD_GIT_HASH={}",
            std::env::var("CI_COMMIT_SHORT_SHA").unwrap_or_default()
        );
        return;
    }

    let can_git = Command::new("git")
        .args(["rev-parse"])
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    if !can_git {
        println!("cargo:warning=No git, version will be {DEV_VERSION}");
        // still define it so that we can read it in a build time macro
        println!("cargo:rustc-env=CTLFISH_BUILD_GIT_TAG=");
        println!("cargo:rustc-env=CTLFISH_BUILD_GIT_HASH=");
        return;
    }

    let sha = std::env::var("CI_COMMIT_SHORT_SHA")
        .unwrap_or_else(|_| run("git", &["rev-parse", "--short=8", "HEAD"]));
    println!("cargo:rustc-env=CTLFISH_BUILD_GIT_HASH={sha}");

    let build_version = run("git", &["describe", "--tags", "--always", "--dirty"]);
    println!("cargo:rustc-env=CTLFISH_BUILD_GIT_TAG={build_version}");

    // Only re-calculate all of this when there's a new commit.
    let git_head = run("git", &["rev-parse", "--path-format=absolute", "--git-dir"]) + "/HEAD";
    if Path::new(&git_head).exists() {
        println!("cargo:rerun-if-changed={git_head}");
    }
}

/// Run a command from a build script returning its stdout, logging errors with cargo:warning
fn run(cmd: &str, args: &[&str]) -> String {
    let output = match Command::new(cmd).args(args).output() {
        Ok(output) => {
            if !output.status.success() {
                println!(
                    "cargo:warning=build.rs failed running '{cmd} {}': '{output:?}'",
                    args.join(" ")
                );
                return String::new();
            }
            output
        }
        Err(err) => {
            println!(
                "cargo:warning=build.rs error running '{cmd} {}': {err}.",
                args.join(" ")
            );
            return String::new();
        }
    };
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Picks the build version, falling back to DEV_VERSION when it is blank.
pub fn or_dev(build_version: &'static str) -> &'static str {
    if build_version.is_empty() {
        DEV_VERSION
    } else {
        build_version
    }
}

/// Individual parts of the version. Usage: ctlfish_version::v!(build_version)
/// If that part is not present expands to an empty &str, except build_version
/// which falls back to DEV_VERSION.
#[macro_export]
macro_rules! v {
    (build_version) => {
        $crate::or_dev(option_env!("CTLFISH_BUILD_GIT_TAG").unwrap_or_default())
    };
    (build_date) => {
        option_env!("CTLFISH_BUILD_DATE").unwrap_or_default()
    };
    (git_sha) => {
        option_env!("CTLFISH_BUILD_GIT_HASH").unwrap_or_default()
    };
    (rust_version) => {
        option_env!("CTLFISH_BUILD_RUSTC_VERSION").unwrap_or_default()
    };
    (build_user) => {
        option_env!("CTLFISH_BUILD_USER").unwrap_or_default()
    };
    (build_hostname) => {
        option_env!("CTLFISH_BUILD_HOSTNAME").unwrap_or_default()
    };
}

/// Version as a string. `ctlfish_version::build()` must have been called previously in build script.
#[macro_export]
macro_rules! version {
    () => {
        format!(
            "build_version={}, build_date={}, git_sha={}, rust_version={}, build_user={}, build_hostname={}",
            $crate::v!(build_version),
            $crate::v!(build_date),
            $crate::v!(git_sha),
            $crate::v!(rust_version),
            $crate::v!(build_user),
            $crate::v!(build_hostname),
        )
    };
}
