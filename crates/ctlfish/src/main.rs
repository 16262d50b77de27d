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

use std::pin::Pin;

use clap::CommandFactory;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::errors::CtlfishCliResult;
use crate::profile::ProfileStore;

mod async_write;
mod cfg;
mod config;
mod errors;
#[cfg(test)]
mod fake_redfish;
mod get;
mod profile;
mod reset;
mod session;
mod set;
mod table;
mod version;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = CliOptions::load();
    init_logging(config.debug)?;

    let Some(command) = config.commands else {
        return Ok(CliOptions::command().print_long_help()?);
    };

    let runtime_config = RuntimeConfig {
        format: config.format,
        connection: config.connection,
    };
    if let Err(e) = run(command, runtime_config, config.config, config.output).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(debug: u8) -> color_eyre::Result<()> {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("rustls=warn".parse()?)
        .add_directive("hyper=info".parse()?)
        .add_directive("hyper_util=info".parse()?)
        .add_directive("reqwest=info".parse()?);

    // --debug only raises our own crates, the noisy ones above stay capped.
    match debug {
        0 => {}
        1 => {
            env_filter = env_filter
                .add_directive("ctlfish=debug".parse()?)
                .add_directive("redfish_client=debug".parse()?);
        }
        _ => {
            env_filter = env_filter
                .add_directive("ctlfish=trace".parse()?)
                .add_directive("redfish_client=trace".parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;
    Ok(())
}

async fn run(
    command: CliCommand,
    config: RuntimeConfig,
    store_path: Option<std::path::PathBuf>,
    output: Option<String>,
) -> CtlfishCliResult<()> {
    let store_path = match store_path {
        Some(path) => path,
        None => ProfileStore::default_path()?,
    };
    let store = ProfileStore::load(store_path)?;

    let ctx = RuntimeContext {
        store,
        config,
        output_file: get_output_file_or_stdout(output.as_deref()).await?,
    };

    match command {
        CliCommand::Get(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Reset(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Set(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Config(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Version(opts) => opts.dispatch(ctx).await,
    }
}

// Command output goes to stdout unless --output names a file, which
// must not exist yet.
async fn get_output_file_or_stdout(
    output_filename: Option<&str>,
) -> CtlfishCliResult<Pin<Box<dyn tokio::io::AsyncWrite>>> {
    if let Some(filename) = output_filename {
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(filename)
            .await?;
        Ok(Box::pin(file))
    } else {
        Ok(Box::pin(tokio::io::stdout()))
    }
}
