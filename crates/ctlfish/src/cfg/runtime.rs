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

use crate::cfg::cli_options::OutputFormat;
use crate::errors::CtlfishCliResult;
use crate::profile::{ProfileStore, resolver};
use crate::session::Session;
use crate::table::{self, TableWriter};

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub store: ProfileStore,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from CLI options. This should contain the entirety of any options
// that need to be leveraged by any downstream command handler.
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub connection: Option<String>,
}

impl RuntimeContext {
    /// open_session resolves the connection profile for this invocation
    /// and logs in to it. The caller must `close` the returned session.
    pub async fn open_session(&self) -> CtlfishCliResult<Session> {
        let profile = resolver::resolve(&self.store, self.config.connection.as_deref())?;
        Session::open(profile).await
    }

    pub fn table(&self, headers: &[&str]) -> Box<dyn TableWriter> {
        table::new_table_writer(self.config.format, headers)
    }
}
