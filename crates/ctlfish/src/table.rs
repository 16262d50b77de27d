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

use prettytable::format::FormatBuilder;
use prettytable::{Cell, Row, Table};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::cfg::cli_options::OutputFormat;
use crate::errors::{CtlfishCliError, CtlfishCliResult};

/// TableWriter collects command results as rows under fixed column
/// headers. Commands only ever add rows; how the table is rendered is up
/// to the implementation picked for the output format.
pub trait TableWriter {
    fn add_row(&mut self, row: Vec<String>);
    fn row_count(&self) -> usize;
    fn render(&self) -> CtlfishCliResult<String>;
}

/// new_table_writer returns the renderer for `format` with `headers` as
/// column titles.
pub fn new_table_writer(format: OutputFormat, headers: &[&str]) -> Box<dyn TableWriter> {
    let headers = headers.iter().map(|h| h.to_string()).collect();
    match format {
        OutputFormat::AsciiTable => Box::new(TextTable::new(headers)),
        _ => Box::new(StructuredTable::new(format, headers)),
    }
}

fn build_table(titles: Vec<String>, rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table.set_format(FormatBuilder::new().padding(0, 3).build());
    table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }
    table
}

/// TextTable renders left aligned columns separated by at least three
/// spaces, with upper-cased headers and a trailing blank line.
#[derive(Debug, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }
}

impl TableWriter for TextTable {
    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn render(&self) -> CtlfishCliResult<String> {
        let titles = self.headers.iter().map(|h| h.to_uppercase()).collect();
        let table = build_table(titles, &self.rows);
        let mut out = String::new();
        for line in table.to_string().lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
        Ok(out)
    }
}

/// StructuredTable renders rows as JSON or YAML objects keyed by header,
/// or as CSV.
#[derive(Debug)]
pub struct StructuredTable {
    format: OutputFormat,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StructuredTable {
    pub fn new(format: OutputFormat, headers: Vec<String>) -> Self {
        Self {
            format,
            headers,
            rows: Vec::new(),
        }
    }

    fn records(&self) -> Vec<Record<'_>> {
        self.rows
            .iter()
            .map(|cells| Record {
                headers: &self.headers,
                cells,
            })
            .collect()
    }
}

// Record serializes one row as a map in column order.
struct Record<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

fn field_name(header: &str) -> String {
    let trimmed = header.trim();
    if trimmed.is_empty() {
        // the unnamed marker column of `config get`
        return "default".to_string();
    }
    trimmed.to_lowercase().replace(' ', "_")
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells.iter()) {
            map.serialize_entry(&field_name(header), cell.trim())?;
        }
        map.end()
    }
}

impl TableWriter for StructuredTable {
    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn render(&self) -> CtlfishCliResult<String> {
        match self.format {
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(&self.records())?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&self.records())?),
            OutputFormat::Csv => {
                let mut output = Vec::default();
                build_table(self.headers.clone(), &self.rows)
                    .to_csv(&mut output)
                    .map_err(|e| CtlfishCliError::GenericError(e.to_string()))?;
                String::from_utf8(output).map_err(|e| CtlfishCliError::GenericError(e.to_string()))
            }
            OutputFormat::AsciiTable => TextTable {
                headers: self.headers.clone(),
                rows: self.rows.clone(),
            }
            .render(),
        }
    }
}
