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

use redfish_client::Status;

use super::args::GetOptions;
use crate::errors::{CtlfishCliError, CtlfishCliResult};
use crate::session::Session;
use crate::table::TableWriter;

pub const CHASSIS_HEADERS: &[&str] = &["name", "power", "status"];
pub const SYSTEM_HEADERS: &[&str] = &[
    "name",
    "cpu",
    "memory",
    "power",
    "status",
    "led",
    "description",
];
pub const DRIVE_HEADERS: &[&str] = &[
    "name",
    "size",
    "status",
    "manufacturer",
    "model",
    "serial number",
];
pub const USER_HEADERS: &[&str] = &["name", "role", "enabled", "description"];

// An item is shown when no name was asked for, or when the name equals
// one of its identifiers.
fn wanted(name: Option<&str>, identifiers: &[&str]) -> bool {
    name.is_none_or(|name| identifiers.contains(&name))
}

fn ensure_found(
    kind: &'static str,
    name: Option<&str>,
    table: &dyn TableWriter,
) -> CtlfishCliResult<()> {
    match name {
        Some(name) if table.row_count() == 0 => Err(CtlfishCliError::not_found(kind, name)),
        _ => Ok(()),
    }
}

/// bytes_to_readable formats a byte count using 1024 based units.
pub fn bytes_to_readable(bytes: i64) -> String {
    let mut value = bytes as f64;
    for unit in ["Bytes", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{value:0.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:0.2} TB")
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub async fn chassis(
    opts: &GetOptions,
    session: &Session,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let name = opts.name.as_deref();
    for chassis in session.list_chassis().await? {
        if !wanted(name, &[chassis.id.as_str(), chassis.name.as_str()]) {
            continue;
        }
        table.add_row(vec![
            chassis.name.clone(),
            text(&chassis.power_state),
            Status::health(&chassis.status),
        ]);
    }
    ensure_found("chassis", name, table)
}

pub async fn system(
    opts: &GetOptions,
    session: &Session,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let name = opts.name.as_deref();
    for system in session.list_systems().await? {
        if !wanted(name, &[system.id.as_str(), system.name.as_str()]) {
            continue;
        }
        let cpus = system
            .processor_summary
            .as_ref()
            .and_then(|p| p.count)
            .unwrap_or_default();
        let memory = system
            .memory_summary
            .as_ref()
            .and_then(|m| m.total_system_memory_gib)
            .unwrap_or_default();
        table.add_row(vec![
            system.name.clone(),
            cpus.to_string(),
            format!("{memory:0.2} GB"),
            text(&system.power_state),
            Status::health(&system.status),
            text(&system.indicator_led),
            text(&system.description),
        ]);
    }
    ensure_found("system", name, table)
}

pub async fn drive(
    opts: &GetOptions,
    session: &Session,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let name = opts.name.as_deref();
    for drive in session.list_drives().await? {
        if !wanted(name, &[drive.id.as_str(), drive.name.as_str()]) {
            continue;
        }
        table.add_row(vec![
            drive.name.clone(),
            bytes_to_readable(drive.capacity_bytes.unwrap_or_default()),
            Status::health(&drive.status),
            text(&drive.manufacturer),
            text(&drive.model),
            text(&drive.serial_number),
        ]);
    }
    ensure_found("drive", name, table)
}

pub async fn user(
    opts: &GetOptions,
    session: &Session,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let name = opts.name.as_deref();
    for account in session.list_accounts().await? {
        if !wanted(name, &[
            account.id.as_str(),
            account.name.as_str(),
            account.user_name.as_str(),
        ]) {
            continue;
        }
        table.add_row(vec![
            account.user_name.clone(),
            text(&account.role_id),
            account.enabled.unwrap_or_default().to_string(),
            text(&account.description),
        ]);
    }
    ensure_found("user", name, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_redfish::FakeRedfish;
    use crate::table::TextTable;

    fn session() -> Session {
        Session::new("https://bmc:443".to_string(), Box::new(FakeRedfish::lab()))
    }

    fn headers(headers: &[&str]) -> TextTable {
        TextTable::new(headers.iter().map(|h| h.to_string()).collect())
    }

    fn opts(name: Option<&str>) -> GetOptions {
        GetOptions {
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn readable_sizes() {
        assert_eq!(bytes_to_readable(512), "512.00 Bytes");
        assert_eq!(bytes_to_readable(1536), "1.50 KB");
        assert_eq!(bytes_to_readable(1_048_576), "1.00 MB");
        assert_eq!(bytes_to_readable(899_527_000_000), "837.75 GB");
        assert_eq!(bytes_to_readable(1_600_321_314_816), "1.46 TB");
    }

    #[tokio::test]
    async fn chassis_lists_everything_without_name() {
        let mut session = session();
        let mut table = headers(CHASSIS_HEADERS);

        chassis(&opts(None), &session, &mut table).await.unwrap();
        session.close().await;

        assert_eq!(
            table.render().unwrap(),
            "NAME                      POWER   STATUS\n\
             Computer System Chassis   On      OK\n\
             Storage Enclosure         Off     Warning\n\
             \n"
        );
    }

    #[tokio::test]
    async fn chassis_matches_id_or_name() {
        let mut session = session();

        let mut by_id = headers(CHASSIS_HEADERS);
        chassis(&opts(Some("Enclosure")), &session, &mut by_id)
            .await
            .unwrap();
        let mut by_name = headers(CHASSIS_HEADERS);
        chassis(&opts(Some("Storage Enclosure")), &session, &mut by_name)
            .await
            .unwrap();
        session.close().await;

        assert_eq!(by_id.row_count(), 1);
        assert_eq!(by_id.render().unwrap(), by_name.render().unwrap());
    }

    #[tokio::test]
    async fn unknown_chassis_is_not_found() {
        let mut session = session();
        let mut table = headers(CHASSIS_HEADERS);

        let err = chassis(&opts(Some("2U")), &session, &mut table)
            .await
            .unwrap_err();
        session.close().await;

        assert_eq!(err.to_string(), "chassis '2U' was not found.");
    }

    #[tokio::test]
    async fn system_row_formats_memory() {
        let mut session = session();
        let mut table = headers(SYSTEM_HEADERS);

        system(&opts(Some("437XR1138R2")), &session, &mut table)
            .await
            .unwrap();
        session.close().await;

        let rendered = table.render().unwrap();
        let row = rendered.lines().nth(1).unwrap();
        assert!(row.starts_with("WebFrontEnd483   2     96.00 GB   On      OK"), "{row}");
        assert!(row.ends_with("Web Front End node"), "{row}");
    }

    #[tokio::test]
    async fn drives_come_from_all_chassis() {
        let mut session = session();
        let mut table = headers(DRIVE_HEADERS);

        drive(&opts(None), &session, &mut table).await.unwrap();
        session.close().await;

        assert_eq!(table.row_count(), 3);
        let rendered = table.render().unwrap();
        assert!(rendered.contains("837.75 GB"));
        assert!(rendered.contains("SERIAL NUMBER"));
    }

    #[tokio::test]
    async fn unknown_drive_is_not_found() {
        let mut session = session();
        let mut table = headers(DRIVE_HEADERS);

        let err = drive(&opts(Some("Bay 9")), &session, &mut table)
            .await
            .unwrap_err();
        session.close().await;

        assert!(matches!(err, CtlfishCliError::NotFound { kind: "drive", .. }));
    }

    #[tokio::test]
    async fn users_match_login_name() {
        let mut session = session();
        let mut table = headers(USER_HEADERS);

        user(&opts(Some("operator")), &session, &mut table)
            .await
            .unwrap();
        session.close().await;

        assert_eq!(
            table.render().unwrap(),
            "NAME       ROLE       ENABLED   DESCRIPTION\n\
             operator   ReadOnly   false\n\
             \n"
        );
    }
}
