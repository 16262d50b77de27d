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

use redfish_client::{AccountService, AccountUpdate};
use tracing::debug;

use super::args::UserOptions;
use crate::errors::{CtlfishCliError, CtlfishCliResult};
use crate::get::cmds::USER_HEADERS;
use crate::session::Session;
use crate::table::TableWriter;

pub const HEADERS: &[&str] = USER_HEADERS;

fn check_password(service: &AccountService, password: &str) -> CtlfishCliResult<()> {
    let length = password.chars().count();
    let (min, max) = (service.min_password_length, service.max_password_length);
    if min.is_some_and(|min| length < min) || max.is_some_and(|max| length > max) {
        let max = max.map_or_else(|| "unlimited".to_string(), |max| max.to_string());
        return Err(CtlfishCliError::InvalidArgument(format!(
            "account password must be between {} - {max} in length",
            min.unwrap_or(0),
        )));
    }
    Ok(())
}

pub async fn user(
    opts: &UserOptions,
    session: &Session,
    table: &mut dyn TableWriter,
) -> CtlfishCliResult<()> {
    let accounts = session.list_accounts().await?;
    let mut account = accounts
        .into_iter()
        .find(|a| a.id == opts.name || a.name == opts.name || a.user_name == opts.name)
        .ok_or_else(|| CtlfishCliError::not_found("user", &opts.name))?;

    let mut update = AccountUpdate::default();

    if let Some(user_name) = &opts.username {
        update.user_name = Some(user_name.clone());
    }

    if let Some(password) = &opts.password {
        let service = session.account_service().await?;
        check_password(&service, password)?;
        update.password = Some(password.clone());
    }

    if let Some(wanted) = &opts.role {
        let roles = session.list_roles().await?;
        let role = roles
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(wanted) || r.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CtlfishCliError::not_found("role", wanted))?;
        update.role_id = Some(role.id.clone());
    }

    if update.is_empty() {
        debug!("Nothing to change on account {}", account.id);
    } else {
        session.update_account(&account, &update).await?;
    }

    if let Some(user_name) = update.user_name {
        account.user_name = user_name;
    }
    if let Some(role_id) = update.role_id {
        account.role_id = Some(role_id);
    }

    table.add_row(vec![
        account.user_name,
        account.role_id.unwrap_or_default(),
        account.enabled.unwrap_or_default().to_string(),
        account.description.unwrap_or_default(),
    ]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_redfish::FakeRedfish;
    use crate::table::TextTable;

    fn table() -> TextTable {
        TextTable::new(HEADERS.iter().map(|h| h.to_string()).collect())
    }

    fn opts(name: &str) -> UserOptions {
        UserOptions {
            name: name.to_string(),
            username: None,
            password: None,
            role: None,
        }
    }

    #[tokio::test]
    async fn role_is_matched_case_insensitively_and_id_is_sent() {
        let fake = FakeRedfish::lab();
        let calls = fake.calls();
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        let opts = UserOptions {
            role: Some("operator role".to_string()),
            ..opts("operator")
        };
        user(&opts, &session, &mut table).await.unwrap();
        session.close().await;

        let updates = calls.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "2");
        assert_eq!(updates[0].1.role_id.as_deref(), Some("Operator"));
        assert!(updates[0].1.user_name.is_none());
        assert!(updates[0].1.password.is_none());
        assert_eq!(
            table.render().unwrap(),
            "NAME       ROLE       ENABLED   DESCRIPTION\n\
             operator   Operator   false\n\n"
        );
    }

    #[tokio::test]
    async fn rename_shows_new_login_name() {
        let fake = FakeRedfish::lab();
        let calls = fake.calls();
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        let opts = UserOptions {
            username: Some("ops".to_string()),
            ..opts("2")
        };
        user(&opts, &session, &mut table).await.unwrap();
        session.close().await;

        assert_eq!(calls.updates()[0].1.user_name.as_deref(), Some("ops"));
        assert!(table.render().unwrap().contains("ops    ReadOnly   false"));
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_update() {
        let fake = FakeRedfish::lab();
        let calls = fake.calls();
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        let opts = UserOptions {
            password: Some("short".to_string()),
            ..opts("operator")
        };
        let err = user(&opts, &session, &mut table).await.unwrap_err();
        session.close().await;

        assert_eq!(
            err.to_string(),
            "account password must be between 8 - 20 in length"
        );
        assert_eq!(calls.count("update_account"), 0);
        assert_eq!(table.row_count(), 0);
    }

    #[tokio::test]
    async fn password_without_advertised_limits_is_accepted() {
        let fake = FakeRedfish {
            account_service: AccountService::default(),
            ..FakeRedfish::lab()
        };
        let calls = fake.calls();
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        let opts = UserOptions {
            password: Some("x".to_string()),
            ..opts("operator")
        };
        user(&opts, &session, &mut table).await.unwrap();
        session.close().await;

        assert_eq!(calls.updates()[0].1.password.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn unknown_role_is_not_found() {
        let fake = FakeRedfish::lab();
        let calls = fake.calls();
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        let opts = UserOptions {
            role: Some("Superuser".to_string()),
            ..opts("operator")
        };
        let err = user(&opts, &session, &mut table).await.unwrap_err();
        session.close().await;

        assert_eq!(err.to_string(), "role 'Superuser' was not found.");
        assert_eq!(calls.count("update_account"), 0);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut session =
            Session::new("https://bmc:443".to_string(), Box::new(FakeRedfish::lab()));
        let mut table = table();

        let err = user(&opts("nobody"), &session, &mut table).await.unwrap_err();
        session.close().await;

        assert!(matches!(err, CtlfishCliError::NotFound { kind: "user", .. }));
    }

    #[tokio::test]
    async fn no_changes_skips_update_but_prints_row() {
        let fake = FakeRedfish::lab();
        let calls = fake.calls();
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        user(&opts("Administrator"), &session, &mut table).await.unwrap();
        session.close().await;

        assert_eq!(calls.count("update_account"), 0);
        assert_eq!(table.row_count(), 1);
    }

    #[tokio::test]
    async fn rejected_update_names_the_user() {
        let fake = FakeRedfish {
            reset_error: Some(
                r#"{"error":{"code":"Base.1.8.GeneralError","message":"Password does not meet complexity rules."}}"#
                    .to_string(),
            ),
            ..FakeRedfish::lab()
        };
        let mut session = Session::new("https://bmc:443".to_string(), Box::new(fake));
        let mut table = table();

        let opts = UserOptions {
            password: Some("aaaaaaaaaa".to_string()),
            ..opts("operator")
        };
        let err = user(&opts, &session, &mut table).await.unwrap_err();
        session.close().await;

        assert_eq!(
            err.to_string(),
            "error updating user 'operator': Password does not meet complexity rules."
        );
    }
}
