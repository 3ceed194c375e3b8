// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::types::Admin;
use super::{ContentStore, StoreError};
use rusqlite::{OptionalExtension, params};

impl ContentStore {
    pub fn admin_exists(&self, username: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT id FROM admins WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn find_admin(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        let conn = self.lock()?;
        let admin = conn
            .query_row(
                "SELECT id, username, password_hash FROM admins WHERE username = ?1",
                params![username],
                |row| {
                    Ok(Admin {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(admin)
    }

    pub fn insert_admin(&self, username: &str, password_hash: &str) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO admins (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;
        Ok(conn.last_insert_rowid())
    }
}
