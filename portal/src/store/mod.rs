// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Content Store: sections, systems and the admin principal in one SQLite file.
//!
//! A single connection sits behind a mutex; SQLite serializes writers anyway and
//! every call is short. Callers on the async side go through `web::block`.

mod admins;
mod demo;
mod schema;
mod sections;
mod systems;
mod types;

pub use types::{Admin, Section, SectionWithItems, System, SystemFields, SystemVisual};

use crate::config::DatabaseConfig;
use log::debug;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug)]
pub enum StoreError {
    Db(String),
    Io(String),
    Invalid(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Db(msg) => write!(f, "content store db error: {}", msg),
            StoreError::Io(msg) => write!(f, "content store io error: {}", msg),
            StoreError::Invalid(msg) => write!(f, "content store invalid data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Db(err.to_string())
    }
}

pub struct ContentStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore").finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Opens (or creates) the database file and brings the schema up to date.
    pub fn open(path: &Path, config: &DatabaseConfig) -> Result<Self, StoreError> {
        if path.is_dir() {
            return Err(StoreError::Invalid(format!(
                "database path must be a file, not a directory: {}",
                path.display()
            )));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(StoreError::Io(format!(
                "database directory does not exist: {}",
                parent.display()
            )));
        }

        let mut conn = Connection::open(path)?;
        apply_pragmas(&conn, config)?;
        schema::initialize(&mut conn)?;
        debug!("Content store opened at {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Db("content store connection lock poisoned".to_string()))
    }
}

fn apply_pragmas(conn: &Connection, config: &DatabaseConfig) -> Result<(), StoreError> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    // journal_mode answers with the resulting mode as a row.
    let _mode: String = conn.query_row(
        &format!("PRAGMA journal_mode = {};", config.journal_mode.pragma_value()),
        [],
        |row| row.get(0),
    )?;
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
    Ok(())
}
