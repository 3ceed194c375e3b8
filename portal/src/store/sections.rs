// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::types::{Section, SectionWithItems, System};
use super::{ContentStore, StoreError};
use rusqlite::params;
use std::collections::HashMap;

impl ContentStore {
    /// Every section in display order, each carrying its systems in display order.
    pub fn list_sections(&self) -> Result<Vec<SectionWithItems>, StoreError> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, icon, sort_order FROM sections ORDER BY sort_order ASC, id ASC",
        )?;
        let sections = stmt
            .query_map([], Section::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = conn.prepare(
            "SELECT id, section_id, title, description, url, icon, color, sort_order, image_filename
             FROM systems ORDER BY sort_order ASC, id ASC",
        )?;
        let systems = stmt
            .query_map([], System::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut result: Vec<SectionWithItems> =
            sections.into_iter().map(SectionWithItems::from).collect();
        let index: HashMap<i64, usize> = result
            .iter()
            .enumerate()
            .map(|(pos, section)| (section.id, pos))
            .collect();
        for system in systems {
            if let Some(&pos) = index.get(&system.section_id) {
                result[pos].items.push(system);
            }
        }
        Ok(result)
    }

    pub fn count_sections(&self) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM sections", [], |row| row.get(0))?)
    }

    /// Appends a section after every existing one.
    pub fn create_section(&self, title: &str, icon: Option<&str>) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO sections (title, icon, sort_order)
             VALUES (?1, ?2, (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM sections))",
            params![title, icon],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Partial update: `None` keeps the stored value, `Some(None)` clears the icon.
    /// Returns the number of rows changed.
    pub fn update_section(
        &self,
        id: i64,
        title: Option<&str>,
        icon: Option<Option<&str>>,
    ) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        let changes = conn.execute(
            "UPDATE sections
             SET title = COALESCE(?1, title), icon = CASE WHEN ?2 THEN ?3 ELSE icon END
             WHERE id = ?4",
            params![title, icon.is_some(), icon.flatten(), id],
        )?;
        Ok(changes)
    }

    /// Removes the section and every system it owns in one transaction.
    pub fn delete_section(&self, id: i64) -> Result<usize, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM systems WHERE section_id = ?1", params![id])?;
        let changes = tx.execute("DELETE FROM sections WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(changes)
    }
}
