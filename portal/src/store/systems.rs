// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::types::{System, SystemFields};
use super::{ContentStore, StoreError};
use rusqlite::{OptionalExtension, params};

impl ContentStore {
    /// New systems always start at `sort_order = 0`; ordering among them falls back to id.
    pub fn create_system(&self, section_id: i64, fields: &SystemFields) -> Result<i64, StoreError> {
        let (icon, image_filename) = fields.visual.columns();
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO systems
                (section_id, title, description, url, icon, color, image_filename, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0)",
            params![
                section_id,
                fields.title,
                fields.description,
                fields.url,
                icon,
                fields.color,
                image_filename
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrites every editable column. Returns the number of rows changed.
    pub fn update_system(&self, id: i64, fields: &SystemFields) -> Result<usize, StoreError> {
        let (icon, image_filename) = fields.visual.columns();
        let conn = self.lock()?;
        let changes = conn.execute(
            "UPDATE systems
             SET title = ?1, description = ?2, url = ?3, icon = ?4, color = ?5, image_filename = ?6
             WHERE id = ?7",
            params![
                fields.title,
                fields.description,
                fields.url,
                icon,
                fields.color,
                image_filename,
                id
            ],
        )?;
        Ok(changes)
    }

    pub fn delete_system(&self, id: i64) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        Ok(conn.execute("DELETE FROM systems WHERE id = ?1", params![id])?)
    }

    pub fn find_system(&self, id: i64) -> Result<Option<System>, StoreError> {
        let conn = self.lock()?;
        let system = conn
            .query_row(
                "SELECT id, section_id, title, description, url, icon, color, sort_order, image_filename
                 FROM systems WHERE id = ?1",
                params![id],
                System::from_row,
            )
            .optional()?;
        Ok(system)
    }

    pub fn count_systems(&self) -> Result<i64, StoreError> {
        let conn = self.lock()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM systems", [], |row| row.get(0))?)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::test_support::open_store;
    use crate::store::{StoreError, SystemFields, SystemVisual};

    fn fields(title: &str, visual: SystemVisual) -> SystemFields {
        SystemFields {
            title: title.to_string(),
            description: Some("desc".to_string()),
            url: Some("https://example.test".to_string()),
            visual,
            color: Some("from-blue-500 to-cyan-500".to_string()),
        }
    }

    #[test]
    fn create_system_stores_zero_sort_order() {
        let (_fixture, store) = open_store("systems-create");
        let section = store.create_section("S", None).unwrap();
        let a = store
            .create_system(section, &fields("a", SystemVisual::Icon("Box".into())))
            .unwrap();
        let b = store
            .create_system(section, &fields("b", SystemVisual::Icon("Box".into())))
            .unwrap();

        let items = &store.list_sections().unwrap()[0].items;
        assert_eq!(items.iter().map(|s| s.id).collect::<Vec<_>>(), vec![a, b]);
        assert!(items.iter().all(|s| s.sort_order == 0));
    }

    #[test]
    fn setting_image_clears_icon_and_back() {
        let (_fixture, store) = open_store("systems-visual");
        let section = store.create_section("S", None).unwrap();
        let id = store
            .create_system(section, &fields("x", SystemVisual::Icon("Server".into())))
            .unwrap();

        let changes = store
            .update_system(id, &fields("x", SystemVisual::Image("sys-1-2.png".into())))
            .unwrap();
        assert_eq!(changes, 1);
        let system = store.find_system(id).unwrap().unwrap();
        assert_eq!(system.icon, None);
        assert_eq!(system.image_filename.as_deref(), Some("sys-1-2.png"));

        store
            .update_system(id, &fields("x", SystemVisual::Icon("Cloud".into())))
            .unwrap();
        let system = store.find_system(id).unwrap().unwrap();
        assert_eq!(system.icon.as_deref(), Some("Cloud"));
        assert_eq!(system.image_filename, None);
    }

    #[test]
    fn update_and_delete_missing_system_report_zero() {
        let (_fixture, store) = open_store("systems-missing");
        let f = fields("x", SystemVisual::Icon("Box".into()));
        assert_eq!(store.update_system(7, &f).unwrap(), 0);
        assert_eq!(store.delete_system(7).unwrap(), 0);
    }

    #[test]
    fn create_system_in_unknown_section_is_storage_error() {
        let (_fixture, store) = open_store("systems-fk");
        let err = store
            .create_system(999, &fields("x", SystemVisual::Icon("Box".into())))
            .unwrap_err();
        assert!(matches!(err, StoreError::Db(_)));
    }

    #[test]
    fn delete_system_removes_row() {
        let (_fixture, store) = open_store("systems-delete");
        let section = store.create_section("S", None).unwrap();
        let id = store
            .create_system(section, &fields("x", SystemVisual::Icon("Box".into())))
            .unwrap();
        assert_eq!(store.delete_system(id).unwrap(), 1);
        assert!(store.find_system(id).unwrap().is_none());
    }
}
