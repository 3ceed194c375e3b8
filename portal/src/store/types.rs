// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use rusqlite::Row;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: i64,
    pub title: String,
    pub icon: Option<String>,
    pub sort_order: i64,
}

impl Section {
    pub(super) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            icon: row.get("icon")?,
            sort_order: row.get("sort_order")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct System {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub sort_order: i64,
    pub image_filename: Option<String>,
}

impl System {
    pub(super) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            section_id: row.get("section_id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            url: row.get("url")?,
            icon: row.get("icon")?,
            color: row.get("color")?,
            sort_order: row.get("sort_order")?,
            image_filename: row.get("image_filename")?,
        })
    }
}

/// A section as served by the aggregation endpoint, systems nested under `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionWithItems {
    pub id: i64,
    pub title: String,
    pub icon: Option<String>,
    pub sort_order: i64,
    pub items: Vec<System>,
}

impl From<Section> for SectionWithItems {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            title: section.title,
            icon: section.icon,
            sort_order: section.sort_order,
            items: Vec::new(),
        }
    }
}

/// Exactly one visual is active on a system; storing one clears the other column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemVisual {
    Icon(String),
    Image(String),
}

impl SystemVisual {
    /// `(icon, image_filename)` column values.
    pub(super) fn columns(&self) -> (Option<&str>, Option<&str>) {
        match self {
            SystemVisual::Icon(name) => (Some(name.as_str()), None),
            SystemVisual::Image(file) => (None, Some(file.as_str())),
        }
    }
}

/// Every column of a system that an update overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFields {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub visual: SystemVisual,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}
