// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{ContentStore, StoreError};
use rusqlite::params;

struct DemoSystem {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

struct DemoSection {
    title: &'static str,
    icon: &'static str,
    systems: &'static [DemoSystem],
}

const DEMO_SECTIONS: &[DemoSection] = &[
    DemoSection {
        title: "Gestión Administrativa",
        icon: "Briefcase",
        systems: &[
            DemoSystem {
                title: "ERP Central",
                description: "Gestión integral de recursos.",
                icon: "LayoutDashboard",
                color: "from-blue-500 to-cyan-500",
            },
            DemoSystem {
                title: "Recursos Humanos",
                description: "Portal del empleado y nóminas.",
                icon: "Users",
                color: "from-purple-500 to-pink-500",
            },
            DemoSystem {
                title: "CRM Ventas",
                description: "Gestión de clientes y leads.",
                icon: "ShoppingCart",
                color: "from-orange-500 to-red-500",
            },
        ],
    },
    DemoSection {
        title: "Análisis y Datos",
        icon: "Database",
        systems: &[
            DemoSystem {
                title: "Analytics & BI",
                description: "Reportes de inteligencia.",
                icon: "BarChart3",
                color: "from-emerald-500 to-green-500",
            },
            DemoSystem {
                title: "Finanzas",
                description: "Control financiero y auditoría.",
                icon: "BarChart3",
                color: "from-teal-400 to-emerald-600",
            },
        ],
    },
    DemoSection {
        title: "Infraestructura TI",
        icon: "Server",
        systems: &[
            DemoSystem {
                title: "Seguridad IT",
                description: "Control de accesos y logs.",
                icon: "ShieldCheck",
                color: "from-indigo-500 to-blue-600",
            },
            DemoSystem {
                title: "Cloud Panel",
                description: "Servidores y despliegues.",
                icon: "CloudCog",
                color: "from-yellow-400 to-orange-500",
            },
        ],
    },
];

impl ContentStore {
    /// Inserts the demo directory when no section exists yet. Returns whether anything was inserted.
    pub fn seed_demo_content(&self) -> Result<bool, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM sections", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(false);
        }

        for (section_pos, section) in DEMO_SECTIONS.iter().enumerate() {
            tx.execute(
                "INSERT INTO sections (title, icon, sort_order) VALUES (?1, ?2, ?3)",
                params![section.title, section.icon, section_pos as i64 + 1],
            )?;
            let section_id = tx.last_insert_rowid();

            for (system_pos, system) in section.systems.iter().enumerate() {
                tx.execute(
                    "INSERT INTO systems (section_id, title, description, url, icon, color, sort_order)
                     VALUES (?1, ?2, ?3, '#', ?4, ?5, ?6)",
                    params![
                        section_id,
                        system.title,
                        system.description,
                        system.icon,
                        system.color,
                        system_pos as i64 + 1
                    ],
                )?;
            }
        }

        tx.commit()?;
        Ok(true)
    }
}
