// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{
    AdminConfig, AppConfig, DatabaseConfig, JournalMode, LoggingConfig, SeedConfig, ServerConfig,
    UploadConfig, ValidatedConfig,
};

#[derive(Debug, Clone)]
pub struct TestConfigBuilder {
    config: ValidatedConfig,
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatedConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 3001,
                    workers: 1,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                app: AppConfig {
                    name: "Test Portal".to_string(),
                    description: "Portal used by the test suite".to_string(),
                },
                upload: UploadConfig {
                    max_file_size_mb: 100,
                },
                database: DatabaseConfig {
                    file: "portal.sqlite".to_string(),
                    busy_timeout_ms: 5_000,
                    journal_mode: JournalMode::Wal,
                },
                admin: AdminConfig {
                    username: "admin".to_string(),
                    initial_password: "admin123".to_string(),
                },
                seed: SeedConfig {
                    demo_content: false,
                },
            },
        }
    }

    pub fn with_max_file_size_mb(mut self, mb: u64) -> Self {
        self.config.upload.max_file_size_mb = mb;
        self
    }

    pub fn with_admin(mut self, username: &str, password: &str) -> Self {
        self.config.admin.username = username.to_string();
        self.config.admin.initial_password = password.to_string();
        self
    }

    pub fn with_journal_mode(mut self, mode: JournalMode) -> Self {
        self.config.database.journal_mode = mode;
        self
    }

    pub fn build(self) -> ValidatedConfig {
        self.config
    }
}

pub fn test_config() -> ValidatedConfig {
    TestConfigBuilder::new().build()
}
