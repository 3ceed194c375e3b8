// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::assets::AssetStore;
use crate::config::ValidatedConfig;
use crate::iam::{AdminCredentials, PasswordError};
use crate::runtime_paths::RuntimePaths;
use crate::store::ContentStore;

/// Shared by every worker through `web::Data`.
#[derive(Debug)]
pub struct AppState {
    pub config: ValidatedConfig,
    pub store: ContentStore,
    pub assets: AssetStore,
    pub credentials: AdminCredentials,
}

impl AppState {
    pub fn new(
        config: ValidatedConfig,
        runtime_paths: &RuntimePaths,
        store: ContentStore,
    ) -> Result<Self, PasswordError> {
        let assets = AssetStore::from_runtime_paths(runtime_paths);
        Ok(Self {
            config,
            store,
            assets,
            credentials: AdminCredentials::new()?,
        })
    }

    pub fn upload_limit_bytes(&self) -> usize {
        self.config.upload.max_file_size_bytes()
    }
}
