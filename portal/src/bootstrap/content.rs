// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use crate::config::ValidatedConfig;
use crate::runtime_paths::RuntimePaths;
use crate::store::ContentStore;

pub fn open_store(
    paths: &RuntimePaths,
    config: &ValidatedConfig,
) -> Result<ContentStore, BootstrapError> {
    let existed = paths.database_file.exists();
    let store = ContentStore::open(&paths.database_file, &config.database)?;
    if !existed {
        log_action(format!(
            "created content store {}",
            paths.database_file.display()
        ));
    }
    Ok(store)
}

pub fn ensure_demo_content(
    store: &ContentStore,
    config: &ValidatedConfig,
) -> Result<bool, BootstrapError> {
    if !config.seed.demo_content {
        return Ok(false);
    }
    let seeded = store.seed_demo_content()?;
    if seeded {
        log_action("seeded demo sections and systems");
    }
    Ok(seeded)
}
