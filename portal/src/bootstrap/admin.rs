// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action, log_warning};
use crate::config::ValidatedConfig;
use crate::iam::hash_password;
use crate::store::ContentStore;

/// Seeds the configured admin principal when it is not in the store yet.
pub fn ensure_admin(store: &ContentStore, config: &ValidatedConfig) -> Result<bool, BootstrapError> {
    let username = config.admin.username.trim();
    if store.admin_exists(username)? {
        return Ok(false);
    }

    let password_hash = hash_password(&config.admin.initial_password)?;
    store.insert_admin(username, &password_hash)?;

    log_action(format!("seeded admin account '{}'", username));
    log_warning(format!(
        "'{}' uses the initial password from config.yaml (change it and remove admin.initial_password)",
        username
    ));
    Ok(true)
}

/// Text of the startup warning for a config that still carries the built-in password.
pub fn default_password_warning(config: &ValidatedConfig) -> Option<String> {
    config.admin.uses_default_password().then(|| {
        format!(
            "admin.initial_password for '{}' is the built-in default; change it in config.yaml",
            config.admin.username.trim()
        )
    })
}
