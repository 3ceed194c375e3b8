// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{Config, ConfigError, ValidatedConfig};
use crate::iam::PasswordError;
use crate::runtime_paths::RuntimePaths;
use crate::store::{ContentStore, StoreError};
use std::error::Error;
use std::fmt;
use std::path::Path;

pub mod admin;
pub mod config;
pub mod content;

#[derive(Debug)]
pub struct BootstrapResult {
    pub validated_config: ValidatedConfig,
    pub runtime_paths: RuntimePaths,
    pub content_store: ContentStore,
    pub created_config: bool,
    pub created_admin: bool,
    pub seeded_demo_content: bool,
}

#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Io(std::io::Error),
    Store(StoreError),
    Password(PasswordError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "{}", err),
            BootstrapError::Io(err) => write!(f, "Bootstrap I/O error: {}", err),
            BootstrapError::Store(err) => write!(f, "Bootstrap store error: {}", err),
            BootstrapError::Password(err) => write!(f, "Bootstrap password error: {}", err),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Io(err) => Some(err),
            BootstrapError::Store(err) => Some(err),
            BootstrapError::Password(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err)
    }
}

impl From<StoreError> for BootstrapError {
    fn from(err: StoreError) -> Self {
        BootstrapError::Store(err)
    }
}

impl From<PasswordError> for BootstrapError {
    fn from(err: PasswordError) -> Self {
        BootstrapError::Password(err)
    }
}

/// Brings a runtime root to a servable state. Every step checks before it writes,
/// so a second run against the same root changes nothing.
pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    let created_config = config::ensure_config(root)?;

    let validated_config = Config::load_and_validate(root)?;
    if let Some(warning) = admin::default_password_warning(&validated_config) {
        log_warning(warning);
    }

    let runtime_paths = RuntimePaths::from_root(root, &validated_config)?;

    let content_store = content::open_store(&runtime_paths, &validated_config)?;

    let created_admin = admin::ensure_admin(&content_store, &validated_config)?;

    let seeded_demo_content = content::ensure_demo_content(&content_store, &validated_config)?;

    Ok(BootstrapResult {
        validated_config,
        runtime_paths,
        content_store,
        created_config,
        created_admin,
        seeded_demo_content,
    })
}

pub(crate) fn log_action(message: impl AsRef<str>) {
    eprintln!("[bootstrap] {}", message.as_ref());
}

pub(crate) fn log_warning(message: impl AsRef<str>) {
    eprintln!("[bootstrap] WARNING: {}", message.as_ref());
}
