// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{CONFIG_FILE_NAME, ConfigError, ValidatedConfig};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const PUBLIC_DIR_NAME: &str = "public";
pub const BACKGROUNDS_DIR_NAME: &str = "backgrounds";
pub const SYSTEM_IMAGES_DIR_NAME: &str = "system-images";

/// Canonical locations of everything the portal reads or writes under its runtime root.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub database_file: PathBuf,
    pub public_dir: PathBuf,
    pub backgrounds_dir: PathBuf,
    pub system_images_dir: PathBuf,
}

impl RuntimePaths {
    pub fn from_root(root: &Path, config: &ValidatedConfig) -> Result<Self, ConfigError> {
        let root_path = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };

        if !root_path.exists() {
            fs::create_dir_all(&root_path).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "Failed to create runtime root '{}': {}",
                    root_path.display(),
                    e
                ))
            })?;
        }

        let root_canonical = canonicalize_dir(&root_path, "runtime root")?;

        let config_file = root_canonical.join(CONFIG_FILE_NAME);
        ensure_file_writable(&config_file, "Config file must be writable")?;

        ensure_dir_writable(&root_canonical, "Runtime root must be writable")?;
        let database_file = root_canonical.join(config.database.file.trim());

        let public_dir = root_canonical.join(PUBLIC_DIR_NAME);
        let backgrounds_dir = public_dir.join(BACKGROUNDS_DIR_NAME);
        let system_images_dir = public_dir.join(SYSTEM_IMAGES_DIR_NAME);

        ensure_dir_exists(&public_dir)?;
        ensure_dir_exists(&backgrounds_dir)?;
        ensure_dir_exists(&system_images_dir)?;

        let public_dir = canonicalize_dir(&public_dir, "public directory")?;
        let backgrounds_dir = canonicalize_dir(&backgrounds_dir, "backgrounds directory")?;
        let system_images_dir = canonicalize_dir(&system_images_dir, "system-images directory")?;

        Ok(Self {
            root: root_canonical,
            config_file,
            database_file,
            public_dir,
            backgrounds_dir,
            system_images_dir,
        })
    }
}

fn canonicalize_dir(path: &Path, label: &str) -> Result<PathBuf, ConfigError> {
    path.canonicalize().map_err(|e| {
        ConfigError::ValidationError(format!(
            "Failed to canonicalize {} '{}': {}",
            label,
            path.display(),
            e
        ))
    })
}

fn ensure_dir_exists(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    ensure_dir_writable(path, "Directory must be writable")?;
    Ok(())
}

fn ensure_dir_writable(path: &Path, context: &str) -> Result<(), ConfigError> {
    if !path.is_dir() {
        return Err(ConfigError::ValidationError(format!(
            "{} (not a directory): {}",
            context,
            path.display()
        )));
    }

    let check_path = path.join(format!(".portal-write-check-{}", Uuid::new_v4()));

    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&check_path)
    {
        Ok(_) => fs::remove_file(&check_path).map_err(|err| {
            ConfigError::ValidationError(format!(
                "{} (unable to clean write-check file {}): {}",
                context,
                check_path.display(),
                err
            ))
        }),
        Err(err) => Err(ConfigError::ValidationError(format!(
            "{} ({}): {}",
            context,
            path.display(),
            err
        ))),
    }
}

fn ensure_file_writable(path: &Path, context: &str) -> Result<(), ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ValidationError(format!(
            "{} (not a file): {}",
            context,
            path.display()
        )));
    }

    fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|err| {
            ConfigError::ValidationError(format!("{} ({}): {}", context, path.display(), err))
        })
}
