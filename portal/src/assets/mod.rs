// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Asset Store: two flat image directories under the public root.
//!
//! Files are addressed by name only. Writes go through a hidden temporary file
//! and a no-clobber rename, so a generated name never points at a partial file.

mod naming;

pub use naming::{
    IMAGE_EXTENSIONS, background_name, declared_extension, has_image_extension, icon_name,
    is_image_extension,
};

use crate::runtime_paths::{BACKGROUNDS_DIR_NAME, RuntimePaths, SYSTEM_IMAGES_DIR_NAME};
use crate::security::{ContainmentError, canonical_path_checks, validate_flat_file_name};
use crate::util::upload_temp::{create_temp_upload, is_temp_upload_name};
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const MAX_NAME_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Backgrounds,
    SystemImages,
}

impl Namespace {
    pub fn dir_name(self) -> &'static str {
        match self {
            Namespace::Backgrounds => BACKGROUNDS_DIR_NAME,
            Namespace::SystemImages => SYSTEM_IMAGES_DIR_NAME,
        }
    }

    pub fn url_prefix(self) -> &'static str {
        match self {
            Namespace::Backgrounds => "/backgrounds",
            Namespace::SystemImages => "/system-images",
        }
    }
}

#[derive(Debug)]
pub enum AssetError {
    InvalidName(String),
    Io(io::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::InvalidName(reason) => write!(f, "invalid asset name: {}", reason),
            AssetError::Io(err) => write!(f, "asset io error: {}", err),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::InvalidName(_) => None,
            AssetError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    backgrounds_dir: PathBuf,
    system_images_dir: PathBuf,
}

impl AssetStore {
    pub fn new(backgrounds_dir: PathBuf, system_images_dir: PathBuf) -> Self {
        Self {
            backgrounds_dir,
            system_images_dir,
        }
    }

    pub fn from_runtime_paths(paths: &RuntimePaths) -> Self {
        Self::new(
            paths.backgrounds_dir.clone(),
            paths.system_images_dir.clone(),
        )
    }

    pub fn root(&self, namespace: Namespace) -> &Path {
        match namespace {
            Namespace::Backgrounds => &self.backgrounds_dir,
            Namespace::SystemImages => &self.system_images_dir,
        }
    }

    /// Image files in the namespace, sorted by name. Read failures yield an empty list.
    pub fn list(&self, namespace: Namespace) -> Vec<String> {
        let root = self.root(namespace);
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Unable to read {} directory {:?}: {}", namespace.dir_name(), root, err);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.') && !is_temp_upload_name(name))
            .filter(|name| has_image_extension(name))
            .collect();
        names.sort();
        names
    }

    /// Writes `bytes` under a freshly generated name and returns that name.
    pub fn store(
        &self,
        namespace: Namespace,
        bytes: &[u8],
        original_name: Option<&str>,
    ) -> Result<String, AssetError> {
        let root = self.root(namespace);
        fs::create_dir_all(root)?;

        let mut temp = create_temp_upload(root)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = match namespace {
                Namespace::Backgrounds => background_name(original_name),
                Namespace::SystemImages => icon_name(),
            };
            match temp.persist_noclobber(root.join(&name)) {
                Ok(_) => {
                    info!(
                        "Stored {} asset {} ({} bytes)",
                        namespace.dir_name(),
                        name,
                        bytes.len()
                    );
                    return Ok(name);
                }
                Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("Generated asset name {} already taken, retrying", name);
                    temp = err.file;
                }
                Err(err) => return Err(AssetError::Io(err.error)),
            }
        }

        Err(AssetError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "could not allocate a unique asset name",
        )))
    }

    /// Whether a regular file called `filename` exists directly in the namespace.
    pub fn exists(&self, namespace: Namespace, filename: &str) -> Result<bool, AssetError> {
        validate_flat_file_name(filename).map_err(AssetError::InvalidName)?;
        match fs::symlink_metadata(self.root(namespace).join(filename)) {
            Ok(metadata) => Ok(metadata.file_type().is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(AssetError::Io(err)),
        }
    }

    /// Removes one file after proving it resolves directly inside the namespace root.
    pub fn delete(&self, namespace: Namespace, filename: &str) -> Result<(), AssetError> {
        if let Err(reason) = validate_flat_file_name(filename) {
            warn!(
                "🚨 SECURITY: Rejected {} delete for {:?}: {}",
                namespace.dir_name(),
                filename,
                reason
            );
            return Err(AssetError::InvalidName(reason));
        }

        let root = self.root(namespace).canonicalize()?;
        let target = canonical_path_checks(&root.join(filename), &root).map_err(|err| match err {
            ContainmentError::Outside(reason) => AssetError::InvalidName(reason),
            ContainmentError::Io(err) => AssetError::Io(err),
        })?;

        fs::remove_file(&target)?;
        info!("Deleted {} asset {}", namespace.dir_name(), filename);
        Ok(())
    }
}
