// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::CONFIG_FILE_NAME;
use crate::runtime_paths::{
    BACKGROUNDS_DIR_NAME, PUBLIC_DIR_NAME, RuntimePaths, SYSTEM_IMAGES_DIR_NAME,
};

/// Scratch runtime root under `target/test-fixtures`, removed on drop.
#[derive(Debug)]
pub struct TestFixtureRoot {
    path: PathBuf,
}

impl TestFixtureRoot {
    pub fn new_fixed(name: &str) -> std::io::Result<Self> {
        let root = fixtures_root().join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { path: root })
    }

    pub fn new_unique(prefix: &str) -> std::io::Result<Self> {
        let name = format!("{}-{}", prefix, Uuid::new_v4());
        Self::new_fixed(&name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backgrounds_dir(&self) -> PathBuf {
        self.path.join(PUBLIC_DIR_NAME).join(BACKGROUNDS_DIR_NAME)
    }

    pub fn system_images_dir(&self) -> PathBuf {
        self.path.join(PUBLIC_DIR_NAME).join(SYSTEM_IMAGES_DIR_NAME)
    }

    pub fn init_runtime_layout(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.backgrounds_dir())?;
        fs::create_dir_all(self.system_images_dir())?;
        Ok(())
    }

    pub fn runtime_paths(&self) -> std::io::Result<RuntimePaths> {
        self.init_runtime_layout()?;
        let root = self.path.canonicalize()?;
        let public_dir = self.path.join(PUBLIC_DIR_NAME).canonicalize()?;
        let backgrounds_dir = self.backgrounds_dir().canonicalize()?;
        let system_images_dir = self.system_images_dir().canonicalize()?;

        Ok(RuntimePaths {
            config_file: root.join(CONFIG_FILE_NAME),
            database_file: root.join("portal.sqlite"),
            root,
            public_dir,
            backgrounds_dir,
            system_images_dir,
        })
    }
}

impl Drop for TestFixtureRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    repo_root.join("target").join("test-fixtures")
}
