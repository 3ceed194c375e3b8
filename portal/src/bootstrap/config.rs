// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use crate::config::CONFIG_FILE_NAME;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3001;

pub const DEFAULT_CONFIG_YAML: &str = r#"server:
  host: "0.0.0.0"
  port: 3001
  workers: 4

logging:
  level: "info"

app:
  name: "Portal de Acceso"
  description: "Directory of internal systems"

upload:
  max_file_size_mb: 100

database:
  file: "portal.sqlite"
  busy_timeout_ms: 5000
  journal_mode: "wal"

admin:
  username: "admin"
  initial_password: "admin123"

seed:
  demo_content: false
"#;

/// Writes the default `config.yaml` unless one is already present. Never overwrites.
pub fn ensure_config(root: &Path) -> Result<bool, BootstrapError> {
    let root_path = normalize_root(root)?;
    let config_path = root_path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(false);
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(DEFAULT_CONFIG_YAML.as_bytes())?;
    file.sync_all()?;

    log_action(format!(
        "created {} listening on port {}",
        CONFIG_FILE_NAME, DEFAULT_PORT
    ));

    Ok(true)
}

fn normalize_root(root: &Path) -> Result<PathBuf, BootstrapError> {
    let root_path = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.to_path_buf()
    };

    if root_path.exists() {
        if !root_path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Runtime root is not a directory: {}", root_path.display()),
            )));
        }
        return Ok(root_path);
    }

    fs::create_dir_all(&root_path)?;
    log_action(format!(
        "created runtime root directory {}",
        root_path.display()
    ));
    Ok(root_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::util::test_fixtures::TestFixtureRoot;

    #[test]
    fn default_config_parses_and_validates() {
        let config = Config::parse(DEFAULT_CONFIG_YAML)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn existing_config_is_left_alone() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-config").unwrap();
        let path = fixture.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "custom").unwrap();

        assert!(!ensure_config(fixture.path()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom");
    }

    #[test]
    fn root_that_is_a_file_is_rejected() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-file-root").unwrap();
        let file_root = fixture.path().join("not-a-dir");
        fs::write(&file_root, "x").unwrap();
        assert!(matches!(
            ensure_config(&file_root),
            Err(BootstrapError::Io(_))
        ));
    }
}
