// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use std::fmt;
use std::path::{Component, Path, PathBuf};

pub const MAX_FILE_NAME_BYTES: usize = 255;

#[derive(Debug)]
pub enum ContainmentError {
    /// The path resolves outside the directory it was requested in.
    Outside(String),
    Io(std::io::Error),
}

impl fmt::Display for ContainmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainmentError::Outside(msg) => write!(f, "Path containment violation: {}", msg),
            ContainmentError::Io(err) => write!(f, "Path resolution failed: {}", err),
        }
    }
}

impl std::error::Error for ContainmentError {}

/// Checks a client-supplied name for a file that must live directly inside a flat directory.
/// The URL-decoded form has to pass the same rules so encoded traversal cannot slip through.
pub fn validate_flat_file_name(filename: &str) -> Result<(), String> {
    check_flat_name(filename)?;

    let decoded = urlencoding::decode(filename)
        .map_err(|_| "Invalid filename: could not decode URL".to_string())?;
    if decoded != filename {
        check_flat_name(&decoded).map_err(|reason| format!("{} (after decoding)", reason))?;
    }
    Ok(())
}

fn check_flat_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Empty filename not allowed".to_string());
    }
    if name.len() > MAX_FILE_NAME_BYTES {
        return Err(format!(
            "Filename longer than {} bytes",
            MAX_FILE_NAME_BYTES
        ));
    }
    if name.contains("..") || Path::new(name).is_absolute() {
        return Err("Invalid filename: path traversal or absolute paths detected".to_string());
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err("Invalid filename: path separators are not allowed".to_string());
    }
    if name.starts_with('.') {
        return Err("Invalid filename: hidden files are not allowed".to_string());
    }
    Ok(())
}

/// Resolves `file_path` and verifies it is a direct child of `root_canonical`.
/// Symlinks are refused outright so a link cannot redirect a destructive operation.
pub fn canonical_path_checks(
    file_path: &Path,
    root_canonical: &Path,
) -> Result<PathBuf, ContainmentError> {
    let metadata = std::fs::symlink_metadata(file_path).map_err(ContainmentError::Io)?;
    if metadata.file_type().is_symlink() {
        warn!(
            "🚨 SECURITY: Refusing to follow symlink inside managed directory: {:?}",
            file_path
        );
        return Err(ContainmentError::Outside(
            "symbolic links are not allowed".to_string(),
        ));
    }

    let canonical_file_path = file_path.canonicalize().map_err(ContainmentError::Io)?;

    match canonical_file_path.strip_prefix(root_canonical) {
        Ok(remaining) => {
            let mut components = remaining.components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) => Ok(canonical_file_path),
                _ => {
                    warn!(
                        "🚨 SECURITY: Suspicious remaining path after strip_prefix: {:?}",
                        remaining
                    );
                    Err(ContainmentError::Outside(
                        "path is not a direct child of its directory".to_string(),
                    ))
                }
            }
        }
        Err(_) => {
            warn!(
                "🚨 SECURITY: Path traversal attempt - file outside managed directory: {:?} not in {:?}",
                canonical_file_path, root_canonical
            );
            Err(ContainmentError::Outside(
                "path resolves outside its directory".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;
    use std::fs;

    #[test]
    fn flat_name_validation() {
        assert!(validate_flat_file_name("bg-1700000000000-123.jpg").is_ok());
        assert!(validate_flat_file_name("photo with spaces.png").is_ok());

        for bad in [
            "",
            "..",
            "../outside.jpg",
            "nested/file.jpg",
            "nested\\file.jpg",
            "/etc/passwd",
            ".hidden.png",
            "%2e%2e%2fsecret",
            "..%2fsecret",
            "a%2fb.png",
        ] {
            assert!(validate_flat_file_name(bad).is_err(), "accepted {:?}", bad);
        }

        let long = format!("{}.png", "a".repeat(MAX_FILE_NAME_BYTES));
        assert!(validate_flat_file_name(&long).is_err());
    }

    #[test]
    fn canonical_path_checks_allows_direct_child() {
        let fixture = TestFixtureRoot::new_unique("path-allow").unwrap();
        let root = fixture.path().canonicalize().unwrap();
        let file = root.join("image.png");
        fs::write(&file, b"x").unwrap();

        let resolved = canonical_path_checks(&file, &root).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn canonical_path_checks_rejects_outside_and_nested() {
        let inside = TestFixtureRoot::new_unique("path-inside").unwrap();
        let outside = TestFixtureRoot::new_unique("path-outside").unwrap();
        let root = inside.path().canonicalize().unwrap();

        let outside_file = outside.path().join("secret.txt");
        fs::write(&outside_file, b"secret").unwrap();
        let err = canonical_path_checks(&outside_file, &root).unwrap_err();
        assert!(matches!(err, ContainmentError::Outside(_)));

        let nested_dir = root.join("nested");
        fs::create_dir_all(&nested_dir).unwrap();
        let nested_file = nested_dir.join("deep.png");
        fs::write(&nested_file, b"x").unwrap();
        let err = canonical_path_checks(&nested_file, &root).unwrap_err();
        assert!(matches!(err, ContainmentError::Outside(_)));
    }

    #[test]
    fn canonical_path_checks_reports_missing_file_as_io() {
        let fixture = TestFixtureRoot::new_unique("path-missing").unwrap();
        let root = fixture.path().canonicalize().unwrap();
        let err = canonical_path_checks(&root.join("nope.png"), &root).unwrap_err();
        assert!(matches!(err, ContainmentError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn canonical_path_checks_rejects_symlink_escape() {
        use std::os::unix::fs::symlink;

        let inside = TestFixtureRoot::new_unique("path-symlink").unwrap();
        let outside = TestFixtureRoot::new_unique("path-symlink-target").unwrap();
        let root = inside.path().canonicalize().unwrap();

        let target = outside.path().join("secret.txt");
        fs::write(&target, b"secret").unwrap();
        let link = root.join("linked.png");
        symlink(&target, &link).unwrap();

        let err = canonical_path_checks(&link, &root).unwrap_err();
        assert!(matches!(err, ContainmentError::Outside(_)));
        assert!(target.exists());
    }
}
