// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Temporary files written while an upload is in flight, created beside their final destination.
pub const TEMP_UPLOAD_PREFIX: &str = ".portal-upload-";
pub const TEMP_UPLOAD_SUFFIX: &str = ".tmp";

pub fn is_temp_upload_name(name: &str) -> bool {
    name.starts_with(TEMP_UPLOAD_PREFIX) || name.ends_with(TEMP_UPLOAD_SUFFIX)
}

pub fn create_temp_upload(dir: &Path) -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(TEMP_UPLOAD_PREFIX)
        .suffix(TEMP_UPLOAD_SUFFIX)
        .tempfile_in(dir)
}
