// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_BACKGROUND_EXTENSION: &str = ".jpg";
pub const ICON_EXTENSION: &str = ".png";
const RANDOM_SUFFIX_RANGE: u64 = 1_000_000_000;

/// Recognized image extensions, lowercase, without the dot.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

pub fn has_image_extension(filename: &str) -> bool {
    declared_extension(filename).is_some_and(is_image_extension)
}

/// The non-empty extension of `filename`, without the dot.
pub fn declared_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}

pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// `bg-<millis>-<random><ext>`; the original extension is kept when it is a listed image type.
pub fn background_name(original_name: Option<&str>) -> String {
    let ext = original_name
        .and_then(safe_extension)
        .unwrap_or_else(|| DEFAULT_BACKGROUND_EXTENSION.to_string());
    format!("bg-{}-{}{}", unix_millis(), random_suffix(), ext)
}

/// `sys-<millis>-<random>.png`
pub fn icon_name() -> String {
    format!("sys-{}-{}{}", unix_millis(), random_suffix(), ICON_EXTENSION)
}

fn safe_extension(original_name: &str) -> Option<String> {
    declared_extension(original_name)
        .filter(|ext| is_image_extension(ext))
        .map(|ext| format!(".{}", ext))
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn random_suffix() -> u64 {
    OsRng.next_u64() % RANDOM_SUFFIX_RANGE
}
