// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::IntakeError;
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;

pub const ICON_SIZE: u32 = 128;

/// Scales the image to cover a square of `ICON_SIZE`, crops the overflow around the
/// centre and re-encodes the result as PNG. The input format is sniffed from the bytes.
pub fn cover_thumbnail_png(bytes: &[u8]) -> Result<Vec<u8>, IntakeError> {
    let source = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| IntakeError::Processing(err.to_string()))?
        .decode()
        .map_err(|err| IntakeError::Processing(err.to_string()))?;

    let thumbnail = source.resize_to_fill(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3);

    let mut encoded = Cursor::new(Vec::new());
    thumbnail
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|err| IntakeError::Processing(err.to_string()))?;
    Ok(encoded.into_inner())
}
