// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Image Intake: pulls one file out of a multipart body under a size cap, then
//! hands it to the Asset Store. Backgrounds pass through byte for byte; system
//! icons are normalized to a square PNG thumbnail first.

mod thumbnail;

pub use thumbnail::{ICON_SIZE, cover_thumbnail_png};

use crate::assets::{
    AssetError, AssetStore, Namespace, declared_extension, is_image_extension,
};
use actix_multipart::Multipart;
use futures_util::StreamExt;
use log::debug;
use std::fmt;

pub const BACKGROUND_FIELD: &str = "background";
pub const SYSTEM_IMAGE_FIELD: &str = "system_image";

/// Room for multipart boundaries and part headers on top of the file cap.
pub const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

#[derive(Debug)]
pub enum IntakeError {
    NoFile,
    /// The original file name carries an extension that is not a listed image type.
    UnsupportedType(String),
    TooLarge { limit_bytes: usize },
    Processing(String),
    Asset(AssetError),
    Multipart(String),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::NoFile => write!(f, "no file supplied"),
            IntakeError::UnsupportedType(name) => {
                write!(f, "unsupported image type: {}", name)
            }
            IntakeError::TooLarge { limit_bytes } => {
                write!(f, "upload exceeds the limit of {} bytes", limit_bytes)
            }
            IntakeError::Processing(msg) => write!(f, "image processing error: {}", msg),
            IntakeError::Asset(err) => write!(f, "{}", err),
            IntakeError::Multipart(msg) => write!(f, "malformed multipart body: {}", msg),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Asset(err) => err.source(),
            _ => None,
        }
    }
}

impl From<AssetError> for IntakeError {
    fn from(err: AssetError) -> Self {
        IntakeError::Asset(err)
    }
}

/// One file lifted out of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Rejects a request whose declared length cannot fit a file under the cap.
pub fn check_declared_length(
    content_length: Option<u64>,
    limit_bytes: usize,
) -> Result<(), IntakeError> {
    let ceiling = (limit_bytes as u64).saturating_add(MULTIPART_OVERHEAD_BYTES);
    match content_length {
        Some(len) if len > ceiling => Err(IntakeError::TooLarge { limit_bytes }),
        _ => Ok(()),
    }
}

/// Reads the first part named `field_name`, counting bytes across every part so the
/// whole body stays under `limit_bytes`. Other parts are drained and dropped.
pub async fn read_upload(
    mut payload: Multipart,
    field_name: &str,
    limit_bytes: usize,
) -> Result<UploadedFile, IntakeError> {
    let mut seen_bytes: usize = 0;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|err| IntakeError::Multipart(err.to_string()))?;
        let is_target = field.name() == Some(field_name);
        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|err| IntakeError::Multipart(err.to_string()))?;
            seen_bytes = seen_bytes.saturating_add(chunk.len());
            if seen_bytes > limit_bytes {
                debug!(
                    "Upload aborted after {} bytes, limit is {}",
                    seen_bytes, limit_bytes
                );
                return Err(IntakeError::TooLarge { limit_bytes });
            }
            if is_target {
                bytes.extend_from_slice(&chunk);
            }
        }

        if !is_target {
            continue;
        }

        let has_name = original_name.as_deref().is_some_and(|name| !name.is_empty());
        if bytes.is_empty() && !has_name {
            return Err(IntakeError::NoFile);
        }
        return Ok(UploadedFile {
            original_name,
            bytes,
        });
    }

    Err(IntakeError::NoFile)
}

/// Stores a background exactly as uploaded. A declared extension must be a listed
/// image type; a name without one is stored as `.jpg`.
pub fn accept_background(
    assets: &AssetStore,
    upload: &UploadedFile,
) -> Result<String, IntakeError> {
    let original_name = upload.original_name.as_deref();
    if let Some(ext) = original_name.and_then(declared_extension)
        && !is_image_extension(ext)
    {
        return Err(IntakeError::UnsupportedType(ext.to_string()));
    }

    Ok(assets.store(Namespace::Backgrounds, &upload.bytes, original_name)?)
}

/// Normalizes an icon to a `ICON_SIZE` square PNG and stores it.
pub fn accept_system_icon(
    assets: &AssetStore,
    upload: &UploadedFile,
) -> Result<String, IntakeError> {
    let png = cover_thumbnail_png(&upload.bytes)?;
    Ok(assets.store(Namespace::SystemImages, &png, None)?)
}
