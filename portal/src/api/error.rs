// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::assets::{AssetError, IMAGE_EXTENSIONS};
use crate::iam::CredentialError;
use crate::intake::IntakeError;
use crate::store::StoreError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::json;
use std::fmt;

/// Everything a handler can fail with, mapped onto one status code each.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Auth,
    TooLarge { limit_bytes: usize },
    Storage(String),
    Processing(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Auth => write!(f, "Invalid credentials"),
            ApiError::TooLarge { limit_bytes } => {
                write!(f, "File exceeds the upload limit of {} bytes", limit_bytes)
            }
            ApiError::Storage(detail) => write!(f, "storage error: {}", detail),
            ApiError::Processing(detail) => write!(f, "image processing error: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Text sent to the client. 500s stay generic; the detail goes to the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::Storage(_) => "An internal error occurred".to_string(),
            ApiError::Processing(_) => "Image processing failed".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth => StatusCode::UNAUTHORIZED,
            ApiError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Storage(_) | ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Storage(detail) => error!("Storage failure: {}", detail),
            ApiError::Processing(detail) => error!("Image processing failure: {}", detail),
            ApiError::TooLarge { limit_bytes } => {
                warn!("Rejected upload over the {} byte limit", limit_bytes)
            }
            _ => {}
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::InvalidName(reason) => ApiError::Validation(reason),
            AssetError::Io(err) => ApiError::Storage(err.to_string()),
        }
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::NoFile => ApiError::Validation("No file uploaded".to_string()),
            IntakeError::UnsupportedType(ext) => ApiError::Validation(format!(
                "Unsupported image type .{}, expected one of: {}",
                ext,
                IMAGE_EXTENSIONS.join(", ")
            )),
            IntakeError::TooLarge { limit_bytes } => ApiError::TooLarge { limit_bytes },
            IntakeError::Processing(detail) => ApiError::Processing(detail),
            IntakeError::Asset(err) => err.into(),
            IntakeError::Multipart(detail) => {
                ApiError::Validation(format!("Malformed upload: {}", detail))
            }
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

/// Extractor failures (bad JSON, non-numeric ids) answer with the same JSON shape.
pub fn extractor_error(err: impl std::fmt::Display, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}
