// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error::ApiError;
use crate::app_state::AppState;
use crate::assets::Namespace;
use crate::intake::{
    self, BACKGROUND_FIELD, SYSTEM_IMAGE_FIELD, UploadedFile, check_declared_length, read_upload,
};
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

fn declared_length(req: &HttpRequest) -> Option<u64> {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
}

async fn receive(
    req: &HttpRequest,
    payload: Multipart,
    field_name: &str,
    limit_bytes: usize,
) -> Result<UploadedFile, ApiError> {
    check_declared_length(declared_length(req), limit_bytes)?;
    Ok(read_upload(payload, field_name, limit_bytes).await?)
}

pub async fn list_backgrounds(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let names = web::block(move || state.assets.list(Namespace::Backgrounds)).await?;
    Ok(HttpResponse::Ok().json(names))
}

pub async fn upload_background(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = receive(&req, payload, BACKGROUND_FIELD, state.upload_limit_bytes()).await?;
    let filename =
        web::block(move || intake::accept_background(&state.assets, &upload)).await??;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Background uploaded",
        "filename": filename,
    })))
}

pub async fn delete_background(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let filename = path.into_inner();
    web::block(move || state.assets.delete(Namespace::Backgrounds, &filename)).await??;
    Ok(HttpResponse::Ok().json(json!({ "message": "Deleted" })))
}

pub async fn upload_system_image(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = receive(&req, payload, SYSTEM_IMAGE_FIELD, state.upload_limit_bytes()).await?;
    let filename =
        web::block(move || intake::accept_system_icon(&state.assets, &upload)).await??;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Image processed",
        "filename": filename,
    })))
}
