// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error::ApiError;
use crate::app_state::AppState;
use crate::assets::Namespace;
use crate::icons;
use crate::store::{SystemFields, SystemVisual};
use actix_web::{HttpResponse, web};
use log::{debug, info};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateSectionRequest {
    #[serde(default)]
    pub title: String,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSectionRequest {
    pub title: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SystemRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub image_filename: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSystemRequest {
    pub section_id: i64,
    #[serde(flatten)]
    pub system: SystemRequest,
}

fn required_title(title: &str) -> Result<String, ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn icon_name(value: Option<String>) -> Option<String> {
    let icon = non_empty(value)?;
    if !icons::is_known(&icon) {
        debug!(
            "Icon {:?} is not in the catalog, clients will show {}",
            icon,
            icons::DEFAULT_ICON
        );
    }
    Some(icon)
}

/// Turns a request body into stored columns. A named image wins over an icon and must
/// already exist among the system images; with neither, the fallback icon is stored.
fn system_fields(state: &AppState, request: SystemRequest) -> Result<SystemFields, ApiError> {
    let title = required_title(&request.title)?;

    let visual = match (non_empty(request.image_filename), icon_name(request.icon)) {
        (Some(file), _) => {
            if !state.assets.exists(Namespace::SystemImages, &file)? {
                return Err(ApiError::Validation(format!(
                    "Unknown system image: {}",
                    file
                )));
            }
            SystemVisual::Image(file)
        }
        (None, Some(icon)) => SystemVisual::Icon(icon),
        (None, None) => SystemVisual::Icon(icons::DEFAULT_ICON.to_string()),
    };

    Ok(SystemFields {
        title,
        description: request.description,
        url: request.url,
        visual,
        color: request.color,
    })
}

pub async fn get_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let sections = web::block(move || state.store.list_sections()).await??;
    Ok(HttpResponse::Ok().json(sections))
}

pub async fn get_icons() -> HttpResponse {
    HttpResponse::Ok().json(icons::catalog())
}

pub async fn create_section(
    state: web::Data<AppState>,
    body: web::Json<CreateSectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let title = required_title(&request.title)?;
    let icon = icon_name(request.icon);

    let id = web::block(move || state.store.create_section(&title, icon.as_deref())).await??;
    info!("Created section {}", id);
    Ok(HttpResponse::Ok().json(json!({ "id": id })))
}

pub async fn update_section(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateSectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = body.into_inner();
    let title = request.title.as_deref().map(required_title).transpose()?;
    // A present but blank icon clears it; an absent one keeps it.
    let icon = request.icon.map(|icon| icon_name(Some(icon)));

    let changes = web::block(move || {
        state.store.update_section(
            id,
            title.as_deref(),
            icon.as_ref().map(|icon| icon.as_deref()),
        )
    })
    .await??;
    Ok(HttpResponse::Ok().json(json!({ "changes": changes })))
}

pub async fn delete_section(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let changes = web::block(move || state.store.delete_section(id)).await??;
    if changes > 0 {
        info!("Deleted section {} and its systems", id);
    }
    Ok(HttpResponse::Ok().json(json!({ "changes": changes })))
}

pub async fn create_system(
    state: web::Data<AppState>,
    body: web::Json<CreateSystemRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let section_id = request.section_id;

    let id = web::block(move || -> Result<i64, ApiError> {
        let fields = system_fields(&state, request.system)?;
        Ok(state.store.create_system(section_id, &fields)?)
    })
    .await??;
    info!("Created system {} in section {}", id, section_id);
    Ok(HttpResponse::Ok().json(json!({ "id": id })))
}

pub async fn update_system(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<SystemRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = body.into_inner();

    let changes = web::block(move || -> Result<usize, ApiError> {
        let fields = system_fields(&state, request)?;
        Ok(state.store.update_system(id, &fields)?)
    })
    .await??;
    Ok(HttpResponse::Ok().json(json!({ "changes": changes })))
}

pub async fn delete_system(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let changes = web::block(move || state.store.delete_system(id)).await??;
    Ok(HttpResponse::Ok().json(json!({ "changes": changes })))
}
