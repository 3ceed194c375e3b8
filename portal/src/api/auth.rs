// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error::ApiError;
use crate::app_state::AppState;
use actix_web::{HttpResponse, web};
use log::info;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// One-shot credential check. Nothing is issued; the caller keeps the result.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let LoginRequest { username, password } = body.into_inner();

    let identity = web::block(move || {
        state
            .credentials
            .verify(&state.store, username.trim(), &password)
    })
    .await??
    .ok_or(ApiError::Auth)?;

    info!("Admin '{}' logged in", identity.username);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Login OK",
        "user": identity,
    })))
}
