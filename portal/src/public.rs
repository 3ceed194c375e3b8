// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Read-only serving of the two asset namespaces.

use crate::app_state::AppState;
use crate::assets::{Namespace, has_image_extension};
use crate::security::{canonical_path_checks, validate_flat_file_name};
use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::{debug, warn};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        &format!("{}/{{filename}}", Namespace::Backgrounds.url_prefix()),
        web::get().to(serve_background),
    );
    cfg.route(
        &format!("{}/{{filename}}", Namespace::SystemImages.url_prefix()),
        web::get().to(serve_system_image),
    );
}

async fn serve_background(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    serve_asset(req, state, path, Namespace::Backgrounds).await
}

async fn serve_system_image(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    serve_asset(req, state, path, Namespace::SystemImages).await
}

async fn serve_asset(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    namespace: Namespace,
) -> Result<HttpResponse> {
    let filename = path.into_inner();
    if validate_flat_file_name(&filename).is_err() || !has_image_extension(&filename) {
        debug!("Refusing to serve {:?} from {}", filename, namespace.dir_name());
        return Ok(HttpResponse::NotFound().finish());
    }

    let root = state.assets.root(namespace);
    let resolved = match canonical_path_checks(&root.join(&filename), root) {
        Ok(path) => path,
        Err(_) => return Ok(HttpResponse::NotFound().finish()),
    };

    match NamedFile::open_async(&resolved).await {
        Ok(file) => Ok(file.into_response(&req)),
        Err(err) => {
            warn!("Failed to open asset {}: {}", resolved.display(), err);
            Ok(HttpResponse::NotFound().finish())
        }
    }
}
