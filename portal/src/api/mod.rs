// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

mod assets;
mod auth;
mod content;
pub mod error;

pub use error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, req| error::extractor_error(err, req)),
            )
            .app_data(
                web::PathConfig::default()
                    .error_handler(|err, req| error::extractor_error(err, req)),
            )
            .route("/login", web::post().to(auth::login))
            .route("/data", web::get().to(content::get_data))
            .route("/icons", web::get().to(content::get_icons))
            .route("/backgrounds", web::get().to(assets::list_backgrounds))
            .route("/backgrounds/upload", web::post().to(assets::upload_background))
            .route(
                "/backgrounds/{filename}",
                web::delete().to(assets::delete_background),
            )
            .route(
                "/systems/upload-image",
                web::post().to(assets::upload_system_image),
            )
            .route("/sections", web::post().to(content::create_section))
            .route("/sections/{id}", web::put().to(content::update_section))
            .route("/sections/{id}", web::delete().to(content::delete_section))
            .route("/systems", web::post().to(content::create_system))
            .route("/systems/{id}", web::put().to(content::update_system))
            .route("/systems/{id}", web::delete().to(content::delete_system)),
    );
}
