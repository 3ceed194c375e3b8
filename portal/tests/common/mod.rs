// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test, web};
use image::{DynamicImage, ImageFormat, RgbImage};
use portal::api;
use portal::app_state::AppState;
use portal::bootstrap::admin::ensure_admin;
use portal::config::ValidatedConfig;
use portal::public;
use portal::runtime_paths::RuntimePaths;
use portal::store::ContentStore;
use portal::util::TestConfigBuilder;
use portal::util::test_fixtures::TestFixtureRoot;
use std::io::Cursor;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const BOUNDARY: &str = "portal-test-boundary-7MA4YWxkTrZu0gW";

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub runtime_paths: RuntimePaths,
    pub app_state: web::Data<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(TestConfigBuilder::new().build())
    }

    pub fn with_config(config: ValidatedConfig) -> Self {
        let fixture = TestFixtureRoot::new_unique("api-test-suite").expect("fixture root");
        let runtime_paths = fixture.runtime_paths().expect("runtime paths");

        let store =
            ContentStore::open(&runtime_paths.database_file, &config.database).expect("store");
        ensure_admin(&store, &config).expect("seed admin");

        let app_state = AppState::new(config, &runtime_paths, store).expect("app state");

        Self {
            fixture,
            runtime_paths,
            app_state: web::Data::new(app_state),
        }
    }
}

pub fn build_test_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .configure(api::configure)
        .configure(public::configure)
}

/// A multipart body with a single part. `filename: None` makes it a plain form field.
pub fn multipart_body(field: &str, filename: Option<&str>, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    match filename {
        Some(name) => body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                field, name
            )
            .as_bytes(),
        ),
        None => body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field).as_bytes(),
        ),
    }
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(
    uri: &str,
    field: &str,
    filename: Option<&str>,
    bytes: &[u8],
) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(field, filename, bytes))
}

pub fn encode_image(img: RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, format)
        .expect("encode test image");
    out.into_inner()
}

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("json body")
}
