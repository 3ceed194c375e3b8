// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use portal::util::TestConfigBuilder;
use serde_json::json;

fn login(username: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": username, "password": password }))
}

#[actix_web::test]
async fn seeded_admin_can_log_in() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let resp = test::call_service(
        &app,
        login(common::ADMIN_USERNAME, common::ADMIN_PASSWORD).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = common::read_json(resp).await;
    assert_eq!(body["message"], "Login OK");
    assert_eq!(body["user"]["username"], common::ADMIN_USERNAME);
    assert!(body["user"]["id"].is_i64());
    assert!(body["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_look_the_same() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let resp = test::call_service(
        &app,
        login(common::ADMIN_USERNAME, "not-the-password").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = common::read_json(resp).await;

    let resp = test::call_service(&app, login("nobody", common::ADMIN_PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = common::read_json(resp).await;

    assert_eq!(wrong_password, json!({ "error": "Invalid credentials" }));
    assert_eq!(wrong_password, unknown_user);
}

#[actix_web::test]
async fn missing_fields_are_invalid_credentials() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn configured_admin_replaces_the_default() {
    let harness = common::TestHarness::with_config(
        TestConfigBuilder::new()
            .with_admin("operator", "correct horse battery staple")
            .build(),
    );
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let resp = test::call_service(
        &app,
        login("operator", "correct horse battery staple").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        login(common::ADMIN_USERNAME, common::ADMIN_PASSWORD).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
