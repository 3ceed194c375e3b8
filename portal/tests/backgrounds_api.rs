// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use futures_util::future::join;
use portal::util::TestConfigBuilder;
use serde_json::json;
use std::fs;

const UPLOAD_URI: &str = "/api/backgrounds/upload";

fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[actix_web::test]
async fn upload_list_serve_and_delete_a_background() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;
    let payload = b"\xff\xd8\xff\xe0 not really a jpeg".to_vec();

    let req = common::multipart_request(UPLOAD_URI, "background", Some("Sunset.JPEG"), &payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::read_json(resp).await;
    assert_eq!(body["message"], "Background uploaded");
    let filename = body["filename"].as_str().unwrap().to_string();
    assert!(filename.starts_with("bg-"));
    assert!(filename.ends_with(".JPEG"));

    let stored = harness.runtime_paths.backgrounds_dir.join(&filename);
    assert_eq!(fs::read(&stored).unwrap(), payload);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/backgrounds").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(common::read_json(resp).await, json!([filename.clone()]));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/backgrounds/{}", filename))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await.as_ref(), payload.as_slice());

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/backgrounds/{}", filename))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(common::read_json(resp).await, json!({ "message": "Deleted" }));
    assert!(!stored.exists());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/backgrounds").to_request(),
    )
    .await;
    assert_eq!(common::read_json(resp).await, json!([]));
}

#[actix_web::test]
async fn listing_skips_non_images_and_hidden_files() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;
    let dir = &harness.runtime_paths.backgrounds_dir;

    fs::write(dir.join("b.png"), b"b").unwrap();
    fs::write(dir.join("a.webp"), b"a").unwrap();
    fs::write(dir.join("notes.txt"), b"n").unwrap();
    fs::write(dir.join(".hidden.png"), b"h").unwrap();
    fs::create_dir(dir.join("folder.png")).unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/backgrounds").to_request(),
    )
    .await;
    assert_eq!(common::read_json(resp).await, json!(["a.webp", "b.png"]));
}

#[actix_web::test]
async fn traversal_deletes_are_rejected_and_touch_nothing() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let victim = harness.runtime_paths.public_dir.join("victim.png");
    fs::write(&victim, b"keep me").unwrap();
    fs::write(harness.runtime_paths.backgrounds_dir.join("keep.png"), b"keep").unwrap();

    for name in ["..%2Fvictim.png", "%2E%2E%2Fvictim.png", "..%5Cvictim.png", ".."] {
        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/backgrounds/{}", name))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "name {}", name);
        assert!(common::read_json(resp).await["error"].is_string());
    }

    assert_eq!(fs::read(&victim).unwrap(), b"keep me");
    assert_eq!(
        dir_entries(&harness.runtime_paths.backgrounds_dir),
        vec!["keep.png".to_string()]
    );
}

#[actix_web::test]
async fn deleting_a_missing_background_is_a_server_error() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/backgrounds/bg-0-0.png")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::read_json(resp).await,
        json!({ "error": "An internal error occurred" })
    );
}

#[actix_web::test]
async fn backgrounds_with_unlisted_image_types_are_refused() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    for name in ["wallpaper.bmp", "photo.heic", "scan.tiff"] {
        let req = common::multipart_request(UPLOAD_URI, "background", Some(name), b"pixels")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "name {}", name);
        let body = common::read_json(resp).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Unsupported image type")
        );
    }
    assert!(dir_entries(&harness.runtime_paths.backgrounds_dir).is_empty());

    let req = common::multipart_request(UPLOAD_URI, "background", Some("blob"), b"pixels")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let filename = common::read_json(resp).await["filename"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(filename.ends_with(".jpg"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/backgrounds").to_request(),
    )
    .await;
    assert_eq!(common::read_json(resp).await, json!([filename]));
}

#[actix_web::test]
async fn upload_without_the_file_field_is_rejected() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = common::multipart_request(UPLOAD_URI, "something_else", Some("a.png"), b"data")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::read_json(resp).await,
        json!({ "error": "No file uploaded" })
    );

    let req = common::multipart_request(UPLOAD_URI, "background", None, b"").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(dir_entries(&harness.runtime_paths.backgrounds_dir).is_empty());
}

#[actix_web::test]
async fn oversized_uploads_are_rejected_and_leave_nothing_behind() {
    let harness =
        common::TestHarness::with_config(TestConfigBuilder::new().with_max_file_size_mb(1).build());
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;
    let limit = 1024 * 1024;

    // Declared length alone is enough to refuse this one.
    let huge = vec![7u8; 2 * limit];
    let req = common::multipart_request(UPLOAD_URI, "background", Some("huge.png"), &huge)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(common::read_json(resp).await["error"].is_string());

    // This one only trips the streaming count.
    let just_over = vec![7u8; limit + 10];
    let req = common::multipart_request(UPLOAD_URI, "background", Some("over.png"), &just_over)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    assert!(dir_entries(&harness.runtime_paths.backgrounds_dir).is_empty());

    let at_limit = vec![7u8; limit];
    let req = common::multipart_request(UPLOAD_URI, "background", Some("fits.png"), &at_limit)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(dir_entries(&harness.runtime_paths.backgrounds_dir).len(), 1);
}

#[actix_web::test]
async fn concurrent_uploads_get_distinct_names() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let first = common::multipart_request(UPLOAD_URI, "background", Some("same.png"), b"first")
        .to_request();
    let second = common::multipart_request(UPLOAD_URI, "background", Some("same.png"), b"second")
        .to_request();

    let (first, second) = join(
        test::call_service(&app, first),
        test::call_service(&app, second),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first = common::read_json(first).await["filename"]
        .as_str()
        .unwrap()
        .to_string();
    let second = common::read_json(second).await["filename"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(first, second);

    let dir = &harness.runtime_paths.backgrounds_dir;
    assert_eq!(fs::read(dir.join(&first)).unwrap(), b"first");
    assert_eq!(fs::read(dir.join(&second)).unwrap(), b"second");
    assert_eq!(dir_entries(dir).len(), 2);
}

#[actix_web::test]
async fn static_serving_refuses_unknown_and_hidden_names() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;
    let dir = &harness.runtime_paths.backgrounds_dir;
    fs::write(dir.join(".secret.png"), b"s").unwrap();
    fs::write(dir.join("readme.txt"), b"r").unwrap();

    for uri in [
        "/backgrounds/missing.png",
        "/backgrounds/.secret.png",
        "/backgrounds/readme.txt",
        "/backgrounds/..%2Fportal.sqlite",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri {}", uri);
    }
}
