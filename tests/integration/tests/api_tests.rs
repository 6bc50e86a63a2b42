//! API Integration Tests
//!
//! Each test spawns its own server on a loopback port with an in-memory
//! SQLite database and a temporary upload directory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, TEST_API_KEY,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create(server: &TestServer, request: &CreateDefect) -> Defect {
    let response = server
        .post_with_key("/defect", TEST_API_KEY, request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn audit_entries(server: &TestServer) -> Vec<AuditEntry> {
    let response = server.get_with_key("/audit", TEST_API_KEY).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_echo() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({"ok": true, "msg": "backend çalışıyor"}));
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_api_key() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/defect", &CreateDefect::new("Test arıza")).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_API_KEY");

    // File routes stay protected while defect reads are public
    let response = server.get("/defect").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.get("/defect/7/files").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_API_KEY");
}

#[tokio::test]
async fn test_wrong_api_key() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_with_key("/defect", "SUPERSECRETKEY", &CreateDefect::new("Test arıza"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_API_KEY");
}

#[tokio::test]
async fn test_unconfigured_secret_fails_protected_calls() {
    let server = TestServer::start_with_env(&[]).await.unwrap();

    for path in ["/stats", "/audit", "/defect/1/files"] {
        let response = server.get_with_key(path, "whatever").await.unwrap();
        let code = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR)
            .await
            .unwrap();
        assert_eq!(code, "CONFIG_ERROR", "path {path}");
    }

    // Reads stay public by default
    let response = server.get("/defect").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_protected_reads() {
    let server = TestServer::start_with_env(&[
        ("SHELVIA_API_KEY", TEST_API_KEY),
        ("AUTH_PROTECT_READS", "true"),
    ])
    .await
    .unwrap();

    let response = server.get("/defect").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_with_key("/defect", TEST_API_KEY).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Defect Tests
// ============================================================================

#[tokio::test]
async fn test_create_defect() {
    let server = TestServer::start().await.unwrap();

    let defect = create(
        &server,
        &CreateDefect::new("Test arıza")
            .with_description("Pres hattında yağ kaçağı")
            .with_category("mekanik"),
    )
    .await;

    assert!(defect.id > 0);
    assert_eq!(defect.title, "Test arıza");
    assert_eq!(defect.description.as_deref(), Some("Pres hattında yağ kaçağı"));
    assert_eq!(defect.category.as_deref(), Some("mekanik"));
    assert_eq!(defect.status, "open");
    assert!(!defect.created_at.is_empty());
    assert!(defect.resolved_at.is_none());

    let entries = audit_entries(&server).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "create_defect");
    assert_eq!(entries[0].actor, TEST_API_KEY);
    assert_eq!(entries[0].endpoint, "/defect");
    assert_eq!(entries[0].method, "POST");
    assert_eq!(entries[0].target_id, Some(defect.id));
    assert_eq!(
        entries[0].payload.as_ref().unwrap()["title"],
        "Test arıza"
    );
}

#[tokio::test]
async fn test_create_defect_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_with_key("/defect", TEST_API_KEY, &CreateDefect::new("ab"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post_with_key(
            "/defect",
            TEST_API_KEY,
            &CreateDefect::new("Valid title").with_category("hydraulic"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server.post_raw("/defect", TEST_API_KEY, "{not json").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_INPUT");

    // Nothing was persisted or audited
    assert!(audit_entries(&server).await.is_empty());
}

#[tokio::test]
async fn test_list_defects() {
    let server = TestServer::start().await.unwrap();

    let first = create(&server, &CreateDefect::new("Motor ısınması").with_category("elektrik")).await;
    let second = create(&server, &CreateDefect::new("Bant kopması").with_category("mekanik")).await;

    let response = server.get("/defect").await.unwrap();
    let defects: Vec<Defect> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = defects.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let response = server.get("/defect?category=mekanik").await.unwrap();
    let defects: Vec<Defect> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].id, second.id);

    let response = server.get("/defect?page=2&limit=1").await.unwrap();
    let defects: Vec<Defect> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].id, second.id);
}

#[tokio::test]
async fn test_list_defects_blank_filters() {
    let server = TestServer::start().await.unwrap();
    create(&server, &CreateDefect::new("Motor ısınması").with_category("elektrik")).await;
    create(&server, &CreateDefect::new("Bant kopması").with_category("mekanik")).await;

    let response = server.get("/defect?status=&category=").await.unwrap();
    let defects: Vec<Defect> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(defects.len(), 2);
}

#[tokio::test]
async fn test_list_defects_is_repeatable() {
    let server = TestServer::start().await.unwrap();
    create(&server, &CreateDefect::new("Sensör arızası")).await;

    let first: Vec<Defect> = assert_json(server.get("/defect").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let second: Vec<Defect> = assert_json(server.get("/defect").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    assert_eq!(
        first.iter().map(|d| d.id).collect::<Vec<_>>(),
        second.iter().map(|d| d.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_list_defects_bad_paging() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/defect?page=0").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server.get("/defect?limit=501").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    let response = server.get("/defect?page=first").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_get_unknown_defect() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/defect/999").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_DEFECT");
}

#[tokio::test]
async fn test_resolve_defect() {
    let server = TestServer::start().await.unwrap();
    let defect = create(
        &server,
        &CreateDefect::new("Test arıza").with_category("mekanik"),
    )
    .await;

    let response = server
        .patch_with_key(
            &format!("/defect/{}", defect.id),
            TEST_API_KEY,
            &json!({"status": "resolved"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/defect/{}", defect.id)).await.unwrap();
    let updated: Defect = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "resolved");
    assert_eq!(updated.title, defect.title);
    assert_eq!(updated.category, defect.category);
    assert_eq!(updated.created_at, defect.created_at);
    assert!(updated.resolved_at.is_some());

    let entries = audit_entries(&server).await;
    let last = entries.last().unwrap();
    assert_eq!(last.action, "update_defect");
    assert_eq!(last.endpoint, format!("/defect/{}", defect.id));
    assert_eq!(last.method, "PATCH");
    assert_eq!(last.target_id, Some(defect.id));
}

#[tokio::test]
async fn test_update_clears_nullable_fields() {
    let server = TestServer::start().await.unwrap();
    let defect = create(
        &server,
        &CreateDefect::new("Test arıza")
            .with_description("geçici")
            .with_category("proses"),
    )
    .await;

    let response = server
        .patch_with_key(
            &format!("/defect/{}", defect.id),
            TEST_API_KEY,
            &json!({"description": null, "category": null}),
        )
        .await
        .unwrap();
    let updated: Defect = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(updated.description.is_none());
    assert!(updated.category.is_none());
    assert_eq!(updated.title, "Test arıza");

    let response = server
        .patch_with_key(
            &format!("/defect/{}", defect.id),
            TEST_API_KEY,
            &json!({"title": null}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_defect_writes_no_audit() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .patch_with_key("/defect/42", TEST_API_KEY, &json!({"status": "resolved"}))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_DEFECT");

    assert!(audit_entries(&server).await.is_empty());
}

// ============================================================================
// Attachment Tests
// ============================================================================

#[tokio::test]
async fn test_upload_list_and_download() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .upload(7, TEST_API_KEY, "photo.png", b"\x89PNG fake".to_vec())
        .await
        .unwrap();
    let upload: Upload = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(upload.ok);
    assert_eq!(upload.filename, "defect_7_photo.png");
    assert!(server.upload_dir().join("defect_7_photo.png").exists());

    let response = server.get_with_key("/defect/7/files", TEST_API_KEY).await.unwrap();
    let files: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(files, vec!["defect_7_photo.png"]);

    let response = server.get_with_key("/defect/8/files", TEST_API_KEY).await.unwrap();
    let files: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(files.is_empty());

    let response = server
        .get_with_key("/defect/7/files/defect_7_photo.png", TEST_API_KEY)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/octet-stream"
    );
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"defect_7_photo.png\""
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"\x89PNG fake");

    let entries = audit_entries(&server).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "upload_file");
    assert_eq!(entries[0].endpoint, "/defect/7/upload");
    assert_eq!(entries[0].target_id, Some(7));
    assert_eq!(
        entries[0].payload,
        Some(json!({"filename": "defect_7_photo.png"}))
    );
}

#[tokio::test]
async fn test_download_other_defects_file_is_forbidden() {
    let server = TestServer::start().await.unwrap();
    server
        .upload(7, TEST_API_KEY, "photo.png", b"data".to_vec())
        .await
        .unwrap();

    let response = server
        .get_with_key("/defect/8/files/defect_7_photo.png", TEST_API_KEY)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "FILE_ACCESS_DENIED");
}

#[tokio::test]
async fn test_download_missing_file() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get_with_key("/defect/7/files/defect_7_nothing.txt", TEST_API_KEY)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_FILE");
}

#[tokio::test]
async fn test_traversal_names_are_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .upload(7, TEST_API_KEY, "..", b"data".to_vec())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(code, "INVALID_FILENAME");
    assert_eq!(std::fs::read_dir(server.upload_dir()).unwrap().count(), 0);

    let response = server
        .get_with_key("/defect/7/files/defect_7_..%2Fsecret", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();

    assert!(audit_entries(&server).await.is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let server = TestServer::start().await.unwrap();

    let form = reqwest::multipart::Form::new().text("note", "no file here");
    let response = server
        .client
        .post(format!("{}/defect/7/upload", server.base_url()))
        .header("x-api-key", TEST_API_KEY)
        .multipart(form)
        .send()
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_INPUT");
}

// ============================================================================
// Stats and Audit Tests
// ============================================================================

#[tokio::test]
async fn test_stats() {
    let server = TestServer::start().await.unwrap();

    create(&server, &CreateDefect::new("Test arıza").with_category("mekanik")).await;
    create(&server, &CreateDefect::new("Kablo hasarı").with_category("elektrik")).await;
    let resolved = create(&server, &CreateDefect::new("Vida gevşemesi").with_category("mekanik")).await;

    server
        .patch_with_key(
            &format!("/defect/{}", resolved.id),
            TEST_API_KEY,
            &json!({"status": "resolved"}),
        )
        .await
        .unwrap();

    let response = server.get_with_key("/stats", TEST_API_KEY).await.unwrap();
    let stats: Stats = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.total_defects, 3);
    assert_eq!(stats.open_defects, 2);
    assert_eq!(stats.resolved_defects, 1);
    assert_eq!(stats.category_distribution.get("mekanik"), Some(&2));
    assert_eq!(stats.category_distribution.get("elektrik"), Some(&1));
    assert!(!stats.category_distribution.contains_key("proses"));
}

#[tokio::test]
async fn test_audit_paging() {
    let server = TestServer::start().await.unwrap();
    for title in ["Birinci arıza", "İkinci arıza", "Üçüncü arıza"] {
        create(&server, &CreateDefect::new(title)).await;
    }

    let response = server
        .get_with_key("/audit?limit=2&offset=1", TEST_API_KEY)
        .await
        .unwrap();
    let entries: Vec<AuditEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].id < entries[1].id);
    assert_eq!(entries[0].payload.as_ref().unwrap()["title"], "İkinci arıza");

    let response = server
        .get_with_key("/audit?limit=0", TEST_API_KEY)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
}
