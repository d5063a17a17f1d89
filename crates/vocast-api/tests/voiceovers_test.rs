//! End-to-end tests over in-memory backends.
//!
//! The router under test is the real one from `setup::routes`; only the
//! blob store and metadata store are swapped for in-memory implementations.

use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;
use vocast_api::setup::routes::setup_routes;
use vocast_api::state::AppState;
use vocast_core::config::RetrievalStrategy;
use vocast_core::models::{UploadStatus, VoiceoverRecord};
use vocast_core::{Config, StorageBackend};
use vocast_db::{MemoryVoiceoverStore, VoiceoverStore};
use vocast_storage::MemoryBlobStorage;

struct TestApp {
    server: TestServer,
    blobs: MemoryBlobStorage,
    store: MemoryVoiceoverStore,
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        storage_backend: StorageBackend::Memory,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        upload_url_ttl_secs: 300,
        download_url_ttl_secs: 300,
        retrieval_strategy: RetrievalStrategy::Proxy,
        max_request_body_bytes: 64 * 1024,
    }
}

fn setup_test_app_with(config: Config) -> TestApp {
    let blobs = MemoryBlobStorage::new();
    let store = MemoryVoiceoverStore::new();
    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(blobs.clone()),
        Arc::new(store.clone()),
    ));
    let router = setup_routes(&config, state).expect("router assembly");
    let server = TestServer::new(router).expect("test server");
    TestApp {
        server,
        blobs,
        store,
    }
}

fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config())
}

fn upload_request_body() -> serde_json::Value {
    json!({
        "audioFileName": "1709300000-song1.mp3",
        "audioContentType": "audio/mpeg",
        "thumbFileName": "1709300000-song1.png",
        "thumbContentType": "image/png",
        "voiceoverName": "March Promo",
        "projectDate": "2024-03-01"
    })
}

async fn seed_record(app: &TestApp, name: &str, date: &str) -> Uuid {
    let record = VoiceoverRecord {
        id: Uuid::new_v4(),
        voiceover_name: name.to_string(),
        project_date: date.parse::<NaiveDate>().expect("date"),
        date_uploaded: chrono::Utc::now(),
        audio_key: format!("{}.mp3", name),
        thumbnail_key: format!("{}.png", name),
        status: UploadStatus::Complete,
    };
    app.store.put(&record).await.expect("seed record");
    record.id
}

#[tokio::test]
async fn upload_request_returns_two_urls_and_visible_record() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/upload-request")
        .json(&upload_request_body())
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    let audio_url = body["audioWriteUrl"].as_str().expect("audio url");
    let thumb_url = body["thumbnailWriteUrl"].as_str().expect("thumb url");
    assert!(audio_url.contains("1709300000-song1.mp3"));
    assert!(thumb_url.contains("1709300000-song1.png"));
    assert!(body["recordId"].as_str().is_some());
    assert!(body["expiresAt"].as_str().is_some());

    // The record is listed before any bytes are transferred.
    let list = app.server.get("/voiceovers").await;
    assert_eq!(list.status_code(), 200);
    let records: Vec<serde_json::Value> = list.json();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["voiceoverName"], "March Promo");
    assert_eq!(records[0]["status"], "complete");
    assert_eq!(records[0]["audioKey"], "1709300000-song1.mp3");
}

#[tokio::test]
async fn upload_request_rejects_missing_fields() {
    let app = setup_test_app();

    let response = app
        .server
        .post("/upload-request")
        .json(&json!({ "audioFileName": "a.mp3" }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().is_some());
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn upload_request_rejects_traversal_in_file_names() {
    let app = setup_test_app();

    let mut body = upload_request_body();
    body["audioFileName"] = json!("../../etc/passwd");
    let response = app.server.post("/upload-request").json(&body).await;
    assert_eq!(response.status_code(), 400);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn stream_returns_blob_with_headers() {
    let app = setup_test_app();
    app.blobs.insert("song1.mp3", "audio/mpeg", &b"MP3DATA"[..]);

    let response = app.server.get("/stream/song1.mp3").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "audio/mpeg"
    );
    assert_eq!(response.header("accept-ranges").to_str().unwrap(), "bytes");
    assert_eq!(response.header("content-length").to_str().unwrap(), "7");
    assert!(response
        .header("content-disposition")
        .to_str()
        .unwrap()
        .contains("inline"));
    assert_eq!(response.as_bytes().to_vec(), b"MP3DATA".to_vec());
}

#[tokio::test]
async fn stream_decodes_plus_as_space() {
    let app = setup_test_app();
    app.blobs.insert("my song.mp3", "audio/mpeg", &b"DATA"[..]);

    let response = app.server.get("/stream/my+song.mp3").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().to_vec(), b"DATA".to_vec());
}

#[tokio::test]
async fn stream_rejects_traversal_keys() {
    let app = setup_test_app();

    let response = app.server.get("/stream/..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn stream_missing_blob_is_404() {
    let app = setup_test_app();

    let response = app.server.get("/stream/absent.mp3").await;
    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn thumbnail_route_serves_image_blobs() {
    let app = setup_test_app();
    app.blobs.insert("song1.png", "image/png", &b"PNGDATA"[..]);

    let response = app.server.get("/thumbnail/song1.png").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "image/png"
    );
}

#[tokio::test]
async fn redirect_strategy_issues_temporary_redirect() {
    let mut config = test_config();
    config.retrieval_strategy = RetrievalStrategy::Redirect;
    let app = setup_test_app_with(config);
    app.blobs.insert("song1.mp3", "audio/mpeg", &b"DATA"[..]);

    let response = app.server.get("/stream/song1.mp3").await;
    assert_eq!(response.status_code(), 307);
    let location = response.header("location").to_str().unwrap().to_string();
    assert!(location.contains("song1.mp3"));

    // Absent keys still 404 instead of redirecting to a dead URL.
    let missing = app.server.get("/stream/absent.mp3").await;
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn search_filters_by_name_fragment_case_insensitively() {
    let app = setup_test_app();
    seed_record(&app, "Spring Promo", "2024-03-01").await;
    seed_record(&app, "Autumn Special", "2024-09-01").await;

    let response = app.server.get("/voiceovers/search?q=spring").await;
    assert_eq!(response.status_code(), 200);
    let records: Vec<serde_json::Value> = response.json();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["voiceoverName"], "Spring Promo");
}

#[tokio::test]
async fn search_date_range_is_inclusive_and_needs_both_bounds() {
    let app = setup_test_app();
    seed_record(&app, "January", "2024-01-15").await;
    seed_record(&app, "March", "2024-03-01").await;
    seed_record(&app, "September", "2024-09-01").await;

    let response = app
        .server
        .get("/voiceovers/search?startDate=2024-01-15&endDate=2024-03-01")
        .await;
    assert_eq!(response.status_code(), 200);
    let records: Vec<serde_json::Value> = response.json();
    assert_eq!(records.len(), 2);

    // A single bound is ignored, so everything comes back.
    let response = app.server.get("/voiceovers/search?startDate=2024-03-01").await;
    let records: Vec<serde_json::Value> = response.json();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn search_without_criteria_returns_everything() {
    let app = setup_test_app();
    seed_record(&app, "One", "2024-01-01").await;
    seed_record(&app, "Two", "2024-02-01").await;

    let response = app.server.get("/voiceovers/search").await;
    assert_eq!(response.status_code(), 200);
    let records: Vec<serde_json::Value> = response.json();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn delete_removes_blobs_then_record() {
    let app = setup_test_app();
    let id = seed_record(&app, "Doomed", "2024-05-01").await;
    app.blobs.insert("Doomed.mp3", "audio/mpeg", &b"A"[..]);
    app.blobs.insert("Doomed.png", "image/png", &b"T"[..]);

    let response = app.server.delete(&format!("/voiceover/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], true);
    assert_eq!(body["id"].as_str().unwrap(), id.to_string());

    assert!(!app.blobs.contains("Doomed.mp3"));
    assert!(!app.blobs.contains("Doomed.png"));
    assert!(app.store.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = setup_test_app();

    let response = app
        .server
        .delete(&format!("/voiceover/{}", Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn delete_tolerates_already_absent_blobs() {
    let app = setup_test_app();
    let id = seed_record(&app, "NoBlobs", "2024-05-01").await;

    let response = app.server.delete(&format!("/voiceover/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    assert!(app.store.get(id).await.unwrap().is_none());
}

/// When a blob delete fails, the metadata record must survive so the blobs
/// stay reachable for a retry.
#[tokio::test]
async fn delete_keeps_record_when_blob_delete_fails() {
    let app = setup_test_app();
    let id = seed_record(&app, "Sticky", "2024-05-01").await;
    app.blobs.insert("Sticky.mp3", "audio/mpeg", &b"A"[..]);
    app.blobs.insert("Sticky.png", "image/png", &b"T"[..]);
    app.blobs.set_fail_deletes(true);

    let response = app.server.delete(&format!("/voiceover/{}", id)).await;
    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().is_some());
    assert!(app.store.get(id).await.unwrap().is_some());

    // Retry succeeds once the backend recovers.
    app.blobs.set_fail_deletes(false);
    let retry = app.server.delete(&format!("/voiceover/{}", id)).await;
    assert_eq!(retry.status_code(), 200);
    assert!(app.store.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn health_reports_component_status() {
    let app = setup_test_app();

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
    assert_eq!(body["storage"], "healthy");
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let app = setup_test_app();

    let response = app.server.get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/upload-request"].is_object());
    assert!(body["paths"]["/voiceover/{id}"].is_object());
}
