//! Integration tests for quranapi
//!
//! Each test builds the full router over a temporary data directory laid out
//! the way the production bucket is.

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use quranapi::{
    handlers::{AppState, cors_layer, create_router},
    quran::{AyahIndex, SURAHS},
    rate_limit::RateLimiter,
    storage::LocalStorage,
};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const AUDIO_KEY: &str = "Husary_128kbps/001001.mp3";

fn audio_bytes() -> Vec<u8> {
    (0..1000u32).map(|i| (i % 251) as u8).collect()
}

fn write(root: &Path, key: &str, contents: &[u8]) {
    let path = root.join(key);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn test_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(root, AUDIO_KEY, &audio_bytes());
    write(root, "Husary_128kbps/002001.mp3", b"baqarah-1");
    write(root, "Husary_128kbps/114006.mp3", b"nas-6");
    write(root, "quran-text/pages/1.svg", b"<svg/>");
    write(root, "quran-text/quran-pages.zip", b"PK-pages");
    write(root, "athan/1a014366658c.mp3", b"athan-audio");
    write(root, "athan/athan-collection.zip", b"PK-athan");

    let tafseer = json!({
        "surahs": [{
            "surah_id": 1,
            "surah_name": "الفاتحة",
            "ayahs": [
                {"ayah": 1, "text": "first"},
                {"ayah": 2, "text": "second"},
            ],
        }],
    });
    write(
        root,
        "assets/Tafseer/tafseer_tafsir-muyassar.json",
        tafseer.to_string().as_bytes(),
    );
    write(root, "assets/Tafseer/tafseer_tafsir-muyassar.zip", b"PK-muyassar");
    write(root, "assets/Tafseer/tafseer_tafsir-al-tabari.json", b"{not json");

    dir
}

fn test_state(dir: &TempDir) -> AppState {
    let storage = Arc::new(LocalStorage::new(dir.path().to_path_buf()));
    let index = AyahIndex::new(&SURAHS).unwrap();
    AppState::new(storage, index)
}

fn create_test_server() -> (TempDir, TestServer) {
    let dir = test_data_dir();
    let app = create_router(test_state(&dir));
    (dir, TestServer::new(app).unwrap())
}

fn range(value: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("range"),
        HeaderValue::from_static(value),
    )
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap()
}

#[tokio::test]
async fn test_health() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "Quran Audio API");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_api_info() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/").await.json();
    assert_eq!(body["name"], "Quran Audio API");
    assert_eq!(body["endpoints"]["reciters"], "/api/v1/reciters");
}

#[tokio::test]
async fn test_unknown_route() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v2/nothing").await;
    response.assert_status_not_found();
    response.assert_json(&json!({"error": {"message": "Not Found", "code": "NOT_FOUND"}}));
}

#[tokio::test]
async fn test_reciters() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/reciters").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("cache-control"),
        "public, max-age=31536000, immutable"
    );
    let body: Value = response.json();
    assert_eq!(body["count"], 44);
    assert_eq!(body["reciters"].as_array().unwrap().len(), 44);

    let body: Value = server.get("/api/v1/reciters/husary").await.json();
    assert_eq!(body["reciter"]["storagePath"], "Husary_128kbps");

    let response = server.get("/api/v1/reciters/nobody").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Reciter not found");
}

#[tokio::test]
async fn test_surahs() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/api/v1/surahs").await.json();
    assert_eq!(body["count"], 114);
    assert_eq!(body["surahs"][0]["startAyah"], 1);
    assert_eq!(body["surahs"][113]["endAyah"], 6236);

    let body: Value = server.get("/api/v1/surahs/2").await.json();
    assert_eq!(body["surah"]["number"], 2);
    assert_eq!(body["surah"]["ayahCount"], 286);
    assert_eq!(body["surah"]["startAyah"], 8);
    assert_eq!(body["surah"]["endAyah"], 293);
    assert_eq!(body["surah"]["revelationType"], "Medinan");

    server.get("/api/v1/surahs/115").await.assert_status_not_found();

    let response = server.get("/api/v1/surahs/two").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Invalid surahNumber: must be a number");
}

#[tokio::test]
async fn test_audio_full_object() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/audio/husary/surah/1/ayah/1").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "audio/mpeg");
    assert_eq!(response.header("content-length"), "1000");
    assert_eq!(response.header("accept-ranges"), "bytes");
    assert_eq!(
        response.header("cache-control"),
        "public, max-age=31536000, immutable"
    );
    assert_eq!(response.as_bytes().to_vec(), audio_bytes());
}

#[tokio::test]
async fn test_audio_by_global_ayah() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/audio/husary/1").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().len(), 1000);

    // global 8 is the first ayah of Al-Baqarah
    let response = server.get("/api/v1/audio/husary/8").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"baqarah-1");

    let response = server.get("/api/v1/audio/husary/6236").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"nas-6");
}

#[tokio::test]
async fn test_audio_range_requests() {
    let (_dir, server) = create_test_server();
    let path = "/api/v1/audio/husary/surah/1/ayah/1";
    let data = audio_bytes();

    let (name, value) = range("bytes=0-499");
    let response = server.get(path).add_header(name, value).await;
    response.assert_status(StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.header("content-range"), "bytes 0-499/1000");
    assert_eq!(response.header("content-length"), "500");
    assert_eq!(response.as_bytes().to_vec(), data[..500].to_vec());

    let (name, value) = range("bytes=900-");
    let response = server.get(path).add_header(name, value).await;
    response.assert_status(StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.header("content-range"), "bytes 900-999/1000");
    assert_eq!(response.as_bytes().to_vec(), data[900..].to_vec());

    let (name, value) = range("bytes=990-5000");
    let response = server.get(path).add_header(name, value).await;
    response.assert_status(StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.header("content-range"), "bytes 990-999/1000");
    assert_eq!(response.header("content-length"), "10");
}

#[tokio::test]
async fn test_audio_unsatisfiable_ranges() {
    let (_dir, server) = create_test_server();
    let path = "/api/v1/audio/husary/surah/1/ayah/1";

    let (name, value) = range("bytes=1000-1010");
    let response = server.get(path).add_header(name, value).await;
    response.assert_status(StatusCode::RANGE_NOT_SATISFIABLE);
    assert_eq!(response.header("content-range"), "bytes */1000");
    assert_eq!(error_code(&response.json()), "RANGE_NOT_SATISFIABLE");

    let (name, value) = range("bytes=abc");
    let response = server.get(path).add_header(name, value).await;
    response.assert_status(StatusCode::RANGE_NOT_SATISFIABLE);
    assert!(response.headers().get("content-range").is_none());

    let (name, value) = range("bytes=0-1,5-9");
    let response = server.get(path).add_header(name, value).await;
    response.assert_status(StatusCode::RANGE_NOT_SATISFIABLE);
}

#[tokio::test]
async fn test_audio_is_idempotent() {
    let (_dir, server) = create_test_server();
    let path = "/api/v1/audio/husary/surah/1/ayah/1";

    let (name, value) = range("bytes=100-199");
    let first = server.get(path).add_header(name.clone(), value.clone()).await;
    let second = server.get(path).add_header(name, value).await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.header("content-range"), second.header("content-range"));
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[tokio::test]
async fn test_audio_validation_errors() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/audio/husary/surah/115/ayah/1").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_SURAH_NUMBER");
    assert_eq!(
        body["error"]["message"],
        "Invalid surah number: 115. Must be between 1 and 114."
    );

    let response = server.get("/api/v1/audio/husary/surah/1/ayah/8").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_AYAH_NUMBER");
    assert_eq!(
        body["error"]["message"],
        "Invalid ayah number: 8 for surah 1. Must be between 1 and 7."
    );

    let response = server.get("/api/v1/audio/husary/6237").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), "INVALID_AYAH_NUMBER");

    let response = server.get("/api/v1/audio/husary/0").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/api/v1/audio/husary/surah/x/ayah/1").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), "BAD_REQUEST");
}

#[tokio::test]
async fn test_audio_reciter_checked_before_ayah() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/audio/nobody/surah/999/ayah/999").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Reciter not found");
}

#[tokio::test]
async fn test_audio_missing_object() {
    let (_dir, server) = create_test_server();

    // valid reference, but nothing uploaded for this reciter
    let response = server.get("/api/v1/audio/alafasy/surah/1/ayah/1").await;
    response.assert_status_not_found();
    assert_eq!(error_code(&response.json()), "NOT_FOUND");

    let (name, value) = range("bytes=0-10");
    let response = server
        .get("/api/v1/audio/alafasy/surah/1/ayah/1")
        .add_header(name, value)
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_whole_surah_not_supported() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/audio/husary/surah/1").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), "NOT_SUPPORTED");

    server
        .get("/api/v1/audio/nobody/surah/1")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_search() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/api/v1/search?q=faatiha&type=surah").await.json();
    assert_eq!(body["type"], "surah");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["number"], 1);

    let body: Value = server.get("/api/v1/search?q=HUSARY&type=Reciter").await.json();
    assert_eq!(body["type"], "reciter");
    assert_eq!(body["count"], 3);

    let response = server.get("/api/v1/search?type=surah").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Missing required parameter: q (search query)"
    );

    server
        .get("/api/v1/search?q=x")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/api/v1/search?q=x&type=athan")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_credits() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/api/v1/credits").await.json();
    assert_eq!(body["dataSources"].as_array().unwrap().len(), 4);
    assert_eq!(body["dataSources"][1]["content"]["totalAyahs"], 6236);
}

#[tokio::test]
async fn test_quran_text() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/api/v1/quran-text/manifest").await.json();
    assert_eq!(body["totalPages"], 604);

    let response = server.get("/api/v1/quran-text/page/1").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
    assert_eq!(response.header("x-page-number"), "1");
    assert_eq!(response.header("x-total-pages"), "604");
    assert_eq!(response.as_bytes().as_ref(), b"<svg/>");

    let response = server.get("/api/v1/quran-text/page/605").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), "INVALID_PAGE_NUMBER");

    // in range, not uploaded
    server
        .get("/api/v1/quran-text/page/2")
        .await
        .assert_status_not_found();

    let response = server.get("/api/v1/quran-text/download").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/zip");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"quran-pages.zip\""
    );
    assert_eq!(response.header("cache-control"), "public, max-age=86400");
}

#[tokio::test]
async fn test_athan() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/api/v1/athan/manifest").await.json();
    assert_eq!(body["totalAthans"], 32);

    let body: Value = server.get("/api/v1/athan/muezzins").await.json();
    assert_eq!(body["muezzins"][0]["count"], 2);
    assert!(
        body["muezzins"]
            .as_array()
            .unwrap()
            .iter()
            .all(|m| m["name"] != "Unknown")
    );

    let body: Value = server.get("/api/v1/athan/list?location=egypt").await.json();
    assert_eq!(body["count"], 4);
    assert_eq!(
        body["athans"][0]["audioUrl"],
        "/api/v1/athan/1a014366658c"
    );

    let response = server.get("/api/v1/athan/1a014366658c").await;
    response.assert_status_ok();
    assert_eq!(response.header("x-athan-id"), "1a014366658c");
    assert_eq!(response.header("x-muezzin"), "Abdulbasit Abdusamad");
    assert_eq!(response.header("x-location"), "Egypt");

    let (name, value) = range("bytes=0-4");
    let response = server
        .get("/api/v1/athan/1a014366658c")
        .add_header(name, value)
        .await;
    response.assert_status(StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.as_bytes().as_ref(), b"athan");

    server
        .get("/api/v1/athan/000000000000")
        .await
        .assert_status_not_found();

    let response = server.get("/api/v1/athan/download").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"PK-athan");
}

#[tokio::test]
async fn test_tafseer_catalog() {
    let (_dir, server) = create_test_server();

    let body: Value = server.get("/api/v1/tafseer/manifest").await.json();
    assert_eq!(body["total"], 8);
    assert_eq!(body["types"]["word-meanings"], 2);
    assert_eq!(body["languages"]["arabic"], 5);

    let body: Value = server.get("/api/v1/tafseer/list").await.json();
    assert_eq!(body["count"], 8);

    let body: Value = server.get("/api/v1/tafseer/downloads").await.json();
    assert_eq!(body["count"], 8);
    assert_eq!(
        body["downloads"][0]["download_url"],
        "/api/v1/tafseer/download/word-by-word-english"
    );

    let body: Value = server.get("/api/v1/tafseer/muyassar").await.json();
    assert_eq!(body["filename"], "tafseer_tafsir-muyassar.json");
    assert_eq!(
        body["endpoints"]["surah"],
        "/api/v1/tafseer/muyassar/surah/:surahNumber"
    );

    let response = server.get("/api/v1/tafseer/unknown").await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Tafseer 'unknown' not found"
    );
}

#[tokio::test]
async fn test_tafseer_content() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/tafseer/muyassar/surah/1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tafseer"]["id"], "muyassar");
    assert_eq!(body["surah"]["number"], 1);
    assert_eq!(body["surah"]["ayahs"].as_array().unwrap().len(), 2);

    let body: Value = server
        .get("/api/v1/tafseer/muyassar/surah/1/ayah/2")
        .await
        .json();
    assert_eq!(body["ayah"]["text"], "second");
    assert!(body["surah"].get("ayahs").is_none());

    // valid reference the document does not cover
    server
        .get("/api/v1/tafseer/muyassar/surah/2")
        .await
        .assert_status_not_found();
    server
        .get("/api/v1/tafseer/muyassar/surah/1/ayah/7")
        .await
        .assert_status_not_found();

    let response = server.get("/api/v1/tafseer/muyassar/surah/1/ayah/8").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), "INVALID_AYAH_NUMBER");

    let response = server.get("/api/v1/tafseer/muyassar/surah/0").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response.json()), "INVALID_SURAH_NUMBER");

    // catalogued but not uploaded
    server
        .get("/api/v1/tafseer/ibn-kathir/surah/1")
        .await
        .assert_status_not_found();

    let response = server.get("/api/v1/tafseer/al-tabari/surah/1").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_code(&response.json()), "INTERNAL_SERVER_ERROR");
}

#[tokio::test]
async fn test_tafseer_download() {
    let (_dir, server) = create_test_server();

    let response = server.get("/api/v1/tafseer/download/muyassar").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"tafseer_tafsir-muyassar.zip\""
    );
    assert_eq!(response.as_bytes().as_ref(), b"PK-muyassar");

    server
        .get("/api/v1/tafseer/download/al-saddi")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_rate_limiting() {
    let dir = test_data_dir();
    let state = test_state(&dir)
        .with_rate_limiter(RateLimiter::new(2, Duration::from_secs(60), 100));
    let server = TestServer::new(create_router(state)).unwrap();

    let client = |ip: &'static str| {
        (
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_static(ip),
        )
    };

    let (name, value) = client("10.0.0.1, 172.16.0.1");
    let response = server.get("/api/health").add_header(name, value).await;
    response.assert_status_ok();
    assert_eq!(response.header("x-ratelimit-limit"), "2");
    assert_eq!(response.header("x-ratelimit-remaining"), "1");
    assert!(response.headers().contains_key("x-ratelimit-reset"));

    let (name, value) = client("10.0.0.1");
    server
        .get("/api/health")
        .add_header(name, value)
        .await
        .assert_status_ok();

    let (name, value) = client("10.0.0.1");
    let response = server.get("/api/health").add_header(name, value).await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    assert_eq!(error_code(&response.json()), "RATE_LIMIT_EXCEEDED");

    // CDN header takes precedence over the forwarded chain
    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("cf-connecting-ip"),
            HeaderValue::from_static("10.0.0.2"),
        )
        .add_header(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_static("10.0.0.1"),
        )
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_cors() {
    let dir = test_data_dir();
    let app = create_router(test_state(&dir)).layer(cors_layer());
    let server = TestServer::new(app).unwrap();

    let response = server
        .method(Method::OPTIONS, "/api/v1/audio/husary/1")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://example.com"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("GET"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("access-control-max-age"), "86400");

    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://example.com"),
        )
        .await;
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
