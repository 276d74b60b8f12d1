use artikel_core::Article;
use artikel_server::build_app;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tower::ServiceExt;

fn write_corpus(dir: &Path) -> String {
    let articles = vec![
        Article {
            title: "Harga Rumah Naik".into(),
            content: "Harga rumah di kota naik tajam tahun ini".into(),
            url: "https://artikel.rumah123.com/harga-naik".into(),
        },
        Article {
            title: "Rumah Subsidi".into(),
            content: "Program rumah subsidi pemerintah berlanjut".into(),
            url: "https://propertiterkini.com/rumah-subsidi".into(),
        },
        Article {
            title: "Pasar Modal".into(),
            content: "Saham dan obligasi bergerak datar".into(),
            url: "https://example.id/pasar-modal".into(),
        },
    ];
    let path = dir.join("articles.json");
    fs::write(&path, serde_json::to_string(&articles).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_endpoint_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path());
    let app = build_app(path).unwrap();

    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path());
    let app = build_app(path).unwrap();

    let (status, json) = call(app, "/search?q=harga%20rumah&method=cosine").await;
    assert_eq!(status, StatusCode::OK);

    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    // "harga" only occurs in the first article, which must rank on top.
    assert_eq!(
        results[0]["url"].as_str().unwrap(),
        "https://artikel.rumah123.com/harga-naik"
    );
    assert_eq!(results[0]["source_tag"].as_str().unwrap(), "rumah123");
    assert!(results[0]["score"].as_f64().unwrap() > 0.0);

    let scores: Vec<f64> = results
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(json["page"].as_u64().unwrap(), 1);
    assert_eq!(
        json["total_results"].as_u64().unwrap() as usize,
        results.len()
    );
}

#[tokio::test]
async fn stopword_query_yields_empty_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path());
    let app = build_app(path).unwrap();

    let (status, json) = call(app, "/search?q=yang%20dan%20itu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_results"].as_u64().unwrap(), 0);
    assert!(json["results"].as_array().unwrap().is_empty());
    assert_eq!(json["total_pages"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn out_of_range_page_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path());
    let app = build_app(path).unwrap();

    let (status, json) = call(app, "/search?q=rumah&page=99").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"], json["total_pages"]);
    assert!(!json["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_corpus_is_an_empty_collection_not_an_error() {
    let app = build_app("/nonexistent/articles.json".to_string()).unwrap();
    let (status, json) = call(app, "/search?q=rumah").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_results"].as_u64().unwrap(), 0);
}
