use anyhow::Result;
use artikel_core::{JsonStore, SearchEngine, SearchResult};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const ITEMS_PER_PAGE: usize = 10;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    /// Similarity method name; anything other than "jaccard" means cosine.
    #[serde(default)]
    pub method: String,
    #[serde(default = "default_page")]
    pub page: usize,
}
fn default_page() -> usize {
    1
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub method: String,
    pub took_s: f64,
    pub total_results: usize,
    pub page: usize,
    pub total_pages: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

pub fn build_app(articles_path: String) -> Result<Router> {
    let engine = Arc::new(SearchEngine::new(JsonStore::new(&articles_path)));
    let state = AppState { engine };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(state)
        .layer(cors);
    Ok(app)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();

    let all = state.engine.search(&params.q, &params.method);
    let total_results = all.len();
    let total_pages = total_results.div_ceil(ITEMS_PER_PAGE);

    let mut page = params.page.max(1);
    if total_pages > 0 && page > total_pages {
        page = total_pages;
    }
    let results: Vec<SearchResult> = all
        .into_iter()
        .skip((page - 1) * ITEMS_PER_PAGE)
        .take(ITEMS_PER_PAGE)
        .collect();

    Json(SearchResponse {
        query: params.q,
        method: params.method,
        took_s: start.elapsed().as_secs_f64(),
        total_results,
        page,
        total_pages,
        results,
    })
}
