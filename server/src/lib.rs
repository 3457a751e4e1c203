use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use search_core::engine::SearchEngine;
use search_core::{DocId, Segment};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

pub fn build_app(index_dir: String) -> Result<Router> {
    // Load every segment and signal table at startup; refusing to start beats
    // serving partial results.
    let engine = Arc::new(SearchEngine::load(&index_dir)?);

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/search_body", get(search_body_handler))
        .route("/search_title", get(search_title_handler))
        .route("/search_anchor", get(search_anchor_handler))
        .route("/get_pagerank", post(pagerank_handler))
        .route("/get_pageview", post(pageview_handler))
        .with_state(AppState { engine })
        .layer(cors);
    Ok(app)
}

type Ranked = Result<Json<Vec<(DocId, String)>>, (StatusCode, String)>;

fn internal_error(err: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}"))
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Ranked {
    let start = std::time::Instant::now();
    let hits = state.engine.search(&params.query).map_err(internal_error)?;
    tracing::debug!(query = %params.query, hits = hits.len(), took_s = start.elapsed().as_secs_f64(), "search");
    Ok(Json(hits))
}

pub async fn search_body_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Ranked {
    let start = std::time::Instant::now();
    let hits = state.engine.search_body(&params.query).map_err(internal_error)?;
    tracing::debug!(query = %params.query, hits = hits.len(), took_s = start.elapsed().as_secs_f64(), "search_body");
    Ok(Json(hits))
}

pub async fn search_title_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Ranked {
    let hits = state.engine.search_field(&params.query, Segment::Title).map_err(internal_error)?;
    Ok(Json(hits))
}

pub async fn search_anchor_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Ranked {
    let hits = state.engine.search_field(&params.query, Segment::Anchor).map_err(internal_error)?;
    Ok(Json(hits))
}

pub async fn pagerank_handler(State(state): State<AppState>, Json(doc_ids): Json<Vec<DocId>>) -> Json<Vec<f64>> {
    Json(state.engine.pagerank_scores(&doc_ids))
}

pub async fn pageview_handler(State(state): State<AppState>, Json(doc_ids): Json<Vec<DocId>>) -> Json<Vec<u64>> {
    Json(state.engine.pageview_counts(&doc_ids))
}
