//! API routes for ramyeond.

use crate::catalog;
use crate::guide;
use crate::resolver;
use crate::server::AppState;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::{StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use ramyeon_common::{ApiHint, Guide, GuideListResponse, HealthResponse, Language, ParseRequest, QuickGuide, TimerDirective};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Conversational Route
// ============================================================================

pub fn parse_routes() -> Router<AppStateArc> {
    Router::new().route("/api/parse", post(parse))
}

/// Always 200 with a well-formed directive. A missing, empty, or
/// unparsable body degrades to the fixed fallback for the requested (or
/// default) language rather than a 4xx.
async fn parse(
    State(state): State<AppStateArc>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Json<TimerDirective> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(_) => ParseRequest::default(),
    };

    info!("parse turn lang={} chars={}", request.lang, request.text.len());
    let directive = state.orchestrator.handle(&request.text, request.lang).await;
    Json(directive)
}

// ============================================================================
// Guide Routes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GuideQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    lang: Language,
}

pub fn guide_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/guide", get(guide_full))
        .route("/api/guide/quick", get(guide_quick))
        .route("/api/guide/list", get(guide_list))
}

fn require_name(query: &GuideQuery) -> Result<String, (StatusCode, Json<Value>)> {
    let name = query.name.trim();
    if name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name query required" })),
        ));
    }
    Ok(name.to_string())
}

async fn guide_full(
    Query(query): Query<GuideQuery>,
) -> Result<Json<Guide>, (StatusCode, Json<Value>)> {
    let name = require_name(&query)?;
    let target = resolver::lookup_guide_target(&name);
    Ok(Json(guide::synthesize(&target, query.lang)))
}

/// Lightweight variant for click-to-render callers.
async fn guide_quick(
    Query(query): Query<GuideQuery>,
) -> Result<Json<QuickGuide>, (StatusCode, Json<Value>)> {
    let name = require_name(&query)?;
    let target = resolver::lookup_guide_target(&name);
    let guide = guide::synthesize(&target, query.lang);
    Ok(Json(QuickGuide {
        title: guide.title,
        quick: guide.quick,
        meta: guide.meta,
    }))
}

async fn guide_list() -> Json<GuideListResponse> {
    let items = catalog::index()
        .guide_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    Json(GuideListResponse { items })
}

// ============================================================================
// Meta Routes
// ============================================================================

pub fn meta_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/catalog", get(catalog_table))
        .route("/api", get(api_hint))
        .route("/health", get(health))
}

/// Brand-grouped reference rows, declaration order preserved.
async fn catalog_table() -> Json<Value> {
    let brands: Vec<&str> = catalog::RAMYEON_CATALOG.iter().map(|b| b.name).collect();
    let mut table = serde_json::Map::new();
    for brand in catalog::RAMYEON_CATALOG {
        let rows: Vec<Value> = brand
            .rows
            .iter()
            .map(|row| {
                json!({
                    "name": row.name,
                    "time": row.time,
                    "spice": row.spice,
                    "cup": row.cup,
                })
            })
            .collect();
        table.insert(brand.name.to_string(), Value::Array(rows));
    }
    Json(json!({ "brands": brands, "catalog": table }))
}

async fn api_hint() -> Json<ApiHint> {
    Json(ApiHint {
        ok: true,
        hint: "GET /api/catalog, GET /api/guide?name=신라면, GET /api/guide/quick?name=신라면, POST /api/parse".to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        time: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not_found", "path": uri.path() })),
    )
}
