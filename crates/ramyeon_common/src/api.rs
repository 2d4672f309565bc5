//! Request/response envelopes for the HTTP surface.

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/parse`. Both fields default so a sloppy caller
/// still gets a well-formed (fallback) directive instead of a 4xx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub lang: Language,
}

/// `GET /api/guide/list` - canonical names in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideListResponse {
    pub items: Vec<String>,
}

/// `GET /health` liveness probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub time: String,
}

/// `GET /api` endpoint hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHint {
    pub ok: bool,
    pub hint: String,
}
