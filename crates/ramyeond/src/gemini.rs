//! Completion backend: Gemini client and the lenient directive decoder.
//!
//! The service is treated as an untyped black box. The decoder strips an
//! optional code fence, parses, and coerces field by field; any deviation
//! routes to the caller's repair/fallback policy instead of surfacing.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use ramyeon_common::{CompletionError, Language, TimerControl, TimerDirective};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Maximum suggestions carried through to the caller.
pub const MAX_SUGGESTIONS: usize = 5;

/// Default duration when the payload carries none.
const DEFAULT_SECONDS: f64 = 240.0;

/// Narrow seam over the completion service so tests can inject canned
/// responses.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// One completion call: system preamble + user prompt -> raw text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Strict response schema sent with every request: the exact
/// TimerDirective field set, no extras.
fn response_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["name", "seconds", "raw_time_text", "reply", "suggestions", "should_start"],
        "properties": {
            "name": { "type": "string" },
            "seconds": { "type": "number" },
            "raw_time_text": { "type": "string" },
            "reply": { "type": "string" },
            "suggestions": { "type": "array", "items": { "type": "string" }, "minItems": 0, "maxItems": 5 },
            "should_start": { "type": "boolean" },
            "control": { "type": "string", "nullable": true }
        }
    })
}

/// Gemini generateContent client.
pub struct GeminiClient {
    http_client: reqwest::Client,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Build errors surface at startup; a client without the configured
    /// timeout would make unbounded completion calls.
    pub fn new(model: &str, api_key: Option<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http_client,
            model: model.to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::Transport("no API key configured".to_string()))?;
        let url = format!("{}/{}:generateContent?key={}", GEMINI_BASE_URL, self.model, key);

        let request = GenerateContentRequest {
            contents: vec![
                Content { role: "user", parts: vec![Part { text: system.to_string() }] },
                Content { role: "user", parts: vec![Part { text: user.to_string() }] },
            ],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        info!("completion call model={} user_chars={}", self.model, user.len());

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("completion service status {}", status);
            return Err(CompletionError::Status(status.as_u16()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let text: String = body
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(CompletionError::Malformed("empty candidate text".to_string()));
        }
        Ok(text)
    }
}

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").expect("fence pattern"));

/// Strip an optional fenced code block around a JSON payload.
pub fn strip_json_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    match FENCE_RE.captures(trimmed) {
        Some(caps) => caps[1].trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Locally derived defaults the repair step falls back on.
#[derive(Debug, Clone)]
pub struct RepairDefaults {
    pub language: Language,
    /// Heuristic should_start guess from the classifier.
    pub heuristic_should_start: bool,
    /// Control intent detected in the original utterance; outranks
    /// whatever the external result claims.
    pub local_control: Option<TimerControl>,
}

/// Coerce a parsed payload into a well-formed directive.
///
/// Applied unconditionally after any successful parse, and idempotent:
/// feeding the output back through yields the same directive.
pub fn repair_value(v: &Value, defaults: &RepairDefaults) -> TimerDirective {
    let name = v
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| defaults.language.placeholder_name())
        .to_string();

    // Zero, negative-to-floor, non-numeric: all end at max(1, ...) with a
    // 240 default, matching the caller-facing invariant seconds >= 1.
    let raw_seconds = v
        .get("seconds")
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n != 0.0)
        .unwrap_or(DEFAULT_SECONDS);
    let seconds = raw_seconds.floor().max(1.0) as u32;

    let raw_time_text = v
        .get("raw_time_text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let reply = v.get("reply").and_then(Value::as_str).unwrap_or("").to_string();

    let suggestions: Vec<String> = v
        .get("suggestions")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .take(MAX_SUGGESTIONS)
                .collect()
        })
        .unwrap_or_default();

    let should_start = v
        .get("should_start")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.heuristic_should_start);

    let mut control = v
        .get("control")
        .and_then(Value::as_str)
        .and_then(TimerControl::parse);
    if defaults.local_control.is_some() {
        control = defaults.local_control;
    }

    TimerDirective {
        name,
        seconds,
        raw_time_text,
        reply,
        suggestions,
        // A control command never simultaneously launches a new timer.
        should_start: if control.is_some() { false } else { should_start },
        control,
    }
}

/// Full decode pipeline: strip fence, parse, require an object, coerce.
pub fn decode_directive(
    raw: &str,
    defaults: &RepairDefaults,
) -> Result<TimerDirective, CompletionError> {
    let cleaned = strip_json_fence(raw);
    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| CompletionError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(CompletionError::Malformed("payload is not a JSON object".to_string()));
    }
    Ok(repair_value(&value, defaults))
}
