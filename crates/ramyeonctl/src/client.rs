//! Thin HTTP client for the daemon.

use anyhow::{Context, Result};
use ramyeon_common::{
    Guide, GuideListResponse, HealthResponse, Language, QuickGuide, TimerDirective,
};
use serde_json::{json, Value};
use std::time::Duration;

pub struct DaemonClient {
    http: reqwest::Client,
    base_url: String,
}

impl DaemonClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        self.get_json("/health", &[]).await
    }

    pub async fn catalog(&self) -> Result<Value> {
        self.get_json("/api/catalog", &[]).await
    }

    pub async fn guide_list(&self) -> Result<GuideListResponse> {
        self.get_json("/api/guide/list", &[]).await
    }

    pub async fn guide(&self, name: &str, lang: Language) -> Result<Guide> {
        self.get_json("/api/guide", &[("name", name), ("lang", lang.as_str())])
            .await
    }

    pub async fn guide_quick(&self, name: &str, lang: Language) -> Result<QuickGuide> {
        self.get_json("/api/guide/quick", &[("name", name), ("lang", lang.as_str())])
            .await
    }

    pub async fn parse(&self, text: &str, lang: Language) -> Result<TimerDirective> {
        let url = format!("{}/api/parse", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "text": text, "lang": lang }))
            .send()
            .await
            .context("daemon not reachable")?;
        response.json().await.context("unexpected parse response")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .context("daemon not reachable")?;
        if !response.status().is_success() {
            anyhow::bail!("daemon returned {}", response.status());
        }
        response.json().await.context("unexpected response shape")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_builds_a_client() {
        assert!(DaemonClient::new("http://127.0.0.1:8787/").is_ok());
    }

    #[test]
    fn hangul_query_values_are_percent_encoded() {
        let client = DaemonClient::new("http://127.0.0.1:8787").unwrap();
        let request = client
            .http
            .get(format!("{}/api/guide", client.base_url))
            .query(&[("name", "신라면"), ("lang", Language::Ko.as_str())])
            .build()
            .unwrap();
        let url = request.url().as_str();
        assert!(url.contains("name=%EC%8B%A0%EB%9D%BC%EB%A9%B4"), "got {url}");
        assert!(url.contains("lang=ko"));
    }
}
