//! Synthesized cooking guide shapes.

use serde::{Deserialize, Serialize};

/// Which instruction template a product cooks with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookType {
    /// Boil noodles and soup base together.
    Soup,
    /// Drain most of the water and stir-fry with sauce.
    Stir,
    /// Drain, rinse cold, mix with sauce.
    Bibim,
    /// Single-serving cup: pour boiling water and wait.
    Cup,
}

impl CookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookType::Soup => "soup",
            CookType::Stir => "stir",
            CookType::Bibim => "bibim",
            CookType::Cup => "cup",
        }
    }
}

impl std::fmt::Display for CookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One titled group of instruction lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Resolved cooking parameters echoed back with the guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideMeta {
    #[serde(rename = "type")]
    pub cook_type: CookType,
    pub water_ml: u32,
    pub time_sec: u32,
}

/// Full localized cooking procedure. Ephemeral - recomputed per request,
/// deterministic for identical (name, language).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    pub sections: Vec<GuideSection>,
    /// Sections flattened into 1-based numbered lines.
    pub steps: Vec<String>,
    /// Always exactly 3 entries, phrased independently of the sections.
    pub quick: Vec<String>,
    pub notes: Vec<String>,
    pub meta: GuideMeta,
}

/// Lightweight variant for click-to-render callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickGuide {
    pub title: String,
    pub quick: Vec<String>,
    pub meta: GuideMeta,
}
