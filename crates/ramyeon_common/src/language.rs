//! Supported answer languages.

use serde::{Deserialize, Serialize};

/// Language a guide or directive is rendered in.
///
/// Korean is the primary language of the catalog; English is the
/// secondary rendering. Wire form is lowercase ("ko"/"en").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// Generic product name used when nothing else resolves.
    pub fn placeholder_name(&self) -> &'static str {
        match self {
            Language::Ko => "라면",
            Language::En => "ramyeon",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {other} (expected ko or en)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_wire_names_only() {
        assert_eq!(Language::from_str("ko"), Ok(Language::Ko));
        assert_eq!(Language::from_str("en"), Ok(Language::En));
        assert!(Language::from_str("xx").is_err());
        assert!(Language::from_str("KO").is_err());
    }
}
