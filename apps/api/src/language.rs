use serde::{Deserialize, Serialize};

/// Supported response languages. Anything else silently falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Id,
}

impl Language {
    /// Normalizes a raw language parameter. Unsupported or absent values
    /// default to English rather than erroring.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("en") => Language::En,
            Some("id") => Language::Id,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }
}
