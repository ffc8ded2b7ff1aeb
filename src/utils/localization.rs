//! Label languages.
//!
//! Detail strings carry a fixed marker word so a renderer can tell positive
//! from negative outcomes by text alone. The marker vocabulary is part of the
//! output contract and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output language for labels and detail strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "ko")]
    Korean,
    #[serde(alias = "en")]
    English,
}

/// Marker words embedded in detail strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Present in every positive outcome.
    pub positive: &'static str,
    /// Present in every negative outcome.
    pub negative: &'static str,
}

const KOREAN_MARKERS: Markers = Markers {
    positive: "팀워크",
    negative: "주의",
};

const ENGLISH_MARKERS: Markers = Markers {
    positive: "Teamwork",
    negative: "Caution",
};

impl Language {
    pub const fn markers(self) -> Markers {
        match self {
            Self::Korean => KOREAN_MARKERS,
            Self::English => ENGLISH_MARKERS,
        }
    }

    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }

    /// Label for person A or B in third-person detail strings.
    pub const fn person(self, is_a: bool) -> &'static str {
        match (self, is_a) {
            (Self::Korean, true) => "A",
            (Self::Korean, false) => "B",
            (Self::English, true) => "Person A",
            (Self::English, false) => "Person B",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Self::Korean),
            "en" | "english" => Ok(Self::English),
            other => anyhow::bail!("Unknown language '{}': expected 'ko' or 'en'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_codes() {
        assert_eq!("ko".parse::<Language>().unwrap(), Language::Korean);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn markers_are_distinct_per_language() {
        for lang in [Language::Korean, Language::English] {
            let m = lang.markers();
            assert_ne!(m.positive, m.negative);
            assert!(!m.positive.contains('-'));
        }
    }

    #[test]
    fn serde_accepts_codes() {
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
        let lang: Language = serde_json::from_str("\"korean\"").unwrap();
        assert_eq!(lang, Language::Korean);
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"english\"");
    }
}
