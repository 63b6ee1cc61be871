use std::fmt;

use serde::{Deserialize, Serialize};

/// UI language. Korean is the default until a stored preference says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
    Zh,
    Ja,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::Ko, Language::En, Language::Zh, Language::Ja]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ja => "ja",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ko" => Some(Self::Ko),
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }

    /// Name of the language in English, for logs and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ko => "Korean",
            Self::En => "English",
            Self::Zh => "Chinese",
            Self::Ja => "Japanese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_code() {
        for lang in Language::all() {
            assert_eq!(Language::parse(lang.as_str()), Some(*lang));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse("KO"), None);
    }

    #[test]
    fn default_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }
}
