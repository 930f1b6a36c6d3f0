//! Supported content languages.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default and last-resort translation language)
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Portuguese
    Pt,
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
    ];

    /// Parse a language code such as `"en"`, `"en-US"` or `"pt_BR"`.
    ///
    /// Only the primary subtag is significant.
    pub fn parse(code: &str) -> Result<Self> {
        let normalized = code.trim().to_ascii_lowercase().replace('_', "-");
        let primary = normalized.split('-').next().unwrap_or_default();

        match primary {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            "pt" => Ok(Language::Pt),
            _ => Err(Error::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Parse a language code, falling back to the default language.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or_else(|_| {
            log::debug!("Unknown language code {:?}, using default", code);
            Language::default()
        })
    }

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Pt => "Português",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primary_subtag() {
        assert_eq!(Language::parse("en").unwrap(), Language::En);
        assert_eq!(Language::parse("en-US").unwrap(), Language::En);
        assert_eq!(Language::parse("pt_BR").unwrap(), Language::Pt);
        assert_eq!(Language::parse(" FR ").unwrap(), Language::Fr);
    }

    #[test]
    fn test_parse_unsupported() {
        let result = Language::parse("xx");
        assert!(matches!(result, Err(Error::UnsupportedLanguage(_))));
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_from_code_or_default() {
        assert_eq!(Language::from_code_or_default("ja"), Language::En);
        assert_eq!(Language::from_code_or_default("de-AT"), Language::De);
    }

    #[test]
    fn test_display_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }
}
