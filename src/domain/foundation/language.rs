//! Language a party has asked to receive correspondence in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{is_yes, YesOrNo};

/// Correspondence language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguagePreference {
    #[default]
    English,
    Welsh,
}

impl LanguagePreference {
    /// Derives the preference from the "prefers Welsh" answer.
    ///
    /// Anything other than an explicit `Yes` means English.
    pub fn from_welsh_answer(answer: Option<YesOrNo>) -> Self {
        if is_yes(answer) {
            LanguagePreference::Welsh
        } else {
            LanguagePreference::English
        }
    }

    /// Returns true for Welsh.
    pub fn is_welsh(&self) -> bool {
        matches!(self, LanguagePreference::Welsh)
    }

    /// Three-letter code used in template identifiers.
    pub fn template_code(&self) -> &'static str {
        match self {
            LanguagePreference::English => "ENG",
            LanguagePreference::Welsh => "WEL",
        }
    }
}

impl fmt::Display for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguagePreference::English => write!(f, "english"),
            LanguagePreference::Welsh => write!(f, "welsh"),
        }
    }
}
