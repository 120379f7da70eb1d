//! Internationalization support for VORA.
//!
//! This module provides language selection and locale management.

use serde::{Deserialize, Serialize};

/// Supported application languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    /// Get the locale code for rust-i18n
    pub fn locale_code(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt-BR",
            Language::English => "en",
        }
    }

    /// Get the display name for the language (in its native language)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Portuguese => "Português",
            Language::English => "English",
        }
    }

    /// Get all available languages
    pub fn all() -> &'static [Language] {
        &[Language::Portuguese, Language::English]
    }

    /// Make this the active locale for `t!`
    pub fn apply(&self) {
        rust_i18n::set_locale(self.locale_code());
    }
}
