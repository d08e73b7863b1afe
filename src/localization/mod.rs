// ABOUTME: Localization of UI strings for the supported languages
// ABOUTME: Immutable translation table plus an injectable, observable current-language translator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Localization
//!
//! [`LocalizationTable`] is a read-only mapping of `(language, key)` to a UI
//! string. Missing keys fall back to the key itself, so a lookup never fails.
//!
//! The current language lives in a [`Translator`] handed to each screen rather
//! than in process-wide state. Clones of a translator share the same language
//! and can [`subscribe`](Translator::subscribe) to changes.

mod dictionaries;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use crate::errors::{AppError, AppResult, LookupPolicy};
use crate::logging::AppLogger;

/// Supported UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Name of the language in that language
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
        }
    }

    /// Parse `code`, following the environment's lookup policy
    ///
    /// Under `LogAndDefault` an unsupported code resolves to English.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` under `FailFast`.
    pub fn resolve(code: &str, policy: LookupPolicy) -> AppResult<Self> {
        Ok(policy.resolve(code.parse())?.unwrap_or_default())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(AppError::unsupported_language(other)),
        }
    }
}

static GLOBAL: LocalizationTable = LocalizationTable {
    en: dictionaries::EN,
    hi: dictionaries::HI,
};

/// Read-only `(language, key) -> string` mapping
#[derive(Debug, Clone, Copy)]
pub struct LocalizationTable {
    en: &'static [(&'static str, &'static str)],
    hi: &'static [(&'static str, &'static str)],
}

impl LocalizationTable {
    /// Built-in table
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    const fn entries(&self, language: Language) -> &'static [(&'static str, &'static str)] {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }

    /// String for `key` in `language`, or `key` itself when missing
    #[must_use]
    pub fn translate<'a>(&self, language: Language, key: &'a str) -> &'a str {
        self.entries(language)
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, value)| *value)
    }

    /// Translate using an untyped language code
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if `code` is not a supported language.
    pub fn translate_code<'a>(&self, code: &str, key: &'a str) -> AppResult<&'a str> {
        let language: Language = code.parse()?;
        Ok(self.translate(language, key))
    }

    /// Complete dictionary for a language code
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if `code` is not a supported language.
    pub fn dictionary(&self, code: &str) -> AppResult<BTreeMap<String, String>> {
        let language: Language = code.parse()?;
        Ok(self
            .entries(language)
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect())
    }

    /// Keys defined for `language`, in table order
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &'static str> {
        self.entries(language).iter().map(|(k, _)| *k)
    }
}

/// Current-language holder injected into screens
///
/// Cloning shares the language; a change through one clone is visible to all.
#[derive(Debug, Clone)]
pub struct Translator {
    table: &'static LocalizationTable,
    language: Arc<watch::Sender<Language>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Translator {
    /// Translator starting in `language`
    #[must_use]
    pub fn new(language: Language) -> Self {
        let (tx, _rx) = watch::channel(language);
        Self {
            table: LocalizationTable::global(),
            language: Arc::new(tx),
        }
    }

    /// Current language
    #[must_use]
    pub fn language(&self) -> Language {
        *self.language.borrow()
    }

    /// Translate `key` in the current language
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.table.translate(self.language(), key)
    }

    /// Switch language by code
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` and leaves the language unchanged if
    /// `code` is not supported.
    pub fn set_language(&self, code: &str) -> AppResult<()> {
        let language: Language = code.parse().inspect_err(|e| {
            warn!(language = %code, error = %e, "Rejected language change");
        })?;
        let previous = self.language.send_replace(language);
        if previous != language {
            AppLogger::log_language_change(previous.code(), language.code());
        }
        Ok(())
    }

    /// Receiver notified whenever the language changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.language.subscribe()
    }
}
