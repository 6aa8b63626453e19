//! Supported locale registry.
//!
//! # Responsibilities
//! - Hold the ordered set of supported locale codes
//! - Designate the default (fallback) locale
//! - Answer exact and primary-subtag lookups
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, no locks)
//! - Construction fails on an empty list: fallback must always have a target
//! - Codes are compared exactly for path prefixes, case-insensitively for negotiation

use std::fmt;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::config::validation::is_valid_locale_code;
use crate::config::LocalesConfig;

/// Error building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("locale registry is empty")]
    Empty,

    #[error("invalid locale code '{0}'")]
    InvalidLocale(String),

    #[error("duplicate locale code '{0}'")]
    Duplicate(String),

    #[error("default locale '{0}' is not a supported locale")]
    DefaultNotSupported(String),
}

/// A supported locale code, e.g. `en` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    code: String,
    primary: String,
}

impl Locale {
    fn parse(code: &str) -> Result<Self, RegistryError> {
        if !is_valid_locale_code(code) {
            return Err(RegistryError::InvalidLocale(code.to_string()));
        }
        let langid: LanguageIdentifier = code
            .parse()
            .map_err(|_| RegistryError::InvalidLocale(code.to_string()))?;

        Ok(Self {
            code: code.to_string(),
            primary: langid.language.as_str().to_ascii_lowercase(),
        })
    }

    /// The configured code, exactly as it appears in paths.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Lowercased primary language subtag (`pt` for `pt-BR`).
    pub fn primary(&self) -> &str {
        &self.primary
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Ordered set of supported locales plus a default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry from locale codes and the default code.
    pub fn new<I, S>(supported: I, default: &str) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locales: Vec<Locale> = Vec::new();
        for code in supported {
            let locale = Locale::parse(code.as_ref())?;
            if locales.iter().any(|l| l.code.eq_ignore_ascii_case(&locale.code)) {
                return Err(RegistryError::Duplicate(locale.code));
            }
            locales.push(locale);
        }

        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }

        let default_index = locales
            .iter()
            .position(|l| l.code == default)
            .ok_or_else(|| RegistryError::DefaultNotSupported(default.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Build a registry from the `[locales]` config section.
    pub fn from_config(config: &LocalesConfig) -> Result<Self, RegistryError> {
        Self::new(&config.supported, &config.default)
    }

    /// All supported locales in configured order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// Exact, case-sensitive lookup (used for path prefixes).
    pub fn get(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Case-insensitive lookup by full tag.
    pub fn find_tag(&self, tag: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.code.eq_ignore_ascii_case(tag))
    }

    /// Locale whose code is exactly the given primary subtag (`es` for `es-MX`).
    pub fn find_code_for_primary(&self, primary: &str) -> Option<&Locale> {
        self.locales
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(primary))
    }

    /// First locale sharing the primary subtag (`pt-BR` for `pt`).
    pub fn find_primary(&self, primary: &str) -> Option<&Locale> {
        self.locales
            .iter()
            .find(|l| l.primary.eq_ignore_ascii_case(primary))
    }
}
