//! `Accept-Language` parsing and locale negotiation.
//!
//! # Responsibilities
//! - Parse the header into weighted language ranges
//! - Order ranges by quality, keeping header order on ties
//! - Pick the first supported locale a range matches
//!
//! # Design Decisions
//! - Never fails: malformed entries are skipped, not reported
//! - `q=0` means "not acceptable" and removes the entry
//! - `*` selects the default locale at its position in the ordering

use unic_langid::LanguageIdentifier;

use crate::locale::registry::{Locale, LocaleRegistry};

/// The language part of one `Accept-Language` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageRange {
    /// A concrete, validated tag such as `es-MX`.
    Tag(LanguageIdentifier),
    /// The `*` wildcard.
    Any,
}

/// One usable entry from an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    pub range: LanguageRange,
    /// Quality weight in `(0, 1]`.
    pub quality: f32,
    /// Index of the entry in the original header.
    pub position: usize,
}

/// Parse an `Accept-Language` value into preferences, best first.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = header
        .split(',')
        .enumerate()
        .filter_map(|(position, entry)| parse_entry(entry, position))
        .collect();

    // sort_by is stable, so equal weights keep header order
    preferences.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    preferences
}

fn parse_entry(entry: &str, position: usize) -> Option<LanguagePreference> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }

    let mut quality = 1.0_f32;
    for param in parts {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("q") {
            quality = value.trim().parse().ok()?;
        }
    }

    if !(quality > 0.0 && quality <= 1.0) {
        return None;
    }

    let range = if tag == "*" {
        LanguageRange::Any
    } else {
        LanguageRange::Tag(tag.parse().ok()?)
    };

    Some(LanguagePreference {
        range,
        quality,
        position,
    })
}

/// Choose the best supported locale for the given preferences.
///
/// Each preference is tried in order against the registry: full tag, then a
/// locale named by its primary subtag, then any locale sharing that subtag.
/// Falls back to the registry default.
pub fn negotiate<'r>(preferences: &[LanguagePreference], registry: &'r LocaleRegistry) -> &'r Locale {
    preferences
        .iter()
        .find_map(|preference| match_preference(preference, registry))
        .unwrap_or_else(|| registry.default_locale())
}

/// Parse and negotiate in one step; a missing header yields the default.
pub fn negotiate_header<'r>(header: Option<&str>, registry: &'r LocaleRegistry) -> &'r Locale {
    match header {
        Some(value) => negotiate(&parse_accept_language(value), registry),
        None => registry.default_locale(),
    }
}

fn match_preference<'r>(
    preference: &LanguagePreference,
    registry: &'r LocaleRegistry,
) -> Option<&'r Locale> {
    match &preference.range {
        LanguageRange::Any => Some(registry.default_locale()),
        LanguageRange::Tag(langid) => {
            let primary = langid.language.as_str();
            registry
                .find_tag(&langid.to_string())
                .or_else(|| registry.find_code_for_primary(primary))
                .or_else(|| registry.find_primary(primary))
        }
    }
}
