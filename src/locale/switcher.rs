//! Path helpers for switching between locales.

use crate::locale::registry::{Locale, LocaleRegistry};

/// The locale named by the first segment of `path`, if it is supported.
///
/// Matches `/<locale>` and `/<locale>/...` exactly; `/english` is not `en`.
pub fn locale_of<'r>(path: &str, registry: &'r LocaleRegistry) -> Option<&'r Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or(rest);
    registry.get(segment)
}

/// Locale of `path`, or the registry default when the path has none.
pub fn current_locale<'r>(path: &str, registry: &'r LocaleRegistry) -> &'r Locale {
    locale_of(path, registry).unwrap_or_else(|| registry.default_locale())
}

/// Rewrite `path` so it targets `target` instead of its current locale.
///
/// Paths without a locale segment get `target` prefixed. Returns `None` if
/// `target` is not a supported locale.
pub fn switch_locale(path: &str, registry: &LocaleRegistry, target: &str) -> Option<String> {
    let target = registry.get(target)?;

    let rest = match locale_of(path, registry) {
        // bare "/es" stays bare
        Some(current) if path.len() == current.code().len() + 1 => {
            return Some(format!("/{}", target.code()));
        }
        Some(current) => &path[current.code().len() + 1..],
        None => path,
    };

    Some(format!("/{}/{}", target.code(), rest.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new(["en", "es"], "en").unwrap()
    }

    #[test]
    fn test_locale_of() {
        let registry = registry();
        assert_eq!(locale_of("/es", &registry).map(Locale::code), Some("es"));
        assert_eq!(locale_of("/es/blog", &registry).map(Locale::code), Some("es"));
        assert_eq!(locale_of("/en/", &registry).map(Locale::code), Some("en"));
        assert!(locale_of("/english", &registry).is_none());
        assert!(locale_of("/", &registry).is_none());
        assert!(locale_of("", &registry).is_none());
        assert!(locale_of("es/blog", &registry).is_none());
    }

    #[test]
    fn test_current_locale_defaults() {
        let registry = registry();
        assert_eq!(current_locale("/es/blog", &registry).code(), "es");
        assert_eq!(current_locale("/blog", &registry).code(), "en");
    }

    #[test]
    fn test_switch_locale() {
        let registry = registry();
        assert_eq!(switch_locale("/en/blog", &registry, "es").as_deref(), Some("/es/blog"));
        assert_eq!(switch_locale("/es", &registry, "en").as_deref(), Some("/en"));
        assert_eq!(switch_locale("/es/", &registry, "en").as_deref(), Some("/en/"));
        assert_eq!(switch_locale("/blog", &registry, "es").as_deref(), Some("/es/blog"));
        assert_eq!(switch_locale("/en/en/x", &registry, "es").as_deref(), Some("/es/en/x"));
        assert_eq!(switch_locale("/en/blog", &registry, "fr"), None);
    }
}
