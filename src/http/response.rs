//! Response construction for locale routing.
//!
//! # Responsibilities
//! - Build the temporary redirect for un-prefixed paths
//! - Mark redirects as varying on `Accept-Language`
//! - Label locale-scoped responses with `Content-Language`
//!
//! # Design Decisions
//! - 307, not 301/308: the chosen locale depends on the client, so it must
//!   not be cached as permanent
//! - Headers set by the content layer are never overwritten

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::locale::Locale;

/// Temporary redirect to `location`.
pub fn locale_redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (
            StatusCode::TEMPORARY_REDIRECT,
            [
                (header::LOCATION, value),
                (header::VARY, HeaderValue::from_static("accept-language")),
            ],
        )
            .into_response(),
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid request path").into_response(),
    }
}

/// Set `Content-Language` unless the response already carries one.
pub fn set_content_language(response: &mut Response, locale: &Locale) {
    if let Ok(value) = HeaderValue::from_str(locale.code()) {
        response
            .headers_mut()
            .entry(header::CONTENT_LANGUAGE)
            .or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleRegistry;

    #[test]
    fn test_redirect_headers() {
        let response = locale_redirect("/es/blog?ref=ad");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/es/blog?ref=ad");
        assert_eq!(response.headers()[header::VARY], "accept-language");
    }

    #[test]
    fn test_invalid_location_is_bad_request() {
        let response = locale_redirect("/en/\nbad");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_content_language_not_overwritten() {
        let registry = LocaleRegistry::new(["en", "es"], "en").unwrap();
        let es = registry.get("es").unwrap();

        let mut response = StatusCode::OK.into_response();
        set_content_language(&mut response, es);
        assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "es");

        let mut response = ([(header::CONTENT_LANGUAGE, "en")], "hi").into_response();
        set_content_language(&mut response, es);
        assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "en");
    }
}
