//! Locale routing middleware.
//! Redirects un-prefixed page requests to the negotiated locale.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header::ACCEPT_LANGUAGE, HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use crate::http::request::request_id;
use crate::http::response::{locale_redirect, set_content_language};
use crate::locale::{locale_of, IncomingRequest, Locale, LocaleResolver, RoutingDecision};
use crate::observability::metrics;

/// Locale targeted by a pass-through request, attached as a request extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveLocale(pub Locale);

/// All `Accept-Language` values joined into one list, if any are readable.
fn accept_language(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(ACCEPT_LANGUAGE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

pub async fn locale_middleware(
    State(resolver): State<Arc<LocaleResolver>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let accept = accept_language(request.headers());
    let path = request.uri().path().to_string();

    let decision = resolver.resolve(&IncomingRequest {
        path: &path,
        query: request.uri().query(),
        accept_language: accept.as_deref(),
    });

    match decision {
        RoutingDecision::Redirect(location) => {
            let locale = locale_of(&location, resolver.registry())
                .map(Locale::code)
                .unwrap_or("none");

            tracing::debug!(
                request_id = %request_id(&request),
                path = %path,
                accept_language = ?accept,
                location = %location,
                "Redirecting to locale"
            );
            metrics::record_decision("redirect", locale, start_time);

            locale_redirect(&location)
        }
        RoutingDecision::PassThrough => {
            let active = locale_of(&path, resolver.registry()).cloned();
            if let Some(locale) = &active {
                request.extensions_mut().insert(ActiveLocale(locale.clone()));
            }
            let label = active.as_ref().map(Locale::code).unwrap_or("none");
            metrics::record_decision("pass_through", label, start_time);

            let mut response = next.run(request).await;
            if let Some(locale) = &active {
                set_content_language(&mut response, locale);
            }
            response
        }
    }
}
