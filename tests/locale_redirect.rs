//! End-to-end locale routing over a real socket.

use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, LOCATION, VARY};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_redirects_to_negotiated_locale() {
    let site = common::write_site();
    let (addr, shutdown) = common::start_gateway(common::test_config(site.path())).await;
    let client = common::no_redirect_client();

    let res = client
        .get(format!("http://{addr}/blog"))
        .header(ACCEPT_LANGUAGE, "es-MX;q=0.9, en;q=0.8")
        .send()
        .await
        .expect("gateway unreachable");

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[LOCATION], "/es/blog");
    assert_eq!(res.headers()[VARY], "accept-language");
    assert!(res.headers().contains_key("x-request-id"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_default_locale_and_query_preserved() {
    let site = common::write_site();
    let (addr, shutdown) = common::start_gateway(common::test_config(site.path())).await;
    let client = common::no_redirect_client();

    let res = client
        .get(format!("http://{addr}/blog?ref=ad"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[LOCATION], "/en/blog?ref=ad");

    let res = client
        .get(format!("http://{addr}/"))
        .header(ACCEPT_LANGUAGE, "fr;q=1.0")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[LOCATION], "/en/");

    shutdown.trigger();
}

#[tokio::test]
async fn test_following_redirect_lands_on_localized_page() {
    let site = common::write_site();
    let (addr, shutdown) = common::start_gateway(common::test_config(site.path())).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{addr}/"))
        .header(ACCEPT_LANGUAGE, "es")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.url().path(), "/es/");
    assert_eq!(res.headers()[CONTENT_LANGUAGE], "es");
    assert_eq!(res.text().await.unwrap(), "home-es");

    shutdown.trigger();
}

#[tokio::test]
async fn test_prefixed_paths_and_assets_are_not_redirected() {
    let site = common::write_site();
    let (addr, shutdown) = common::start_gateway(common::test_config(site.path())).await;
    let client = common::no_redirect_client();

    for (path, body) in [
        ("/en/blog/", "blog-en"),
        ("/es/blog/", "blog-es"),
        ("/favicon.ico", "icon"),
        ("/images/grading", "grading-chart"),
    ] {
        let res = client
            .get(format!("http://{addr}{path}"))
            .header(ACCEPT_LANGUAGE, "es")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(res.text().await.unwrap(), body, "{path}");
    }

    let res = client
        .get(format!("http://{addr}/es/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}

#[tokio::test]
async fn test_custom_registry_from_config() {
    let site = common::write_site();
    let mut config = common::test_config(site.path());
    config.locales.supported = vec!["es".into(), "en".into()];
    config.locales.default = "es".into();
    let (addr, shutdown) = common::start_gateway(config).await;
    let client = common::no_redirect_client();

    let res = client
        .get(format!("http://{addr}/contact"))
        .header(ACCEPT_LANGUAGE, "de-DE, de;q=0.9")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[LOCATION], "/es/contact");

    shutdown.trigger();
}
