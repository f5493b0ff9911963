mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();
    common::shorten(&server, "https://www.google.com/").await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 1 short URLs"
    );
}

#[tokio::test]
async fn test_hello() {
    let server = common::create_test_server();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Hello from the URL Shortener API."
    );
}

#[tokio::test]
async fn test_index_lists_visible_urls() {
    let server = common::create_test_server();
    common::shorten(&server, "https://www.google.com/").await;
    let gentoo = common::shorten(&server, "ftp://ftp.gentoo.org/").await;
    server
        .delete(&format!("/api/shorturl/{gentoo}"))
        .await
        .assert_status_ok();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("www.google.com"));
    assert!(!html.contains("ftp.gentoo.org"));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let server = common::create_test_server();

    let response = server.get("/no/such-page").await;

    response.assert_status_not_found();
    assert!(response.text().contains("such-page"));
}

#[tokio::test]
async fn test_security_headers() {
    let server = common::create_test_server();

    let response = server.get("/api/hello").await;

    assert_eq!(
        response.header("content-security-policy"),
        "default-src 'self'; script-src 'self'; style-src 'self'"
    );
    assert_eq!(response.header("referrer-policy"), "same-origin");
    assert_eq!(response.header("x-frame-options"), "SAMEORIGIN");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
}

#[tokio::test]
async fn test_static_assets_served() {
    let server = common::create_test_server();

    let response = server.get("/public/app.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("/api/shorturl/new"));
}
