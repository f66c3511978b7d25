mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use common::{FakeRegistrationLookup, FakeThreatLookup, ThreatBehaviour};
use serde_json::{Value, json};
use url_safety_check::api::handlers::check_url_handler;
use url_safety_check::state::AppState;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/check-url", post(check_url_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_check_url_safe() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(
        threats.clone(),
        registrations.clone(),
    ));

    let response = server
        .post("/check-url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "safe": true,
        "domain": "example.com",
        "message": "URL is safe",
        "whois": { "registrar": "Example Registrar" }
    }));
    assert_eq!(threats.calls(), 1);
    assert_eq!(registrations.domains(), vec!["example.com".to_string()]);
}

#[tokio::test]
async fn test_check_url_unsafe() {
    let matches = vec![json!({ "threatType": "MALWARE" })];
    let threats = FakeThreatLookup::new(ThreatBehaviour::Matches(matches));
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(threats, registrations));

    let response = server
        .post("/check-url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["safe"], false);
    assert_eq!(json["domain"], "example.com");
    assert_eq!(json["threats"], json!([{ "threatType": "MALWARE" }]));
    assert_eq!(json["whois"], json!({ "registrar": "Example Registrar" }));
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_check_url_whois_uses_bare_hostname() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(threats, registrations.clone()));

    let response = server
        .post("/check-url")
        .json(&json!({ "url": "https://User:pw@Sub.Example.COM:8443/a/b?c=d" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["domain"], "sub.example.com");
    assert_eq!(registrations.domains(), vec!["sub.example.com".to_string()]);
}

#[tokio::test]
async fn test_check_url_whois_failure_still_succeeds() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::failing();
    let server = test_server(common::create_test_state(threats, registrations));

    let response = server
        .post("/check-url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["safe"], true);
    assert_eq!(json["whois"], json!({ "error": "WHOIS lookup failed" }));
}

#[tokio::test]
async fn test_check_url_whois_failure_keeps_unsafe_verdict() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Matches(vec![
        json!({ "threatType": "SOCIAL_ENGINEERING" }),
    ]));
    let registrations = FakeRegistrationLookup::failing();
    let server = test_server(common::create_test_state(threats, registrations));

    let response = server
        .post("/check-url")
        .json(&json!({ "url": "http://phish.example" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["safe"], false);
    assert_eq!(json["whois"], json!({ "error": "WHOIS lookup failed" }));
}

#[tokio::test]
async fn test_check_url_threat_failure() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Fail);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(
        threats.clone(),
        registrations.clone(),
    ));

    let response = server
        .post("/check-url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to check URL" }));
    assert_eq!(threats.calls(), 1);
    assert_eq!(registrations.calls(), 0);
}

#[tokio::test]
async fn test_check_url_missing_url() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(
        threats.clone(),
        registrations.clone(),
    ));

    for body in [json!({}), json!({ "url": "" }), json!({ "url": null })] {
        let response = server.post("/check-url").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "URL is required" }));
    }

    assert_eq!(threats.calls(), 0);
    assert_eq!(registrations.calls(), 0);
}

#[tokio::test]
async fn test_check_url_falsy_url_is_missing() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(
        threats.clone(),
        registrations.clone(),
    ));

    for body in [
        json!({ "url": false }),
        json!({ "url": 0 }),
        json!({ "url": 0.0 }),
    ] {
        let response = server.post("/check-url").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "URL is required" }));
    }

    assert_eq!(threats.calls(), 0);
    assert_eq!(registrations.calls(), 0);
}

#[tokio::test]
async fn test_check_url_without_body() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(threats, registrations));

    let response = server.post("/check-url").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "URL is required" }));
}

#[tokio::test]
async fn test_check_url_invalid_url() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Clean);
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(
        threats.clone(),
        registrations.clone(),
    ));

    for body in [
        json!({ "url": "not a url" }),
        json!({ "url": "example.com/path" }),
        json!({ "url": "mailto:someone@example.com" }),
        json!({ "url": 42 }),
        json!({ "url": 1 }),
        json!({ "url": true }),
        json!({ "url": { "href": "http://example.com" } }),
    ] {
        let response = server.post("/check-url").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "error": "Invalid URL" }));
    }

    assert_eq!(threats.calls(), 0);
    assert_eq!(registrations.calls(), 0);
}

#[tokio::test]
async fn test_check_url_is_idempotent() {
    let threats = FakeThreatLookup::new(ThreatBehaviour::Matches(vec![
        json!({ "threatType": "MALWARE" }),
    ]));
    let registrations = FakeRegistrationLookup::new(common::registrar_record());
    let server = test_server(common::create_test_state(threats, registrations));

    let first = server
        .post("/check-url")
        .json(&json!({ "url": "http://example.com" }))
        .await;
    let second = server
        .post("/check-url")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.json::<Value>(), second.json::<Value>());
}
