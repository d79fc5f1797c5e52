mod harness;

use harness::server::TestServer;
use serde_json::json;
use werewolf_config::Config;
use werewolf_server::AppState;

#[tokio::test]
async fn guest_auth_issues_stub_tokens() {
    let server = TestServer::start(Config::default()).await.unwrap();

    let resp = server.client().post(server.url("/auth/guest")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"ok": true, "data": {"token": "guest-token", "refresh": "guest-refresh"}})
    );
}

#[tokio::test]
async fn email_flow_round_trip() {
    // Share the stores with the server so the issued code can be observed
    let state = AppState::default();
    let server = TestServer::start_with_state(Config::default(), state.clone()).await.unwrap();

    let email = "a@b.com";

    let resp = server
        .client()
        .post(server.url("/auth/email/request"))
        .json(&json!({"email": email}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"ok": true}));

    let code = state.codes.peek(email).unwrap();

    let resp = server
        .client()
        .post(server.url("/auth/email/verify"))
        .json(&json!({"email": email, "code": code}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"ok": true, "data": {"token": "email-token", "refresh": "email-refresh"}})
    );
}

#[tokio::test]
async fn email_verify_rejects_a_wrong_code() {
    let state = AppState::default();
    let server = TestServer::start_with_state(Config::default(), state.clone()).await.unwrap();

    server
        .client()
        .post(server.url("/auth/email/request"))
        .json(&json!({"email": "a@b.com"}))
        .send()
        .await
        .unwrap();

    let issued = state.codes.peek("a@b.com").unwrap();
    let wrong = if issued == "000000" { "111111" } else { "000000" };

    let resp = server
        .client()
        .post(server.url("/auth/email/verify"))
        .json(&json!({"email": "a@b.com", "code": wrong}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], json!("AUTH_INVALID_CODE"));
}

#[tokio::test]
async fn email_request_rejects_addresses_without_at() {
    let server = TestServer::start(Config::default()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/auth/email/request"))
        .json(&json!({"email": "not-an-address"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn email_verify_requires_both_fields() {
    let server = TestServer::start(Config::default()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/auth/email/verify"))
        .json(&json!({"email": "a@b.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    assert_eq!(body["error"]["message"], json!("email and code required"));
}
