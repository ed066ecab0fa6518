mod common;

use auth::Claims;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_sign_up_then_sign_in_round_trip() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("alice", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["login"], "alice");
    assert!(body["id"].is_number());
    // No credential material in the response
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let token = app.token_for("alice", "pass_word!").await;

    // The token verifies back to the login it was issued for
    let claims = app.jwt_handler.verify(&token).expect("Token should verify");
    assert_eq!(claims.sub, "alice");

    // And grants access to protected routes
    let response = app
        .get("/person/")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_sign_up_weak_password_leaves_store_unchanged() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("shorty", "12345").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("at least 6 characters"));

    // The login was never stored
    app.sign_up("observer", "pass_word!").await;
    let token = app.token_for("observer", "pass_word!").await;
    let response = app
        .get("/users/all")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    let all: serde_json::Value = response.json().await.expect("Failed to parse response");
    let logins: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["login"].as_str().unwrap())
        .collect();
    assert_eq!(logins, vec!["observer"]);
}

#[tokio::test]
async fn test_sign_up_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/users/sign-up")
        .json(&json!({ "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("login"));

    let response = app
        .post("/users/sign-up")
        .json(&json!({ "login": "alice" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn test_duplicate_sign_up_rejected() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("alice", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.sign_up("alice", "other_password").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The original credentials still work
    app.token_for("alice", "pass_word!").await;
}

#[tokio::test]
async fn test_sign_in_with_unknown_login_or_wrong_password() {
    let app = TestApp::spawn().await;

    app.sign_up("alice", "pass_word!").await;

    // Same generic response for both failure modes
    for body in [
        json!({ "login": "nobody", "password": "pass_word!" }),
        json!({ "login": "alice", "password": "wrong_password" }),
    ] {
        let response = app
            .post("/login")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn test_protected_routes_reject_missing_and_garbage_tokens() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/person/")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/person/")
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/users/all")
        .header("Authorization", "Basic abc123")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected_despite_valid_signature() {
    let app = TestApp::spawn().await;

    app.sign_up("alice", "pass_word!").await;

    // Signed with the real secret, but expired beyond validation leeway
    let now = Utc::now().timestamp();
    let expired = app
        .jwt_handler
        .encode(&Claims {
            sub: "alice".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        })
        .expect("Failed to encode token");

    let response = app
        .get("/person/")
        .bearer_auth(&expired)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_person_unknown_id_names_it() {
    let app = TestApp::spawn().await;

    for login in ["alice", "bob", "carol"] {
        app.sign_up(login, "pass_word!").await;
    }
    let token = app.token_for("alice", "pass_word!").await;

    let response = app
        .get("/person/4")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("4"));
}

#[tokio::test]
async fn test_list_persons_in_insertion_order() {
    let app = TestApp::spawn().await;

    for login in ["carol", "alice", "bob"] {
        app.sign_up(login, "pass_word!").await;
    }
    let token = app.token_for("carol", "pass_word!").await;

    let response = app
        .get("/person/")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let logins: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["login"].as_str().unwrap())
        .collect();
    assert_eq!(logins, vec!["carol", "alice", "bob"]);
}

#[tokio::test]
async fn test_create_person_validation_error_list() {
    let app = TestApp::spawn().await;

    app.sign_up("admin", "pass_word!").await;
    let token = app.token_for("admin", "pass_word!").await;

    // Empty body: both fields reported, login first
    let response = app
        .post("/person/")
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body.as_array().expect("Expected a list of field errors");
    assert_eq!(errors.len(), 2);
    assert!(errors[0]["login"]
        .as_str()
        .unwrap()
        .contains("Actual value: null"));
    assert!(errors[1]["password"].is_string());

    // Short password: rejected value never echoed
    let response = app
        .post("/person/")
        .bearer_auth(&token)
        .json(&json!({ "login": "dave", "password": "123" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let rendered = body[0]["password"].as_str().unwrap();
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("123"));
}

#[tokio::test]
async fn test_create_person_success() {
    let app = TestApp::spawn().await;

    app.sign_up("admin", "pass_word!").await;
    let token = app.token_for("admin", "pass_word!").await;

    let response = app
        .post("/person/")
        .bearer_auth(&token)
        .json(&json!({ "login": "dave", "password": "secret123" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["login"], "dave");

    // The created person can sign in
    app.token_for("dave", "secret123").await;
}

#[tokio::test]
async fn test_put_replaces_and_rehashes() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("alice", "pass_word!").await;
    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().unwrap();

    let token = app.token_for("alice", "pass_word!").await;

    let response = app
        .put("/person/")
        .bearer_auth(&token)
        .json(&json!({ "id": id, "login": "alice", "password": "new_password" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer valid, new one is
    let response = app
        .post("/login")
        .json(&json!({ "login": "alice", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.token_for("alice", "new_password").await;
}

#[tokio::test]
async fn test_put_requires_id() {
    let app = TestApp::spawn().await;

    app.sign_up("alice", "pass_word!").await;
    let token = app.token_for("alice", "pass_word!").await;

    let response = app
        .put("/person/")
        .bearer_auth(&token)
        .json(&json!({ "login": "alice", "password": "new_password" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body[0]["id"].as_str().unwrap().contains("Id must be non null"));
}

#[tokio::test]
async fn test_patch_password_only_keeps_login() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("alice", "pass_word!").await;
    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().unwrap();

    let token = app.token_for("alice", "pass_word!").await;

    let response = app
        .patch(&format!("/person/{}", id))
        .bearer_auth(&token)
        .json(&json!({ "password": "rotated_secret" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["login"], "alice");

    // Re-hashed: the new password authenticates
    app.token_for("alice", "rotated_secret").await;
}

#[tokio::test]
async fn test_delete_person() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("alice", "pass_word!").await;
    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().unwrap();

    app.sign_up("admin", "pass_word!").await;
    let token = app.token_for("admin", "pass_word!").await;

    let response = app
        .delete(&format!("/person/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get(&format!("/person/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Idempotent
    let response = app
        .delete(&format!("/person/{}", id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_error_endpoint_is_public() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/error")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post("/error")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_sign_ups_with_distinct_logins() {
    let app = TestApp::spawn().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = app.api_client.clone();
        let address = app.address.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(format!("{}/users/sign-up", address))
                .json(&json!({ "login": format!("user{}", i), "password": "pass_word!" }))
                .send()
                .await
                .expect("Failed to execute request")
                .status()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let token = app.token_for("user0", "pass_word!").await;
    let response = app
        .get("/users/all")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 8);
}
