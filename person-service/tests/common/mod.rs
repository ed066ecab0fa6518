use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use person_service::domain::person::service::PersonService;
use person_service::inbound::http::policy::AccessPolicy;
use person_service::inbound::http::router::create_router;
use person_service::outbound::repositories::MemoryPersonRepository;
use serde_json::json;

pub const TEST_JWT_SECRET: &[u8] = b"test_secret_key_at_least_32_bytes_long!";
pub const TEST_EXPIRATION_DAYS: i64 = 10;

/// Test application running the real router over the in-memory store on a
/// random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(MemoryPersonRepository::new());
        let person_service = Arc::new(PersonService::new(repository));
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET, TEST_EXPIRATION_DAYS));
        let policy = Arc::new(AccessPolicy::standard());

        let application = create_router(person_service, authenticator, policy);
        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a login through the public sign-up endpoint.
    pub async fn sign_up(&self, login: &str, password: &str) -> reqwest::Response {
        self.post("/users/sign-up")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute sign-up request")
    }

    /// Sign in and return the issued bearer token.
    pub async fn token_for(&self, login: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute sign-in request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }
}
