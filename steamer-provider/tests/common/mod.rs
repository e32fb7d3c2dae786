//! Shared helpers for the integration tests

#![allow(dead_code)]

use mockito::ServerGuard;
use serde_json::{Value, json};
use steamer_provider::{Credentials, PorkbunClient};

pub const API_KEY: &str = "pk1_test_key";
pub const SECRET_KEY: &str = "sk1_test_secret";

/// Start a local mock server.
pub async fn mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Client pointed at the mock server.
pub fn client_for(server: &ServerGuard) -> PorkbunClient {
    let credentials = Credentials::new(API_KEY, SECRET_KEY).expect("test credentials are valid");
    PorkbunClient::with_base_url(credentials, server.url()).expect("HTTP client builds")
}

/// Expected request body: credentials plus `extra`.
pub fn authenticated(extra: Value) -> Value {
    let mut body = json!({
        "apikey": API_KEY,
        "secretapikey": SECRET_KEY,
    });
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), extra) {
        target.extend(fields);
    }
    body
}

/// A `SUCCESS` envelope.
pub fn success(extra: Value) -> String {
    let mut body = json!({"status": "SUCCESS"});
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), extra) {
        target.extend(fields);
    }
    body.to_string()
}

/// An `ERROR` envelope.
pub fn failure(message: &str) -> String {
    json!({"status": "ERROR", "message": message}).to_string()
}
