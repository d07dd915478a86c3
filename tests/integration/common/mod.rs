//! Shared fixtures for integration tests
//!
//! Provides the application configuration a host would build at setup time,
//! token signing matching that configuration, and a minimal user entity.

use std::sync::Once;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use preflight_pipeline::{AppConfig, AuthSettings, TokenSettings, UserQuerySettings};
use serde_json::{json, Value};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";
pub const TEST_ISSUER: &str = "preflight";

static INIT: Once = Once::new();

/// Initialize a test tracing subscriber once per process.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("preflight=debug")),
            )
            .with_test_writer()
            .init();
    });
}

/// Application fixture holding auth settings the way a host configures them.
pub struct TestApp {
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        init_tracing();

        Self {
            config: AppConfig::with_auth(AuthSettings {
                token: Some(TokenSettings {
                    secret: Some(TEST_SECRET.to_string()),
                    issuer: Some(TEST_ISSUER.to_string()),
                    ..TokenSettings::default()
                }),
                user_query: Some(UserQuerySettings::new("id", "userId")),
            }),
        }
    }
}

/// Sign a token for the given user, shaped like the host issuer's output.
pub fn sign_token(user_id: Uuid) -> String {
    let claims = json!({
        "sub": user_id,
        "iss": TEST_ISSUER,
        "exp": chrono::Utc::now().timestamp() + 3600,
    });

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_ref()),
    )
    .expect("Failed to encode JWT")
}

/// Minimal user entity as the host would attach it after authentication.
pub fn test_user(user_id: Uuid) -> Value {
    json!({
        "id": user_id,
        "email": "test@example.com",
    })
}
