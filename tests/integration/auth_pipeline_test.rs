//! End-to-end tests for the authentication hook pipeline
//!
//! Drives both hooks through a `HookChain` against real signed tokens and a
//! host-style application configuration.

mod common;

use axum::{body, http::StatusCode, response::IntoResponse};
use preflight_hooks::{QueryWithCurrentUser, VerifyToken};
use preflight_pipeline::{HookChain, HookContext, HookError};
use uuid::Uuid;

use common::{sign_token, test_user, TestApp};

fn before_hooks() -> HookChain {
    HookChain::new()
        .with(VerifyToken::new())
        .with(QueryWithCurrentUser::new())
}

#[tokio::test]
async fn test_verified_request_is_scoped_to_current_user() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();

    let mut ctx = HookContext::before(&app.config);
    ctx.params.provider = Some("rest".to_string());
    ctx.params.token = Some(sign_token(user_id));
    ctx.params.user = Some(test_user(user_id));

    before_hooks().run(&mut ctx).await.unwrap();

    let payload = ctx.params.payload.expect("payload should be attached");
    assert_eq!(payload["sub"], user_id.to_string());
    assert_eq!(payload["iss"], common::TEST_ISSUER);

    let query = ctx.params.query.expect("query should be created");
    assert_eq!(query["userId"], user_id.to_string());
}

#[tokio::test]
async fn test_invalid_token_short_circuits_the_chain() {
    let app = TestApp::new();

    let mut ctx = HookContext::before(&app.config);
    ctx.params.provider = Some("rest".to_string());
    ctx.params.token = Some("not-a-token".to_string());
    ctx.params.user = Some(test_user(Uuid::new_v4()));

    let err = before_hooks().run(&mut ctx).await.unwrap_err();
    assert!(matches!(err, HookError::NotAuthenticated(_)));

    // The query hook behind the failed verifier never ran.
    assert!(ctx.params.payload.is_none());
    assert!(ctx.params.query.is_none());
}

#[tokio::test]
async fn test_internal_calls_skip_token_verification() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();

    // No provider: the request came from inside the application.
    let mut ctx = HookContext::before(&app.config);
    ctx.params.user = Some(test_user(user_id));

    before_hooks().run(&mut ctx).await.unwrap();

    assert!(ctx.params.payload.is_none());
    assert_eq!(ctx.params.query.unwrap()["userId"], user_id.to_string());
}

#[tokio::test]
async fn test_not_authenticated_maps_to_401_response() {
    let app = TestApp::new();

    let mut ctx = HookContext::before(&app.config);
    ctx.params.provider = Some("rest".to_string());

    let err = before_hooks().run(&mut ctx).await.unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "NOT_AUTHENTICATED");
    assert!(body["error"]["message"].is_string());
}
