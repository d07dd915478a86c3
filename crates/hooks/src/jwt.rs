//! JWT verification helper
//!
//! Thin wrapper over `jsonwebtoken::decode` configured from resolved token
//! settings. The library error is logged and collapsed into
//! [`HookError::NotAuthenticated`]; callers never see it raw.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;

use preflight_pipeline::{HookError, ResolvedTokenSettings};

/// Verify signature and claims, returning the decoded claims object.
pub(crate) fn verify_token(
    token: &str,
    settings: &ResolvedTokenSettings,
) -> Result<Value, HookError> {
    let mut validation = Validation::new(settings.algorithm.unwrap_or(Algorithm::HS256));

    // Expiry is enforced when the token carries an `exp` claim, but tokens
    // without one are accepted.
    validation.required_spec_claims.clear();

    if let Some(aud) = &settings.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &settings.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(settings.secret.as_ref());

    let token_data = decode::<Value>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "token verification failed");
        HookError::NotAuthenticated("token verification failed".to_string())
    })?;

    Ok(token_data.claims)
}
