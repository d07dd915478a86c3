//! Bearer token verification hook

use async_trait::async_trait;

use preflight_pipeline::{Hook, HookContext, HookError, HookPhase, TokenSettings};

use crate::jwt::verify_token;

/// Before-hook that verifies `params.token` and attaches the decoded claims
/// to `params.payload`.
///
/// Requests without a `provider` arrived through an internal call and pass
/// through untouched. External requests must carry a token; a missing token
/// or any verification failure is rejected as not authenticated.
///
/// Settings given at construction take precedence over the application's
/// token settings, which take precedence over library defaults.
#[derive(Debug, Default)]
pub struct VerifyToken {
    settings: TokenSettings,
}

impl VerifyToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifier with explicit settings overriding application configuration.
    pub fn with_settings(settings: TokenSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Hook for VerifyToken {
    async fn call(&self, ctx: &mut HookContext<'_>) -> Result<(), HookError> {
        if ctx.phase != HookPhase::Before {
            return Err(HookError::Usage(
                "the verify-token hook should only be used as a before hook".to_string(),
            ));
        }

        // Internal calls carry no provider and need no token auth.
        if ctx.params.provider.is_none() {
            return Ok(());
        }

        let Some(token) = ctx.params.token.as_deref() else {
            return Err(HookError::NotAuthenticated(
                "no token provided".to_string(),
            ));
        };

        let resolved = self.settings.resolve(ctx.auth_settings())?;
        let payload = verify_token(token, &resolved)?;
        ctx.params.payload = Some(payload);

        Ok(())
    }
}
