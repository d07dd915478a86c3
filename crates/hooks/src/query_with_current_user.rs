//! Current-user query scoping hook

use async_trait::async_trait;
use serde_json::{Map, Value};

use preflight_pipeline::{Hook, HookContext, HookError, HookPhase, UserQuerySettings};

/// Before-hook that scopes `params.query` to the authenticated user by
/// writing the user's identifier under a configurable field name.
///
/// Fully synchronous; [`Hook::call`] delegates to [`apply`](Self::apply).
/// An upstream hook (or the host) must have populated `params.user`.
#[derive(Debug, Default)]
pub struct QueryWithCurrentUser {
    settings: UserQuerySettings,
}

impl QueryWithCurrentUser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injector with explicit settings overriding application configuration.
    pub fn with_settings(settings: UserQuerySettings) -> Self {
        Self { settings }
    }

    /// Synchronous hook body.
    pub fn apply(&self, ctx: &mut HookContext<'_>) -> Result<(), HookError> {
        if ctx.phase != HookPhase::Before {
            return Err(HookError::Usage(
                "the query-with-current-user hook should only be used as a before hook"
                    .to_string(),
            ));
        }

        let Some(user) = ctx.params.user.as_ref() else {
            return Err(HookError::Configuration(
                "there is no current user to associate with the query".to_string(),
            ));
        };

        let resolved = self.settings.resolve(ctx.auth_settings());

        let id = match user.get(resolved.id_field.as_str()) {
            Some(value) if !is_empty_id(value) => value.clone(),
            _ => {
                return Err(HookError::Configuration(format!(
                    "current user is missing the '{}' field",
                    resolved.id_field
                )))
            }
        };

        let query = ctx.params.query.get_or_insert_with(Map::new);
        query.insert(resolved.as_field, id);

        Ok(())
    }
}

/// JSON null and empty strings do not identify a user.
fn is_empty_id(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[async_trait]
impl Hook for QueryWithCurrentUser {
    async fn call(&self, ctx: &mut HookContext<'_>) -> Result<(), HookError> {
        self.apply(ctx)
    }
}
