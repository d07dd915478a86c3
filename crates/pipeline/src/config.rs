//! Hook configuration and the read-only provider interface
//!
//! Applications build an [`AuthSettings`] block once at setup time and hand
//! it to [`AppConfig`]; hooks read it through the narrow [`AuthConfigSource`]
//! interface carried by the hook context. Effective settings resolve field by
//! field: explicit settings given to a hook factory take precedence over the
//! application's settings, and unset fields fall back to defaults.

use jsonwebtoken::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// Query field the user identifier is written under when none is configured.
pub const DEFAULT_QUERY_FIELD: &str = "userId";

/// User attribute read as the identifier when none is configured.
pub const DEFAULT_ID_FIELD: &str = "_id";

/// Token verification settings as configured by the application.
///
/// `expires_in` mirrors the shape of the application-owned token
/// configuration; it is a signing-side knob and is not consulted during
/// verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    pub secret: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub algorithm: Option<Algorithm>,
    pub expires_in: Option<u64>,
}

/// Fully-resolved verification settings — the secret is guaranteed present.
#[derive(Debug, Clone)]
pub struct ResolvedTokenSettings {
    pub secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub algorithm: Option<Algorithm>,
}

impl TokenSettings {
    /// Settings carrying only a secret, the common explicit-override case.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Self::default()
        }
    }

    /// Resolve effective verification settings, treating `self` as the
    /// highest-precedence tier over the application's token settings.
    pub fn resolve(&self, app: Option<&AuthSettings>) -> Result<ResolvedTokenSettings, HookError> {
        let base = app.and_then(|settings| settings.token.as_ref());

        let pick = |ours: &Option<String>, theirs: fn(&TokenSettings) -> Option<String>| {
            ours.clone().or_else(|| base.and_then(theirs))
        };

        let secret = pick(&self.secret, |b| b.secret.clone()).ok_or_else(|| {
            HookError::Configuration(
                "no token secret configured: provide one to the verify-token hook \
                 or set it in the application's auth settings"
                    .to_string(),
            )
        })?;

        Ok(ResolvedTokenSettings {
            secret,
            issuer: pick(&self.issuer, |b| b.issuer.clone()),
            audience: pick(&self.audience, |b| b.audience.clone()),
            algorithm: self.algorithm.or_else(|| base.and_then(|b| b.algorithm)),
        })
    }
}

/// Current-user query scoping settings as configured by the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuerySettings {
    /// User attribute to read the identifier from.
    pub id_field: Option<String>,
    /// Query field to write the identifier under.
    #[serde(rename = "as")]
    pub as_field: Option<String>,
}

/// Fully-resolved query scoping settings with defaults filled in.
#[derive(Debug, Clone)]
pub struct ResolvedUserQuerySettings {
    pub id_field: String,
    pub as_field: String,
}

impl UserQuerySettings {
    pub fn new(id_field: impl Into<String>, as_field: impl Into<String>) -> Self {
        Self {
            id_field: Some(id_field.into()),
            as_field: Some(as_field.into()),
        }
    }

    /// Resolve effective settings, treating `self` as the highest-precedence
    /// tier over the application's user-query settings. Never fails: every
    /// field has a default.
    pub fn resolve(&self, app: Option<&AuthSettings>) -> ResolvedUserQuerySettings {
        let base = app.and_then(|settings| settings.user_query.as_ref());

        ResolvedUserQuerySettings {
            id_field: self
                .id_field
                .clone()
                .or_else(|| base.and_then(|b| b.id_field.clone()))
                .unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
            as_field: self
                .as_field
                .clone()
                .or_else(|| base.and_then(|b| b.as_field.clone()))
                .unwrap_or_else(|| DEFAULT_QUERY_FIELD.to_string()),
        }
    }
}

/// The application's auth configuration block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    pub token: Option<TokenSettings>,
    pub user_query: Option<UserQuerySettings>,
}

/// Read-only access to the application's auth configuration.
///
/// Hooks see the owning application only through this interface; they never
/// mutate configuration.
pub trait AuthConfigSource: Send + Sync {
    /// The `auth` configuration block, if the application defined one.
    fn auth(&self) -> Option<&AuthSettings>;
}

/// Owned application configuration handle.
///
/// The host constructs one at application-setup time and shares it with
/// every request's hook context.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    auth: Option<AuthSettings>,
}

impl AppConfig {
    /// Configuration with no auth block defined.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth(auth: AuthSettings) -> Self {
        Self { auth: Some(auth) }
    }
}

impl AuthConfigSource for AppConfig {
    fn auth(&self) -> Option<&AuthSettings> {
        self.auth.as_ref()
    }
}
