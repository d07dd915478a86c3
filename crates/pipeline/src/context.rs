//! Per-request hook context

use serde_json::{Map, Value};

use crate::config::{AuthConfigSource, AuthSettings};

/// Pipeline phase a hook runs in, relative to the request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    Before,
    After,
}

/// Request parameters threaded through the hook pipeline.
///
/// Hooks read and selectively mutate fields in place; they never replace the
/// record wholesale.
#[derive(Debug, Clone, Default)]
pub struct HookParams {
    /// Transport channel the request arrived on (e.g. `"rest"`). Absent for
    /// internal service calls, which carry no token.
    pub provider: Option<String>,
    /// Raw bearer token extracted by the host transport.
    pub token: Option<String>,
    /// Authenticated user entity; its shape is owned by the application.
    pub user: Option<Value>,
    /// Decoded claims of a verified token.
    pub payload: Option<Value>,
    /// Query filter handed to the downstream service call.
    pub query: Option<Map<String, Value>>,
}

/// Mutable per-request context handed to each hook.
///
/// The host creates one per request, each hook mutates it in place, and it is
/// discarded once the pipeline completes. The application reference is
/// read-only and serves configuration lookup only.
pub struct HookContext<'a> {
    pub phase: HookPhase,
    pub params: HookParams,
    app: &'a dyn AuthConfigSource,
}

impl<'a> HookContext<'a> {
    pub fn new(phase: HookPhase, app: &'a dyn AuthConfigSource) -> Self {
        Self {
            phase,
            params: HookParams::default(),
            app,
        }
    }

    /// Context for the phase ahead of the request handler.
    pub fn before(app: &'a dyn AuthConfigSource) -> Self {
        Self::new(HookPhase::Before, app)
    }

    /// Context for the phase behind the request handler.
    pub fn after(app: &'a dyn AuthConfigSource) -> Self {
        Self::new(HookPhase::After, app)
    }

    /// The application's auth configuration block, if any.
    pub fn auth_settings(&self) -> Option<&AuthSettings> {
        self.app.auth()
    }
}
