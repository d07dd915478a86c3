//! Host-pipeline contract for preflight hooks
//!
//! This crate provides the pieces shared between the hooks and their host:
//! - Per-request [`HookContext`] with mutable [`HookParams`]
//! - The [`Hook`] trait and the [`HookChain`] runner
//! - Auth configuration with explicit-over-application-over-default
//!   resolution, read through the [`AuthConfigSource`] interface
//! - The [`HookError`] taxonomy and its HTTP status mapping

pub mod config;
pub mod context;
pub mod error;
pub mod hook;

pub use config::{
    AppConfig, AuthConfigSource, AuthSettings, ResolvedTokenSettings, ResolvedUserQuerySettings,
    TokenSettings, UserQuerySettings,
};
pub use context::{HookContext, HookParams, HookPhase};
pub use error::{HookError, Result};
pub use hook::{Hook, HookChain};
