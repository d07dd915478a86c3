//! Authentication hooks for the preflight request pipeline
//!
//! Two independent before-hooks composed by the host pipeline:
//! - [`VerifyToken`] verifies a bearer token against the configured secret
//!   and attaches the decoded claims to the request parameters.
//! - [`QueryWithCurrentUser`] scopes the request's query filter to the
//!   authenticated user's identifier.

mod jwt;
mod query_with_current_user;
mod verify_token;

pub use query_with_current_user::QueryWithCurrentUser;
pub use verify_token::VerifyToken;
