//! Slate Runtime
//!
//! Per-session runtime fragment of the Slate app framework.
//!
//! This crate provides:
//! - Session execution context with a forward-message channel to the front-end
//! - Session-scoped widget state store
//! - Read-only user identity accessor with login redirect
//! - Secrets loading (TOML/JSON/YAML) with an explicit, injected handle
//! - Forward-message protocol types

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod message;
pub mod session_state;
pub mod user_info;

pub use config::Secrets;
pub use context::{ForwardSender, SessionContext};
pub use error::{ApiError, ApiResult};
pub use message::ForwardMessage;
pub use session_state::SessionState;
pub use user_info::UserInfo;
