//! Read-only view over the session's user identity.
//!
//! What the host platform knows about the current user depends on its
//! authentication state: keys are present or absent per session, values may
//! be absent for anonymous users. The view never caches; every read goes
//! back to the live session context. Without an active session context all
//! reads degrade to empty results instead of failing.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::login_redirect_url;
use crate::config::Secrets;
use crate::context::SessionContext;
use crate::error::{ApiError, ApiResult};
use crate::message::ForwardMessage;

/// Read-only accessor over per-session user identity fields.
#[derive(Clone, Default)]
pub struct UserInfo {
    ctx: Option<Arc<SessionContext>>,
    secrets: Option<Arc<Secrets>>,
}

impl UserInfo {
    /// Create the accessor from an optional session context and an optional
    /// secrets handle. Both are absent when the host has not set them up.
    pub fn new(ctx: Option<Arc<SessionContext>>, secrets: Option<Arc<Secrets>>) -> Self {
        Self { ctx, secrets }
    }

    fn snapshot(&self) -> HashMap<String, Option<String>> {
        match &self.ctx {
            Some(ctx) => ctx.user_info(),
            None => HashMap::new(),
        }
    }

    /// Value for an identity key, `None` when the key is absent or no
    /// session context exists.
    pub fn get(&self, key: &str) -> Option<String> {
        self.snapshot().get(key).cloned().flatten()
    }

    /// The user's email, if the host platform provided one.
    pub fn email(&self) -> Option<String> {
        self.get("email")
    }

    /// All present identity keys.
    pub fn keys(&self) -> Vec<String> {
        self.snapshot().into_keys().collect()
    }

    /// Count of present identity keys.
    pub fn len(&self) -> usize {
        match &self.ctx {
            Some(ctx) => ctx.user_info().len(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plain copy of the current identity data.
    pub fn to_map(&self) -> HashMap<String, Option<String>> {
        self.snapshot()
    }

    /// The view is immutable: any write attempt fails.
    pub fn set(&self, _key: &str, _value: Option<String>) -> ApiResult<()> {
        Err(ApiError::usage("user info cannot be modified"))
    }

    /// Trigger the login flow by enqueuing an auth redirect for the
    /// front-end.
    ///
    /// Silently does nothing without an active session context. When no
    /// `[auth]` secrets are configured the redirect URL would be empty, so
    /// nothing is enqueued and a warning is logged instead.
    pub fn login(&self, send_redirect_to_host: bool) -> ApiResult<()> {
        let ctx = match &self.ctx {
            Some(ctx) => ctx,
            None => {
                tracing::debug!("login() called without a session context, ignoring");
                return Ok(());
            }
        };

        let url = login_redirect_url(self.secrets.as_deref());
        if url.is_empty() {
            tracing::warn!(
                "login() called without [auth] secrets, skipping redirect: session={}",
                &ctx.session_id()[..8]
            );
            return Ok(());
        }

        tracing::debug!(
            "Enqueuing login redirect: session={}, send_redirect_to_host={}",
            &ctx.session_id()[..8],
            send_redirect_to_host
        );
        ctx.enqueue(ForwardMessage::auth_redirect(url, "login", send_redirect_to_host))
    }
}
