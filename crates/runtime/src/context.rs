//! Session execution context.
//!
//! One `SessionContext` exists per user session and owns everything a script
//! run needs: the user identity map populated by the host platform, the
//! forward-message channel to the front-end, the session state store and the
//! current form/cached scopes. Execution is single-threaded by contract
//! (one script run per session at a time).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::message::ForwardMessage;
use crate::session_state::SessionState;

/// Sender half of the forward-message channel to the front-end.
pub type ForwardSender = mpsc::UnboundedSender<ForwardMessage>;

/// Per-session execution state.
pub struct SessionContext {
    session_id: String,
    created_at: DateTime<Utc>,
    user_info: RwLock<HashMap<String, Option<String>>>,
    sender: ForwardSender,
    state: SessionState,
    active_form_id: RwLock<Option<String>>,
    in_cached_scope: AtomicBool,
}

impl SessionContext {
    /// Create a new session context around a forward-message sender.
    pub fn new(sender: ForwardSender) -> Arc<Self> {
        let session_id = Uuid::new_v4().to_string();
        tracing::debug!("Session context created: session={}", &session_id[..8]);
        Arc::new(Self {
            session_id,
            created_at: Utc::now(),
            user_info: RwLock::new(HashMap::new()),
            sender,
            state: SessionState::new(),
            active_form_id: RwLock::new(None),
            in_cached_scope: AtomicBool::new(false),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Enqueue one forward message for the front-end.
    pub fn enqueue(&self, message: ForwardMessage) -> ApiResult<()> {
        self.sender.send(message).map_err(|_| {
            tracing::warn!(
                "Forward channel closed, dropping message: session={}",
                &self.session_id[..8]
            );
            ApiError::Session("forward channel closed".to_string())
        })
    }

    /// Snapshot of the user identity map as populated by the host platform.
    pub fn user_info(&self) -> HashMap<String, Option<String>> {
        self.user_info
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace the user identity map. Called by the host on (re)authentication.
    pub fn set_user_info(&self, info: HashMap<String, Option<String>>) {
        let mut guard = self.user_info.write().unwrap_or_else(|e| e.into_inner());
        *guard = info;
    }

    /// Session-scoped widget state store.
    pub fn session_state(&self) -> &SessionState {
        &self.state
    }

    /// Form id of the innermost open form, if any.
    pub fn current_form_id(&self) -> Option<String> {
        self.active_form_id
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Mark a form as open. Returns the previously open form id, which the
    /// caller must restore via `exit_form` when the form scope ends.
    pub fn enter_form(&self, form_id: impl Into<String>) -> Option<String> {
        let mut guard = self.active_form_id.write().unwrap_or_else(|e| e.into_inner());
        guard.replace(form_id.into())
    }

    /// Restore the form scope captured by the matching `enter_form`.
    pub fn exit_form(&self, previous: Option<String>) {
        let mut guard = self.active_form_id.write().unwrap_or_else(|e| e.into_inner());
        *guard = previous;
    }

    /// True while executing inside a cached computation.
    pub fn in_cached_scope(&self) -> bool {
        self.in_cached_scope.load(Ordering::Relaxed)
    }

    /// Enter a cached computation scope. The returned guard restores the
    /// previous scope on drop.
    pub fn cached_scope(self: &Arc<Self>) -> CachedScopeGuard {
        let previous = self.in_cached_scope.swap(true, Ordering::Relaxed);
        CachedScopeGuard {
            ctx: Arc::clone(self),
            previous,
        }
    }
}

/// Guard restoring the cached-scope flag on drop.
pub struct CachedScopeGuard {
    ctx: Arc<SessionContext>,
    previous: bool,
}

impl Drop for CachedScopeGuard {
    fn drop(&mut self) {
        self.ctx.in_cached_scope.store(self.previous, Ordering::Relaxed);
    }
}
