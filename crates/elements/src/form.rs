//! Form blocks.
//!
//! A form groups widgets so their values are submitted together. Opening a
//! form enqueues an add-block delta and scopes the context's current form id
//! until the returned guard is dropped.

use std::sync::Arc;

use uuid::Uuid;

use slate_runtime::context::SessionContext;
use slate_runtime::message::{Block, FormProto};
use slate_runtime::{ApiResult, ForwardMessage};

/// Open form scope. Widgets created while the guard is alive are associated
/// with this form.
pub struct Form {
    ctx: Arc<SessionContext>,
    form_id: String,
    previous: Option<String>,
}

impl Form {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.ctx.exit_form(self.previous.take());
    }
}

/// Open a form block on the given session context.
pub fn form(ctx: &Arc<SessionContext>, key: &str) -> ApiResult<Form> {
    let form_id = format!("{}-{}", key, Uuid::new_v4());
    ctx.enqueue(ForwardMessage::add_block(Block {
        form: Some(FormProto {
            form_id: form_id.clone(),
        }),
    }))?;
    let previous = ctx.enter_form(&form_id);
    tracing::debug!("Form opened: form_id={}", form_id);
    Ok(Form {
        ctx: Arc::clone(ctx),
        form_id,
        previous,
    })
}
