//! Forward-message protocol types.
//!
//! A forward message is a structured message the app pushes to its front-end
//! for rendering or navigation. Messages are built on demand, enqueued once
//! on the session's forward channel and not retained.

use serde::{Deserialize, Serialize};

/// Outbound protocol message pushed to the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ForwardMessage {
    /// Navigation message carrying an authorization redirect.
    AuthRedirect(AuthRedirect),
    /// Rendering message mutating the element tree.
    Delta(Delta),
}

impl ForwardMessage {
    /// Create an auth redirect message.
    pub fn auth_redirect(url: impl Into<String>, action_type: impl Into<String>, send_redirect_to_host: bool) -> Self {
        ForwardMessage::AuthRedirect(AuthRedirect {
            url: url.into(),
            action_type: action_type.into(),
            send_redirect_to_host,
        })
    }

    /// Create a new-element delta message.
    pub fn new_element(element: Element) -> Self {
        ForwardMessage::Delta(Delta::NewElement(element))
    }

    /// Create an add-block delta message.
    pub fn add_block(block: Block) -> Self {
        ForwardMessage::Delta(Delta::AddBlock(block))
    }

    /// Access the delta payload, if this is a delta message.
    pub fn as_delta(&self) -> Option<&Delta> {
        match self {
            ForwardMessage::Delta(delta) => Some(delta),
            _ => None,
        }
    }

    /// Access the new element payload, if this is a new-element delta.
    pub fn as_new_element(&self) -> Option<&Element> {
        match self.as_delta()? {
            Delta::NewElement(element) => Some(element),
            _ => None,
        }
    }
}

/// Redirect to an external authorization endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRedirect {
    /// Authorization URL the front-end should navigate to
    pub url: String,
    /// Action tag, e.g. "login"
    pub action_type: String,
    /// Redirect handled by the hosting page instead of the app itself
    #[serde(default)]
    pub send_redirect_to_host: bool,
}

/// Element-tree mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delta {
    NewElement(Element),
    AddBlock(Block),
}

/// Renderable element payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Chart(ChartProto),
    Exception(ExceptionProto),
}

/// Wire representation of a chart element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartProto {
    /// Stable widget identity
    pub id: String,
    /// Serialized figure spec (JSON)
    pub spec: String,
    /// Serialized renderer config (JSON)
    pub config: String,
    /// Theme name, empty for the library default
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub use_container_width: bool,
    /// Activated selection interaction codes (point=0, box=1, lasso=2)
    #[serde(default)]
    pub selection_mode: Vec<u32>,
    /// Enclosing form id, empty outside a form
    #[serde(default)]
    pub form_id: String,
    /// Deprecated remote-figure URL, always empty
    #[serde(default)]
    pub url: String,
}

/// Wire representation of an exception or warning element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionProto {
    /// Exception kind, e.g. "CachedWidgetWarning"
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub is_warning: bool,
}

/// Container block added to the element tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormProto>,
}

/// Form metadata attached to a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormProto {
    pub form_id: String,
}
