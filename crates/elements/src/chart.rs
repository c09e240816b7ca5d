//! Chart element marshalling.
//!
//! Serializes a figure into a chart forward message, encodes the activated
//! selection modes, associates the element with the enclosing form and
//! round-trips selection state through the session state store.

use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use slate_runtime::context::SessionContext;
use slate_runtime::error::{ApiError, ApiResult};
use slate_runtime::message::{ChartProto, Element, ExceptionProto};
use slate_runtime::ForwardMessage;

use crate::figure::{Figure, RendererConfig};
use crate::selection::{ChartState, OnSelect, SelectionMode};

/// Theme charts render with by default.
pub const DEFAULT_THEME: &str = "streamlit";

const CACHED_WIDGET_WARNING: &str = "CachedWidgetWarning";

/// Chart element builder.
///
/// Defaults match the framework surface: themed rendering, selections
/// ignored, all selection modes configured.
#[derive(Debug, Clone)]
pub struct Chart {
    figure: Figure,
    theme: Option<String>,
    use_container_width: bool,
    on_select: OnSelect,
    selection_modes: Vec<String>,
    key: Option<String>,
}

impl Chart {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            theme: Some(DEFAULT_THEME.to_string()),
            use_container_width: false,
            on_select: OnSelect::Ignore,
            selection_modes: SelectionMode::all().iter().map(|m| m.to_string()).collect(),
            key: None,
        }
    }

    /// Set the theme. `None` falls back to the library default theme.
    /// Validated when the chart is shown.
    pub fn with_theme(mut self, theme: Option<&str>) -> Self {
        self.theme = theme.map(|t| t.to_string());
        self
    }

    pub fn with_use_container_width(mut self, use_container_width: bool) -> Self {
        self.use_container_width = use_container_width;
        self
    }

    /// Set how selections are reported back. Strings parse via
    /// `OnSelect::from_str` ("rerun" / "ignore").
    pub fn with_on_select(mut self, on_select: OnSelect) -> Self {
        self.on_select = on_select;
        self
    }

    /// Set the activated selection modes by name ("points", "box", "lasso").
    /// Any iterable of names is accepted; validated when the chart is shown.
    pub fn with_selection_modes<I, S>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selection_modes = modes.into_iter().map(|m| m.as_ref().to_string()).collect();
        self
    }

    /// Stable widget key, used for the element id and the session state slot.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Marshal the chart into a forward message and enqueue it.
    ///
    /// Returns the widget's selection state: empty on the first run with
    /// selections activated, the stored state on replays.
    pub fn show(self, ctx: &Arc<SessionContext>) -> ApiResult<ChartState> {
        let theme = match self.theme.as_deref() {
            None => String::new(),
            Some(DEFAULT_THEME) => DEFAULT_THEME.to_string(),
            Some(other) => {
                return Err(ApiError::usage(format!(
                    "You set theme=\"{other}\" while Slate charts only support theme=\"streamlit\" or no theme to fall back to the library default."
                )))
            }
        };

        // Parse, deduplicate and order the configured modes by wire code.
        let mut modes = BTreeSet::new();
        for raw in &self.selection_modes {
            modes.insert(raw.parse::<SelectionMode>()?);
        }
        let selection_mode: Vec<u32> = if self.on_select.is_activated() {
            modes.iter().map(|m| m.proto_code()).collect()
        } else {
            Vec::new()
        };

        let widget_key = self
            .key
            .unwrap_or_else(|| format!("chart-{}", Uuid::new_v4()));

        if self.on_select.is_activated() && ctx.in_cached_scope() {
            tracing::warn!("Chart with selections replayed from a cached scope: id={}", widget_key);
            ctx.enqueue(ForwardMessage::new_element(Element::Exception(ExceptionProto {
                kind: CACHED_WIDGET_WARNING.to_string(),
                message: "Widgets with activated selections are not supported inside cached computations."
                    .to_string(),
                is_warning: true,
            })))?;
        }

        let proto = ChartProto {
            id: widget_key.clone(),
            spec: self.figure.to_spec()?,
            config: RendererConfig::default().to_json()?,
            theme,
            use_container_width: self.use_container_width,
            selection_mode,
            form_id: ctx.current_form_id().unwrap_or_default(),
            url: String::new(),
        };
        ctx.enqueue(ForwardMessage::new_element(Element::Chart(proto)))?;

        if !self.on_select.is_activated() {
            return Ok(ChartState::default());
        }

        // Selections are live: the widget owns a session state slot.
        let state = ctx.session_state();
        match state.get::<ChartState>(&widget_key) {
            Some(existing) => Ok(existing),
            None => {
                let initial = ChartState::default();
                state.set(&widget_key, &initial)?;
                Ok(initial)
            }
        }
    }
}
