//! Figure carrier for chart elements.
//!
//! The figure is a thin serde container for traces and layout; the full
//! plotting-library serializer lives outside this crate. The chart element
//! only needs a figure that serializes into a non-empty JSON spec.

use serde::{Deserialize, Serialize};

use slate_runtime::ApiResult;

/// Plot figure: a list of traces plus an optional layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<serde_json::Value>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a figure with a single scatter trace.
    pub fn scatter(x: &[f64], y: &[f64]) -> Self {
        Self::new().with_trace(serde_json::json!({
            "type": "scatter",
            "x": x,
            "y": y,
        }))
    }

    /// Append a trace.
    pub fn with_trace(mut self, trace: serde_json::Value) -> Self {
        self.data.push(trace);
        self
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: serde_json::Value) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Serialize the figure into its wire spec.
    pub fn to_spec(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Front-end renderer options marshalled next to the figure spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererConfig {
    pub responsive: bool,
    pub displaylogo: bool,
    pub display_mode_bar: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            displaylogo: false,
            display_mode_bar: false,
        }
    }
}

impl RendererConfig {
    /// Serialize the config into its wire form.
    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
