//! Chart selection types.
//!
//! Selection modes encode which interaction types (point/box/lasso) a chart
//! reports back as user selections. The numeric codes are part of the wire
//! protocol and must stay stable.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use slate_runtime::ApiError;

/// Interaction types a chart can report selections for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Points,
    Box,
    Lasso,
}

impl SelectionMode {
    /// Wire protocol code for this mode.
    pub fn proto_code(self) -> u32 {
        match self {
            Self::Points => 0,
            Self::Box => 1,
            Self::Lasso => 2,
        }
    }

    /// All modes, in wire-code order.
    pub fn all() -> [SelectionMode; 3] {
        [Self::Points, Self::Box, Self::Lasso]
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "points"),
            Self::Box => write!(f, "box"),
            Self::Lasso => write!(f, "lasso"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Self::Points),
            "box" => Ok(Self::Box),
            "lasso" => Ok(Self::Lasso),
            other => Err(ApiError::usage(format!(
                "You have passed \"{other}\" as selection_mode, but only \"points\", \"box\" and \"lasso\" are valid selection modes."
            ))),
        }
    }
}

/// How the app reacts to chart selections.
#[derive(Clone, Default)]
pub enum OnSelect {
    /// Selections are not reported back
    #[default]
    Ignore,
    /// A selection triggers a script rerun
    Rerun,
    /// A selection triggers a script rerun and invokes the callback
    Callback(Arc<dyn Fn() + Send + Sync>),
}

impl OnSelect {
    /// True when selections are reported back to the app.
    pub fn is_activated(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

impl fmt::Debug for OnSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => write!(f, "OnSelect::Ignore"),
            Self::Rerun => write!(f, "OnSelect::Rerun"),
            Self::Callback(_) => write!(f, "OnSelect::Callback"),
        }
    }
}

impl FromStr for OnSelect {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rerun" => Ok(Self::Rerun),
            "ignore" => Ok(Self::Ignore),
            other => Err(ApiError::usage(format!(
                "You have passed \"{other}\" to on_select, but only \"rerun\", \"ignore\" or a callback are supported."
            ))),
        }
    }
}

/// Box selection coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSelection {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Lasso selection polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LassoSelection {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// User selection state of one chart widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSelection {
    /// Selected data points as reported by the front-end
    pub points: Vec<serde_json::Value>,
    /// Indices of the selected points
    pub point_indices: Vec<u64>,
    /// Selection boxes
    #[serde(rename = "box")]
    pub boxes: Vec<BoxSelection>,
    /// Lasso polygons
    pub lasso: Vec<LassoSelection>,
}

/// Widget state stored in session state and returned from the chart call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub select: ChartSelection,
}
