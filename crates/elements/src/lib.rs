//! Slate Elements
//!
//! Renderable elements on top of the Slate session runtime.
//!
//! This crate provides:
//! - Chart element marshalling (figure to forward message)
//! - Selection-mode encoding and chart selection state
//! - Form blocks grouping widgets for joint submission

pub mod chart;
pub mod figure;
pub mod form;
pub mod selection;

pub use chart::Chart;
pub use figure::{Figure, RendererConfig};
pub use form::form;
pub use selection::{ChartSelection, ChartState, OnSelect, SelectionMode};
