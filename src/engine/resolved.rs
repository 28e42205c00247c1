use serde::Serialize;

use crate::core::{Color, Easing, FontItem, ScaleValue, TickItem};

/// Animation settings the engine applies to one dataset element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnimation {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    #[serde(rename = "loop")]
    pub looping: bool,
}

/// Line styling of one dataset element after the dataset/element cascade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLine {
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub tension: f64,
}

/// Axis bounds; `None` lets the engine derive the bound from data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBounds {
    pub begin_at_zero: bool,
    pub min: Option<ScaleValue>,
    pub max: Option<ScaleValue>,
    pub suggested_min: Option<ScaleValue>,
    pub suggested_max: Option<ScaleValue>,
}

/// One labelled tick with the styles resolved for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTick {
    pub tick: TickItem,
    pub color: Color,
    pub font: FontItem,
    pub grid_color: Color,
    pub grid_line_width: f64,
}

impl ResolvedTick {
    #[must_use]
    pub fn label(&self) -> &str {
        self.tick.label.as_deref().unwrap_or_default()
    }
}

/// Outcome of one full update of an axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAxis {
    pub bounds: ResolvedBounds,
    pub ticks: Vec<ResolvedTick>,
}
