use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Easing, FontItem, PaddingItem};
use crate::error::{ChartError, ChartResult};
use crate::scriptable::DefaultValue;

/// Tick fallbacks used when a tick callback has no usable result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickDefaults {
    pub color: Color,
    pub font: FontItem,
    pub text_stroke_color: Color,
    pub text_stroke_width: f64,
    pub backdrop_color: Color,
    pub backdrop_padding: PaddingItem,
    pub show_label_backdrop: bool,
}

impl Default for TickDefaults {
    fn default() -> Self {
        Self {
            color: Color::rgb(0x66, 0x66, 0x66),
            font: FontItem::default(),
            text_stroke_color: Color::TRANSPARENT,
            text_stroke_width: 0.0,
            backdrop_color: Color::rgba(255, 255, 255, 0.75),
            backdrop_padding: PaddingItem::uniform(2.0),
            show_label_backdrop: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridDefaults {
    pub color: Color,
    pub line_width: f64,
    pub tick_length: f64,
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            color: Color::rgba(0, 0, 0, 0.1),
            line_width: 1.0,
            tick_length: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationDefaults {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl Default for AnimationDefaults {
    fn default() -> Self {
        Self {
            duration: 1000.0,
            delay: 0.0,
            easing: Easing::EaseOutQuart,
            looping: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineDefaults {
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub tension: f64,
}

impl Default for LineDefaults {
    fn default() -> Self {
        Self {
            background_color: Color::rgba(0, 0, 0, 0.1),
            border_color: Color::rgba(0, 0, 0, 0.1),
            border_width: 3.0,
            tension: 0.0,
        }
    }
}

/// Fallback values for every scriptable option a chart creates.
///
/// Hosts may load this from JSON; missing sections keep the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartDefaults {
    pub ticks: TickDefaults,
    pub grid: GridDefaults,
    pub animation: AnimationDefaults,
    pub line: LineDefaults,
}

impl ChartDefaults {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart defaults: {e}")))
    }
}

/// Default provider reading one field of the chart defaults at invocation time.
pub(crate) fn provider<T, F>(defaults: &Rc<ChartDefaults>, pick: F) -> DefaultValue<T>
where
    T: 'static,
    F: Fn(&ChartDefaults) -> T + 'static,
{
    let defaults = Rc::clone(defaults);
    Rc::new(move || pick(&defaults))
}
