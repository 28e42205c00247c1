use std::fmt;
use std::rc::Rc;

use crate::core::{ChartRef, Color, Key};
use crate::native::NativeNode;
use crate::scriptable::{DatasetContext, ScriptableOption, non_negative};

use super::defaults::{ChartDefaults, provider};

#[derive(Debug, Clone, Copy)]
enum LineProperty {
    BackgroundColor,
    BorderColor,
    BorderWidth,
    Tension,
}

impl Key for LineProperty {
    fn value(self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::BorderColor => "borderColor",
            Self::BorderWidth => "borderWidth",
            Self::Tension => "tension",
        }
    }
}

/// Line styling options bound to one native node.
///
/// Shared by the chart-wide line element and by each line dataset.
pub struct LineOptions {
    background_color: ScriptableOption<Color, DatasetContext>,
    border_color: ScriptableOption<Color, DatasetContext>,
    border_width: ScriptableOption<f64, DatasetContext>,
    tension: ScriptableOption<f64, DatasetContext>,
}

impl LineOptions {
    pub(crate) fn new(node: NativeNode, chart: &ChartRef, defaults: &Rc<ChartDefaults>) -> Self {
        Self {
            background_color: ScriptableOption::new(
                node.clone(),
                LineProperty::BackgroundColor,
                chart.clone(),
                provider(defaults, |d| d.line.background_color),
            ),
            border_color: ScriptableOption::new(
                node.clone(),
                LineProperty::BorderColor,
                chart.clone(),
                provider(defaults, |d| d.line.border_color),
            ),
            border_width: ScriptableOption::with_checker(
                node.clone(),
                LineProperty::BorderWidth,
                chart.clone(),
                provider(defaults, |d| d.line.border_width),
                non_negative(),
            ),
            tension: ScriptableOption::with_checker(
                node,
                LineProperty::Tension,
                chart.clone(),
                provider(defaults, |d| d.line.tension),
                Rc::new(|tension: &f64| (0.0..=1.0).contains(tension)),
            ),
        }
    }

    #[must_use]
    pub fn background_color(&self) -> &ScriptableOption<Color, DatasetContext> {
        &self.background_color
    }

    #[must_use]
    pub fn border_color(&self) -> &ScriptableOption<Color, DatasetContext> {
        &self.border_color
    }

    #[must_use]
    pub fn border_width(&self) -> &ScriptableOption<f64, DatasetContext> {
        &self.border_width
    }

    #[must_use]
    pub fn tension(&self) -> &ScriptableOption<f64, DatasetContext> {
        &self.tension
    }
}

impl fmt::Debug for LineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineOptions")
            .field("background_color", &self.background_color)
            .field("border_color", &self.border_color)
            .field("border_width", &self.border_width)
            .field("tension", &self.tension)
            .finish()
    }
}
