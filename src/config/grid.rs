use std::fmt;
use std::rc::Rc;

use crate::core::{Color, Key};
use crate::native::NativeNode;
use crate::scriptable::{ScaleContext, ScaleOwner, ScriptableOption, non_negative};

use super::defaults::{ChartDefaults, provider};

#[derive(Debug, Clone, Copy)]
enum GridProperty {
    Color,
    LineWidth,
    TickLength,
    Display,
}

impl Key for GridProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::LineWidth => "lineWidth",
            Self::TickLength => "tickLength",
            Self::Display => "display",
        }
    }
}

/// Grid line options of one axis (`scales.<id>.grid`).
pub struct Grid {
    node: NativeNode,
    color: ScriptableOption<Color, ScaleContext>,
    line_width: ScriptableOption<f64, ScaleContext>,
    tick_length: ScriptableOption<f64, ScaleContext>,
}

impl Grid {
    pub(crate) fn new(node: NativeNode, owner: &ScaleOwner, defaults: &Rc<ChartDefaults>) -> Self {
        Self {
            color: ScriptableOption::new(
                node.clone(),
                GridProperty::Color,
                owner.clone(),
                provider(defaults, |d| d.grid.color),
            ),
            line_width: ScriptableOption::with_checker(
                node.clone(),
                GridProperty::LineWidth,
                owner.clone(),
                provider(defaults, |d| d.grid.line_width),
                non_negative(),
            ),
            tick_length: ScriptableOption::with_checker(
                node.clone(),
                GridProperty::TickLength,
                owner.clone(),
                provider(defaults, |d| d.grid.tick_length),
                non_negative(),
            ),
            node,
        }
    }

    #[must_use]
    pub fn node(&self) -> &NativeNode {
        &self.node
    }

    #[must_use]
    pub fn color(&self) -> &ScriptableOption<Color, ScaleContext> {
        &self.color
    }

    #[must_use]
    pub fn line_width(&self) -> &ScriptableOption<f64, ScaleContext> {
        &self.line_width
    }

    #[must_use]
    pub fn tick_length(&self) -> &ScriptableOption<f64, ScaleContext> {
        &self.tick_length
    }

    pub fn set_display(&self, display: bool) {
        self.node.set(GridProperty::Display.value(), display);
    }

    #[must_use]
    pub fn is_display(&self) -> bool {
        self.node
            .get_bool(GridProperty::Display.value())
            .unwrap_or(true)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("color", &self.color)
            .field("line_width", &self.line_width)
            .finish()
    }
}
