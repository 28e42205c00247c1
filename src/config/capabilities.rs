//! Capability traits shared by configuration nodes.
//!
//! Nodes expose the option groups they own; the traits supply the
//! convenience setters on top of them.

use crate::core::{Color, ScaleValue};
use crate::error::{ChartError, ChartResult};
use crate::scriptable::{DatasetContext, ScaleContext, ScriptableOption};

use super::line::LineOptions;
use super::min_max::{MinMaxHandler, MinMaxProperty};

fn set_bound(handler: &MinMaxHandler, property: MinMaxProperty, value: ScaleValue) -> ChartResult<()> {
    handler.option(property).set_constant(Some(value))
}

fn set_bound_callback<F>(handler: &MinMaxHandler, property: MinMaxProperty, callback: F)
where
    F: Fn(&ScaleContext) -> Option<ScaleValue> + 'static,
{
    handler.option(property).set_callback(callback);
}

/// Nodes with scriptable axis bounds.
pub trait HasMinMax {
    fn min_max(&self) -> &MinMaxHandler;

    fn set_min(&self, value: impl Into<ScaleValue>) -> ChartResult<()> {
        set_bound(self.min_max(), MinMaxProperty::Min, value.into())
    }

    fn set_max(&self, value: impl Into<ScaleValue>) -> ChartResult<()> {
        set_bound(self.min_max(), MinMaxProperty::Max, value.into())
    }

    fn set_suggested_min(&self, value: impl Into<ScaleValue>) -> ChartResult<()> {
        set_bound(self.min_max(), MinMaxProperty::SuggestedMin, value.into())
    }

    fn set_suggested_max(&self, value: impl Into<ScaleValue>) -> ChartResult<()> {
        set_bound(self.min_max(), MinMaxProperty::SuggestedMax, value.into())
    }

    fn set_min_callback<F>(&self, callback: F)
    where
        F: Fn(&ScaleContext) -> Option<ScaleValue> + 'static,
    {
        set_bound_callback(self.min_max(), MinMaxProperty::Min, callback);
    }

    fn set_max_callback<F>(&self, callback: F)
    where
        F: Fn(&ScaleContext) -> Option<ScaleValue> + 'static,
    {
        set_bound_callback(self.min_max(), MinMaxProperty::Max, callback);
    }

    fn set_suggested_min_callback<F>(&self, callback: F)
    where
        F: Fn(&ScaleContext) -> Option<ScaleValue> + 'static,
    {
        set_bound_callback(self.min_max(), MinMaxProperty::SuggestedMin, callback);
    }

    fn set_suggested_max_callback<F>(&self, callback: F)
    where
        F: Fn(&ScaleContext) -> Option<ScaleValue> + 'static,
    {
        set_bound_callback(self.min_max(), MinMaxProperty::SuggestedMax, callback);
    }

    /// Stored `min` constant in the axis data type (dates come back as dates).
    fn min(&self) -> Option<ScaleValue> {
        self.min_max().min().value()
    }

    fn max(&self) -> Option<ScaleValue> {
        self.min_max().max().value()
    }

    fn suggested_min(&self) -> Option<ScaleValue> {
        self.min_max().suggested_min().value()
    }

    fn suggested_max(&self) -> Option<ScaleValue> {
        self.min_max().suggested_max().value()
    }
}

/// Nodes with a scriptable `beginAtZero` flag. Only numeric axes carry one.
pub trait HasBeginAtZero {
    fn begin_at_zero_option(&self) -> Option<&ScriptableOption<bool, ScaleContext>>;

    fn set_begin_at_zero(&self, begin_at_zero: bool) -> ChartResult<()> {
        require_begin_at_zero(self.begin_at_zero_option())?.set_constant(begin_at_zero)
    }

    fn set_begin_at_zero_callback<F>(&self, callback: F) -> ChartResult<()>
    where
        F: Fn(&ScaleContext) -> Option<bool> + 'static,
    {
        require_begin_at_zero(self.begin_at_zero_option())?.set_callback(callback);
        Ok(())
    }

    fn is_begin_at_zero(&self) -> bool {
        self.begin_at_zero_option()
            .is_some_and(ScriptableOption::value_or_default)
    }
}

fn require_begin_at_zero(
    option: Option<&ScriptableOption<bool, ScaleContext>>,
) -> ChartResult<&ScriptableOption<bool, ScaleContext>> {
    option.ok_or_else(|| {
        ChartError::InvalidData("beginAtZero is only available on numeric axes".to_owned())
    })
}

/// Nodes styled as lines.
pub trait HasLineOptions {
    fn line_options(&self) -> &LineOptions;

    fn background_color(&self) -> &ScriptableOption<Color, DatasetContext> {
        self.line_options().background_color()
    }

    fn border_color(&self) -> &ScriptableOption<Color, DatasetContext> {
        self.line_options().border_color()
    }

    fn border_width(&self) -> &ScriptableOption<f64, DatasetContext> {
        self.line_options().border_width()
    }

    fn tension(&self) -> &ScriptableOption<f64, DatasetContext> {
        self.line_options().tension()
    }
}
