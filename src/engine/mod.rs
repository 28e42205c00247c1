//! Engine boundary adapter.
//!
//! Reads the native option tree the way the rendering engine does: a
//! function value is invoked with a freshly built context object, any other
//! value is taken as is, and anything unusable falls back to the engine's
//! own defaults. The adapter never talks to the typed configuration nodes,
//! so everything it observes went through the installed proxies.

mod context;
mod resolved;

use tracing::{debug, trace, warn};

use crate::config::{Axis, AxisHook, Chart, HookKey};
use crate::core::{Key, ScaleDataType, ScaleValue, TickItem};
use crate::error::{ChartError, ChartResult};
use crate::native::{NativeNode, NativeValue};
use crate::scriptable::NativeShape;

pub use context::{dataset_context, scale_context};
pub use resolved::{ResolvedAnimation, ResolvedAxis, ResolvedBounds, ResolvedLine, ResolvedTick};

const OPTIONS: &str = "options";
const ANIMATION: &str = "animation";
const ELEMENTS: &str = "elements";
const LINE: &str = "line";
const TICKS: &str = "ticks";
const MIN: &str = "min";
const MAX: &str = "max";
const TICK_CALLBACK: &str = "callback";

/// Resolves one property: calls it when it holds a function, returns it otherwise.
pub fn resolve_property(
    node: &NativeNode,
    key: &str,
    this: &NativeValue,
    args: &[NativeValue],
) -> NativeValue {
    match node.call(key, this, args) {
        Some(result) => result,
        None => node.get(key),
    }
}

/// Resolves a property into `T`, using `fallback` when it is unset or has the wrong shape.
pub fn resolve_as<T: NativeShape>(
    node: &NativeNode,
    key: &str,
    args: &[NativeValue],
    fallback: T,
) -> T {
    T::from_native(&resolve_property(node, key, &NativeValue::Undefined, args))
        .filter(|value| value.is_valid())
        .unwrap_or(fallback)
}

/// First node of the cascade that sets `key` decides the value.
fn resolve_cascade<T: NativeShape>(
    nodes: &[&NativeNode],
    key: &str,
    args: &[NativeValue],
    fallback: T,
) -> T {
    match nodes.iter().find(|node| node.has(key)) {
        Some(node) => resolve_as(node, key, args, fallback),
        None => fallback,
    }
}

/// Render-time view of one chart.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    chart: &'a Chart,
}

impl<'a> Engine<'a> {
    #[must_use]
    pub fn new(chart: &'a Chart) -> Self {
        Self { chart }
    }

    fn options_child(&self, key: &str) -> ChartResult<NativeNode> {
        self.chart
            .native()
            .child_if_present(OPTIONS)
            .and_then(|options| options.child_if_present(key))
            .ok_or_else(|| ChartError::MissingNode(format!("{OPTIONS}.{key}")))
    }

    /// Animation of one dataset element (`data_index = None` for the dataset itself).
    pub fn resolve_animation(
        &self,
        dataset_index: usize,
        data_index: Option<usize>,
    ) -> ChartResult<ResolvedAnimation> {
        let node = self.options_child(ANIMATION)?;
        let args = [dataset_context(self.chart.id(), dataset_index, data_index)];
        let defaults = &self.chart.defaults().animation;
        let non_negative = |value: f64, fallback: f64| if value >= 0.0 { value } else { fallback };
        Ok(ResolvedAnimation {
            duration: non_negative(
                resolve_as(&node, "duration", &args, defaults.duration),
                defaults.duration,
            ),
            delay: non_negative(resolve_as(&node, "delay", &args, defaults.delay), defaults.delay),
            easing: resolve_as(&node, "easing", &args, defaults.easing),
            looping: resolve_as(&node, "loop", &args, defaults.looping),
        })
    }

    /// Line styling of one dataset element; dataset values win over `elements.line`.
    pub fn resolve_line(
        &self,
        dataset_index: usize,
        data_index: Option<usize>,
    ) -> ChartResult<ResolvedLine> {
        let dataset = self
            .chart
            .dataset(dataset_index)
            .ok_or_else(|| ChartError::MissingNode(format!("data.datasets.{dataset_index}")))?;
        let element = self.options_child(ELEMENTS)?.child(LINE);
        let cascade = [dataset.node(), &element];
        let args = [dataset_context(self.chart.id(), dataset_index, data_index)];
        let defaults = &self.chart.defaults().line;
        Ok(ResolvedLine {
            background_color: resolve_cascade(
                &cascade,
                "backgroundColor",
                &args,
                defaults.background_color,
            ),
            border_color: resolve_cascade(&cascade, "borderColor", &args, defaults.border_color),
            border_width: resolve_cascade(&cascade, "borderWidth", &args, defaults.border_width),
            tension: resolve_cascade(&cascade, "tension", &args, defaults.tension),
        })
    }

    /// Bounds of one axis, coerced to its data type.
    pub fn resolve_bounds(&self, axis_id: &str) -> ChartResult<ResolvedBounds> {
        let axis = self.chart.require_axis(axis_id)?;
        let node = axis.node();
        let args = [scale_context(self.chart.id(), axis_id, 0, None)];
        let data_type = axis.axis_type().data_type;
        let bound = |key: &str| {
            let value: Option<ScaleValue> = resolve_as(node, key, &args, None);
            value.and_then(|value| value.coerce(data_type))
        };
        Ok(ResolvedBounds {
            begin_at_zero: data_type == ScaleDataType::Number
                && resolve_as(node, "beginAtZero", &args, false),
            min: bound("min"),
            max: bound("max"),
            suggested_min: bound("suggestedMin"),
            suggested_max: bound("suggestedMax"),
        })
    }

    /// Runs the tick-generation pass of one axis over `generated` ticks.
    ///
    /// Order: `beforeBuildTicks`, ticks stored on the scale item,
    /// `afterBuildTicks`, `beforeTickToLabelConversion`, one label callback
    /// and style resolution per tick, `afterTickToLabelConversion`.
    pub fn build_ticks(
        &self,
        axis_id: &str,
        generated: Vec<TickItem>,
    ) -> ChartResult<Vec<ResolvedTick>> {
        let axis = self.chart.require_axis(axis_id)?;
        if !axis.is_display() {
            trace!(axis = axis_id, "axis hidden, skipping tick pass");
            return Ok(Vec::new());
        }
        let scale = axis.to_item(Vec::new()).to_node();
        Ok(self.tick_pass(axis, &scale, generated))
    }

    /// Runs a full scale update of one axis, firing every hook pair in engine order.
    ///
    /// `beforeUpdate`, dimensions, data limits (bounds resolved in between),
    /// the tick pass of [`Engine::build_ticks`] when the axis is displayed,
    /// label rotation, fit, `afterUpdate`.
    pub fn update_axis(
        &self,
        axis_id: &str,
        generated: Vec<TickItem>,
    ) -> ChartResult<ResolvedAxis> {
        let axis = self.chart.require_axis(axis_id)?;
        let node = axis.node();
        let scale = axis.to_item(Vec::new()).to_node();
        let this = NativeValue::Object(scale.clone());

        fire(node, AxisHook::Update.before(), &this);
        fire(node, AxisHook::SetDimensions.before(), &this);
        fire(node, AxisHook::SetDimensions.after(), &this);

        fire(node, AxisHook::DataLimits.before(), &this);
        let bounds = self.resolve_bounds(axis_id)?;
        let native_bound = |bound: &Option<ScaleValue>| {
            bound
                .as_ref()
                .map_or(NativeValue::Undefined, ScaleValue::to_native)
        };
        scale.set(MIN, native_bound(&bounds.min));
        scale.set(MAX, native_bound(&bounds.max));
        fire(node, AxisHook::DataLimits.after(), &this);

        let ticks = if axis.is_display() {
            self.tick_pass(axis, &scale, generated)
        } else {
            trace!(axis = axis_id, "axis hidden, skipping tick pass");
            Vec::new()
        };

        fire(node, AxisHook::CalculateLabelRotation.before(), &this);
        fire(node, AxisHook::CalculateLabelRotation.after(), &this);
        fire(node, AxisHook::Fit.before(), &this);
        fire(node, AxisHook::Fit.after(), &this);
        fire(node, AxisHook::Update.after(), &this);

        debug!(axis = axis_id, ticks = ticks.len(), "update axis");
        Ok(ResolvedAxis { bounds, ticks })
    }

    fn tick_pass(
        &self,
        axis: &Axis,
        scale: &NativeNode,
        generated: Vec<TickItem>,
    ) -> Vec<ResolvedTick> {
        let node = axis.node();
        let this = NativeValue::Object(scale.clone());

        fire(node, AxisHook::BuildTicks.before(), &this);
        scale.set(TICKS, TickItem::list_to_native(&generated));
        fire(node, AxisHook::BuildTicks.after(), &this);

        let native_ticks = scale.get(TICKS);
        let ticks = TickItem::list_from_native(&native_ticks);
        debug!(axis = axis.id(), count = ticks.len(), "build ticks");

        fire(node, AxisHook::TickToLabelConversion.before(), &this);
        let resolved: Vec<ResolvedTick> = ticks
            .iter()
            .enumerate()
            .map(|(index, tick)| self.resolve_tick(axis, &this, &native_ticks, index, tick))
            .collect();
        let labelled: Vec<TickItem> = resolved.iter().map(|tick| tick.tick.clone()).collect();
        scale.set(TICKS, TickItem::list_to_native(&labelled));
        fire(node, AxisHook::TickToLabelConversion.after(), &this);
        resolved
    }

    fn resolve_tick(
        &self,
        axis: &Axis,
        this: &NativeValue,
        native_ticks: &NativeValue,
        index: usize,
        tick: &TickItem,
    ) -> ResolvedTick {
        let ticks_node = axis.ticks().node();
        let label_args = [
            NativeValue::Number(tick.value),
            NativeValue::from(index),
            native_ticks.clone(),
        ];
        let label = match ticks_node.call(TICK_CALLBACK, this, &label_args) {
            Some(NativeValue::String(label)) => label,
            Some(other) => {
                warn!(axis = axis.id(), index, ?other, "tick callback returned a non-string label");
                axis.ticks().labels().default_label(tick)
            }
            None => axis.ticks().labels().default_label(tick),
        };

        let args = [scale_context(self.chart.id(), axis.id(), index, Some(tick))];
        let defaults = self.chart.defaults();
        let grid_node = axis.grid().node();
        ResolvedTick {
            tick: tick.clone().with_label(label),
            color: resolve_as(ticks_node, "color", &args, defaults.ticks.color),
            font: resolve_as(ticks_node, "font", &args, defaults.ticks.font.clone()),
            grid_color: resolve_as(grid_node, "color", &args, defaults.grid.color),
            grid_line_width: resolve_as(grid_node, "lineWidth", &args, defaults.grid.line_width),
        }
    }
}

fn fire(node: &NativeNode, key: HookKey, this: &NativeValue) {
    node.call(key.value(), &NativeValue::Undefined, std::slice::from_ref(this));
}

#[cfg(test)]
mod tests {
    use super::resolve_property;
    use crate::core::{ScaleDataType, ScaleValue};
    use crate::native::{NativeFunction, NativeNode, NativeValue};

    #[test]
    fn function_values_are_called_constants_read() {
        let node = NativeNode::new();
        node.set("width", 2.0);
        node.set(
            "radius",
            NativeFunction::new(|_, args| NativeValue::Number(args.len() as f64)),
        );
        let args = [NativeValue::Null, NativeValue::Null];
        assert_eq!(
            resolve_property(&node, "width", &NativeValue::Undefined, &args),
            NativeValue::Number(2.0)
        );
        assert_eq!(
            resolve_property(&node, "radius", &NativeValue::Undefined, &args),
            NativeValue::Number(2.0)
        );
        assert!(resolve_property(&node, "missing", &NativeValue::Undefined, &args).is_undefined());
    }

    #[test]
    fn date_axes_read_numeric_bounds_as_epoch_millis() {
        let bound = ScaleValue::Number(0.0).coerce(ScaleDataType::Date);
        assert!(matches!(bound, Some(ScaleValue::Date(date)) if date.timestamp() == 0));
        assert_eq!(
            ScaleValue::Text("a".to_owned()).coerce(ScaleDataType::Number),
            None
        );
    }
}
