//! Typed configuration nodes bound to a chart's native option tree.

mod animation;
mod axis;
mod axis_hooks;
mod axis_types;
mod capabilities;
mod chart;
mod defaults;
mod grid;
mod line;
mod min_max;
mod tick_handlers;
mod ticks;

pub use animation::Animation;
pub use axis::Axis;
pub use axis_hooks::{
    AxisBuildTicksCallback, AxisCalculateLabelRotationCallback, AxisDataLimitsCallback,
    AxisDimensionsCallback, AxisFitCallback, AxisHook, AxisHookHandler, AxisHooks,
    AxisTickToLabelConversionCallback, AxisUpdateCallback, HookKey,
};
pub use axis_types::{AxisType, AxisTypeRegistry};
pub use capabilities::{HasBeginAtZero, HasLineOptions, HasMinMax};
pub use chart::{Chart, Dataset, LineElement};
pub use defaults::{AnimationDefaults, ChartDefaults, GridDefaults, LineDefaults, TickDefaults};
pub use grid::Grid;
pub use line::LineOptions;
pub use min_max::{Bound, MinMaxHandler};
pub use tick_handlers::{
    CategoryTicks, LinearTicks, TickCallback, TickFormat, TickHandler, TickLabels, TimeTicks,
};
pub use ticks::Ticks;
