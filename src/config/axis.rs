use std::fmt;
use std::rc::Rc;

use tracing::debug;

use chrono::{DateTime, Utc};

use crate::core::{ChartRef, Key, ScaleDataType, TickItem};
use crate::error::{ChartError, ChartResult};
use crate::native::NativeNode;
use crate::scriptable::{AxisItem, ScaleContext, ScaleOwner, ScriptableOption, default_value};

use super::axis_types::AxisType;
use super::axis_hooks::{
    AxisBuildTicksCallback, AxisCalculateLabelRotationCallback, AxisDataLimitsCallback,
    AxisDimensionsCallback, AxisFitCallback, AxisHook, AxisHooks,
    AxisTickToLabelConversionCallback, AxisUpdateCallback,
};
use super::capabilities::{HasBeginAtZero, HasMinMax};
use super::defaults::ChartDefaults;
use super::grid::Grid;
use super::min_max::MinMaxHandler;
use super::tick_handlers::TickLabels;
use super::ticks::Ticks;

#[derive(Debug, Clone, Copy)]
enum AxisProperty {
    Type,
    Display,
    BeginAtZero,
    Ticks,
    Grid,
}

impl Key for AxisProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Display => "display",
            Self::BeginAtZero => "beginAtZero",
            Self::Ticks => "ticks",
            Self::Grid => "grid",
        }
    }
}

/// One scale of a chart (`options.scales.<id>`).
pub struct Axis {
    id: String,
    axis_type: AxisType,
    node: NativeNode,
    owner: ScaleOwner,
    ticks: Ticks,
    grid: Grid,
    min_max: MinMaxHandler,
    begin_at_zero: Option<ScriptableOption<bool, ScaleContext>>,
    hooks: AxisHooks,
}

impl Axis {
    pub(crate) fn new(
        node: NativeNode,
        id: &str,
        axis_type: AxisType,
        chart: &ChartRef,
        defaults: &Rc<ChartDefaults>,
    ) -> Self {
        node.set(AxisProperty::Type.value(), axis_type.name.as_str());
        let owner = ScaleOwner {
            chart: chart.clone(),
            axis_id: id.to_owned(),
            data_type: axis_type.data_type,
        };
        let begin_at_zero = (axis_type.data_type == ScaleDataType::Number).then(|| {
            ScriptableOption::new(
                node.clone(),
                AxisProperty::BeginAtZero,
                owner.clone(),
                default_value(false),
            )
        });
        debug!(axis = id, axis_type = %axis_type.name, "create axis");
        Self {
            id: id.to_owned(),
            ticks: Ticks::new(
                node.child(AxisProperty::Ticks.value()),
                &owner,
                axis_type.kind,
                defaults,
            ),
            grid: Grid::new(node.child(AxisProperty::Grid.value()), &owner, defaults),
            min_max: MinMaxHandler::new(node.clone(), &owner),
            hooks: AxisHooks::new(&node, &owner),
            begin_at_zero,
            axis_type,
            owner,
            node,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn axis_type(&self) -> &AxisType {
        &self.axis_type
    }

    #[must_use]
    pub fn node(&self) -> &NativeNode {
        &self.node
    }

    #[must_use]
    pub fn owner(&self) -> &ScaleOwner {
        &self.owner
    }

    #[must_use]
    pub fn ticks(&self) -> &Ticks {
        &self.ticks
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_display(&self, display: bool) {
        self.node.set(AxisProperty::Display.value(), display);
    }

    #[must_use]
    pub fn is_display(&self) -> bool {
        self.node
            .get_bool(AxisProperty::Display.value())
            .unwrap_or(true)
    }

    #[must_use]
    pub fn hooks(&self) -> &AxisHooks {
        &self.hooks
    }

    #[must_use]
    pub fn is_hook_installed(&self, hook: AxisHook) -> bool {
        self.hooks.is_installed(hook)
    }

    #[must_use]
    pub fn update_callback(&self) -> Option<Rc<dyn AxisUpdateCallback>> {
        self.hooks.update.callback()
    }

    /// Installs (or with `None` removes) the hooks wrapping the whole axis update.
    pub fn set_update_callback(&self, callback: Option<Rc<dyn AxisUpdateCallback>>) {
        self.hooks.update.set_callback(callback);
    }

    #[must_use]
    pub fn dimensions_callback(&self) -> Option<Rc<dyn AxisDimensionsCallback>> {
        self.hooks.dimensions.callback()
    }

    pub fn set_dimensions_callback(&self, callback: Option<Rc<dyn AxisDimensionsCallback>>) {
        self.hooks.dimensions.set_callback(callback);
    }

    #[must_use]
    pub fn data_limits_callback(&self) -> Option<Rc<dyn AxisDataLimitsCallback>> {
        self.hooks.data_limits.callback()
    }

    pub fn set_data_limits_callback(&self, callback: Option<Rc<dyn AxisDataLimitsCallback>>) {
        self.hooks.data_limits.set_callback(callback);
    }

    #[must_use]
    pub fn build_ticks_callback(&self) -> Option<Rc<dyn AxisBuildTicksCallback>> {
        self.hooks.build_ticks.callback()
    }

    /// Installs (or with `None` removes) the before/after build-ticks hooks.
    pub fn set_build_ticks_callback(&self, callback: Option<Rc<dyn AxisBuildTicksCallback>>) {
        self.hooks.build_ticks.set_callback(callback);
    }

    #[must_use]
    pub fn is_build_ticks_installed(&self) -> bool {
        self.hooks.build_ticks.is_installed()
    }

    #[must_use]
    pub fn tick_to_label_conversion_callback(
        &self,
    ) -> Option<Rc<dyn AxisTickToLabelConversionCallback>> {
        self.hooks.tick_to_label_conversion.callback()
    }

    pub fn set_tick_to_label_conversion_callback(
        &self,
        callback: Option<Rc<dyn AxisTickToLabelConversionCallback>>,
    ) {
        self.hooks.tick_to_label_conversion.set_callback(callback);
    }

    #[must_use]
    pub fn calculate_label_rotation_callback(
        &self,
    ) -> Option<Rc<dyn AxisCalculateLabelRotationCallback>> {
        self.hooks.calculate_label_rotation.callback()
    }

    pub fn set_calculate_label_rotation_callback(
        &self,
        callback: Option<Rc<dyn AxisCalculateLabelRotationCallback>>,
    ) {
        self.hooks.calculate_label_rotation.set_callback(callback);
    }

    #[must_use]
    pub fn fit_callback(&self) -> Option<Rc<dyn AxisFitCallback>> {
        self.hooks.fit.callback()
    }

    pub fn set_fit_callback(&self, callback: Option<Rc<dyn AxisFitCallback>>) {
        self.hooks.fit.set_callback(callback);
    }

    pub fn set_category_tick_callback<F>(&self, callback: F) -> ChartResult<()>
    where
        F: Fn(&AxisItem, &String, usize, &[TickItem]) -> Option<String> + 'static,
    {
        match self.ticks.labels() {
            TickLabels::Category(handler) => {
                handler.set_callback(callback);
                Ok(())
            }
            _ => Err(self.tick_callback_mismatch("category")),
        }
    }

    pub fn set_linear_tick_callback<F>(&self, callback: F) -> ChartResult<()>
    where
        F: Fn(&AxisItem, &f64, usize, &[TickItem]) -> Option<String> + 'static,
    {
        match self.ticks.labels() {
            TickLabels::Linear(handler) => {
                handler.set_callback(callback);
                Ok(())
            }
            _ => Err(self.tick_callback_mismatch("linear")),
        }
    }

    pub fn set_time_tick_callback<F>(&self, callback: F) -> ChartResult<()>
    where
        F: Fn(&AxisItem, &DateTime<Utc>, usize, &[TickItem]) -> Option<String> + 'static,
    {
        match self.ticks.labels() {
            TickLabels::Time(handler) => {
                handler.set_callback(callback);
                Ok(())
            }
            _ => Err(self.tick_callback_mismatch("time")),
        }
    }

    pub fn clear_tick_callback(&self) {
        self.ticks.labels().clear_callback();
    }

    fn tick_callback_mismatch(&self, family: &str) -> ChartError {
        ChartError::InvalidData(format!(
            "axis `{}` of type `{}` does not take {family} tick callbacks",
            self.id, self.axis_type.name
        ))
    }

    /// Native scale item as the engine passes it to hooks, with numeric bounds if set.
    #[must_use]
    pub fn to_item(&self, ticks: Vec<TickItem>) -> AxisItem {
        AxisItem {
            id: self.id.clone(),
            axis_type: self.axis_type.name.clone(),
            chart_id: self.owner.chart.id().to_string(),
            min: self.node.get_f64("min"),
            max: self.node.get_f64("max"),
            ticks,
        }
    }
}

impl HasMinMax for Axis {
    fn min_max(&self) -> &MinMaxHandler {
        &self.min_max
    }
}

impl HasBeginAtZero for Axis {
    fn begin_at_zero_option(&self) -> Option<&ScriptableOption<bool, ScaleContext>> {
        self.begin_at_zero.as_ref()
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("id", &self.id)
            .field("axis_type", &self.axis_type)
            .field("ticks", &self.ticks)
            .field("grid", &self.grid)
            .field("min_max", &self.min_max)
            .field("hooks", &self.hooks)
            .finish()
    }
}
