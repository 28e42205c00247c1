use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::{Key, TickItem};
use crate::native::{NativeFunction, NativeNode, NativeValue};
use crate::scriptable::{AxisItem, CallbackSlot, ScaleOwner, install_proxy};

/// Steps of the engine's scale update, each wrapped by a before/after hook pair.
///
/// Listed in the order the engine runs them; `Update` wraps all the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisHook {
    Update,
    SetDimensions,
    DataLimits,
    BuildTicks,
    TickToLabelConversion,
    CalculateLabelRotation,
    Fit,
}

impl AxisHook {
    pub const ALL: [Self; 7] = [
        Self::Update,
        Self::SetDimensions,
        Self::DataLimits,
        Self::BuildTicks,
        Self::TickToLabelConversion,
        Self::CalculateLabelRotation,
        Self::Fit,
    ];

    #[must_use]
    pub fn before(self) -> HookKey {
        HookKey {
            hook: self,
            after: false,
        }
    }

    #[must_use]
    pub fn after(self) -> HookKey {
        HookKey {
            hook: self,
            after: true,
        }
    }
}

/// Native property name of one side of a hook pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookKey {
    hook: AxisHook,
    after: bool,
}

impl Key for HookKey {
    fn value(self) -> &'static str {
        match (self.hook, self.after) {
            (AxisHook::Update, false) => "beforeUpdate",
            (AxisHook::Update, true) => "afterUpdate",
            (AxisHook::SetDimensions, false) => "beforeSetDimensions",
            (AxisHook::SetDimensions, true) => "afterSetDimensions",
            (AxisHook::DataLimits, false) => "beforeDataLimits",
            (AxisHook::DataLimits, true) => "afterDataLimits",
            (AxisHook::BuildTicks, false) => "beforeBuildTicks",
            (AxisHook::BuildTicks, true) => "afterBuildTicks",
            (AxisHook::TickToLabelConversion, false) => "beforeTickToLabelConversion",
            (AxisHook::TickToLabelConversion, true) => "afterTickToLabelConversion",
            (AxisHook::CalculateLabelRotation, false) => "beforeCalculateLabelRotation",
            (AxisHook::CalculateLabelRotation, true) => "afterCalculateLabelRotation",
            (AxisHook::Fit, false) => "beforeFit",
            (AxisHook::Fit, true) => "afterFit",
        }
    }
}

/// Hooks around the whole update of one axis.
pub trait AxisUpdateCallback {
    fn on_before_update(&self, _axis: &AxisItem) {}

    fn on_after_update(&self, _axis: &AxisItem) {}
}

/// Hooks around sizing of one axis.
pub trait AxisDimensionsCallback {
    fn on_before_set_dimensions(&self, _axis: &AxisItem) {}

    fn on_after_set_dimensions(&self, _axis: &AxisItem) {}
}

/// Hooks around the computation of the axis data range.
pub trait AxisDataLimitsCallback {
    fn on_before_data_limits(&self, _axis: &AxisItem) {}

    /// `axis.min` and `axis.max` carry the resolved numeric bounds, if any.
    fn on_after_data_limits(&self, _axis: &AxisItem) {}
}

/// Hooks around the engine's tick-generation pass of one axis.
pub trait AxisBuildTicksCallback {
    /// Generation is about to start.
    fn on_before_build_ticks(&self, _axis: &AxisItem) {}

    /// Generation finished; `ticks` is the generated set.
    fn on_after_build_ticks(&self, _axis: &AxisItem, _ticks: &[TickItem]) {}
}

/// Hooks around the label callback pass.
pub trait AxisTickToLabelConversionCallback {
    fn on_before_tick_to_label_conversion(&self, _axis: &AxisItem) {}

    fn on_after_tick_to_label_conversion(&self, _axis: &AxisItem) {}
}

/// Hooks around label rotation.
pub trait AxisCalculateLabelRotationCallback {
    fn on_before_calculate_label_rotation(&self, _axis: &AxisItem) {}

    fn on_after_calculate_label_rotation(&self, _axis: &AxisItem) {}
}

/// Hooks around fitting the axis into the chart area.
pub trait AxisFitCallback {
    fn on_before_fit(&self, _axis: &AxisItem) {}

    fn on_after_fit(&self, _axis: &AxisItem) {}
}

/// Before/after proxy pair sharing one user callback.
pub struct AxisHookHandler<H: ?Sized + 'static> {
    hook: AxisHook,
    node: NativeNode,
    slot: CallbackSlot<Rc<H>>,
    before_proxy: NativeFunction,
    after_proxy: NativeFunction,
}

impl<H: ?Sized + 'static> AxisHookHandler<H> {
    fn new(
        hook: AxisHook,
        axis_node: NativeNode,
        owner: &ScaleOwner,
        before: fn(&H, &AxisItem),
        after: fn(&H, &AxisItem),
    ) -> Self {
        let slot: CallbackSlot<Rc<H>> = CallbackSlot::new();
        let proxy = |dispatch: fn(&H, &AxisItem)| {
            let slot = slot.clone();
            let owner = owner.clone();
            NativeFunction::new(move |_, args| {
                if let Some((callback, axis)) = owned_call(hook, &owner, &slot, args) {
                    dispatch(callback.as_ref(), &axis);
                }
                NativeValue::Undefined
            })
        };
        let before_proxy = proxy(before);
        let after_proxy = proxy(after);
        Self {
            hook,
            node: axis_node,
            slot,
            before_proxy,
            after_proxy,
        }
    }

    #[must_use]
    pub fn hook(&self) -> AxisHook {
        self.hook
    }

    #[must_use]
    pub fn callback(&self) -> Option<Rc<H>> {
        self.slot.get()
    }

    /// Installs both proxies for `callback`, or removes both for `None`.
    pub fn set_callback(&self, callback: Option<Rc<H>>) {
        let installed = callback.is_some();
        self.slot.set(callback);
        install_proxy(
            &self.node,
            self.hook.before().value(),
            installed.then_some(&self.before_proxy),
        );
        install_proxy(
            &self.node,
            self.hook.after().value(),
            installed.then_some(&self.after_proxy),
        );
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        let installed = |key: HookKey, proxy: &NativeFunction| {
            self.node
                .function(key.value())
                .is_some_and(|function| function.ptr_eq(proxy))
        };
        installed(self.hook.before(), &self.before_proxy)
            && installed(self.hook.after(), &self.after_proxy)
    }
}

impl<H: ?Sized + 'static> fmt::Debug for AxisHookHandler<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisHookHandler")
            .field("hook", &self.hook)
            .field("callback", &self.slot)
            .finish()
    }
}

fn owned_call<H: ?Sized>(
    hook: AxisHook,
    owner: &ScaleOwner,
    slot: &CallbackSlot<Rc<H>>,
    args: &[NativeValue],
) -> Option<(Rc<H>, AxisItem)> {
    let callback = slot.get()?;
    let axis = args.first().and_then(AxisItem::from_native)?;
    if !axis.is_owned_by(owner) {
        trace!(axis = %owner.axis_id, ?hook, "axis hook invoked for foreign scale");
        return None;
    }
    Some((callback, axis))
}

/// Every hook pair of one axis.
pub struct AxisHooks {
    pub(crate) update: AxisHookHandler<dyn AxisUpdateCallback>,
    pub(crate) dimensions: AxisHookHandler<dyn AxisDimensionsCallback>,
    pub(crate) data_limits: AxisHookHandler<dyn AxisDataLimitsCallback>,
    pub(crate) build_ticks: AxisHookHandler<dyn AxisBuildTicksCallback>,
    pub(crate) tick_to_label_conversion: AxisHookHandler<dyn AxisTickToLabelConversionCallback>,
    pub(crate) calculate_label_rotation: AxisHookHandler<dyn AxisCalculateLabelRotationCallback>,
    pub(crate) fit: AxisHookHandler<dyn AxisFitCallback>,
}

impl AxisHooks {
    pub(crate) fn new(node: &NativeNode, owner: &ScaleOwner) -> Self {
        Self {
            update: AxisHookHandler::<dyn AxisUpdateCallback>::new(
                AxisHook::Update,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_update(axis),
                |callback, axis| callback.on_after_update(axis),
            ),
            dimensions: AxisHookHandler::<dyn AxisDimensionsCallback>::new(
                AxisHook::SetDimensions,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_set_dimensions(axis),
                |callback, axis| callback.on_after_set_dimensions(axis),
            ),
            data_limits: AxisHookHandler::<dyn AxisDataLimitsCallback>::new(
                AxisHook::DataLimits,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_data_limits(axis),
                |callback, axis| callback.on_after_data_limits(axis),
            ),
            build_ticks: AxisHookHandler::<dyn AxisBuildTicksCallback>::new(
                AxisHook::BuildTicks,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_build_ticks(axis),
                |callback, axis| callback.on_after_build_ticks(axis, &axis.ticks),
            ),
            tick_to_label_conversion: AxisHookHandler::<dyn AxisTickToLabelConversionCallback>::new(
                AxisHook::TickToLabelConversion,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_tick_to_label_conversion(axis),
                |callback, axis| callback.on_after_tick_to_label_conversion(axis),
            ),
            calculate_label_rotation: AxisHookHandler::<dyn AxisCalculateLabelRotationCallback>::new(
                AxisHook::CalculateLabelRotation,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_calculate_label_rotation(axis),
                |callback, axis| callback.on_after_calculate_label_rotation(axis),
            ),
            fit: AxisHookHandler::<dyn AxisFitCallback>::new(
                AxisHook::Fit,
                node.clone(),
                owner,
                |callback, axis| callback.on_before_fit(axis),
                |callback, axis| callback.on_after_fit(axis),
            ),
        }
    }

    /// `true` when both proxies of `hook` are in the native tree.
    #[must_use]
    pub fn is_installed(&self, hook: AxisHook) -> bool {
        match hook {
            AxisHook::Update => self.update.is_installed(),
            AxisHook::SetDimensions => self.dimensions.is_installed(),
            AxisHook::DataLimits => self.data_limits.is_installed(),
            AxisHook::BuildTicks => self.build_ticks.is_installed(),
            AxisHook::TickToLabelConversion => self.tick_to_label_conversion.is_installed(),
            AxisHook::CalculateLabelRotation => self.calculate_label_rotation.is_installed(),
            AxisHook::Fit => self.fit.is_installed(),
        }
    }
}

impl fmt::Debug for AxisHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let installed: Vec<AxisHook> = AxisHook::ALL
            .into_iter()
            .filter(|hook| self.is_installed(*hook))
            .collect();
        f.debug_struct("AxisHooks")
            .field("installed", &installed)
            .finish()
    }
}
