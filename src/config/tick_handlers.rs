use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::core::{Key, ScaleDataType, TickItem};
use crate::native::{NativeFunction, NativeNode, NativeValue};
use crate::scriptable::{AxisItem, CallbackSlot, ScaleOwner, install_proxy};

#[derive(Debug, Clone, Copy)]
enum TickCallbackProperty {
    Callback,
}

impl Key for TickCallbackProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Callback => "callback",
        }
    }
}

/// How one axis family reads tick values and formats labels without a callback.
pub trait TickFormat: 'static {
    type Value: 'static;

    fn tick_value(tick: &TickItem) -> Option<Self::Value>;

    fn default_label(tick: &TickItem) -> String;
}

/// Category axes: the tick value is the category label.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTicks;

impl TickFormat for CategoryTicks {
    type Value = String;

    fn tick_value(tick: &TickItem) -> Option<String> {
        Some(Self::default_label(tick))
    }

    fn default_label(tick: &TickItem) -> String {
        tick.label
            .clone()
            .unwrap_or_else(|| format!("{:?}", tick.value))
    }
}

/// Linear axes: the tick value is a number, printed with its decimal part.
#[derive(Debug, Clone, Copy)]
pub struct LinearTicks;

impl TickFormat for LinearTicks {
    type Value = f64;

    fn tick_value(tick: &TickItem) -> Option<f64> {
        tick.value.is_finite().then_some(tick.value)
    }

    fn default_label(tick: &TickItem) -> String {
        format!("{:?}", tick.value)
    }
}

/// Time axes: the tick value is epoch milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct TimeTicks;

impl TickFormat for TimeTicks {
    type Value = DateTime<Utc>;

    fn tick_value(tick: &TickItem) -> Option<DateTime<Utc>> {
        if !tick.value.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(tick.value as i64)
    }

    fn default_label(tick: &TickItem) -> String {
        if let Some(label) = &tick.label {
            return label.clone();
        }
        Self::tick_value(tick)
            .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| format!("{:?}", tick.value))
    }
}

/// Label callback: `(axis, value, index, ticks) -> label`. `None` keeps the default label.
pub type TickCallback<V> = Rc<dyn Fn(&AxisItem, &V, usize, &[TickItem]) -> Option<String>>;

/// Single-value resolver installed under `ticks.callback`.
///
/// The engine calls the proxy once per tick with `this` set to the scale.
pub struct TickHandler<K: TickFormat> {
    node: NativeNode,
    slot: CallbackSlot<TickCallback<K::Value>>,
    proxy: NativeFunction,
    format: PhantomData<K>,
}

impl<K: TickFormat> TickHandler<K> {
    pub fn new(ticks_node: NativeNode, owner: ScaleOwner) -> Self {
        let slot: CallbackSlot<TickCallback<K::Value>> = CallbackSlot::new();
        let proxy_slot = slot.clone();
        let proxy = NativeFunction::new(move |this, args| {
            let value = args.first().and_then(NativeValue::as_f64).unwrap_or(f64::NAN);
            let index = args.get(1).and_then(NativeValue::as_index).unwrap_or(0);
            let ticks = args.get(2).map(TickItem::list_from_native).unwrap_or_default();
            let tick = ticks
                .get(index)
                .filter(|tick| tick.value == value)
                .cloned()
                .unwrap_or_else(|| TickItem::new(value));
            let label =
                resolve_tick_label::<K>(&owner, this, &tick, index, &ticks, proxy_slot.get());
            NativeValue::String(label)
        });
        Self {
            node: ticks_node,
            slot,
            proxy,
            format: PhantomData,
        }
    }

    #[must_use]
    pub fn callback(&self) -> Option<TickCallback<K::Value>> {
        self.slot.get()
    }

    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(&AxisItem, &K::Value, usize, &[TickItem]) -> Option<String> + 'static,
    {
        self.set_scriptable(Some(Rc::new(callback)));
    }

    pub fn set_scriptable(&self, callback: Option<TickCallback<K::Value>>) {
        let installed = callback.is_some();
        self.slot.set(callback);
        install_proxy(
            &self.node,
            TickCallbackProperty::Callback.value(),
            installed.then_some(&self.proxy),
        );
    }

    pub fn clear_callback(&self) {
        self.set_scriptable(None);
    }

    #[must_use]
    pub fn proxy(&self) -> &NativeFunction {
        &self.proxy
    }

    #[must_use]
    pub fn is_proxy_installed(&self) -> bool {
        self.node
            .function(TickCallbackProperty::Callback.value())
            .is_some_and(|function| function.ptr_eq(&self.proxy))
    }
}

impl<K: TickFormat> fmt::Debug for TickHandler<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickHandler")
            .field("callback", &self.slot)
            .finish()
    }
}

fn resolve_tick_label<K: TickFormat>(
    owner: &ScaleOwner,
    this: &NativeValue,
    tick: &TickItem,
    index: usize,
    ticks: &[TickItem],
    callback: Option<TickCallback<K::Value>>,
) -> String {
    let Some(axis) = AxisItem::from_native(this).filter(|axis| axis.is_owned_by(owner)) else {
        trace!(axis = %owner.axis_id, "tick callback invoked for foreign scale");
        return K::default_label(tick);
    };
    let Some(callback) = callback else {
        return K::default_label(tick);
    };
    K::tick_value(tick)
        .and_then(|value| callback(&axis, &value, index, ticks))
        .unwrap_or_else(|| K::default_label(tick))
}

/// Tick label resolver matching the data type of the owning axis.
#[derive(Debug)]
pub enum TickLabels {
    Category(TickHandler<CategoryTicks>),
    Linear(TickHandler<LinearTicks>),
    Time(TickHandler<TimeTicks>),
}

impl TickLabels {
    pub fn for_data_type(ticks_node: NativeNode, owner: ScaleOwner) -> Self {
        match owner.data_type {
            ScaleDataType::Text => Self::Category(TickHandler::new(ticks_node, owner)),
            ScaleDataType::Number => Self::Linear(TickHandler::new(ticks_node, owner)),
            ScaleDataType::Date => Self::Time(TickHandler::new(ticks_node, owner)),
        }
    }

    pub fn clear_callback(&self) {
        match self {
            Self::Category(handler) => handler.clear_callback(),
            Self::Linear(handler) => handler.clear_callback(),
            Self::Time(handler) => handler.clear_callback(),
        }
    }

    /// Label the engine prints when no callback is installed.
    #[must_use]
    pub fn default_label(&self, tick: &TickItem) -> String {
        match self {
            Self::Category(_) => CategoryTicks::default_label(tick),
            Self::Linear(_) => LinearTicks::default_label(tick),
            Self::Time(_) => TimeTicks::default_label(tick),
        }
    }

    #[must_use]
    pub fn has_callback(&self) -> bool {
        match self {
            Self::Category(handler) => handler.callback().is_some(),
            Self::Linear(handler) => handler.callback().is_some(),
            Self::Time(handler) => handler.callback().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryTicks, LinearTicks, TickFormat, TimeTicks};
    use crate::core::TickItem;

    #[test]
    fn linear_default_keeps_decimal_part() {
        assert_eq!(LinearTicks::default_label(&TickItem::new(1000.0)), "1000.0");
        assert_eq!(LinearTicks::default_label(&TickItem::new(0.25)), "0.25");
    }

    #[test]
    fn category_default_prefers_label() {
        let tick = TickItem::new(2.0).with_label("March");
        assert_eq!(CategoryTicks::default_label(&tick), "March");
    }

    #[test]
    fn time_default_formats_epoch_millis() {
        let tick = TickItem::new(0.0);
        assert_eq!(TimeTicks::default_label(&tick), "1970-01-01 00:00:00");
    }
}
