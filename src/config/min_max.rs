use std::fmt;
use std::rc::Rc;

use crate::core::{Key, ScaleDataType, ScaleValue};
use crate::error::ChartResult;
use crate::native::{NativeFunction, NativeNode, NativeValue};
use crate::scriptable::{
    OptionMode, ResultChecker, ScaleContext, ScaleOwner, ScriptableOption, default_value,
};

#[derive(Debug, Clone, Copy)]
pub(crate) enum MinMaxProperty {
    Min,
    Max,
    SuggestedMin,
    SuggestedMax,
}

impl Key for MinMaxProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::SuggestedMin => "suggestedMin",
            Self::SuggestedMax => "suggestedMax",
        }
    }
}

type BoundOption = ScriptableOption<Option<ScaleValue>, ScaleContext>;

/// One scriptable bound, read back in the axis data type.
///
/// Date bounds live in the native tree as epoch milliseconds; `value` and
/// `resolve` turn them back into dates.
pub struct Bound {
    data_type: ScaleDataType,
    option: BoundOption,
}

impl Bound {
    /// The underlying option, exactly as the native tree holds it.
    #[must_use]
    pub fn option(&self) -> &BoundOption {
        &self.option
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.option.key()
    }

    #[must_use]
    pub fn mode(&self) -> OptionMode {
        self.option.mode()
    }

    #[must_use]
    pub fn is_proxy_installed(&self) -> bool {
        self.option.is_proxy_installed()
    }

    /// Stores `value`; kinds other than the axis data type are rejected.
    pub fn set_constant(&self, value: Option<ScaleValue>) -> ChartResult<()> {
        self.option.set_constant(value)
    }

    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(&ScaleContext) -> Option<ScaleValue> + 'static,
    {
        self.option
            .set_callback(move |context| callback(context).map(Some));
    }

    pub fn clear_callback(&self) {
        self.option.clear_callback();
    }

    pub fn set_native(&self, function: NativeFunction) {
        self.option.set_native(function);
    }

    /// The stored constant, if any.
    #[must_use]
    pub fn value(&self) -> Option<ScaleValue> {
        self.option.value().flatten().and_then(|value| value.coerce(self.data_type))
    }

    /// Resolves the bound the way the engine does for one invocation.
    pub fn resolve(&self, this: &NativeValue, args: &[NativeValue]) -> Option<ScaleValue> {
        self.option
            .resolve(this, args)
            .and_then(|value| value.coerce(self.data_type))
    }
}

impl fmt::Debug for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("key", &self.option.key())
            .field("mode", &self.option.mode())
            .finish()
    }
}

/// Scriptable `min`, `max`, `suggestedMin` and `suggestedMax` of one axis.
///
/// Values whose kind does not match the axis data type resolve to absent, so
/// the engine computes the bound from data.
pub struct MinMaxHandler {
    data_type: ScaleDataType,
    min: Bound,
    max: Bound,
    suggested_min: Bound,
    suggested_max: Bound,
}

impl MinMaxHandler {
    pub(crate) fn new(node: NativeNode, owner: &ScaleOwner) -> Self {
        let data_type = owner.data_type;
        let bound = |property: MinMaxProperty| Bound {
            data_type,
            option: ScriptableOption::with_checker(
                node.clone(),
                property,
                owner.clone(),
                default_value(None),
                matches_data_type(data_type),
            ),
        };
        Self {
            data_type,
            min: bound(MinMaxProperty::Min),
            max: bound(MinMaxProperty::Max),
            suggested_min: bound(MinMaxProperty::SuggestedMin),
            suggested_max: bound(MinMaxProperty::SuggestedMax),
        }
    }

    #[must_use]
    pub fn data_type(&self) -> ScaleDataType {
        self.data_type
    }

    #[must_use]
    pub fn min(&self) -> &Bound {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &Bound {
        &self.max
    }

    #[must_use]
    pub fn suggested_min(&self) -> &Bound {
        &self.suggested_min
    }

    #[must_use]
    pub fn suggested_max(&self) -> &Bound {
        &self.suggested_max
    }

    pub(crate) fn option(&self, property: MinMaxProperty) -> &Bound {
        match property {
            MinMaxProperty::Min => &self.min,
            MinMaxProperty::Max => &self.max,
            MinMaxProperty::SuggestedMin => &self.suggested_min,
            MinMaxProperty::SuggestedMax => &self.suggested_max,
        }
    }
}

fn matches_data_type(data_type: ScaleDataType) -> ResultChecker<Option<ScaleValue>> {
    Rc::new(move |value: &Option<ScaleValue>| {
        value
            .as_ref()
            .is_none_or(|value| value.data_type() == data_type)
    })
}

impl fmt::Debug for MinMaxHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxHandler")
            .field("data_type", &self.data_type)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}
