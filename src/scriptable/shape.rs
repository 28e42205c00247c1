use chrono::{DateTime, Utc};

use crate::core::{
    Color, Easing, EnumKey, FontItem, FontStyle, FontWeight, Key, PaddingItem, ScaleValue,
};
use crate::native::NativeValue;

/// Conversion between a typed option value and the native shape the engine expects.
///
/// `from_native` returning `None` means the native value has the wrong shape;
/// `is_valid` rejects values of the right shape the engine cannot use.
pub trait NativeShape: Clone + 'static {
    fn to_native(&self) -> NativeValue;

    fn from_native(value: &NativeValue) -> Option<Self>;

    fn is_valid(&self) -> bool {
        true
    }
}

impl NativeShape for f64 {
    fn to_native(&self) -> NativeValue {
        NativeValue::Number(*self)
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        value.as_f64()
    }

    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl NativeShape for bool {
    fn to_native(&self) -> NativeValue {
        NativeValue::Bool(*self)
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        value.as_bool()
    }
}

impl NativeShape for String {
    fn to_native(&self) -> NativeValue {
        NativeValue::String(self.clone())
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl NativeShape for Color {
    fn to_native(&self) -> NativeValue {
        NativeValue::String(self.to_string())
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        value.as_str().and_then(|css| Color::parse(css).ok())
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl NativeShape for FontItem {
    fn to_native(&self) -> NativeValue {
        NativeValue::Object(self.to_node())
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        value.as_object().map(FontItem::from_node)
    }

    fn is_valid(&self) -> bool {
        FontItem::is_valid(self)
    }
}

impl NativeShape for PaddingItem {
    fn to_native(&self) -> NativeValue {
        NativeValue::Object(self.to_node())
    }

    // the engine also accepts a bare number as uniform padding
    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Object(node) => Some(PaddingItem::from_node(node)),
            NativeValue::Number(side) => Some(PaddingItem::uniform(*side)),
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        PaddingItem::is_valid(self)
    }
}

impl NativeShape for ScaleValue {
    fn to_native(&self) -> NativeValue {
        match self {
            Self::Number(value) => NativeValue::Number(*value),
            Self::Text(value) => NativeValue::String(value.clone()),
            Self::Date(value) => NativeValue::Number(value.timestamp_millis() as f64),
        }
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Number(value) => Some(Self::Number(*value)),
            NativeValue::String(value) => Some(Self::Text(value.clone())),
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            Self::Number(value) => value.is_finite(),
            Self::Text(_) | Self::Date(_) => true,
        }
    }
}

impl NativeShape for DateTime<Utc> {
    fn to_native(&self) -> NativeValue {
        NativeValue::Number(self.timestamp_millis() as f64)
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        let millis = value.as_f64().filter(|millis| millis.is_finite())?;
        DateTime::from_timestamp_millis(millis as i64)
    }
}

/// `None` maps to an absent property, letting the engine compute the value itself.
impl<T: NativeShape> NativeShape for Option<T> {
    fn to_native(&self) -> NativeValue {
        self.as_ref()
            .map(NativeShape::to_native)
            .unwrap_or(NativeValue::Undefined)
    }

    fn from_native(value: &NativeValue) -> Option<Self> {
        if value.is_nullish() {
            return Some(None);
        }
        T::from_native(value).map(Some)
    }

    fn is_valid(&self) -> bool {
        self.as_ref().is_none_or(NativeShape::is_valid)
    }
}

macro_rules! enum_key_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NativeShape for $ty {
                fn to_native(&self) -> NativeValue {
                    NativeValue::String(self.value().to_owned())
                }

                fn from_native(value: &NativeValue) -> Option<Self> {
                    value.as_str().and_then(<$ty as EnumKey>::from_value)
                }
            }
        )*
    };
}

enum_key_shape!(Easing, FontStyle, FontWeight);

#[cfg(test)]
mod tests {
    use super::NativeShape;
    use crate::core::{Color, Easing, PaddingItem, ScaleValue};
    use crate::native::NativeValue;

    #[test]
    fn color_is_written_as_css() {
        let native = Color::rgba(0, 0, 0, 0.5).to_native();
        assert_eq!(native, NativeValue::String("rgba(0,0,0,0.5)".to_owned()));
        assert_eq!(Color::from_native(&native), Some(Color::rgba(0, 0, 0, 0.5)));
    }

    #[test]
    fn easing_maps_to_its_key() {
        assert_eq!(
            Easing::EaseInOutQuad.to_native(),
            NativeValue::String("easeInOutQuad".to_owned())
        );
        assert_eq!(
            Easing::from_native(&NativeValue::String("linear".to_owned())),
            Some(Easing::Linear)
        );
    }

    #[test]
    fn non_finite_numbers_are_invalid() {
        assert!(!f64::NAN.is_valid());
        assert!(!ScaleValue::Number(f64::INFINITY).is_valid());
    }

    #[test]
    fn padding_accepts_bare_number() {
        assert_eq!(
            PaddingItem::from_native(&NativeValue::Number(3.0)),
            Some(PaddingItem::uniform(3.0))
        );
    }

    #[test]
    fn optional_none_is_absent() {
        assert!(None::<f64>.to_native().is_undefined());
        assert_eq!(Option::<f64>::from_native(&NativeValue::Null), Some(None));
    }
}
