use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::key::{EnumKey, Key};

/// Animation easing curves understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    #[default]
    EaseOutQuart,
    EaseInOutQuart,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Key for Easing {
    fn value(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInSine => "easeInSine",
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseInExpo => "easeInExpo",
            Self::EaseOutExpo => "easeOutExpo",
            Self::EaseInOutExpo => "easeInOutExpo",
            Self::EaseInBounce => "easeInBounce",
            Self::EaseOutBounce => "easeOutBounce",
            Self::EaseInOutBounce => "easeInOutBounce",
        }
    }
}

impl EnumKey for Easing {
    fn values() -> &'static [Self] {
        &[
            Self::Linear,
            Self::EaseInQuad,
            Self::EaseOutQuad,
            Self::EaseInOutQuad,
            Self::EaseInCubic,
            Self::EaseOutCubic,
            Self::EaseInOutCubic,
            Self::EaseInQuart,
            Self::EaseOutQuart,
            Self::EaseInOutQuart,
            Self::EaseInSine,
            Self::EaseOutSine,
            Self::EaseInOutSine,
            Self::EaseInExpo,
            Self::EaseOutExpo,
            Self::EaseInOutExpo,
            Self::EaseInBounce,
            Self::EaseOutBounce,
            Self::EaseInOutBounce,
        ]
    }
}

/// Geometry family of an axis type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    Cartesian,
    Radial,
}

/// Kind of data an axis maps, which decides how min/max callbacks are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleDataType {
    Number,
    Text,
    Date,
}

/// Value returned by min/max callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaleValue {
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
}

impl ScaleValue {
    #[must_use]
    pub fn data_type(&self) -> ScaleDataType {
        match self {
            Self::Number(_) => ScaleDataType::Number,
            Self::Text(_) => ScaleDataType::Text,
            Self::Date(_) => ScaleDataType::Date,
        }
    }

    /// Reads this value as a bound of an axis mapping `data_type`.
    ///
    /// Date axes store epoch milliseconds in the native tree, so numbers come
    /// back as dates there. Any other mismatch yields `None`.
    #[must_use]
    pub fn coerce(self, data_type: ScaleDataType) -> Option<Self> {
        match (self, data_type) {
            (Self::Number(millis), ScaleDataType::Date) if millis.is_finite() => {
                DateTime::from_timestamp_millis(millis as i64).map(Self::Date)
            }
            (value, data_type) if value.data_type() == data_type => Some(value),
            (value, data_type) => {
                trace!(?value, ?data_type, "bound does not match axis data type");
                None
            }
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ScaleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for ScaleValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}
