pub mod chart_ref;
pub mod color;
pub mod enums;
pub mod font;
pub mod key;
pub mod ticks;

pub use chart_ref::{ChartId, ChartRef, ChartShared};
pub use color::Color;
pub use enums::{AxisKind, Easing, ScaleDataType, ScaleValue};
pub use font::{FontItem, FontStyle, FontWeight, PaddingItem};
pub use key::{EnumKey, Key, check_key};
pub use ticks::TickItem;
