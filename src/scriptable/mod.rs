//! Scriptable option binding.
//!
//! An option is stored either as a constant under its native key or as a
//! proxy function that the engine calls per render. The proxy builds a
//! typed context from the raw call, runs the user callback when the context
//! is consistent, and otherwise falls back to the option's default.

mod context;
mod option;
mod proxy;
mod resolve;
mod shape;
mod slot;

pub use context::{
    AxisItem, CallbackContext, ContextKey, DatasetContext, ScaleContext, ScaleOwner,
};
pub use option::{OptionMode, ScriptableOption};
pub use proxy::{install_proxy, scriptable_proxy};
pub use resolve::{
    DefaultValue, ResultChecker, Scriptable, default_value, non_negative, option_value,
};
pub use shape::NativeShape;
pub use slot::CallbackSlot;
