//! chart-options: typed, scriptable option layer over a chart engine's native option tree.
//!
//! Every option is either a constant or a user callback. Callbacks are never
//! handed to the engine directly: each option installs one stable proxy
//! function that builds a typed context per invocation, runs the callback
//! when the context belongs to the owning chart, and falls back to a default
//! otherwise.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod native;
pub mod scriptable;
pub mod telemetry;

pub use config::{Axis, AxisTypeRegistry, Chart, HasBeginAtZero, HasLineOptions, HasMinMax};
pub use engine::Engine;
pub use error::{ChartError, ChartResult};
pub use native::{NativeFunction, NativeNode, NativeValue};
pub use scriptable::{OptionMode, ScriptableOption};
