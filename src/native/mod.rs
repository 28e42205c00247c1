//! Native option tree handed to the rendering engine.
//!
//! The engine reads plain values from this tree and calls function values
//! when it finds them, which is how scriptable options reach user code.

mod json;
mod node;
mod value;

pub use json::{OPTIONS_JSON_SCHEMA_V1, OptionsJsonContractV1};
pub use node::NativeNode;
pub use value::{NativeFunction, NativeValue};
