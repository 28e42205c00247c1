use std::fmt;
use std::rc::Rc;

use super::NativeNode;

type NativeFn = dyn Fn(&NativeValue, &[NativeValue]) -> NativeValue;

/// Function value stored in the native tree.
///
/// The engine invokes it with a receiver (`this`) and positional arguments.
/// Clones share the same closure, and equality is identity.
#[derive(Clone)]
pub struct NativeFunction {
    inner: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&NativeValue, &[NativeValue]) -> NativeValue + 'static,
    {
        Self {
            inner: Rc::new(function),
        }
    }

    pub fn call(&self, this: &NativeValue, args: &[NativeValue]) -> NativeValue {
        (self.inner)(this, args)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({:p})", Rc::as_ptr(&self.inner).cast::<()>())
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// One value slot of the native tree.
#[derive(Debug, Clone, Default)]
pub enum NativeValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<NativeValue>),
    Object(NativeNode),
    Function(NativeFunction),
}

impl NativeValue {
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `true` for `undefined` and `null`.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&NativeNode> {
        match self {
            Self::Object(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[NativeValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_function(&self) -> Option<&NativeFunction> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Index-like number: finite and non-negative, truncated.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Number(value) if value.is_finite() && *value >= 0.0 => Some(*value as usize),
            _ => None,
        }
    }
}

impl PartialEq for NativeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b) || a.entries() == b.entries(),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for NativeValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NativeNode> for NativeValue {
    fn from(node: NativeNode) -> Self {
        Self::Object(node)
    }
}

impl From<NativeFunction> for NativeValue {
    fn from(function: NativeFunction) -> Self {
        Self::Function(function)
    }
}

#[cfg(test)]
mod tests {
    use super::{NativeFunction, NativeValue};
    use crate::native::NativeNode;

    #[test]
    fn function_equality_is_identity() {
        let first = NativeFunction::new(|_, _| NativeValue::Null);
        let second = NativeFunction::new(|_, _| NativeValue::Null);
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn objects_compare_by_content() {
        let a = NativeNode::new();
        a.set("size", 12.0);
        let b = NativeNode::new();
        b.set("size", 12.0);
        assert_eq!(NativeValue::Object(a), NativeValue::Object(b));
    }

    #[test]
    fn index_rejects_negative_and_nan() {
        assert_eq!(NativeValue::Number(3.9).as_index(), Some(3));
        assert_eq!(NativeValue::Number(-1.0).as_index(), None);
        assert_eq!(NativeValue::Number(f64::NAN).as_index(), None);
    }
}
