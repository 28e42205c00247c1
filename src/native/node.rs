use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{NativeFunction, NativeValue};

/// Shared handle to one object of the native tree.
///
/// Clones alias the same object, the way references to a script object do.
/// Borrows are never held across calls into function values.
#[derive(Clone, Default)]
pub struct NativeNode {
    properties: Rc<RefCell<IndexMap<String, NativeValue>>>,
}

impl NativeNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value under `key`, or `Undefined` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> NativeValue {
        self.properties
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.properties.borrow().contains_key(key)
    }

    /// Writes `value` under `key`. Writing `Undefined` removes the key.
    pub fn set(&self, key: &str, value: impl Into<NativeValue>) {
        let value = value.into();
        if value.is_undefined() {
            self.remove(key);
            return;
        }
        self.properties.borrow_mut().insert(key.to_owned(), value);
    }

    pub fn remove(&self, key: &str) -> Option<NativeValue> {
        self.properties.borrow_mut().shift_remove(key)
    }

    /// Returns the child object under `key`, creating it when missing or
    /// when the slot holds a non-object value.
    pub fn child(&self, key: &str) -> NativeNode {
        if let NativeValue::Object(node) = self.get(key) {
            return node;
        }
        let node = NativeNode::new();
        self.properties
            .borrow_mut()
            .insert(key.to_owned(), NativeValue::Object(node.clone()));
        node
    }

    #[must_use]
    pub fn child_if_present(&self, key: &str) -> Option<NativeNode> {
        match self.get(key) {
            NativeValue::Object(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).as_f64()
    }

    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).as_bool()
    }

    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            NativeValue::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn function(&self, key: &str) -> Option<NativeFunction> {
        match self.get(key) {
            NativeValue::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Calls the function stored under `key` and returns its result.
    ///
    /// Returns `None` when the slot does not hold a function.
    pub fn call(&self, key: &str, this: &NativeValue, args: &[NativeValue]) -> Option<NativeValue> {
        // clone out first so the callee may mutate this node
        let function = self.function(key)?;
        Some(function.call(this, args))
    }

    /// Appends `value` to the array under `key`, creating the array if needed.
    pub fn push(&self, key: &str, value: impl Into<NativeValue>) -> usize {
        let mut properties = self.properties.borrow_mut();
        let slot = properties
            .entry(key.to_owned())
            .or_insert_with(|| NativeValue::Array(Vec::new()));
        if !matches!(slot, NativeValue::Array(_)) {
            *slot = NativeValue::Array(Vec::new());
        }
        match slot {
            NativeValue::Array(items) => {
                items.push(value.into());
                items.len()
            }
            _ => 0,
        }
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> IndexMap<String, NativeValue> {
        self.properties.borrow().clone()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.properties, &other.properties)
    }
}

impl fmt::Debug for NativeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.properties.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::NativeNode;
    use crate::native::{NativeFunction, NativeValue};

    #[test]
    fn child_is_shared_between_handles() {
        let root = NativeNode::new();
        root.child("scales").child("x").set("type", "linear");
        let x = root.child("scales").child("x");
        assert_eq!(x.get_string("type").as_deref(), Some("linear"));
    }

    #[test]
    fn setting_undefined_removes_the_key() {
        let node = NativeNode::new();
        node.set("min", 4.0);
        node.set("min", NativeValue::Undefined);
        assert!(!node.has("min"));
    }

    #[test]
    fn call_releases_borrow_before_invoking() {
        let node = NativeNode::new();
        let inner = node.clone();
        node.set(
            "callback",
            NativeFunction::new(move |_, _| {
                inner.set("touched", true);
                NativeValue::Number(1.0)
            }),
        );
        let result = node.call("callback", &NativeValue::Undefined, &[]);
        assert_eq!(result, Some(NativeValue::Number(1.0)));
        assert_eq!(node.get_bool("touched"), Some(true));
    }

    #[test]
    fn push_replaces_non_array_slot() {
        let node = NativeNode::new();
        node.set("datasets", 1.0);
        assert_eq!(node.push("datasets", "a"), 1);
        assert_eq!(node.push("datasets", "b"), 2);
    }
}
