use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::core::{Color, Key};
use crate::error::{ChartError, ChartResult};
use crate::native::{NativeFunction, NativeNode, NativeValue};

use super::{
    CallbackContext, CallbackSlot, DefaultValue, NativeShape, ResultChecker, Scriptable,
    install_proxy, scriptable_proxy,
};

/// Which representation an option currently has in the native tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMode {
    /// Nothing stored; the engine applies its own default.
    Unset,
    /// A plain value is stored under the key.
    Constant,
    /// The option's proxy is stored and a user callback is set.
    Callback,
    /// A foreign native function is stored under the key.
    Native,
}

/// One option that is either a constant or a user callback.
///
/// Setting one representation always clears the other: `set_constant`
/// empties the callback slot and overwrites the proxy, `set_callback`
/// replaces any constant with the proxy.
pub struct ScriptableOption<T: NativeShape, C: CallbackContext> {
    key: &'static str,
    node: NativeNode,
    slot: CallbackSlot<Scriptable<T, C>>,
    proxy: NativeFunction,
    default: DefaultValue<T>,
    checker: Option<ResultChecker<T>>,
}

impl<T: NativeShape, C: CallbackContext> ScriptableOption<T, C> {
    pub fn new(node: NativeNode, key: impl Key, owner: C::Owner, default: DefaultValue<T>) -> Self {
        Self::build(node, key.value(), owner, default, None)
    }

    /// Same as `new`, with an acceptance rule for constants and callback results.
    pub fn with_checker(
        node: NativeNode,
        key: impl Key,
        owner: C::Owner,
        default: DefaultValue<T>,
        checker: ResultChecker<T>,
    ) -> Self {
        Self::build(node, key.value(), owner, default, Some(checker))
    }

    fn build(
        node: NativeNode,
        key: &'static str,
        owner: C::Owner,
        default: DefaultValue<T>,
        checker: Option<ResultChecker<T>>,
    ) -> Self {
        let slot = CallbackSlot::new();
        let proxy = scriptable_proxy(owner, slot.clone(), Rc::clone(&default), checker.clone());
        Self {
            key,
            node,
            slot,
            proxy,
            default,
            checker,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn node(&self) -> &NativeNode {
        &self.node
    }

    #[must_use]
    pub fn proxy(&self) -> &NativeFunction {
        &self.proxy
    }

    #[must_use]
    pub fn mode(&self) -> OptionMode {
        match self.node.get(self.key) {
            NativeValue::Undefined => OptionMode::Unset,
            NativeValue::Function(function) if function.ptr_eq(&self.proxy) => {
                if self.slot.is_set() {
                    OptionMode::Callback
                } else {
                    OptionMode::Unset
                }
            }
            NativeValue::Function(_) => OptionMode::Native,
            _ => OptionMode::Constant,
        }
    }

    #[must_use]
    pub fn is_proxy_installed(&self) -> bool {
        self.node
            .function(self.key)
            .is_some_and(|function| function.ptr_eq(&self.proxy))
    }

    #[must_use]
    pub fn callback(&self) -> Option<Scriptable<T, C>> {
        self.slot.get()
    }

    pub fn set_callback<F>(&self, callback: F)
    where
        F: Fn(&C) -> Option<T> + 'static,
    {
        self.set_scriptable(Some(Rc::new(callback)));
    }

    /// Stores `callback` and installs the proxy; `None` removes the property.
    pub fn set_scriptable(&self, callback: Option<Scriptable<T, C>>) {
        let installed = callback.is_some();
        self.slot.set(callback);
        install_proxy(&self.node, self.key, installed.then_some(&self.proxy));
    }

    pub fn clear_callback(&self) {
        self.set_scriptable(None);
    }

    /// Clears the callback slot and writes `value` under the key.
    pub fn set_constant(&self, value: T) -> ChartResult<()> {
        if !self.accepts(&value) {
            return Err(ChartError::InvalidValue {
                key: self.key,
                reason: "value rejected for this option".to_owned(),
            });
        }
        self.slot.clear();
        debug!(key = self.key, "store constant option value");
        self.node.set(self.key, value.to_native());
        Ok(())
    }

    /// Binds an engine-side function directly, bypassing the typed callback.
    pub fn set_native(&self, function: NativeFunction) {
        self.slot.clear();
        debug!(key = self.key, "store native function");
        self.node.set(self.key, function);
    }

    /// The stored constant, if the option is in constant mode and has the right shape.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match self.node.get(self.key) {
            NativeValue::Function(_) | NativeValue::Undefined => None,
            native => T::from_native(&native),
        }
    }

    #[must_use]
    pub fn value_or_default(&self) -> T {
        self.value().unwrap_or_else(|| self.default_value())
    }

    #[must_use]
    pub fn default_value(&self) -> T {
        (self.default)()
    }

    /// Resolves the option the way the engine does for one invocation.
    pub fn resolve(&self, this: &NativeValue, args: &[NativeValue]) -> T {
        let native = match self.node.get(self.key) {
            NativeValue::Function(function) => function.call(this, args),
            native => native,
        };
        T::from_native(&native)
            .filter(|value| value.is_valid())
            .unwrap_or_else(|| self.default_value())
    }

    fn accepts(&self, value: &T) -> bool {
        value.is_valid() && self.checker.as_ref().is_none_or(|check| check(value))
    }
}

impl<C: CallbackContext> ScriptableOption<Color, C> {
    /// Parses a CSS color string and stores it as a constant.
    pub fn set_css(&self, css: &str) -> ChartResult<()> {
        self.set_constant(Color::parse(css)?)
    }
}

impl<T: NativeShape, C: CallbackContext> fmt::Debug for ScriptableOption<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptableOption")
            .field("key", &self.key)
            .field("mode", &self.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionMode, ScriptableOption};
    use crate::core::{ChartRef, Key};
    use crate::native::{NativeFunction, NativeNode, NativeValue};
    use crate::scriptable::{DatasetContext, default_value, non_negative};

    #[derive(Clone, Copy)]
    struct Radius;

    impl Key for Radius {
        fn value(self) -> &'static str {
            "radius"
        }
    }

    fn option() -> ScriptableOption<f64, DatasetContext> {
        ScriptableOption::with_checker(
            NativeNode::new(),
            Radius,
            ChartRef::detached(),
            default_value(3.0),
            non_negative(),
        )
    }

    #[test]
    fn starts_unset() {
        let option = option();
        assert_eq!(option.mode(), OptionMode::Unset);
        assert_eq!(option.value(), None);
        assert_eq!(option.value_or_default(), 3.0);
    }

    #[test]
    fn rejected_constant_leaves_previous_state() {
        let option = option();
        option.set_constant(5.0).expect("valid constant");
        assert!(option.set_constant(-1.0).is_err());
        assert_eq!(option.value(), Some(5.0));
    }

    #[test]
    fn callback_then_constant_removes_proxy() {
        let option = option();
        option.set_callback(|_| Some(1.0));
        assert_eq!(option.mode(), OptionMode::Callback);
        assert!(option.is_proxy_installed());

        option.set_constant(7.0).expect("constant");
        assert_eq!(option.mode(), OptionMode::Constant);
        assert!(!option.is_proxy_installed());
        assert!(option.callback().is_none());
    }

    #[test]
    fn native_function_is_reported_as_native() {
        let option = option();
        option.set_callback(|_| Some(1.0));
        option.set_native(NativeFunction::new(|_, _| NativeValue::Number(9.0)));
        assert_eq!(option.mode(), OptionMode::Native);
        assert!(option.callback().is_none());
        assert_eq!(option.resolve(&NativeValue::Undefined, &[]), 9.0);
    }
}
