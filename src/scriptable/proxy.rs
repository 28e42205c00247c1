use tracing::debug;

use crate::native::{NativeFunction, NativeNode};

use super::{
    CallbackContext, CallbackSlot, DefaultValue, NativeShape, ResultChecker, Scriptable,
    option_value,
};

/// Builds the stable native function installed in place of a scriptable value.
///
/// The proxy reads the slot at every call, so replacing the callback never
/// requires a new proxy.
pub fn scriptable_proxy<T, C>(
    owner: C::Owner,
    slot: CallbackSlot<Scriptable<T, C>>,
    default: DefaultValue<T>,
    checker: Option<ResultChecker<T>>,
) -> NativeFunction
where
    T: NativeShape,
    C: CallbackContext,
{
    NativeFunction::new(move |this, args| {
        let context = C::from_native(&owner, this, args);
        let callback = slot.get();
        option_value(&context, callback.as_ref(), &default, checker.as_ref()).to_native()
    })
}

/// Installs `proxy` under `key`, or removes whatever `key` holds when `proxy` is `None`.
///
/// Reinstalling the same proxy is a no-op as far as the engine can tell.
pub fn install_proxy(node: &NativeNode, key: &'static str, proxy: Option<&NativeFunction>) {
    match proxy {
        Some(proxy) => {
            debug!(key, "install callback proxy");
            node.set(key, proxy.clone());
        }
        None => {
            if node.remove(key).is_some() {
                debug!(key, "remove option value");
            }
        }
    }
}
