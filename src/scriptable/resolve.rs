use std::rc::Rc;

use tracing::trace;

use super::{CallbackContext, NativeShape};

/// User callback of a scriptable option. `None` means "no opinion, use the default".
pub type Scriptable<T, C> = Rc<dyn Fn(&C) -> Option<T>>;

/// Supplies the fallback value of an option at invocation time.
pub type DefaultValue<T> = Rc<dyn Fn() -> T>;

/// Extra acceptance rule applied to constants and callback results.
pub type ResultChecker<T> = Rc<dyn Fn(&T) -> bool>;

/// Wraps a fixed fallback value as a default provider.
pub fn default_value<T: Clone + 'static>(value: T) -> DefaultValue<T> {
    Rc::new(move || value.clone())
}

/// Resolves a scriptable option for one invocation.
///
/// The callback runs only when the context is consistent. Its result is used
/// when present, valid for the native shape and accepted by `checker`;
/// otherwise the default provider decides. Panics raised by the callback are
/// not caught.
pub fn option_value<T, C>(
    context: &C,
    callback: Option<&Scriptable<T, C>>,
    default: &DefaultValue<T>,
    checker: Option<&ResultChecker<T>>,
) -> T
where
    T: NativeShape,
    C: CallbackContext,
{
    if !context.is_consistent() {
        trace!("inconsistent callback context, falling back to default");
        return default();
    }
    let Some(callback) = callback else {
        return default();
    };
    match callback(context) {
        Some(result) if result.is_valid() && checker.is_none_or(|check| check(&result)) => result,
        Some(_) => {
            trace!("callback result rejected, falling back to default");
            default()
        }
        None => default(),
    }
}

/// Acceptance rule for widths, durations and other non-negative numbers.
pub fn non_negative() -> ResultChecker<f64> {
    Rc::new(|value: &f64| value.is_finite() && *value >= 0.0)
}
