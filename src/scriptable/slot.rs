use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Holds at most one user callback for an option.
///
/// The owning option and its proxy share the same slot, so the proxy always
/// sees the latest callback without being reinstalled.
pub struct CallbackSlot<F: Clone> {
    current: Rc<RefCell<Option<F>>>,
}

impl<F: Clone> CallbackSlot<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns a clone of the stored callback; the slot is not borrowed afterwards.
    #[must_use]
    pub fn get(&self) -> Option<F> {
        self.current.borrow().clone()
    }

    pub fn set(&self, callback: Option<F>) {
        *self.current.borrow_mut() = callback;
    }

    pub fn clear(&self) {
        self.set(None);
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }
}

impl<F: Clone> Default for CallbackSlot<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> Clone for CallbackSlot<F> {
    fn clone(&self) -> Self {
        Self {
            current: Rc::clone(&self.current),
        }
    }
}

impl<F: Clone> fmt::Debug for CallbackSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
