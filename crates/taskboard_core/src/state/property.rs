//! Reactive property with change-triggered listeners.
//!
//! # Responsibility
//! - Store one optional value behind shared (`&self`) access.
//! - Fan out `(new, old)` change notifications in registration order.
//!
//! # Invariants
//! - Listeners fire if and only if `new != old` (strict `PartialEq`).
//! - Setting the current value again is a no-op without notification.
//! - Listeners cannot be removed once registered.
//! - No internal borrow is held while listeners run, so listeners may read
//!   or set the property re-entrantly.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Change listener invoked with `(new_value, old_value)`.
pub type ChangeListener<T> = Rc<dyn Fn(Option<&T>, Option<&T>)>;

/// Single-slot holder of an optional value with change notification.
pub struct ReactiveProperty<T> {
    value: RefCell<Option<T>>,
    listeners: RefCell<Vec<ChangeListener<T>>>,
}

impl<T> Default for ReactiveProperty<T> {
    fn default() -> Self {
        Self {
            value: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T> ReactiveProperty<T>
where
    T: Clone + PartialEq,
{
    /// Creates an empty property without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a property holding `value`.
    ///
    /// The initial value is not reported to listeners registered later.
    pub fn with_value(value: T) -> Self {
        Self {
            value: RefCell::new(Some(value)),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Registers one listener and returns self for chaining.
    pub fn with_listener(self, listener: impl Fn(Option<&T>, Option<&T>) + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    /// Registers several listeners and returns self for chaining.
    pub fn with_listeners(self, listeners: impl IntoIterator<Item = ChangeListener<T>>) -> Self {
        self.listeners.borrow_mut().extend(listeners);
        self
    }

    /// Registers one listener on an already shared property.
    pub fn add_listener(&self, listener: impl Fn(Option<&T>, Option<&T>) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Returns a clone of the held value.
    pub fn get(&self) -> Option<T> {
        self.value.borrow().clone()
    }

    /// Returns whether a value is currently held.
    pub fn is_set(&self) -> bool {
        self.value.borrow().is_some()
    }

    /// Replaces the held value and notifies listeners when it changed.
    ///
    /// Returns `true` when listeners were notified.
    pub fn set(&self, value: Option<T>) -> bool {
        let old = {
            let mut slot = self.value.borrow_mut();
            if *slot == value {
                return false;
            }
            std::mem::replace(&mut *slot, value.clone())
        };

        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(value.as_ref(), old.as_ref());
        }
        true
    }

    /// Clears the held value; same notification rule as [`Self::set`].
    pub fn delete(&self) -> bool {
        self.set(None)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: Debug> Debug for ReactiveProperty<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveProperty")
            .field("value", &self.value.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
