//! Callback abstraction for widget notifications
//!
//! Widgets never call into the host directly. Each notification is a
//! `Callback<T, M>` that turns the widget-level value (an index, a node
//! path, a checked flag) into the host's message type `M`, which is then
//! returned from `on_gesture`.
//!
//! # Examples
//!
//! ```ignore
//! use ccl_ui::Listbox;
//!
//! enum Message {
//!     FruitSelected(usize),
//! }
//!
//! let listbox = Listbox::new(vec!["apple", "pear"]).on_select(Message::FruitSelected);
//! ```

use std::fmt;

/// An optional `Fn(T) -> M`.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self { f: Some(Box::new(f)) }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Returns `Some(message)` if a handler is set.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("set", &self.is_some()).finish()
    }
}

// =============================================================================
// Unit-like Callback (Callback0)
// =============================================================================

/// A callback that takes no parameters, such as a button tap.
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Equivalent to `call(())`.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}
