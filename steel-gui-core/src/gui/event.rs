//! Events raised by screens and the listener lists that receive them.

use std::fmt;

use uuid::Uuid;

use super::{ClickAction, ClickType};

/// A click on a slot of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The clicked slot.
    pub slot: usize,
    /// How the slot was clicked.
    pub click_type: ClickType,
    /// Which button was used.
    pub action: ClickAction,
    /// The player looking at the screen.
    pub viewer: Uuid,
}

/// A click outside the screen window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutsideClickEvent {
    /// How the click was made.
    pub click_type: ClickType,
    /// Which button was used.
    pub action: ClickAction,
    /// The player looking at the screen.
    pub viewer: Uuid,
}

/// A widget's value changed because of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent<T> {
    /// The slot of the widget.
    pub slot: usize,
    /// The value before the change.
    pub old: T,
    /// The value after the change.
    pub new: T,
    /// The player who made the change.
    pub viewer: Uuid,
}

/// The screen was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseEvent {
    /// The player who closed the screen.
    pub viewer: Uuid,
}

/// What the host should do with a click after the screen handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Revert the click on the client.
    Cancel,
    /// Revert the click and resend the slot, its icon changed.
    Refresh,
    /// Let the default container behavior apply.
    Allow,
}

/// An ordered list of callbacks for one event type.
pub struct Listeners<E> {
    listeners: Vec<Box<dyn FnMut(&E) + Send>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl<E> Listeners<E> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener. Listeners run in the order they were added.
    pub fn add(&mut self, listener: impl FnMut(&E) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Calls every listener with `event`.
    pub fn fire(&mut self, event: &E) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// Returns the number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns whether there are no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
