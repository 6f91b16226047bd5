use crate::gui::{ClickEvent, ClickResult, Icon, Listeners, Widget};

/// An icon that notifies its listeners when clicked.
#[derive(Debug)]
pub struct Button {
    id: Option<String>,
    icon: Icon,
    listeners: Listeners<ClickEvent>,
}

impl Button {
    /// Creates a button without listeners.
    #[must_use]
    pub fn new(icon: Icon) -> Self {
        Self {
            id: None,
            icon,
            listeners: Listeners::new(),
        }
    }

    /// Sets the lookup identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a click listener.
    #[must_use]
    pub fn on_click(mut self, listener: impl FnMut(&ClickEvent) + Send + 'static) -> Self {
        self.listeners.add(listener);
        self
    }

    /// Adds a click listener to an already placed button.
    pub fn add_listener(&mut self, listener: impl FnMut(&ClickEvent) + Send + 'static) {
        self.listeners.add(listener);
    }

    /// Replaces the icon.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

impl Widget for Button {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn icon(&self) -> Option<&Icon> {
        Some(&self.icon)
    }

    fn click(&mut self, event: &ClickEvent) -> ClickResult {
        self.listeners.fire(event);
        ClickResult::Cancel
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::gui::{ClickAction, widget::test_support::click};

    #[test]
    fn test_button_fires_listeners() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut button = Button::new(Icon::vanilla("emerald")).on_click(move |event| {
            assert_eq!(event.slot, 4);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(button.click(&click(4, ClickAction::Primary)), ClickResult::Cancel);
        assert_eq!(button.click(&click(4, ClickAction::Secondary)), ClickResult::Cancel);
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }
}
