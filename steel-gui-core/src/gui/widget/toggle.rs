use crate::gui::{ChangeEvent, ClickEvent, ClickResult, ClickType, Icon, Listeners, Widget};

/// A two-state switch flipped by clicking it.
#[derive(Debug)]
pub struct Toggle {
    id: Option<String>,
    state: bool,
    on_icon: Icon,
    off_icon: Icon,
    listeners: Listeners<ChangeEvent<bool>>,
}

impl Toggle {
    /// Creates a toggle in the `state` position.
    #[must_use]
    pub fn new(state: bool, on_icon: Icon, off_icon: Icon) -> Self {
        Self {
            id: None,
            state,
            on_icon,
            off_icon,
            listeners: Listeners::new(),
        }
    }

    /// Sets the lookup identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a change listener.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&ChangeEvent<bool>) + Send + 'static) -> Self {
        self.listeners.add(listener);
        self
    }

    /// Adds a change listener to an already placed toggle.
    pub fn add_listener(&mut self, listener: impl FnMut(&ChangeEvent<bool>) + Send + 'static) {
        self.listeners.add(listener);
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Sets the state without notifying listeners.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }
}

impl Widget for Toggle {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn icon(&self) -> Option<&Icon> {
        Some(if self.state {
            &self.on_icon
        } else {
            &self.off_icon
        })
    }

    fn click(&mut self, event: &ClickEvent) -> ClickResult {
        if event.click_type != ClickType::Pickup {
            return ClickResult::Cancel;
        }

        let old = self.state;
        self.state = !old;
        self.listeners.fire(&ChangeEvent {
            slot: event.slot,
            old,
            new: self.state,
            viewer: event.viewer,
        });
        ClickResult::Refresh
    }
}
