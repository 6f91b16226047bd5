use uuid::Uuid;

use crate::gui::{ChangeEvent, ClickEvent, ClickResult, Icon, Listeners, Widget};

/// Maximum input length accepted by the anvil rename field.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// A text value edited outside the screen, e.g. through an anvil or sign prompt.
///
/// Clicking the widget only notifies click listeners so the host can open the prompt.
/// The submitted text arrives through [`Gui::input`](crate::gui::Gui::input).
#[derive(Debug)]
pub struct TextInput {
    id: Option<String>,
    icon: Icon,
    value: String,
    max_length: usize,
    click_listeners: Listeners<ClickEvent>,
    change_listeners: Listeners<ChangeEvent<String>>,
}

impl TextInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new(icon: Icon) -> Self {
        Self {
            id: None,
            icon,
            value: String::new(),
            max_length: DEFAULT_MAX_LENGTH,
            click_listeners: Listeners::new(),
            change_listeners: Listeners::new(),
        }
    }

    /// Sets the lookup identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the initial value, truncated to the maximum length.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = truncate(value.into(), self.max_length);
        self
    }

    /// Sets the maximum number of characters.
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self.value = truncate(std::mem::take(&mut self.value), max_length);
        self
    }

    /// Adds a click listener.
    #[must_use]
    pub fn on_click(mut self, listener: impl FnMut(&ClickEvent) + Send + 'static) -> Self {
        self.click_listeners.add(listener);
        self
    }

    /// Adds a change listener.
    #[must_use]
    pub fn on_change(
        mut self,
        listener: impl FnMut(&ChangeEvent<String>) + Send + 'static,
    ) -> Self {
        self.change_listeners.add(listener);
        self
    }

    /// Adds a change listener to an already placed input.
    pub fn add_listener(&mut self, listener: impl FnMut(&ChangeEvent<String>) + Send + 'static) {
        self.change_listeners.add(listener);
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the maximum number of characters.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Stores submitted text and notifies listeners if the value changed.
    ///
    /// Returns whether the value changed.
    pub fn submit(&mut self, slot: usize, text: &str, viewer: Uuid) -> bool {
        let new = truncate(text.to_string(), self.max_length);
        if new == self.value {
            return false;
        }

        let old = std::mem::replace(&mut self.value, new);
        self.change_listeners.fire(&ChangeEvent {
            slot,
            old,
            new: self.value.clone(),
            viewer,
        });
        true
    }
}

fn truncate(mut value: String, max_length: usize) -> String {
    if let Some((byte_index, _)) = value.char_indices().nth(max_length) {
        value.truncate(byte_index);
    }
    value
}

impl Widget for TextInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn icon(&self) -> Option<&Icon> {
        Some(&self.icon)
    }

    fn click(&mut self, event: &ClickEvent) -> ClickResult {
        self.click_listeners.fire(event);
        ClickResult::Cancel
    }
}
