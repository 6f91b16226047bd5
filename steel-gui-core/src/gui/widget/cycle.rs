use crate::gui::{
    ChangeEvent, ClickAction, ClickEvent, ClickResult, ClickType, Icon, Listeners, Widget,
};

/// Steps through a list of options. Primary clicks advance, secondary clicks go back.
#[derive(Debug)]
pub struct Cycle {
    id: Option<String>,
    options: Vec<Icon>,
    selected: usize,
    listeners: Listeners<ChangeEvent<usize>>,
}

impl Cycle {
    /// Creates a cycle with the first option selected.
    #[must_use]
    pub fn new(options: Vec<Icon>) -> Self {
        Self {
            id: None,
            options,
            selected: 0,
            listeners: Listeners::new(),
        }
    }

    /// Sets the lookup identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Selects `selected`, wrapped into the option range.
    #[must_use]
    pub fn with_selected(mut self, selected: usize) -> Self {
        self.set_selected(selected);
        self
    }

    /// Adds a change listener. Events carry option indices.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&ChangeEvent<usize>) + Send + 'static) -> Self {
        self.listeners.add(listener);
        self
    }

    /// Adds a change listener to an already placed cycle.
    pub fn add_listener(&mut self, listener: impl FnMut(&ChangeEvent<usize>) + Send + 'static) {
        self.listeners.add(listener);
    }

    /// Returns the selected option index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selects an option without notifying listeners.
    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected.checked_rem(self.options.len()).unwrap_or(0);
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Widget for Cycle {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn icon(&self) -> Option<&Icon> {
        self.options.get(self.selected)
    }

    fn click(&mut self, event: &ClickEvent) -> ClickResult {
        let len = self.options.len();
        if event.click_type != ClickType::Pickup || len < 2 {
            return ClickResult::Cancel;
        }

        let old = self.selected;
        self.selected = match event.action {
            ClickAction::Primary => (old + 1) % len,
            ClickAction::Secondary => (old + len - 1) % len,
        };
        self.listeners.fire(&ChangeEvent {
            slot: event.slot,
            old,
            new: self.selected,
            viewer: event.viewer,
        });
        ClickResult::Refresh
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use steel_gui_utils::text::TextComponent;

    use super::*;
    use crate::gui::widget::test_support::click;

    fn difficulty() -> Cycle {
        Cycle::new(vec![
            Icon::vanilla("wooden_sword").name(TextComponent::const_text("Easy")),
            Icon::vanilla("iron_sword").name(TextComponent::const_text("Normal")),
            Icon::vanilla("diamond_sword").name(TextComponent::const_text("Hard")),
        ])
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        let mut cycle = difficulty().on_change(move |event| sink.lock().push(event.new));

        cycle.click(&click(2, ClickAction::Secondary));
        assert_eq!(cycle.selected(), 2);
        assert_eq!(cycle.icon().map(Icon::display_name).as_deref(), Some("Hard"));
        cycle.click(&click(2, ClickAction::Primary));
        assert_eq!(cycle.selected(), 0);

        assert_eq!(*changes.lock(), vec![2, 0]);
    }

    #[test]
    fn test_cycle_with_selected_wraps() {
        assert_eq!(difficulty().with_selected(4).selected(), 1);
        assert_eq!(Cycle::new(Vec::new()).with_selected(4).selected(), 0);
    }

    #[test]
    fn test_single_option_does_not_change() {
        let mut cycle = Cycle::new(vec![Icon::vanilla("stone")]);
        assert_eq!(cycle.click(&click(0, ClickAction::Primary)), ClickResult::Cancel);
        assert!(Cycle::new(Vec::new()).icon().is_none());
    }
}
