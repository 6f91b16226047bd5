use crate::gui::{ClickEvent, ClickResult, Icon, Widget};

/// A static icon. Clicks are always cancelled.
#[derive(Debug, Clone)]
pub struct Label {
    id: Option<String>,
    icon: Icon,
}

impl Label {
    /// Creates a label showing `icon`.
    #[must_use]
    pub fn new(icon: Icon) -> Self {
        Self { id: None, icon }
    }

    /// Sets the lookup identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replaces the icon.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

impl Widget for Label {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn icon(&self) -> Option<&Icon> {
        Some(&self.icon)
    }

    fn click(&mut self, _event: &ClickEvent) -> ClickResult {
        ClickResult::Cancel
    }
}
