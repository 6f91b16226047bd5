//! Widgets that can be placed in screen slots.

mod button;
mod cycle;
mod label;
mod text_input;
mod toggle;

use enum_dispatch::enum_dispatch;

use super::{ClickEvent, ClickResult, Icon};

pub use button::Button;
pub use cycle::Cycle;
pub use label::Label;
pub use text_input::{DEFAULT_MAX_LENGTH, TextInput};
pub use toggle::Toggle;

/// A slot occupant that renders an icon and reacts to clicks.
#[enum_dispatch]
pub trait Widget {
    /// Returns the identifier used to look the widget up.
    fn id(&self) -> Option<&str>;

    /// Returns the icon currently rendered in the widget's slot.
    fn icon(&self) -> Option<&Icon>;

    /// Handles a click on the widget's slot.
    fn click(&mut self, event: &ClickEvent) -> ClickResult;
}

/// Every widget kind, dispatched statically.
#[allow(missing_docs)]
#[derive(Debug)]
#[enum_dispatch(Widget)]
pub enum WidgetKind {
    Label(Label),
    Button(Button),
    Toggle(Toggle),
    Cycle(Cycle),
    TextInput(TextInput),
}

#[cfg(test)]
pub(crate) mod test_support {
    use uuid::Uuid;

    use crate::gui::{ClickAction, ClickEvent, ClickType};

    pub fn click(slot: usize, action: ClickAction) -> ClickEvent {
        ClickEvent {
            slot,
            click_type: ClickType::Pickup,
            action,
            viewer: Uuid::nil(),
        }
    }
}
