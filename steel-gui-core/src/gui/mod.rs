//! Custom screens: widgets placed on a slot layout and the events they raise.

mod click_type;
mod error;
mod event;
mod icon;
mod menu;
pub mod widget;

pub use click_type::{ClickAction, ClickType, SLOT_CLICKED_OUTSIDE};
pub use error::GuiError;
pub use event::{ChangeEvent, ClickEvent, ClickResult, CloseEvent, Listeners, OutsideClickEvent};
pub use icon::{Icon, MAX_ICON_COUNT};
pub use menu::Gui;
pub use widget::{Button, Cycle, Label, TextInput, Toggle, Widget, WidgetKind};
