//! A custom screen: widgets placed on a screen layout.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use steel_gui_utils::text::{TextComponent, TextExt};
use uuid::Uuid;

use super::{
    ClickAction, ClickEvent, ClickResult, ClickType, CloseEvent, GuiError, Icon, Label, Listeners,
    OutsideClickEvent, SLOT_CLICKED_OUTSIDE, Widget, WidgetKind,
};
use crate::layout::{
    ClaimAuthority, PLAYER_INVENTORY_SIZE, SecondaryRegion, SlotGroup, SlotManager,
};
use crate::screen::{ScreenInfo, ScreenRegistry, ScreenType};

/// Slots holding a widget, shared with the slot manager as its claim authority.
#[derive(Debug, Clone, Default)]
struct Occupancy(Arc<RwLock<FxHashSet<usize>>>);

impl ClaimAuthority for Occupancy {
    fn is_claimed(&self, index: usize) -> bool {
        self.0.read().contains(&index)
    }
}

/// A custom screen built from widgets.
///
/// Slot indices follow the screen's [`Layout`](crate::layout::Layout): the primary grid
/// first, then the player inventory rows when the secondary region is enabled. Widgets
/// may be placed anywhere in that layout. Automatic placement asks the slot manager,
/// which sees every slot holding a widget as claimed.
#[derive(Debug)]
pub struct Gui {
    info: ScreenInfo,
    secondary: SecondaryRegion,
    title: TextComponent,
    widgets: Vec<Option<WidgetKind>>,
    occupancy: Occupancy,
    slots: SlotManager,
    lock_player_inventory: bool,
    outside_listeners: Listeners<OutsideClickEvent>,
    close_listeners: Listeners<CloseEvent>,
}

impl Gui {
    /// Creates an empty screen of a registered type.
    pub fn new(
        registry: &ScreenRegistry,
        screen_type: ScreenType,
        secondary: SecondaryRegion,
    ) -> Result<Self, GuiError> {
        let info = registry
            .get(screen_type)
            .ok_or(GuiError::UnknownScreen(screen_type))?;
        Ok(Self::with_info(*info, secondary))
    }

    /// Creates an empty screen from layout metadata.
    #[must_use]
    pub fn with_info(info: ScreenInfo, secondary: SecondaryRegion) -> Self {
        let layout = info.layout(secondary);
        let occupancy = Occupancy::default();

        let mut widgets = Vec::with_capacity(layout.total());
        widgets.resize_with(layout.total(), || None);

        Self {
            info,
            secondary,
            title: TextComponent::default(),
            widgets,
            slots: SlotManager::with_authority(layout, occupancy.clone()),
            occupancy,
            lock_player_inventory: true,
            outside_listeners: Listeners::new(),
            close_listeners: Listeners::new(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<TextComponent>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets whether clicks on empty player inventory slots are cancelled.
    #[must_use]
    pub fn with_locked_player_inventory(mut self, locked: bool) -> Self {
        self.lock_player_inventory = locked;
        self
    }

    /// Adds a listener for clicks outside the window.
    #[must_use]
    pub fn on_click_outside(
        mut self,
        listener: impl FnMut(&OutsideClickEvent) + Send + 'static,
    ) -> Self {
        self.outside_listeners.add(listener);
        self
    }

    /// Adds a listener for the screen closing.
    #[must_use]
    pub fn on_close(mut self, listener: impl FnMut(&CloseEvent) + Send + 'static) -> Self {
        self.close_listeners.add(listener);
        self
    }

    /// Returns the screen layout metadata.
    #[must_use]
    pub fn screen(&self) -> &ScreenInfo {
        &self.info
    }

    /// Returns the appended player inventory region.
    #[must_use]
    pub fn secondary(&self) -> SecondaryRegion {
        self.secondary
    }

    /// Returns the window title.
    #[must_use]
    pub fn title(&self) -> &TextComponent {
        &self.title
    }

    /// Returns the window title in the JSON text format.
    #[must_use]
    pub fn title_json(&self) -> String {
        self.title.to_json()
    }

    /// Sets the window title.
    pub fn set_title(&mut self, title: impl Into<TextComponent>) {
        self.title = title.into();
    }

    /// Returns whether clicks on empty player inventory slots are cancelled.
    #[must_use]
    pub fn is_player_inventory_locked(&self) -> bool {
        self.lock_player_inventory
    }

    /// Returns the slot manager.
    #[must_use]
    pub fn slots(&self) -> &SlotManager {
        &self.slots
    }

    /// Returns the slot manager mutably, e.g. to reserve slots before placing widgets.
    pub fn slots_mut(&mut self) -> &mut SlotManager {
        &mut self.slots
    }

    /// Returns the number of slots widgets can be placed in.
    #[must_use]
    pub fn size(&self) -> usize {
        self.widgets.len()
    }

    /// Places a widget in `index`.
    ///
    /// Slots only reserved through the slot manager can still be filled explicitly.
    pub fn set(&mut self, index: usize, widget: impl Into<WidgetKind>) -> Result<(), GuiError> {
        let size = self.size();
        let Some(slot) = self.widgets.get_mut(index) else {
            return Err(GuiError::OutOfBounds { index, size });
        };
        if slot.is_some() {
            return Err(GuiError::Occupied(index));
        }

        *slot = Some(widget.into());
        self.occupancy.0.write().insert(index);
        log::debug!("Placed widget in slot {index}");
        Ok(())
    }

    /// Places a widget in the next available slot and returns its index.
    pub fn add(&mut self, widget: impl Into<WidgetKind>) -> Result<usize, GuiError> {
        let index = self.slots.next_available().ok_or(GuiError::NoSpace)?;
        self.set(index, widget)?;
        Ok(index)
    }

    /// Fills the free slots of the first row that has any with `icon`.
    ///
    /// The labels mark the slots as occupied, so removing one frees its slot again.
    pub fn fill_row(&mut self, from_top: bool, icon: &Icon) -> Result<SlotGroup, GuiError> {
        let row = self.slots.peek_row(from_top).ok_or(GuiError::NoSpace)?;
        for &index in &row {
            self.set(index, Label::new(icon.clone()))?;
        }
        Ok(row)
    }

    /// Fills every available primary slot with `icon` and returns how many were filled.
    pub fn fill_empty(&mut self, icon: &Icon) -> Result<usize, GuiError> {
        let primary: Vec<usize> = self
            .slots
            .iter_available()
            .filter(|&index| self.slots.layout().is_primary(index))
            .collect();
        for &index in &primary {
            self.set(index, Label::new(icon.clone()))?;
        }
        Ok(primary.len())
    }

    /// Removes and returns the widget in `index`.
    pub fn remove(&mut self, index: usize) -> Option<WidgetKind> {
        let widget = self.widgets.get_mut(index)?.take()?;
        self.occupancy.0.write().remove(&index);
        Some(widget)
    }

    /// Returns the widget in `index`.
    #[must_use]
    pub fn widget(&self, index: usize) -> Option<&WidgetKind> {
        self.widgets.get(index)?.as_ref()
    }

    /// Returns the widget in `index` mutably.
    pub fn widget_mut(&mut self, index: usize) -> Option<&mut WidgetKind> {
        self.widgets.get_mut(index)?.as_mut()
    }

    /// Finds the slot of the widget with the given identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|widget| {
            widget
                .as_ref()
                .is_some_and(|widget| widget.id() == Some(id))
        })
    }

    /// Returns the icon rendered in every slot, in index order.
    #[must_use]
    pub fn contents(&self) -> Vec<Option<&Icon>> {
        self.widgets
            .iter()
            .map(|widget| widget.as_ref().and_then(Widget::icon))
            .collect()
    }

    /// Checks if a slot index sent by the client is valid for this screen.
    ///
    /// The host menu always appends the full player inventory, even when this screen
    /// doesn't address it.
    #[must_use]
    pub fn is_valid_slot_index(&self, slot: i16) -> bool {
        slot == -1
            || slot == SLOT_CLICKED_OUTSIDE
            || (slot >= 0 && (slot as usize) < self.info.grid.total() + PLAYER_INVENTORY_SIZE)
    }

    /// Handles a click sent by the client.
    pub fn click(
        &mut self,
        slot: i16,
        button: i8,
        click_type: ClickType,
        viewer: Uuid,
    ) -> Result<ClickResult, GuiError> {
        if !self.is_valid_slot_index(slot) {
            log::warn!("Rejected click on invalid slot {slot} from {viewer}");
            return Err(GuiError::InvalidSlot(slot));
        }

        let action = ClickAction::from_button(button);
        if slot < 0 {
            if slot == SLOT_CLICKED_OUTSIDE {
                self.outside_listeners.fire(&OutsideClickEvent {
                    click_type,
                    action,
                    viewer,
                });
            }
            return Ok(ClickResult::Cancel);
        }

        let index = slot as usize;
        if let Some(widget) = self.widget_mut(index) {
            let event = ClickEvent {
                slot: index,
                click_type,
                action,
                viewer,
            };
            return Ok(widget.click(&event));
        }

        if index < self.info.grid.total() {
            return Ok(ClickResult::Cancel);
        }

        // Player inventory slot without a widget.
        if self.lock_player_inventory || click_type.moves_between_slots() {
            Ok(ClickResult::Cancel)
        } else {
            Ok(ClickResult::Allow)
        }
    }

    /// Stores text submitted for the input in `index`.
    ///
    /// Returns whether the value changed.
    pub fn input(&mut self, index: usize, text: &str, viewer: Uuid) -> Result<bool, GuiError> {
        match self.widget_mut(index) {
            Some(WidgetKind::TextInput(input)) => Ok(input.submit(index, text, viewer)),
            _ => Err(GuiError::NotAnInput(index)),
        }
    }

    /// Notifies close listeners that `viewer` closed the screen.
    pub fn close(&mut self, viewer: Uuid) {
        log::debug!("Screen {:?} closed by {viewer}", self.info.screen_type);
        self.close_listeners.fire(&CloseEvent { viewer });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    use super::*;
    use crate::gui::{Button, TextInput, Toggle};

    fn chest(rows: usize, secondary: SecondaryRegion) -> Gui {
        let registry = ScreenRegistry::vanilla();
        let screen_type = ScreenType::generic_rows(rows).expect("valid rows");
        Gui::new(&registry, screen_type, secondary).expect("vanilla screen")
    }

    #[test]
    fn test_unknown_screen() {
        let registry = ScreenRegistry::builder().build();
        assert!(matches!(
            Gui::new(&registry, ScreenType::Hopper, SecondaryRegion::None),
            Err(GuiError::UnknownScreen(ScreenType::Hopper))
        ));
    }

    #[test]
    fn test_placed_widgets_are_claimed() {
        let mut gui = chest(1, SecondaryRegion::None);
        gui.set(0, Label::new(Icon::vanilla("stone")))
            .expect("slot 0 is free");
        assert!(gui.slots().is_claimed(0));
        assert_eq!(gui.slots().next_available(), Some(1));

        assert_eq!(gui.add(Label::new(Icon::vanilla("dirt"))), Ok(1));
        assert_eq!(
            gui.set(1, Label::new(Icon::vanilla("dirt"))),
            Err(GuiError::Occupied(1))
        );
        assert_eq!(
            gui.set(9, Label::new(Icon::vanilla("dirt"))),
            Err(GuiError::OutOfBounds { index: 9, size: 9 })
        );

        gui.remove(0).expect("slot 0 holds a label");
        assert!(!gui.slots().is_claimed(0));
        assert_eq!(gui.slots().next_available(), Some(0));
    }

    #[test]
    fn test_add_until_full() {
        let mut gui = chest(1, SecondaryRegion::None);
        for expected in 0..9 {
            assert_eq!(gui.add(Label::new(Icon::vanilla("stone"))), Ok(expected));
        }
        assert_eq!(
            gui.add(Label::new(Icon::vanilla("stone"))),
            Err(GuiError::NoSpace)
        );
    }

    #[test]
    fn test_removed_row_slot_is_free_again() {
        let mut gui = chest(1, SecondaryRegion::None);
        let pane = Icon::vanilla("gray_stained_glass_pane");
        gui.fill_row(true, &pane).expect("row is free");
        assert_eq!(gui.slots().next_available(), None);

        assert!(gui.remove(3).is_some());
        assert!(gui.widget(3).is_none());
        assert_eq!(gui.slots().next_available(), Some(3));
        assert_eq!(gui.add(Label::new(Icon::vanilla("emerald"))), Ok(3));
        assert_eq!(
            gui.add(Label::new(Icon::vanilla("emerald"))),
            Err(GuiError::NoSpace)
        );
    }

    #[test]
    fn test_fill_row_and_empty() {
        let mut gui = chest(3, SecondaryRegion::Inventory);
        let pane = Icon::vanilla("black_stained_glass_pane");

        let row = gui.fill_row(false, &pane).expect("bottom row is free");
        assert_eq!(row.as_slice(), &(45..54).collect::<Vec<_>>()[..]);

        gui.set(13, Button::new(Icon::vanilla("emerald")))
            .expect("slot 13 is free");
        assert_eq!(gui.fill_empty(&pane), Ok(26));
        assert!(gui.contents()[..27].iter().all(Option::is_some));
        assert!(gui.contents()[27..45].iter().all(Option::is_none));
    }

    #[test]
    fn test_find_by_id() {
        let mut gui = chest(1, SecondaryRegion::None);
        gui.set(4, Button::new(Icon::vanilla("barrier")).with_id("close"))
            .expect("slot 4 is free");
        assert_eq!(gui.find("close"), Some(4));
        assert_eq!(gui.find("open"), None);
    }

    #[test]
    fn test_click_dispatch() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let mut gui = chest(1, SecondaryRegion::None);
        gui.set(
            2,
            Button::new(Icon::vanilla("emerald")).on_click(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .expect("slot 2 is free");
        gui.set(3, Toggle::new(false, Icon::vanilla("lime_dye"), Icon::vanilla("gray_dye")))
            .expect("slot 3 is free");

        let viewer = Uuid::new_v4();
        assert_eq!(gui.click(2, 0, ClickType::Pickup, viewer), Ok(ClickResult::Cancel));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(gui.click(3, 0, ClickType::Pickup, viewer), Ok(ClickResult::Refresh));
        assert_eq!(gui.click(0, 0, ClickType::Pickup, viewer), Ok(ClickResult::Cancel));
        assert_eq!(
            gui.click(45, 0, ClickType::Pickup, viewer),
            Err(GuiError::InvalidSlot(45))
        );
    }

    #[test]
    fn test_player_inventory_clicks() {
        let mut gui = chest(1, SecondaryRegion::None);
        let viewer = Uuid::nil();
        // Locked by default.
        assert_eq!(gui.click(9, 0, ClickType::Pickup, viewer), Ok(ClickResult::Cancel));

        let mut gui = gui.with_locked_player_inventory(false);
        assert_eq!(gui.click(9, 0, ClickType::Pickup, viewer), Ok(ClickResult::Allow));
        assert_eq!(gui.click(44, 1, ClickType::Swap, viewer), Ok(ClickResult::Allow));
        assert_eq!(gui.click(9, 0, ClickType::QuickMove, viewer), Ok(ClickResult::Cancel));
    }

    #[test]
    fn test_widgets_in_secondary_region() {
        let mut gui = chest(1, SecondaryRegion::InventoryWithHotbar)
            .with_locked_player_inventory(false);
        gui.set(44, Label::new(Icon::vanilla("barrier")))
            .expect("hotbar slot is part of the layout");
        assert_eq!(
            gui.click(44, 0, ClickType::Pickup, Uuid::nil()),
            Ok(ClickResult::Cancel)
        );
        assert_eq!(gui.size(), 45);
    }

    #[test]
    fn test_outside_click_and_close() {
        let outside = Arc::new(AtomicBool::new(false));
        let closed = Arc::new(AtomicBool::new(false));
        let outside_flag = Arc::clone(&outside);
        let closed_flag = Arc::clone(&closed);
        let mut gui = chest(1, SecondaryRegion::None)
            .on_click_outside(move |_| outside_flag.store(true, Ordering::SeqCst))
            .on_close(move |_| closed_flag.store(true, Ordering::SeqCst));

        assert_eq!(
            gui.click(SLOT_CLICKED_OUTSIDE, 0, ClickType::Pickup, Uuid::nil()),
            Ok(ClickResult::Cancel)
        );
        assert_eq!(gui.click(-1, 0, ClickType::Pickup, Uuid::nil()), Ok(ClickResult::Cancel));
        assert!(outside.load(Ordering::SeqCst));

        gui.close(Uuid::nil());
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_text_input() {
        let mut gui = chest(1, SecondaryRegion::None);
        gui.set(0, TextInput::new(Icon::vanilla("name_tag")))
            .expect("slot 0 is free");
        gui.set(1, Label::new(Icon::vanilla("stone")))
            .expect("slot 1 is free");

        assert_eq!(gui.input(0, "Hello", Uuid::nil()), Ok(true));
        assert_eq!(gui.input(1, "Hello", Uuid::nil()), Err(GuiError::NotAnInput(1)));
        assert_eq!(gui.input(2, "Hello", Uuid::nil()), Err(GuiError::NotAnInput(2)));
        match gui.widget(0) {
            Some(WidgetKind::TextInput(input)) => assert_eq!(input.value(), "Hello"),
            other => panic!("expected a text input, got {other:?}"),
        }
    }

    #[test]
    fn test_title_json() {
        let gui = chest(1, SecondaryRegion::None).with_title(TextComponent::const_text("Shop"));
        assert!(gui.title_json().contains("Shop"));
        assert_eq!(gui.title().plain(), "Shop");
    }
}
