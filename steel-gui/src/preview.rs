//! Plain-text rendering of a built screen.

use std::fmt::Write;

use steel_gui_core::{
    Gui,
    gui::{Widget, WidgetKind},
    layout::{PLAYER_INVENTORY_ROWS, SLOTS_PER_ROW},
};
use steel_gui_utils::text::TextExt;

const EMPTY: char = '.';

/// Returns the single character drawn for a widget.
#[must_use]
pub const fn symbol(widget: &WidgetKind) -> char {
    match widget {
        WidgetKind::Label(_) => 'L',
        WidgetKind::Button(_) => 'B',
        WidgetKind::Toggle(_) => 'T',
        WidgetKind::Cycle(_) => 'C',
        WidgetKind::TextInput(_) => 'I',
    }
}

fn kind_name(widget: &WidgetKind) -> &'static str {
    match widget {
        WidgetKind::Label(_) => "label",
        WidgetKind::Button(_) => "button",
        WidgetKind::Toggle(_) => "toggle",
        WidgetKind::Cycle(_) => "cycle",
        WidgetKind::TextInput(_) => "input",
    }
}

fn draw_row(out: &mut String, gui: &Gui, slots: impl Iterator<Item = usize>) {
    let row: Vec<String> = slots
        .map(|index| gui.widget(index).map_or(EMPTY, symbol).to_string())
        .collect();
    out.push_str(&row.join(" "));
    out.push('\n');
}

/// Renders the title, a slot map and a legend of every placed widget.
///
/// The player inventory rows follow the primary grid after a blank line, and the
/// hotbar is separated by another blank line.
#[must_use]
pub fn render(gui: &Gui) -> String {
    let info = gui.screen();
    let secondary = gui.secondary();
    let columns = info.grid.columns();
    let primary = info.grid.total();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({:?})", gui.title().plain(), info.screen_type);

    for row in 0..info.grid.rows() {
        let start = row * columns;
        draw_row(&mut out, gui, start..start + columns);
    }

    for row in 0..secondary.rows() {
        if row == 0 || row == PLAYER_INVENTORY_ROWS {
            out.push('\n');
        }
        let start = primary + row * SLOTS_PER_ROW;
        draw_row(&mut out, gui, start..start + SLOTS_PER_ROW);
    }

    out.push('\n');
    for index in 0..gui.size() {
        let Some(widget) = gui.widget(index) else {
            continue;
        };
        let (x, y) = info
            .slot_position(index, secondary)
            .map_or((0, 0), |position| (position.x, position.y));
        let name = widget.icon().map(|icon| icon.display_name()).unwrap_or_default();
        let _ = write!(out, "{index:>3} ({x:>3},{y:>3}) {:<6} {name}", kind_name(widget));
        if let Some(id) = widget.id() {
            let _ = write!(out, " [{id}]");
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use steel_gui_core::{
        ScreenRegistry, ScreenType, SecondaryRegion,
        gui::{Button, Icon, Label},
    };
    use steel_gui_utils::text::TextComponent;

    use super::*;

    #[test]
    fn test_render_hopper() {
        let mut gui = Gui::new(
            &ScreenRegistry::vanilla(),
            ScreenType::Hopper,
            SecondaryRegion::None,
        )
        .expect("hopper is registered")
        .with_title(TextComponent::const_text("Shop"));
        gui.set(
            0,
            Label::new(Icon::vanilla("emerald").name(TextComponent::const_text("Balance"))),
        )
        .expect("slot 0 is free");
        gui.set(4, Button::new(Icon::vanilla("barrier")).with_id("close"))
            .expect("slot 4 is free");

        let rendered = render(&gui);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Shop (Hopper)"));
        assert_eq!(lines.next(), Some("L . . . B"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("  0 ( 44, 20) label  Balance"));
        assert_eq!(lines.next(), Some("  4 (116, 20) button barrier [close]"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_separates_hotbar() {
        let mut gui = Gui::new(
            &ScreenRegistry::vanilla(),
            ScreenType::Generic9x1,
            SecondaryRegion::InventoryWithHotbar,
        )
        .expect("generic_9x1 is registered");
        gui.set(9 + 27, Label::new(Icon::vanilla("stone")))
            .expect("hotbar slot is free");

        let rendered = render(&gui);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], ". . . . . . . . .");
        assert_eq!(lines[2], "");
        assert_eq!(lines[5], ". . . . . . . . .");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "L . . . . . . . .");
        assert!(lines[9].starts_with(" 36 (  8,"));
    }
}
