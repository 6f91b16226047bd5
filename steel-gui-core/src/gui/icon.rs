//! Display items shown in screen slots.

use serde::{Deserialize, Deserializer, Serialize};
use steel_gui_utils::{
    ResourceLocation,
    text::{TextComponent, TextExt, de},
};

/// The largest stack count the client renders.
pub const MAX_ICON_COUNT: u8 = 99;

/// An item rendered in a slot purely for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Icon {
    /// The item model to show.
    pub item: ResourceLocation,
    /// The stack count shown in the corner.
    #[serde(default = "default_count", deserialize_with = "clamped_count")]
    pub count: u8,
    /// Custom name shown in the tooltip.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional"
    )]
    pub name: Option<TextComponent>,
    /// Tooltip lines below the name.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "de::list"
    )]
    pub lore: Vec<TextComponent>,
    /// Whether the enchantment glint is rendered.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub glint: bool,
}

const fn default_count() -> u8 {
    1
}

fn clamped_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let count = u32::deserialize(deserializer)?.clamp(1, u32::from(MAX_ICON_COUNT));
    Ok(u8::try_from(count).unwrap_or(MAX_ICON_COUNT))
}

impl Icon {
    /// Creates an icon of a single item.
    #[must_use]
    pub fn new(item: ResourceLocation) -> Self {
        Self {
            item,
            count: 1,
            name: None,
            lore: Vec::new(),
            glint: false,
        }
    }

    /// Creates an icon of a vanilla item.
    #[must_use]
    pub fn vanilla(path: &'static str) -> Self {
        Self::new(ResourceLocation::vanilla_static(path))
    }

    /// Sets the stack count, clamped to `1..=99`.
    #[must_use]
    pub fn count(mut self, count: u8) -> Self {
        self.count = count.clamp(1, MAX_ICON_COUNT);
        self
    }

    /// Sets the custom name.
    #[must_use]
    pub fn name(mut self, name: impl Into<TextComponent>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a lore line.
    #[must_use]
    pub fn lore(mut self, line: impl Into<TextComponent>) -> Self {
        self.lore.push(line.into());
        self
    }

    /// Enables the enchantment glint.
    #[must_use]
    pub fn glint(mut self) -> Self {
        self.glint = true;
        self
    }

    /// Returns the name shown in the tooltip, falling back to the item path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| self.item.path.to_string(), TextExt::plain)
    }
}
