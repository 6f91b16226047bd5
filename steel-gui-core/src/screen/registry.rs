//! Lookup table of screen layouts, built once at startup and shared by reference.

use rustc_hash::FxHashMap;

use super::{ScreenInfo, ScreenType};

/// Immutable table of [`ScreenInfo`] by [`ScreenType`].
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: FxHashMap<ScreenType, ScreenInfo>,
}

impl ScreenRegistry {
    /// Starts building an empty registry.
    #[must_use]
    pub fn builder() -> ScreenRegistryBuilder {
        ScreenRegistryBuilder::default()
    }

    /// Creates a registry with the geometry of every vanilla grid screen.
    #[must_use]
    pub fn vanilla() -> Self {
        ScreenRegistryBuilder::vanilla().build()
    }

    /// Gets the layout of a screen type.
    #[must_use]
    pub fn get(&self, screen_type: ScreenType) -> Option<&ScreenInfo> {
        self.screens.get(&screen_type)
    }

    /// Finds the screen with the lowest id whose grid has the given dimensions.
    #[must_use]
    pub fn by_dimensions(&self, rows: usize, columns: usize) -> Option<&ScreenInfo> {
        self.iter()
            .find(|info| info.grid.rows() == rows && info.grid.columns() == columns)
    }

    /// Iterates the registered screens in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ScreenInfo> {
        ScreenType::ALL
            .into_iter()
            .filter_map(|screen_type| self.screens.get(&screen_type))
    }

    /// Returns the number of registered screens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Returns whether no screens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

/// Collects screen layouts before freezing them into a [`ScreenRegistry`].
#[derive(Debug, Default)]
pub struct ScreenRegistryBuilder {
    screens: FxHashMap<ScreenType, ScreenInfo>,
}

impl ScreenRegistryBuilder {
    /// Creates a builder pre-filled with the vanilla grid screens.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut builder = Self::default();
        for rows in 1..=6 {
            if let Some(info) = ScreenInfo::generic(rows) {
                builder = builder.register(info);
            }
        }
        builder
            .register(ScreenInfo::generic_3x3())
            .register(ScreenInfo::hopper())
            .register(ScreenInfo::shulker_box())
    }

    /// Registers a layout, replacing any earlier one for the same screen type.
    #[must_use]
    pub fn register(mut self, info: ScreenInfo) -> Self {
        if self.screens.insert(info.screen_type, info).is_some() {
            log::debug!("Replaced layout for screen {:?}", info.screen_type);
        }
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> ScreenRegistry {
        ScreenRegistry {
            screens: self.screens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Grid;
    use crate::screen::SlotPosition;

    #[test]
    fn test_vanilla_has_every_screen() {
        let registry = ScreenRegistry::vanilla();
        assert_eq!(registry.len(), ScreenType::ALL.len());
        for screen_type in ScreenType::ALL {
            let info = registry.get(screen_type).expect("vanilla screen registered");
            assert_eq!(info.screen_type, screen_type);
        }
    }

    #[test]
    fn test_iter_in_id_order() {
        let registry = ScreenRegistry::vanilla();
        let ids: Vec<i32> = registry.iter().map(|info| info.screen_type.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_by_dimensions_prefers_lowest_id() {
        let registry = ScreenRegistry::vanilla();
        let info = registry.by_dimensions(3, 9).expect("3x9 exists");
        assert_eq!(info.screen_type, ScreenType::Generic9x3);
        assert_eq!(
            registry.by_dimensions(1, 5).map(|info| info.screen_type),
            Some(ScreenType::Hopper)
        );
        assert!(registry.by_dimensions(2, 2).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let custom = ScreenInfo {
            screen_type: ScreenType::Hopper,
            grid: Grid::new(1, 5),
            origin: SlotPosition::new(40, 20),
            inventory_origin: SlotPosition::new(8, 51),
            width: 176,
            height: 133,
        };
        let registry = ScreenRegistryBuilder::vanilla().register(custom).build();
        assert_eq!(registry.get(ScreenType::Hopper), Some(&custom));
        assert_eq!(registry.len(), ScreenType::ALL.len());
        assert!(ScreenRegistry::builder().build().is_empty());
    }
}
