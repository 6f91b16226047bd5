//! Declarative screen definitions written in json5.
//!
//! A definition names a screen type, a title and a list of widgets. Widgets with a
//! `slot` are placed first, the rest are placed in document order into the next free
//! slot, and `background` entries fill whatever is left at the very end.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use steel_gui_core::{
    Gui, GuiError, ScreenRegistry, ScreenType, SecondaryRegion,
    gui::{Button, Cycle, Icon, Label, TextInput, Toggle, WidgetKind, widget::DEFAULT_MAX_LENGTH},
};
use steel_gui_utils::text::{TextComponent, de};
use thiserror::Error;

use crate::config::GuiConfig;

/// Errors raised while loading or building a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition file couldn't be read.
    #[error("couldn't read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The definition isn't valid json5 or has unknown fields.
    #[error("couldn't parse definition: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A cycle widget has no options.
    #[error("cycle widget #{0} has no options")]
    EmptyCycle(usize),
    /// The hotbar was requested without the player inventory rows.
    #[error("hotbar requires player_inventory")]
    HotbarWithoutInventory,
    /// Two widgets share an identifier.
    #[error("widget id {0:?} is used more than once")]
    DuplicateId(String),
    /// No definition is stored under the name.
    #[error("no definition named {0:?}")]
    Unknown(String),
    /// Placing a widget failed.
    #[error(transparent)]
    Gui(#[from] GuiError),
}

/// A screen described declaratively.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuiDefinition {
    /// The screen type to open.
    pub screen: ScreenType,
    /// The window title.
    #[serde(default, deserialize_with = "de::text")]
    pub title: TextComponent,
    /// Whether the player inventory rows are part of the layout.
    #[serde(default)]
    pub player_inventory: bool,
    /// Whether the hotbar row is part of the layout. Requires `player_inventory`.
    #[serde(default)]
    pub hotbar: bool,
    /// Overrides the configured player inventory lock.
    #[serde(default)]
    pub lock_player_inventory: Option<bool>,
    /// The widgets, in placement order.
    #[serde(default)]
    pub widgets: Vec<WidgetDefinition>,
}

/// One widget entry of a definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum WidgetDefinition {
    Label {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        slot: Option<usize>,
        icon: Icon,
    },
    Button {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        slot: Option<usize>,
        icon: Icon,
    },
    Toggle {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        slot: Option<usize>,
        on: Icon,
        off: Icon,
        #[serde(default)]
        default: bool,
    },
    Cycle {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        slot: Option<usize>,
        options: Vec<Icon>,
        #[serde(default)]
        selected: usize,
    },
    Input {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        slot: Option<usize>,
        icon: Icon,
        #[serde(default)]
        value: String,
        #[serde(default = "default_max_length")]
        max_length: usize,
    },
    /// Reserves a whole row and fills it with one icon.
    FillRow {
        #[serde(default = "default_from_top")]
        from_top: bool,
        icon: Icon,
    },
    /// Fills every primary slot still free after all other entries.
    Background { icon: Icon },
}

const fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

const fn default_from_top() -> bool {
    true
}

impl WidgetDefinition {
    fn id(&self) -> Option<&str> {
        match self {
            Self::Label { id, .. }
            | Self::Button { id, .. }
            | Self::Toggle { id, .. }
            | Self::Cycle { id, .. }
            | Self::Input { id, .. } => id.as_deref(),
            Self::FillRow { .. } | Self::Background { .. } => None,
        }
    }

    fn slot(&self) -> Option<usize> {
        match self {
            Self::Label { slot, .. }
            | Self::Button { slot, .. }
            | Self::Toggle { slot, .. }
            | Self::Cycle { slot, .. }
            | Self::Input { slot, .. } => *slot,
            Self::FillRow { .. } | Self::Background { .. } => None,
        }
    }

    /// Creates the widget for entries that occupy a single slot.
    fn to_widget(&self, log_clicks: bool) -> Option<WidgetKind> {
        let widget: WidgetKind = match self.clone() {
            Self::Label { id, icon, .. } => {
                with_id(Label::new(icon), id, |label, id| label.with_id(id)).into()
            }
            Self::Button { id, icon, .. } => {
                let mut button = Button::new(icon);
                if log_clicks {
                    let name = id.clone().unwrap_or_default();
                    button = button.on_click(move |event| {
                        log::info!(
                            "{} pressed button {name:?} in slot {}",
                            event.viewer,
                            event.slot
                        );
                    });
                }
                with_id(button, id, |button, id| button.with_id(id)).into()
            }
            Self::Toggle {
                id, on, off, default, ..
            } => with_id(Toggle::new(default, on, off), id, |toggle, id| {
                toggle.with_id(id)
            })
            .into(),
            Self::Cycle {
                id,
                options,
                selected,
                ..
            } => with_id(
                Cycle::new(options).with_selected(selected),
                id,
                |cycle, id| cycle.with_id(id),
            )
            .into(),
            Self::Input {
                id,
                icon,
                value,
                max_length,
                ..
            } => with_id(
                TextInput::new(icon)
                    .with_max_length(max_length)
                    .with_value(value),
                id,
                |input, id| input.with_id(id),
            )
            .into(),
            Self::FillRow { .. } | Self::Background { .. } => return None,
        };
        Some(widget)
    }
}

fn with_id<W>(widget: W, id: Option<String>, set: impl FnOnce(W, String) -> W) -> W {
    match id {
        Some(id) => set(widget, id),
        None => widget,
    }
}

impl GuiDefinition {
    /// Parses a definition from json5 text.
    pub fn parse(definition: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json5::from_str(definition)?)
    }

    /// Reads and parses a definition file.
    pub fn load(path: &Path) -> Result<Self, DefinitionError> {
        let definition = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&definition)
    }

    /// Returns the secondary region requested by the flags.
    #[must_use]
    pub fn secondary(&self) -> SecondaryRegion {
        SecondaryRegion::from_flags(self.player_inventory, self.hotbar)
    }

    /// Checks constraints that don't depend on the screen layout.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.hotbar && !self.player_inventory {
            return Err(DefinitionError::HotbarWithoutInventory);
        }

        let mut ids = FxHashMap::default();
        for (position, widget) in self.widgets.iter().enumerate() {
            if let WidgetDefinition::Cycle { options, .. } = widget
                && options.is_empty()
            {
                return Err(DefinitionError::EmptyCycle(position));
            }
            if let Some(id) = widget.id()
                && ids.insert(id, position).is_some()
            {
                return Err(DefinitionError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    /// Builds a screen from this definition.
    pub fn build(
        &self,
        registry: &ScreenRegistry,
        config: &GuiConfig,
    ) -> Result<Gui, DefinitionError> {
        self.validate()?;

        let mut gui = Gui::new(registry, self.screen, self.secondary())?
            .with_title(self.title.clone())
            .with_locked_player_inventory(
                self.lock_player_inventory
                    .unwrap_or(config.lock_player_inventory),
            );

        for widget in &self.widgets {
            if let Some(slot) = widget.slot()
                && let Some(kind) = widget.to_widget(config.log_clicks)
            {
                gui.set(slot, kind)?;
            }
        }

        for widget in self.widgets.iter().filter(|widget| widget.slot().is_none()) {
            match widget {
                WidgetDefinition::FillRow { from_top, icon } => {
                    gui.fill_row(*from_top, icon)?;
                }
                WidgetDefinition::Background { .. } => {}
                _ => {
                    if let Some(kind) = widget.to_widget(config.log_clicks) {
                        gui.add(kind)?;
                    }
                }
            }
        }

        for widget in &self.widgets {
            if let WidgetDefinition::Background { icon } = widget {
                gui.fill_empty(icon)?;
            }
        }

        log::debug!(
            "Built {:?} screen with {} widgets",
            self.screen,
            gui.contents().iter().filter(|icon| icon.is_some()).count()
        );
        Ok(gui)
    }
}

/// Named definitions loaded from a directory.
#[derive(Debug, Default)]
pub struct DefinitionStore {
    definitions: FxHashMap<String, GuiDefinition>,
}

impl DefinitionStore {
    /// Loads every `*.json5` file in `dir`, keyed by file stem.
    ///
    /// The directory is created if missing. Files that fail to parse are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self, DefinitionError> {
        let io_error = |source| DefinitionError::Io {
            path: dir.to_path_buf(),
            source,
        };
        fs::create_dir_all(dir).map_err(io_error)?;

        let mut store = Self::default();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().is_none_or(|extension| extension != "json5") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match GuiDefinition::load(&path).and_then(|definition| {
                definition.validate()?;
                Ok(definition)
            }) {
                Ok(definition) => store.insert(name, definition),
                Err(err) => log::warn!("Skipping screen definition {}: {err}", path.display()),
            }
        }

        log::info!("Loaded {} screen definitions from {}", store.len(), dir.display());
        Ok(store)
    }

    /// Adds or replaces a definition.
    pub fn insert(&mut self, name: impl Into<String>, definition: GuiDefinition) {
        self.definitions.insert(name.into(), definition);
    }

    /// Gets a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GuiDefinition> {
        self.definitions.get(name)
    }

    /// Returns the stored names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Builds the screen stored under `name`.
    pub fn build(
        &self,
        name: &str,
        registry: &ScreenRegistry,
        config: &GuiConfig,
    ) -> Result<Gui, DefinitionError> {
        self.get(name)
            .ok_or_else(|| DefinitionError::Unknown(name.to_string()))?
            .build(registry, config)
    }
}
