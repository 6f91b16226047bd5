//! This module contains everything related to text components.
//!
//! Components come from `text_components`. Definitions write them either as a bare
//! string or as a component object, the [`de`] helpers accept both.

use serde_json::Value;
pub use text_components::TextComponent;

/// Extra views of a [`TextComponent`] used when rendering screens.
pub trait TextExt {
    /// Returns the text of the component and its children, without styling.
    ///
    /// Translatable parts are rendered as their key.
    fn plain(&self) -> String;

    /// Serializes the component to the JSON text format.
    fn to_json(&self) -> String;
}

impl TextExt for TextComponent {
    fn plain(&self) -> String {
        let mut out = String::new();
        if let Ok(value) = serde_json::to_value(self) {
            write_plain(&value, &mut out);
        }
        out
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn write_plain(value: &Value, out: &mut String) {
    match value {
        Value::String(text) => out.push_str(text),
        Value::Array(parts) => {
            for part in parts {
                write_plain(part, out);
            }
        }
        Value::Object(fields) => {
            if let Some(Value::String(text)) = fields.get("text") {
                out.push_str(text);
            } else if let Some(Value::String(key)) = fields.get("translate") {
                out.push_str(key);
            }
            if let Some(extra) = fields.get("extra") {
                write_plain(extra, out);
            }
        }
        _ => {}
    }
}

/// Deserializers for text written in definition files.
pub mod de {
    use serde::{Deserialize, Deserializer};

    use super::TextComponent;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Plain(String),
        Component(TextComponent),
    }

    impl From<RawText> for TextComponent {
        fn from(raw: RawText) -> Self {
            match raw {
                RawText::Plain(text) => TextComponent::from(text),
                RawText::Component(component) => component,
            }
        }
    }

    /// Reads a bare string or a component object.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextComponent, D::Error> {
        RawText::deserialize(deserializer).map(Into::into)
    }

    /// Reads an optional bare string or component object.
    pub fn optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TextComponent>, D::Error> {
        Ok(Option::<RawText>::deserialize(deserializer)?.map(Into::into))
    }

    /// Reads a list whose entries are bare strings or component objects.
    pub fn list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<TextComponent>, D::Error> {
        Ok(Vec::<RawText>::deserialize(deserializer)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Title {
        #[serde(deserialize_with = "de::text")]
        title: TextComponent,
        #[serde(default, deserialize_with = "de::list")]
        lore: Vec<TextComponent>,
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(TextComponent::const_text("Shop").plain(), "Shop");
        assert_eq!(TextComponent::from(String::from("Buy")).plain(), "Buy");
    }

    #[test]
    fn test_json_keeps_text() {
        let json = TextComponent::const_text("Shop").to_json();
        let value: Value = serde_json::from_str(&json).expect("valid json");
        let mut plain = String::new();
        write_plain(&value, &mut plain);
        assert_eq!(plain, "Shop");
    }

    #[test]
    fn test_write_plain_walks_extra() {
        let value: Value = serde_json::from_str(
            r#"{"text":"Buy","color":"green","extra":[" now",{"translate":"item.minecraft.emerald"}]}"#,
        )
        .expect("valid json");
        let mut plain = String::new();
        write_plain(&value, &mut plain);
        assert_eq!(plain, "Buy nowitem.minecraft.emerald");
    }

    #[test]
    fn test_deserialize_string_or_object() {
        let title: Title =
            serde_json::from_str(r#"{"title":"Settings","lore":["a",{"text":"b"}]}"#)
                .expect("plain title");
        assert_eq!(title.title.plain(), "Settings");
        assert_eq!(title.lore.len(), 2);
        assert_eq!(title.lore[1].plain(), "b");

        let title: Title =
            serde_json::from_str(r#"{"title":{"text":"Settings","color":"dark_gray"}}"#)
                .expect("styled title");
        assert_eq!(title.title.plain(), "Settings");
        assert!(title.title.to_json().contains("dark_gray"));
    }
}
