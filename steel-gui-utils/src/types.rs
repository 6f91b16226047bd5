// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A namespaced identifier such as `minecraft:diamond`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path inside the namespace.
    pub path: Cow<'static, str>,
}

/// Errors produced when parsing a [`ResourceLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceLocationError {
    /// The string contained more than one `:` separator.
    #[error("Invalid resource location: {0}")]
    Malformed(String),
    /// The namespace contained a disallowed character.
    #[error("Invalid namespace: {0}")]
    Namespace(String),
    /// The path contained a disallowed character.
    #[error("Invalid path: {0}")]
    Path(String),
}

impl ResourceLocation {
    /// The namespace used by the base game.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates a location in the vanilla namespace.
    #[must_use]
    pub fn vanilla(path: String) -> Self {
        ResourceLocation {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Owned(path),
        }
    }

    /// Creates a location in the vanilla namespace from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        ResourceLocation {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    fn valid_namespace_char(namespace_char: char) -> bool {
        namespace_char == '_'
            || namespace_char == '-'
            || namespace_char.is_ascii_lowercase()
            || namespace_char.is_ascii_digit()
            || namespace_char == '.'
    }

    fn valid_path_char(path_char: char) -> bool {
        Self::valid_namespace_char(path_char) || path_char == '/'
    }

    /// Returns whether every character of `namespace` is allowed.
    #[must_use]
    pub fn validate_namespace(namespace: &str) -> bool {
        !namespace.is_empty() && namespace.chars().all(Self::valid_namespace_char)
    }

    /// Returns whether every character of `path` is allowed.
    #[must_use]
    pub fn validate_path(path: &str) -> bool {
        !path.is_empty() && path.chars().all(Self::valid_path_char)
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = ResourceLocationError;

    /// Parses `namespace:path`, defaulting to the vanilla namespace when the separator is missing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s
            .split_once(':')
            .unwrap_or((Self::VANILLA_NAMESPACE, s));

        if path.contains(':') {
            return Err(ResourceLocationError::Malformed(s.to_string()));
        }
        if !Self::validate_namespace(namespace) {
            return Err(ResourceLocationError::Namespace(namespace.to_string()));
        }
        if !Self::validate_path(path) {
            return Err(ResourceLocationError::Path(path.to_string()));
        }

        Ok(ResourceLocation {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
