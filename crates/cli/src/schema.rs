//! Keyword schema files: a declarative keyword list read from TOML.
//!
//! ```toml
//! [[keyword]]
//! name = "FILES"
//! shape = "list"
//! ```
//!
//! Declaration order is the array order. Each keyword gets a [`Slot`] of its
//! shape when a parse runs.

use std::borrow::Cow;
use std::path::Path;

use argbind_core::{
    ActionMap, BindError, Bindable, BorrowedParser, Maybe, NonEmpty, ParseOutcome, Target,
};
use serde::{Deserialize, Serialize};

/// Errors raised while loading a schema or binding its keywords.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SchemaError {
    #[error("error reading schema '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing schema '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("keyword #{index} in '{path}' has an empty name")]
    EmptyName { path: String, index: usize },

    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Destination shape of a declared keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Shape {
    Flag,
    Value,
    OptionalValue,
    List,
    NonEmptyList,
    Groups,
}

impl Shape {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Shape::Flag => "flag",
            Shape::Value => "value",
            Shape::OptionalValue => "optional-value",
            Shape::List => "list",
            Shape::NonEmptyList => "non-empty-list",
            Shape::Groups => "groups",
        }
    }
}

/// Raw file layout: `[[keyword]]` tables.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default, rename = "keyword")]
    keywords: Vec<KeywordDecl>,
}

#[derive(Debug, Deserialize)]
struct KeywordDecl {
    name: String,
    shape: Shape,
}

/// A validated schema: unique, non-empty keyword names in declaration order.
pub(crate) struct Schema {
    keywords: ActionMap<Shape>,
}

impl Schema {
    pub(crate) fn load(path: &Path) -> Result<Self, SchemaError> {
        let src = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&src, &path.display().to_string())
    }

    /// Parse and validate schema text. `origin` names the source in errors.
    pub(crate) fn from_toml_str(src: &str, origin: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = toml::from_str(src).map_err(|source| SchemaError::Toml {
            path: origin.to_owned(),
            source,
        })?;

        let mut keywords = ActionMap::new();
        for (index, decl) in file.keywords.into_iter().enumerate() {
            if decl.name.trim().is_empty() {
                return Err(SchemaError::EmptyName {
                    path: origin.to_owned(),
                    index: index + 1,
                });
            }
            let name = decl.name.clone();
            if !keywords.emplace(decl.name, decl.shape) {
                return Err(BindError::DuplicateKeyword {
                    keyword: Cow::Owned(name),
                }
                .into());
            }
        }
        Ok(Schema { keywords })
    }

    /// Declared keywords and shapes, in declaration order.
    pub(crate) fn keywords(&self) -> impl Iterator<Item = (&str, Shape)> + '_ {
        self.keywords.iter().map(|(name, shape)| (&**name, *shape))
    }

    /// Bind a fresh slot per keyword and parse `tokens` into them.
    pub(crate) fn parse<I>(&self, tokens: I) -> BoundValues
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut slots: Vec<Slot> = self
            .keywords()
            .map(|(_, shape)| Slot::empty(shape))
            .collect();

        let mut parser = BorrowedParser::new();
        for ((name, _), slot) in self.keywords.iter().zip(slots.iter_mut()) {
            // Names were deduplicated when the schema was loaded.
            let bound = parser.try_bind(name.clone(), slot).is_ok();
            debug_assert!(bound, "keyword '{}' bound twice", name);
        }
        let outcome = parser.parse(tokens);

        let values = self
            .keywords()
            .map(|(name, _)| name.to_owned())
            .zip(slots)
            .collect();
        BoundValues { values, outcome }
    }
}

/// Storage for one keyword's value, shaped by its declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum Slot {
    Flag(bool),
    Value(String),
    OptionalValue(Option<Maybe<String>>),
    List(Vec<String>),
    NonEmptyList(NonEmpty<Vec<String>>),
    Groups(Vec<Vec<String>>),
}

impl Slot {
    pub(crate) fn empty(shape: Shape) -> Self {
        match shape {
            Shape::Flag => Slot::Flag(false),
            Shape::Value => Slot::Value(String::new()),
            Shape::OptionalValue => Slot::OptionalValue(None),
            Shape::List => Slot::List(Vec::new()),
            Shape::NonEmptyList => Slot::NonEmptyList(NonEmpty::default()),
            Shape::Groups => Slot::Groups(Vec::new()),
        }
    }

    /// One-line rendering for text output.
    pub(crate) fn render(&self) -> String {
        match self {
            Slot::Flag(v) => v.to_string(),
            Slot::Value(v) => format!("{:?}", v),
            Slot::OptionalValue(None) => "(absent)".to_owned(),
            Slot::OptionalValue(Some(v)) => format!("{:?}", v.as_str()),
            Slot::List(items) => render_list(items),
            Slot::NonEmptyList(items) => render_list(items),
            Slot::Groups(groups) => {
                let inner: Vec<String> = groups.iter().map(|g| render_list(g)).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

fn render_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("{:?}", i)).collect();
    format!("[{}]", quoted.join(", "))
}

impl Bindable for Slot {
    fn target(&mut self) -> Target<'_> {
        match self {
            Slot::Flag(v) => v.target(),
            Slot::Value(v) => v.target(),
            Slot::OptionalValue(v) => v.target(),
            Slot::List(v) => v.target(),
            Slot::NonEmptyList(v) => v.target(),
            Slot::Groups(v) => v.target(),
        }
    }
}

/// Values produced by one schema-driven parse.
pub(crate) struct BoundValues {
    pub(crate) values: Vec<(String, Slot)>,
    pub(crate) outcome: ParseOutcome,
}

impl BoundValues {
    pub(crate) fn to_json_value(&self) -> serde_json::Value {
        let values: serde_json::Map<String, serde_json::Value> = self
            .values
            .iter()
            .map(|(name, slot)| {
                (
                    name.clone(),
                    serde_json::to_value(slot).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        let mut json = self.outcome.to_json_value();
        json["values"] = serde_json::Value::Object(values);
        json
    }
}
