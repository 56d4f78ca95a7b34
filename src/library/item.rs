use crate::framework::{Entity, TypeTag};
use crate::library::LibraryError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Type tag for library items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Book,
    Magazine,
}

impl TypeTag for ItemKind {
    const ALL: &'static [Self] = &[ItemKind::Book, ItemKind::Magazine];

    fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Book => "Book",
            ItemKind::Magazine => "Magazine",
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| LibraryError::UnknownType(s.to_string()))
    }
}

/// A catalog entry held by the [`Library`](crate::library::Library).
///
/// # Framework
/// This enum implements the [`Entity`] trait, allowing it to be managed by a
/// [`Registry`](crate::framework::Registry). Its serialized form is tagged with
/// the same `"type"` name that [`Entity::classify`] reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    Book { title: String, author: String },
    Magazine { title: String, issue: i32 },
}

impl Item {
    pub fn book(title: impl Into<String>, author: impl Into<String>) -> Self {
        Item::Book {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn magazine(title: impl Into<String>, issue: i32) -> Self {
        Item::Magazine {
            title: title.into(),
            issue,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Book { title, .. } | Item::Magazine { title, .. } => title,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Book { title, author } => write!(f, "Book: {title} by {author}"),
            Item::Magazine { title, issue } => write!(f, "Magazine: {title} Issue: {issue}"),
        }
    }
}

impl Entity for Item {
    type Tag = ItemKind;

    fn classify(&self) -> ItemKind {
        match self {
            Item::Book { .. } => ItemKind::Book,
            Item::Magazine { .. } => ItemKind::Magazine,
        }
    }
}
