//! # Generic Registry
//!
//! This module defines the `Registry`, the ordered collection that owns every
//! entry added during a session. It is the only place that knows how entries are
//! ordered, filtered and removed, and it works for any [`Entity`].

use crate::framework::entity::{Entity, TypeTag};
use tracing::{debug, info};

/// An ordered, append-mostly collection of entities.
///
/// # Ordering
/// Entries keep insertion order until [`sort_by_tag`](Registry::sort_by_tag) is
/// called, which reorders them by ascending tag name. The sort is stable, so
/// entries sharing a tag keep their relative order and sorting twice is the same
/// as sorting once.
///
/// # Concurrency Model
/// All mutating methods take `&mut self`; enumeration takes `&self`. A registry
/// shared behind an `Arc` can therefore be enumerated from several tasks at
/// once while nobody mutates it.
///
/// ```rust
/// use catalog_demos::framework::Registry;
/// use catalog_demos::library::create_item;
///
/// let mut items = Registry::new();
/// items.add(create_item("Magazine", "Time", "42").unwrap());
/// items.add(create_item("Book", "Dune", "Herbert").unwrap());
/// items.sort_by_tag();
///
/// let lines: Vec<String> = items.display_all().collect();
/// assert_eq!(lines, ["Book: Dune by Herbert", "Magazine: Time Issue: 42"]);
/// ```
#[derive(Debug, Clone)]
pub struct Registry<T: Entity> {
    entries: Vec<T>,
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Registry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `entry` at the end.
    pub fn add(&mut self, entry: T) {
        debug!(entity_type = entity_type::<T>(), ?entry, "Add");
        let tag = entry.classify();
        self.entries.push(entry);
        info!(
            entity_type = entity_type::<T>(),
            %tag,
            size = self.entries.len(),
            "Added"
        );
    }

    /// Removes every entry whose tag name equals `tag` and returns how many went.
    ///
    /// The comparison is on the type tag, not on any name field: removing
    /// `"Dog"` drops every dog. A tag that matches nothing leaves the registry
    /// untouched.
    pub fn remove_by_tag(&mut self, tag: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.classify().as_str() != tag);
        let removed = before - self.entries.len();
        info!(
            entity_type = entity_type::<T>(),
            tag,
            removed,
            size = self.entries.len(),
            "Removed by tag"
        );
        removed
    }

    /// Lazily yields the display line of every entry in current order.
    pub fn display_all(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }

    /// Lazily yields the detail line of every entry tagged `tag`, in current order.
    pub fn display_info_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = String> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.classify().as_str() == tag)
            .map(Entity::detail)
    }

    /// Stable ascending sort by tag name.
    pub fn sort_by_tag(&mut self) {
        self.entries
            .sort_by(|a, b| a.classify().as_str().cmp(b.classify().as_str()));
        info!(
            entity_type = entity_type::<T>(),
            size = self.entries.len(),
            "Sorted by tag"
        );
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, T: Entity> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Short type name for log fields (e.g. "Animal" instead of "catalog_demos::animals::animal::Animal").
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
