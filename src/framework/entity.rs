//! # Entity & TypeTag Traits
//!
//! The `Entity` trait defines the contract every catalog entry (library items,
//! animals, ...) must satisfy to be stored in the generic [`Registry`](crate::framework::Registry).
//! It pairs each entry with a closed [`TypeTag`] enum naming its concrete variant.
//!
//! # Architecture Note
//! By writing the registry against this contract instead of against `Item` or
//! `Animal`, the ordering, filtering and sorting rules live in one place and both
//! demos get the same behavior.
//!
//! The `Display` bound *is* the `display()` operation: it produces the one-line
//! human-readable summary. [`Entity::detail`] is the longer "info" line and
//! defaults to the summary.

use std::fmt::{Debug, Display};
use std::str::FromStr;

/// The closed set of variant names for an entity family.
///
/// Tags parse case-sensitively from their canonical string (`"Book"`, `"Dog"`, ...)
/// and always render back to that same string.
pub trait TypeTag:
    Copy + Eq + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Every tag in the family, in declaration order.
    const ALL: &'static [Self];

    /// The canonical, case-sensitive name of this tag.
    fn as_str(&self) -> &'static str;

    /// Returns the tag whose canonical name equals `name`, if any.
    fn lookup(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == name)
    }
}

/// Trait that any catalog entry must implement to be managed by a `Registry`.
///
/// Entries are immutable once constructed; the registry only ever moves,
/// reorders, reads or drops them.
pub trait Entity: Clone + Debug + Display + Send + Sync + 'static {
    /// The tag enum naming this entity's variants.
    type Tag: TypeTag;

    /// Returns the variant's type tag. Pure.
    fn classify(&self) -> Self::Tag;

    /// The detail line for this entry. Defaults to the display summary.
    fn detail(&self) -> String {
        self.to_string()
    }
}
