//! # Library Catalog
//!
//! Books, magazines and members, plus the menu session that edits them.
//!
//! ## Structure
//!
//! - [`item`] - [`Item`] and its [`ItemKind`] tag, the [`Entity`](crate::framework::Entity) implementation
//! - [`member`] - [`Member`] values
//! - [`factory`] - [`create_item`], tag-driven construction
//! - [`catalog`] - [`Library`], the per-session catalog
//! - [`error`] - [`LibraryError`]
//! - [`session`] - [`LibrarySession`], the interactive menu
//!
//! ## Usage
//!
//! ```rust
//! use catalog_demos::library::{create_item, Library, LibraryError, Member};
//!
//! let mut library = Library::new();
//! library.add_item(create_item("Book", "Dune", "Herbert")?);
//! library.add_item(create_item("Magazine", "Time", "42")?);
//! library.add_member(Member::new("Alice"));
//!
//! let items: Vec<String> = library.display_items().collect();
//! assert_eq!(items, ["Book: Dune by Herbert", "Magazine: Time Issue: 42"]);
//!
//! assert!(matches!(
//!     create_item("Pamphlet", "Common Sense", "Paine"),
//!     Err(LibraryError::UnknownType(_))
//! ));
//! # Ok::<(), LibraryError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod factory;
pub mod item;
pub mod member;
pub mod session;

pub use catalog::Library;
pub use error::*;
pub use factory::create_item;
pub use item::{Item, ItemKind};
pub use member::Member;
pub use session::{LibraryChoice, LibrarySession};
