//! # Animal Registry
//!
//! Dogs and cats, an observed registry that announces each new arrival, and the
//! menu session on top of it.
//!
//! ## Structure
//!
//! - [`animal`] - [`Animal`] and its [`Species`] tag, the [`Entity`](crate::framework::Entity) implementation
//! - [`factory`] - [`create_animal`], tag-driven construction
//! - [`registry`] - [`AnimalRegistry`], counted and observed
//! - [`observer`] - [`ConsoleObserver`], announces arrivals on the console
//! - [`error`] - [`AnimalError`]
//! - [`session`] - [`AnimalSession`], the interactive menu
//!
//! ## Usage
//!
//! ```rust
//! use catalog_demos::animals::{create_animal, AnimalRegistry, ConsoleObserver};
//! use catalog_demos::lifecycle::OutputChannel;
//! use std::sync::Arc;
//!
//! let output = OutputChannel::new();
//! let mut registry = AnimalRegistry::new();
//! registry.subscribe(Arc::new(ConsoleObserver::new(output.clone())));
//!
//! registry.add(create_animal("Dog", "Rex")?);
//! registry.add(create_animal("Cat", "Tom")?);
//! registry.remove_by_tag("Dog");
//!
//! assert_eq!(registry.display_all().collect::<Vec<_>>(), ["Cat: Tom"]);
//! assert_eq!(output.drain().len(), 4);
//! # Ok::<(), catalog_demos::animals::AnimalError>(())
//! ```

pub mod animal;
pub mod error;
pub mod factory;
pub mod observer;
pub mod registry;
pub mod session;

pub use animal::{Animal, Species};
pub use error::*;
pub use factory::create_animal;
pub use observer::ConsoleObserver;
pub use registry::AnimalRegistry;
pub use session::{AnimalChoice, AnimalSession};
