//! Generic building blocks shared by both demos.
//!
//! # Main Components
//!
//! - [`Entity`] / [`TypeTag`] - Contract that catalog entries and their tags implement
//! - [`Registry`] - Ordered collection with tag-based removal, filtering and sorting
//! - [`Notifier`] / [`Observer`] - Synchronous publish to an ordered observer list
//! - [`InstanceCounter`] - Live-object counting via drop guards
//!
//! # Testing
//!
//! See [`mock`] module for an expectation-based observer.

pub mod counter;
pub mod entity;
pub mod mock;
pub mod notifier;
pub mod registry;

// Re-export core types for convenience
pub use counter::{CountGuard, InstanceCounter};
pub use entity::{Entity, TypeTag};
pub use notifier::{Notifier, Observer};
pub use registry::Registry;
