#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Catalog Demos
//!
//! > **Two small console catalogs built on one typed object model.**
//!
//! This crate ships two interactive demos: a **library** of books, magazines and
//! members, and an **animal** registry of dogs and cats that announces each new
//! arrival to its observers.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Closed variant sets
//! Each family is a plain `enum` (`Item`, `Animal`) paired with a tag enum
//! (`ItemKind`, `Species`). Copies are `Clone`, dispatch is `match`, and adding a
//! variant is a compile error everywhere it has not been handled yet.
//!
//! ### Factories return `Result`
//! `create_item("Book", ..)` and `create_animal("Dog", ..)` either hand back a
//! finished value or an `UnknownType` error naming the tag. Nothing half-built
//! ever reaches a registry.
//!
//! ### State is owned, not global
//! The binary constructs its `Library` or `AnimalRegistry` and moves it into the
//! session. The only process-wide value is the live-registry counter.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The Power of `T`
//! [`Registry<T: Entity>`](framework::Registry) is written once and holds items
//! and animals alike. Ordering, tag filtering, removal and the stable tag sort
//! live there and nowhere else.
//!
//! ### One loop, two menus
//! [`run_session`](lifecycle::run_session) is the interactive loop. Each demo only
//! implements [`MenuSession`](lifecycle::MenuSession): its menu text, its choice
//! enum and what each choice does.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Entity contract, generic registry, observer notifier, instance counter.
//! - **Key items**: [`Entity`](framework::Entity), [`Registry`](framework::Registry),
//!   [`Notifier`](framework::Notifier).
//!
//! ### 2. The Lifecycle ([`lifecycle`])
//! - **Role**: Console I/O, the shared session loop and tracing setup.
//! - **Key items**: [`Console`](lifecycle::Console), [`run_session`](lifecycle::run_session).
//!
//! ### 3. The Demos ([`library`], [`animals`])
//! - **Role**: Concrete entities, factories, errors and menu sessions.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run --bin library
//! RUST_LOG=info cargo run --bin animals
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod animals;
pub mod framework;
pub mod library;
pub mod lifecycle;
