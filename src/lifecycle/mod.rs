//! # Session Lifecycle
//!
//! Everything that turns the domain types into a running interactive program:
//!
//! - [`Console`] - Line-oriented async input/output, plus the [`OutputChannel`]
//!   synchronous observers write through
//! - [`MenuSession`] / [`run_session`] - The shared menu loop
//! - [`setup_tracing`] - Logging setup for the binaries
//!
//! A binary wires these together explicitly: it constructs the domain state
//! (a `Library`, an `AnimalRegistry`), subscribes any observers, moves the state
//! into a session and runs it. Nothing is global except the live-registry
//! counter.

pub mod console;
pub mod session;
pub mod tracing;

pub use console::{Console, OutputChannel};
pub use session::{parse_choice, run_session, Flow, MenuSession, SessionError};
pub use self::tracing::setup_tracing;
