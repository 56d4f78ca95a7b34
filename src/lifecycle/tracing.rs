//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber for the demo
//! binaries.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** without module targets (`with_target(false)`)
//! - **stderr output**, so logs never interleave with the menu on stdout
//!
//! ## Usage Examples
//!
//! ```bash
//! # Registry operations (adds, removals, sorts)
//! RUST_LOG=info cargo run --bin animals
//!
//! # Full payloads and every dispatched menu choice
//! RUST_LOG=debug cargo run --bin library
//!
//! # Filter to one module
//! RUST_LOG=catalog_demos::framework=debug cargo run --bin animals
//! ```
//!
//! With `RUST_LOG=info` adding two animals looks like:
//!
//! ```text
//! INFO run_session{session="animals"}: Session started
//! INFO run_session{session="animals"}: Added entity_type="Animal" tag=Dog size=1
//! INFO run_session{session="animals"}: Added entity_type="Animal" tag=Cat size=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
