//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Resource verbs**: every `list`/`edit`/`create`/`update`/`show` call opens a span
//!   carrying its arguments
//! - **Store lifecycle**: startup, shutdown, and final row count
//! - **Store operations**: FindAndCountAll, Find, Create, UpdateAttributes
//! - **Failures**: model rejections and missing rows, with the offending id
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Created/Updated events only
//! RUST_LOG=debug cargo run     # Full payloads and lookups
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG create{params=ProjectParams { name: Some("Apollo"), description: None }}: Create entity_type="Project" params=...
//!  INFO create{params=ProjectParams { .. }}: Created entity_type="Project" id=1 size=1
//!  INFO create{params=ProjectParams { .. }}: Created id=1
//! DEBUG list{limit=2 offset=0}: FindAndCountAll entity_type="Project" options=FindOptions { limit: 2, offset: 0 } rows=2
//!  WARN edit{id=42}: Not found
//! ```

/// Initializes the tracing subscriber for the application.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already identifies the source
        .compact()
        .init();
}
