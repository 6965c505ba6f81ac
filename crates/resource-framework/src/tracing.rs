//! # Observability & Tracing
//!
//! Structured logging for repositories and clients, built on `tracing`.
//!
//! Repositories log their lifecycle (`Repository started`, `Shutdown`) at `info`, every
//! mutation at `info` and reads at `debug`, always with a `resource_type` field. Domain
//! clients add a span per call through `#[instrument]`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Reads, queries and attachment flags
//! ```
//!
//! With `RUST_LOG=debug` a listing looks like:
//!
//! ```text
//! DEBUG Create resource_type="projects" id=14
//! INFO Created resource_type="projects" id=14 size=1
//! DEBUG find_all:Sending request query=QuerySpec { resource_type: "projects", params: {} }
//! DEBUG FindAll resource_type="projects" count=1 meta=true links=true
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Panics if one is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false) // resource_type identifies the source
        .compact()
        .init();
}

/// Like [`setup_tracing`], but a no-op when a subscriber already exists (tests).
pub fn try_setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
