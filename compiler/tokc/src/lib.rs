//! Command-line driver for `tok_core`.
//!
//! `tok lex <file>` tokenizes a file with the base, word or element
//! tokenizer and prints the stream as text, JSON or markup.

use std::sync::Once;

pub mod commands;
mod error;

pub use error::{CliError, Result};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=tokc=debug`, or
/// `RUST_LOG=tok_core=trace` for per-token events.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
