//! XL front-end driver.
//!
//! The `xl` binary is a thin argument parser over [`commands`]; everything it
//! does is available here so integration tests can drive it against an
//! in-memory writer.

pub mod commands;
mod error;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the driver.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=xl_lexer=trace xl lex prog.x`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
