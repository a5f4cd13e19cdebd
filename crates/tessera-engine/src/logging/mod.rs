//! Logging setup.
//!
//! The crate logs through the `log` facade only; binaries install the
//! `env_logger` backend once via `init_logging`.

mod init;

pub use init::{init_logging, LoggingConfig};
