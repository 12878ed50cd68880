//! # Default values
//!
//! Values used for every configuration param that the loaded
//! configuration leaves out.

/// Trait defining all the configuration params that have a suitable
/// default value.
pub trait Defaults {
    /// Default log level
    fn log_level(&self) -> log::LevelFilter {
        log::LevelFilter::Info
    }
}

/// Defaults used when running the wallet IPC shell.
pub struct Standard;

impl Defaults for Standard {}
