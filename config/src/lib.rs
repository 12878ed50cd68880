//! # Wallet IPC configuration
//!
//! Loads the configuration used by the wallet IPC shell: logging
//! options and the wallets the reference engine starts with.
//!
//! Loaders always produce a [partial](config::partial::Config)
//! configuration; use [`Config::from_partial`](config::Config::from_partial)
//! to obtain the total one.

#![deny(rust_2018_idioms)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub mod config;
pub mod defaults;
pub mod dirs;

/// Configuration loaders, one per supported format.
pub mod loaders {
    pub mod toml;
}
