//! # Partial Config
//!
//! All loaders in the `loaders` module produce an instance of this
//! struct. Every param is optional here: when a param does not appear
//! in the source it stays `None`, and `Config::from_partial` fills the
//! gap from [defaults](crate::defaults).

use serde::{Deserialize, Serialize};

/// The partial configuration object.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging-related configuration
    #[serde(default)]
    pub log: Log,

    /// Wallets the reference engine is seeded with
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wallets: Vec<Wallet>,
}

/// Logging-specific partial configuration.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Log {
    /// Level filter applied to the crates of this workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<log::LevelFilter>,
}

/// A wallet record known to the reference engine at start.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Wallet {
    /// Wallet identifier
    pub id: String,

    /// Optional wallet name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional human-readable caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Whether the wallet starts out already encrypted
    #[serde(default)]
    pub encrypted: bool,
}
