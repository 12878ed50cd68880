//! # Config
//!
//! This module contains the __total__ `Config` struct: every field the
//! rest of the application needs is present, unlike the
//! [partial](partial::Config) one where most fields are optional.
//!
//! ```
//! use witnet_wallet_ipc_config::config::{partial, Config};
//!
//! let config = Config::from_partial(&partial::Config::default());
//! assert_eq!(config, Config::default());
//! ```

use std::collections::HashSet;

use log::warn;
use serde::Serialize;

use crate::defaults::{Defaults, Standard};

/// Module containing the partial configuration struct that is
/// returned by the loaders.
pub mod partial;

/// The total configuration object.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Logging-related configuration
    pub log: Log,

    /// Wallets the reference engine is seeded with, in file order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wallets: Vec<partial::Wallet>,
}

/// Logging-specific configuration.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Log {
    /// Level filter applied to the crates of this workspace
    pub level: log::LevelFilter,
}

impl Config {
    /// Build a total configuration on top of the standard defaults.
    pub fn from_partial(config: &partial::Config) -> Self {
        let defaults = Standard;

        Config {
            log: Log::from_partial(&config.log, &defaults),
            wallets: wallets_from_partial(&config.wallets),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_partial(&partial::Config::default())
    }
}

impl Log {
    /// Fill the logging params missing from `config` with `defaults`.
    pub fn from_partial(config: &partial::Log, defaults: &dyn Defaults) -> Self {
        Log {
            level: config.level.unwrap_or_else(|| defaults.log_level()),
        }
    }
}

// Later entries with an already-seen id are dropped so the engine never holds
// two records for the same wallet.
fn wallets_from_partial(wallets: &[partial::Wallet]) -> Vec<partial::Wallet> {
    let mut seen = HashSet::with_capacity(wallets.len());

    wallets
        .iter()
        .filter(|&wallet| {
            let fresh = seen.insert(wallet.id.as_str());
            if !fresh {
                warn!(
                    "Ignoring duplicated wallet '{}' in the configuration",
                    wallet.id
                );
            }
            fresh
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(id: &str) -> partial::Wallet {
        partial::Wallet {
            id: id.to_string(),
            name: None,
            caption: None,
            encrypted: false,
        }
    }

    #[test]
    fn test_default_log_level_is_info() {
        let config = Config::default();

        assert_eq!(config.log.level, log::LevelFilter::Info);
        assert!(config.wallets.is_empty());
    }

    #[test]
    fn test_partial_log_level_overrides_default() {
        let partial = partial::Config {
            log: partial::Log {
                level: Some(log::LevelFilter::Trace),
            },
            ..partial::Config::default()
        };

        assert_eq!(
            Config::from_partial(&partial).log.level,
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_duplicated_wallets_keep_first_occurrence() {
        let mut duplicated = wallet("w1");
        duplicated.caption = Some("second".to_string());
        let partial = partial::Config {
            wallets: vec![wallet("w1"), wallet("w2"), duplicated],
            ..partial::Config::default()
        };

        let config = Config::from_partial(&partial);

        assert_eq!(config.wallets, vec![wallet("w1"), wallet("w2")]);
    }
}
