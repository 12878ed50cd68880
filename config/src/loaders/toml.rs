//! Load the configuration from a file or a `String` written in [Toml format](https://en.wikipedia.org/wiki/TOML)

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::{Config, partial};

/// Errors this module can fail with: reading the file might fail with
/// an `io::Error`, parsing its contents with a `toml::de::Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("could not read configuration file: {0}")]
    IOError(#[from] io::Error),
    /// The contents are not a valid configuration.
    #[error("could not parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configuration could not be written back as Toml.
    #[error("could not serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Just like `std::result::Result` but with the error param fixed to
/// `Error` type in this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Load configuration from a file written in Toml format.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<partial::Config> {
    let contents = fs::read_to_string(path)?;

    from_str(&contents)
}

/// Load configuration from a string written in Toml format.
pub fn from_str(contents: &str) -> Result<partial::Config> {
    Ok(toml::from_str(contents)?)
}

/// Write a total configuration as Toml, in a form [`from_str`] reads back.
pub fn to_string(config: &Config) -> Result<String> {
    Ok(toml::to_string(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_empty_config() {
        let config = from_str("").unwrap();

        assert_eq!(config, partial::Config::default());
    }

    #[test]
    fn test_load_non_empty_config() {
        let config = from_str(
            r#"
[log]
level = "debug"

[[wallets]]
id = "w1"
caption = "Savings"

[[wallets]]
id = "w2"
name = "cold"
encrypted = true
"#,
        )
        .unwrap();

        assert_eq!(config.log.level, Some(log::LevelFilter::Debug));
        assert_eq!(config.wallets.len(), 2);
        assert_eq!(config.wallets[0].id, "w1");
        assert_eq!(config.wallets[0].caption.as_deref(), Some("Savings"));
        assert!(!config.wallets[0].encrypted);
        assert_eq!(config.wallets[1].name.as_deref(), Some("cold"));
        assert!(config.wallets[1].encrypted);
    }

    #[test]
    fn test_load_incorrect_config() {
        let config = from_str(
            r#"
[[wallets]]
caption = "no id"
"#,
        );

        assert!(matches!(config, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let config = from_str(
            r#"
[log]
level = "info"
colour = true
"#,
        );

        assert!(config.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let config = from_file("this/path/does/not/exist.toml");

        assert!(matches!(config, Err(Error::IOError(_))));
    }

    #[test]
    fn test_written_config_loads_back() {
        let partial = from_str(
            r#"
[log]
level = "warn"

[[wallets]]
id = "w1"
caption = "Savings"
"#,
        )
        .unwrap();
        let config = Config::from_partial(&partial);

        let written = to_string(&config).unwrap();
        let reloaded = Config::from_partial(&from_str(&written).unwrap());

        assert_eq!(reloaded, config);
    }
}
