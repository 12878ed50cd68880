//! Platform-specific application paths.

use std::env;
use std::path::PathBuf;

/// Name of the configuration file looked up by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "witnet_wallet_ipc.toml";

/// Find a configuration from standard paths.
///
/// In GNU/Linux:
///     current directory | $XDG_CONFIG_HOME/witnet | /etc/witnet
///
/// In MacOS:
///     current directory | $HOME/Library/Preferences/io.witnet.witnet | /etc/witnet
///
/// In Windows:
///     current directory | C:\Users\Alice\AppData\Roaming\witnet\witnet\config
pub fn find_config() -> Option<PathBuf> {
    let mut config_dirs = Vec::with_capacity(3);

    if let Ok(dir) = env::current_dir() {
        config_dirs.push(dir);
    }

    if let Some(dir) = directories_next::ProjectDirs::from("io", "witnet", "witnet") {
        config_dirs.push(dir.config_dir().into());
    }

    if cfg!(unix) {
        config_dirs.push("/etc/witnet".into());
    }

    config_dirs
        .into_iter()
        .map(|path| path.join(CONFIG_FILE_NAME))
        .find(|path| path.exists())
}
