use std::{env, path::PathBuf};

use anyhow::Context;
use lazy_static::lazy_static;
use structopt::StructOpt;
use terminal_size as term;

use witnet_wallet_ipc_config as config;

mod wallet;

pub fn from_args() -> Cli {
    Cli::from_args()
}

pub fn exec(command: Cli) -> anyhow::Result<()> {
    let Cli {
        config,
        debug,
        trace,
        no_timestamp,
        no_module_path,
        cmd,
    } = command;

    let config = get_config(config.or_else(config::dirs::find_config))?;
    let mut log_opts = LogOptions {
        level: config.log.level,
        source: LogOptionsSource::Config,
        timestamp: !no_timestamp,
        module_path: !no_module_path,
    };

    if let Ok(rust_log) = env::var("RUST_LOG") {
        if rust_log.contains("witnet") {
            log_opts.level = env_logger::Logger::from_default_env().filter();
            log_opts.source = LogOptionsSource::Env;
        }
    }

    if trace {
        log_opts.level = log::LevelFilter::Trace;
        log_opts.source = LogOptionsSource::Flag;
    } else if debug {
        log_opts.level = log::LevelFilter::Debug;
        log_opts.source = LogOptionsSource::Flag;
    }

    init_logger(log_opts);

    wallet::exec_cmd(cmd, config)
}

// Stdout may be the IPC channel, so everything here goes to stderr.
fn init_logger(opts: LogOptions) {
    eprintln!(
        "Setting log level to: {}, source: {:?}",
        opts.level, opts.source
    );
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if !opts.timestamp {
        builder.format_timestamp(None);
    }
    builder
        .format_module_path(opts.module_path)
        .filter_level(log::LevelFilter::Info)
        .filter_module("witnet", opts.level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn get_config(path: Option<PathBuf>) -> anyhow::Result<config::config::Config> {
    match path {
        Some(p) => {
            eprintln!("Loading config from: {}", p.display());
            let partial = config::loaders::toml::from_file(&p)
                .with_context(|| format!("failed to load config from {}", p.display()))?;
            Ok(config::config::Config::from_partial(&partial))
        }
        None => {
            eprintln!("HEADS UP! No configuration specified/found. Using default one!");
            Ok(config::config::Config::default())
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(max_term_width = *TERM_WIDTH)]
pub struct Cli {
    #[structopt(short = "c", long = "config", help = CONFIG_HELP)]
    config: Option<PathBuf>,
    /// Turn on DEBUG logging.
    #[structopt(long = "debug")]
    debug: bool,
    /// Turn on TRACE logging.
    #[structopt(long = "trace")]
    trace: bool,
    /// Do not show timestamps in logs.
    #[structopt(long = "no-timestamp")]
    no_timestamp: bool,
    /// Do not show module path in logs.
    #[structopt(long = "no-module-path")]
    no_module_path: bool,
    #[structopt(subcommand)]
    cmd: wallet::Command,
}

struct LogOptions {
    level: log::LevelFilter,
    timestamp: bool,
    module_path: bool,
    source: LogOptionsSource,
}

#[derive(Debug)]
enum LogOptionsSource {
    Config,
    Env,
    Flag,
}

lazy_static! {
    static ref TERM_WIDTH: usize = {
        let size = term::terminal_size();
        if let Some((term::Width(w), _)) = size {
            w as usize
        } else {
            120
        }
    };
}

static CONFIG_HELP: &str =
    r#"Load configuration from this file. If not specified will try to find a configuration
in these paths:
- current path
- standard configuration path:
  - $XDG_CONFIG_HOME/witnet/witnet_wallet_ipc.toml in Gnu/Linux
  - $HOME/Library/Preferences/io.witnet.witnet/witnet_wallet_ipc.toml in MacOS
  - C:\Users\<YOUR USER>\AppData\Roaming\witnet\witnet\config\witnet_wallet_ipc.toml
- /etc/witnet/witnet_wallet_ipc.toml if in a *nix platform
If no configuration is found. The default configuration is used, see `show-config` subcommand
if you want to know more about the default config."#;
