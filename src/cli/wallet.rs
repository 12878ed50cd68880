use std::io;
use std::sync::Arc;

use anyhow::Context;
use jsonrpc_core::IoHandler;
use structopt::StructOpt;

use witnet_wallet_ipc::{routes, server, Contract, MemoryEngine};
use witnet_wallet_ipc_config::{config::Config, loaders};

pub fn exec_cmd(command: Command, config: Config) -> anyhow::Result<()> {
    match command {
        Command::Serve => {
            let engine = MemoryEngine::from_config(&config.wallets);
            log::info!(
                "Serving wallet IPC over stdio with {} wallet(s)",
                config.wallets.len()
            );

            let mut handler = IoHandler::new();
            routes::connect_routes(&mut handler, Arc::new(Contract::new(engine)));

            let stdin = io::stdin();
            let stdout = io::stdout();
            let handled = server::serve(stdin.lock(), stdout.lock(), &handler)
                .context("stdio transport failed")?;
            log::info!("Handled {} request(s), shutting down", handled);

            Ok(())
        }
        Command::ShowConfig => {
            println!("{}", loaders::toml::to_string(&config)?);
            Ok(())
        }
    }
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(
        name = "serve",
        about = "Serve the wallet contract as newline-delimited JSON-RPC over stdin/stdout",
        alias = "run"
    )]
    Serve,
    #[structopt(
        name = "show-config",
        about = "Dump the loaded config in Toml format to stdout"
    )]
    ShowConfig,
}
