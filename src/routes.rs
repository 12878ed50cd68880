//! JSON-RPC methods exposing the wallet contract.

use std::sync::Arc;

use jsonrpc_core::{self as rpc, IoHandler, Params};
use serde_json::Map;

use crate::contract::Contract;
use crate::engine::WalletEngine;
use crate::error::validation_error;
use crate::types::Json;
use crate::validation::{field_error, ValidationErrors};

/// Method listing the stored wallets.
pub const GET_WALLETS: &str = "getWallets";

/// Method encrypting a wallet with a password.
pub const ENCRYPT_WALLET: &str = "encryptWallet";

/// Helper macro to add multiple JSON-RPC methods at once
macro_rules! routes {
    ($io:expr, $contract:expr $(,)?) => {};
    ($io:expr, $contract:expr, ($method_jsonrpc:expr, $handler:ident $(,)?), $($args:tt)*) => {
        {
            let contract = $contract.clone();
            $io.add_sync_method($method_jsonrpc, move |params: Params| -> rpc::Result<Json> {
                log::debug!("Handling request for method: {}", $method_jsonrpc);
                let params = params_to_json(params).map_err(validation_error)?;
                contract
                    .$handler(&params)
                    .map(Json::from)
                    .map_err(Into::into)
            });
        }
        routes!($io, $contract, $($args)*);
    };
}

/// Register the wallet contract methods on `handler`.
pub fn connect_routes<E>(handler: &mut IoHandler, contract: Arc<Contract<E>>)
where
    E: WalletEngine + 'static,
{
    routes!(
        handler,
        contract,
        (GET_WALLETS, list_wallets),
        (ENCRYPT_WALLET, encrypt_wallet),
    );
}

// Omitted params stand for the empty object. Positional params have no
// field names to validate against, so they are refused outright.
fn params_to_json(params: Params) -> Result<Json, ValidationErrors> {
    match params {
        Params::None => Ok(Json::Object(Map::new())),
        Params::Map(map) => Ok(Json::Object(map)),
        Params::Array(_) => Err(field_error(
            "params",
            "expected named params (an object), found positional params (an array)",
        )),
    }
}
