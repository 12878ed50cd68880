//! The contract boundary: validate, call the engine, validate again.

use crate::engine::WalletEngine;
use crate::error::{validation_error, Error, Result};
use crate::requests::{validate_encrypt_wallet_request, validate_list_wallets_request};
use crate::responses::{validate_list_wallets_response, ListWalletsResponse};
use crate::types::Json;

/// Wallet engine guarded by the request and response schemas.
///
/// Nothing reaches the engine unless it validated, and nothing the engine
/// lists reaches the caller unless it validated too.
#[derive(Debug)]
pub struct Contract<E> {
    engine: E,
}

impl<E: WalletEngine> Contract<E> {
    /// Put `engine` behind the contract.
    pub fn new(engine: E) -> Self {
        Contract { engine }
    }

    /// The guarded engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// List the wallets known to the engine, in the engine's order.
    pub fn list_wallets(&self, params: &Json) -> Result<ListWalletsResponse> {
        let request = validate_list_wallets_request(params).map_err(|errors| {
            log::warn!("Rejected list wallets request: {}", errors);
            validation_error(errors)
        })?;
        log::trace!("=> Handling Request: {:?}", &request);

        let wallets = self.engine.list_wallets()?;

        validate_list_wallets_response(&wallets).map_err(|errors| {
            log::warn!("Engine listed malformed wallets: {}", errors);
            Error::InvalidResponse(errors)
        })
    }

    /// Ask the engine to encrypt a wallet and return its acknowledgment as is.
    pub fn encrypt_wallet(&self, params: &Json) -> Result<Json> {
        let request = validate_encrypt_wallet_request(params).map_err(|errors| {
            log::warn!("Rejected encrypt wallet request: {}", errors);
            validation_error(errors)
        })?;
        log::trace!("=> Handling Request: {:?}", &request);

        Ok(self.engine.encrypt_wallet(&request)?)
    }
}
