//! The wallet engine: the collaborator that actually stores and encrypts wallets.

use std::sync::Arc;

use thiserror::Error;

use crate::requests::EncryptWalletRequest;
use crate::types::Json;

/// Failures reported by a wallet engine. The contract forwards them to the
/// caller without interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No wallet is stored under this id.
    #[error("wallet {0} not found")]
    WalletNotFound(String),
    /// The wallet is already encrypted.
    #[error("wallet {0} is already encrypted")]
    AlreadyEncrypted(String),
    /// The password does not fit the state of the wallet.
    #[error("password cannot be used for this wallet")]
    WrongPasswordContext,
    /// Reading or writing wallet storage failed.
    #[error("storage error: {0}")]
    Storage(String),
    /// Key derivation or encryption failed.
    #[error("crypto error: {0}")]
    Crypto(String),
}

/// Operations a wallet engine must expose to sit behind the contract.
pub trait WalletEngine: Send + Sync {
    /// List every stored wallet. The value is returned raw: the contract
    /// re-validates it before handing it to the UI.
    fn list_wallets(&self) -> Result<Json, EngineError>;

    /// Encrypt the wallet named by an already validated request. The
    /// acknowledgment shape is up to the engine.
    fn encrypt_wallet(&self, request: &EncryptWalletRequest) -> Result<Json, EngineError>;
}

impl<E: WalletEngine + ?Sized> WalletEngine for Arc<E> {
    fn list_wallets(&self) -> Result<Json, EngineError> {
        (**self).list_wallets()
    }

    fn encrypt_wallet(&self, request: &EncryptWalletRequest) -> Result<Json, EngineError> {
        (**self).encrypt_wallet(request)
    }
}

impl<E: WalletEngine + ?Sized> WalletEngine for Box<E> {
    fn list_wallets(&self) -> Result<Json, EngineError> {
        (**self).list_wallets()
    }

    fn encrypt_wallet(&self, request: &EncryptWalletRequest) -> Result<Json, EngineError> {
        (**self).encrypt_wallet(request)
    }
}
