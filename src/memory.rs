//! In-memory wallet engine.
//!
//! Keeps wallet records in a `RwLock`ed list. "Encrypting" a wallet only
//! flips its flag: no key is derived and nothing is written to disk, which
//! keeps it usable for local runs of the IPC shell and for tests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{json, Map};

use witnet_wallet_ipc_config::config::partial;

use crate::engine::{EngineError, WalletEngine};
use crate::requests::EncryptWalletRequest;
use crate::types::Json;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredWallet {
    id: String,
    name: Option<String>,
    caption: Option<String>,
    encrypted: bool,
}

/// Wallet engine holding its records in memory.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    wallets: RwLock<Vec<StoredWallet>>,
}

impl MemoryEngine {
    /// Engine with no wallets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine seeded with the wallets of the configuration, in order. Only
    /// the first wallet stored under each id is kept.
    pub fn from_config(wallets: &[partial::Wallet]) -> Self {
        let mut stored: Vec<StoredWallet> = Vec::with_capacity(wallets.len());
        for wallet in wallets {
            if stored.iter().any(|seen| seen.id == wallet.id) {
                log::warn!("Ignoring duplicated wallet '{}'", wallet.id);
                continue;
            }
            stored.push(StoredWallet {
                id: wallet.id.clone(),
                name: wallet.name.clone(),
                caption: wallet.caption.clone(),
                encrypted: wallet.encrypted,
            });
        }

        MemoryEngine {
            wallets: RwLock::new(stored),
        }
    }

    /// Store a new, unencrypted wallet after the existing ones.
    pub fn insert(
        &self,
        id: impl Into<String>,
        name: Option<String>,
        caption: Option<String>,
    ) -> Result<(), EngineError> {
        let id = id.into();
        let mut wallets = self.write()?;
        if wallets.iter().any(|wallet| wallet.id == id) {
            return Err(EngineError::Storage(format!(
                "wallet {} is already stored",
                id
            )));
        }
        wallets.push(StoredWallet {
            id,
            name,
            caption,
            encrypted: false,
        });

        Ok(())
    }

    /// Whether the wallet `id` is encrypted, `None` if it is not stored.
    pub fn is_encrypted(&self, id: &str) -> Result<Option<bool>, EngineError> {
        Ok(self
            .read()?
            .iter()
            .find(|wallet| wallet.id == id)
            .map(|wallet| wallet.encrypted))
    }

    /// Caption of the wallet `id`, `None` if it is not stored.
    pub fn caption(&self, id: &str) -> Result<Option<Option<String>>, EngineError> {
        Ok(self
            .read()?
            .iter()
            .find(|wallet| wallet.id == id)
            .map(|wallet| wallet.caption.clone()))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<StoredWallet>>, EngineError> {
        self.wallets
            .read()
            .map_err(|_| EngineError::Storage("wallet storage lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<StoredWallet>>, EngineError> {
        self.wallets
            .write()
            .map_err(|_| EngineError::Storage("wallet storage lock poisoned".to_string()))
    }
}

impl WalletEngine for MemoryEngine {
    fn list_wallets(&self) -> Result<Json, EngineError> {
        let infos = self
            .read()?
            .iter()
            .map(|wallet| {
                let mut info = Map::new();
                info.insert("id".to_string(), Json::from(wallet.id.as_str()));
                if let Some(name) = &wallet.name {
                    info.insert("name".to_string(), Json::from(name.as_str()));
                }
                if let Some(caption) = &wallet.caption {
                    info.insert("caption".to_string(), Json::from(caption.as_str()));
                }
                Json::Object(info)
            })
            .collect();

        Ok(Json::Array(infos))
    }

    fn encrypt_wallet(&self, request: &EncryptWalletRequest) -> Result<Json, EngineError> {
        let mut wallets = self.write()?;
        let wallet = wallets
            .iter_mut()
            .find(|wallet| wallet.id == request.id)
            .ok_or_else(|| EngineError::WalletNotFound(request.id.clone()))?;

        if wallet.encrypted {
            return Err(EngineError::AlreadyEncrypted(request.id.clone()));
        }

        wallet.encrypted = true;
        if let Some(caption) = &request.caption {
            wallet.caption = Some(caption.clone());
        }
        log::info!("Wallet {} encrypted", wallet.id);

        Ok(json!({ "id": wallet.id, "encrypted": true }))
    }
}
