//! Wallet IPC contract for Witnet
//!
//! Typed requests and responses exchanged between the wallet UI and the
//! wallet engine, with the validation that guards the boundary between them.
//! A request reaches the engine only after it matches its schema, and the
//! engine's listing reaches the UI only after every element matches too.
//!
//! ```
//! use serde_json::json;
//! use witnet_wallet_ipc::{validate_encrypt_wallet_request, Schema};
//!
//! let request =
//!     validate_encrypt_wallet_request(&json!({ "id": "w1", "password": "correct-horse" }))
//!         .unwrap();
//! assert_eq!(request.caption, None);
//! assert_eq!(request.to_json(), json!({ "id": "w1", "password": "correct-horse" }));
//!
//! let errors = validate_encrypt_wallet_request(&json!({ "password": "x" })).unwrap_err();
//! assert!(errors.contains("id"));
//! ```

#![deny(rust_2018_idioms)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

mod contract;
mod engine;
mod error;
mod memory;
mod requests;
mod responses;
pub mod routes;
pub mod server;
mod types;
mod validation;

pub use contract::Contract;
pub use engine::{EngineError, WalletEngine};
pub use error::{validation_error, Error, Result};
pub use memory::MemoryEngine;
pub use requests::{
    validate_encrypt_wallet_request, validate_list_wallets_request, EncryptWalletRequest,
    ListWalletsRequest,
};
pub use responses::{validate_list_wallets_response, ListWalletsResponse, WalletSummary};
pub use types::{Json, Password};
pub use validation::{
    combine3_field_errors, combine_field_errors, field_error, Schema, ValidationErrors, ROOT,
};
