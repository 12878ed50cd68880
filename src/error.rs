use jsonrpc_core as rpc;
use serde_json::json;
use thiserror::Error;

use crate::engine::EngineError;
use crate::types::Json;
use crate::validation::ValidationErrors;

/// Possible errors returned by the contract.
#[derive(Debug, Error)]
pub enum Error {
    /// The request did not match its schema. The engine was not called.
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    /// The engine answered with a value that does not match the response schema.
    #[error("invalid engine response: {0}")]
    InvalidResponse(ValidationErrors),
    /// The engine failed; the failure is forwarded untouched.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Just like `std::result::Result` but with the error param fixed to `Error`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Split the error into a JSON-RPC server error code, message and data.
    pub fn into_parts(self) -> (i64, &'static str, Option<Json>) {
        match self {
            Error::Validation(e) => (400, "Validation Error", serde_json::to_value(e).ok()),
            Error::Engine(EngineError::WrongPasswordContext) => (401, "Unauthorized", None),
            Error::Engine(EngineError::WalletNotFound(wallet_id)) => (
                402,
                "Forbidden",
                Some(json!({ "cause": "wallet not found", "wallet_id": wallet_id })),
            ),
            Error::Engine(EngineError::AlreadyEncrypted(wallet_id)) => (
                409,
                "Conflict",
                Some(json!({ "cause": "wallet is already encrypted", "wallet_id": wallet_id })),
            ),
            Error::Engine(e @ EngineError::Storage(_))
            | Error::Engine(e @ EngineError::Crypto(_)) => {
                log::error!("Engine Error: {}", &e);
                (
                    500,
                    "Internal Error",
                    Some(json!({ "cause": e.to_string() })),
                )
            }
            Error::InvalidResponse(e) => {
                log::error!("Invalid Engine Response: {}", &e);
                (
                    500,
                    "Internal Error",
                    Some(json!({ "cause": "invalid engine response", "errors": e })),
                )
            }
        }
    }
}

/// Helper function to simplify .map_err on validation errors.
pub fn validation_error(err: ValidationErrors) -> Error {
    Error::Validation(err)
}

impl From<Error> for rpc::Error {
    fn from(err: Error) -> Self {
        let (code, message, data) = err.into_parts();
        rpc::Error {
            code: rpc::ErrorCode::ServerError(code),
            message: message.into(),
            data,
        }
    }
}
