//! Requests sent by the wallet UI.

use serde_json::Map;

use crate::types::{Json, Password};
use crate::validation::{
    combine3_field_errors, combine_field_errors, non_empty, object, optional_string,
    reject_unknown_fields, required_string, Schema, ValidationErrors,
};

/// Used to obtain the wallets stored by the engine. Carries no params: the
/// only accepted wire value is the empty object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListWalletsRequest;

impl ListWalletsRequest {
    /// Accepted fields.
    pub const FIELDS: &'static [&'static str] = &[];
}

impl Schema for ListWalletsRequest {
    fn validate(value: &Json) -> Result<Self, ValidationErrors> {
        let fields = object(value)?;
        reject_unknown_fields(fields, Self::FIELDS)?;

        Ok(ListWalletsRequest)
    }

    fn to_json(&self) -> Json {
        Json::Object(Map::new())
    }
}

/// Ask the engine to encrypt the wallet `id` with `password`, optionally
/// labelling it with `caption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptWalletRequest {
    /// Identifier of an existing wallet. Existence is checked by the engine.
    pub id: String,
    /// Opaque to this contract: no strength policy is applied here.
    pub password: Password,
    /// `None` means no caption, which is not the same as an empty caption.
    pub caption: Option<String>,
}

impl EncryptWalletRequest {
    /// Accepted fields.
    pub const FIELDS: &'static [&'static str] = &["id", "password", "caption"];
}

impl Schema for EncryptWalletRequest {
    /// Validate `EncryptWalletRequest`.
    ///
    /// To be valid it must pass these checks:
    /// - id is a non-empty string
    /// - password is a string
    /// - caption, when present, is a string
    /// - no other field is present
    fn validate(value: &Json) -> Result<Self, ValidationErrors> {
        let fields = object(value)?;

        let id = required_string(fields, "id").and_then(|id| non_empty("id", id));
        let password = required_string(fields, "password").map(Password::from);
        let caption = optional_string(fields, "caption");
        let known = reject_unknown_fields(fields, Self::FIELDS);

        let request = combine3_field_errors(id, password, caption, |id, password, caption| {
            EncryptWalletRequest {
                id,
                password,
                caption,
            }
        });

        combine_field_errors(request, known, |request, ()| request)
    }

    fn to_json(&self) -> Json {
        let EncryptWalletRequest {
            id,
            password,
            caption,
        } = self;

        let mut fields = Map::new();
        fields.insert("id".to_string(), Json::from(id.as_str()));
        fields.insert("password".to_string(), Json::from(password.as_str()));
        if let Some(caption) = caption {
            fields.insert("caption".to_string(), Json::from(caption.as_str()));
        }

        Json::Object(fields)
    }
}

/// Check that `value` is the empty `ListWalletsRequest` marker.
pub fn validate_list_wallets_request(
    value: &Json,
) -> Result<ListWalletsRequest, ValidationErrors> {
    ListWalletsRequest::validate(value)
}

/// Check the shape of an `EncryptWalletRequest`. Never triggers encryption.
pub fn validate_encrypt_wallet_request(
    value: &Json,
) -> Result<EncryptWalletRequest, ValidationErrors> {
    EncryptWalletRequest::validate(value)
}
