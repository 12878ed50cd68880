//! Responses produced by the wallet engine, re-validated before they reach the UI.

use serde_json::Map;

use crate::types::Json;
use crate::validation::{
    array, combine3_field_errors, combine_field_errors, non_empty, object, optional_string,
    reject_unknown_fields, required_string, Schema, ValidationErrors,
};

/// Descriptor of one stored wallet, as listed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSummary {
    /// Wallet identifier
    pub id: String,
    /// Wallet name, if the engine keeps one
    pub name: Option<String>,
    /// Human-readable caption, if one was set
    pub caption: Option<String>,
}

impl WalletSummary {
    /// Accepted fields.
    pub const FIELDS: &'static [&'static str] = &["id", "name", "caption"];
}

impl Schema for WalletSummary {
    fn validate(value: &Json) -> Result<Self, ValidationErrors> {
        let fields = object(value)?;

        let id = required_string(fields, "id").and_then(|id| non_empty("id", id));
        let name = optional_string(fields, "name");
        let caption = optional_string(fields, "caption");
        let known = reject_unknown_fields(fields, Self::FIELDS);

        let summary = combine3_field_errors(id, name, caption, |id, name, caption| WalletSummary {
            id,
            name,
            caption,
        });

        combine_field_errors(summary, known, |summary, ()| summary)
    }

    fn to_json(&self) -> Json {
        let WalletSummary { id, name, caption } = self;

        let mut fields = Map::new();
        fields.insert("id".to_string(), Json::from(id.as_str()));
        if let Some(name) = name {
            fields.insert("name".to_string(), Json::from(name.as_str()));
        }
        if let Some(caption) = caption {
            fields.insert("caption".to_string(), Json::from(caption.as_str()));
        }

        Json::Object(fields)
    }
}

/// The wallets listed by the engine, in the order the engine returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWalletsResponse {
    /// Validated summaries
    pub wallets: Vec<WalletSummary>,
}

impl Schema for ListWalletsResponse {
    /// Stops at the first invalid element, reporting every error of that
    /// element under its `[index]` path.
    fn validate(value: &Json) -> Result<Self, ValidationErrors> {
        let wallets = array(value)?
            .iter()
            .enumerate()
            .map(|(index, element)| {
                WalletSummary::validate(element)
                    .map_err(|errors| errors.prefixed(&format!("[{}]", index)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListWalletsResponse { wallets })
    }

    fn to_json(&self) -> Json {
        Json::Array(self.wallets.iter().map(WalletSummary::to_json).collect())
    }
}

impl From<ListWalletsResponse> for Json {
    fn from(response: ListWalletsResponse) -> Self {
        response.to_json()
    }
}

/// Check every element of an engine's wallet listing, keeping their order.
pub fn validate_list_wallets_response(
    value: &Json,
) -> Result<ListWalletsResponse, ValidationErrors> {
    ListWalletsResponse::validate(value)
}
