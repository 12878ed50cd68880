use std::sync::Arc;

use jsonrpc_core::IoHandler;
use serde_json::{json, Value};

use witnet_wallet_ipc::{routes, server, Contract, MemoryEngine};

fn handler() -> (IoHandler, Arc<Contract<MemoryEngine>>) {
    let engine = MemoryEngine::new();
    engine.insert("w1", None, None).unwrap();
    engine
        .insert("w2", Some("cold".to_string()), Some("Savings".to_string()))
        .unwrap();
    let contract = Arc::new(Contract::new(engine));

    let mut handler = IoHandler::new();
    routes::connect_routes(&mut handler, contract.clone());

    (handler, contract)
}

fn call(handler: &IoHandler, request: Value) -> Value {
    let response = handler
        .handle_request_sync(&request.to_string())
        .expect("requests with an id are always answered");

    serde_json::from_str(&response).unwrap()
}

#[test]
fn get_wallets_lists_in_engine_order() {
    let (handler, _) = handler();

    let response = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "getWallets", "params": {}, "id": 1 }),
    );

    assert_eq!(
        response["result"],
        json!([{ "id": "w1" }, { "id": "w2", "name": "cold", "caption": "Savings" }])
    );
}

#[test]
fn get_wallets_without_params() {
    let (handler, _) = handler();

    let response = call(&handler, json!({ "jsonrpc": "2.0", "method": "getWallets", "id": 1 }));

    assert_eq!(response["result"].as_array().map(Vec::len), Some(2));
}

#[test]
fn get_wallets_with_extra_field_is_rejected() {
    let (handler, _) = handler();

    let response = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "getWallets", "params": { "extra": 1 }, "id": 1 }),
    );

    assert_eq!(response["error"]["code"], json!(400));
    assert_eq!(response["error"]["message"], json!("Validation Error"));
    assert_eq!(
        response["error"]["data"],
        json!([["extra", "unexpected field"]])
    );
}

#[test]
fn encrypt_wallet_without_password_is_rejected_before_the_engine() {
    let (handler, contract) = handler();

    let response = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "encryptWallet", "params": { "id": "w1" }, "id": 7 }),
    );

    assert_eq!(response["id"], json!(7));
    assert_eq!(response["error"]["code"], json!(400));
    assert_eq!(
        response["error"]["data"],
        json!([["password", "missing required field"]])
    );
    assert_eq!(contract.engine().is_encrypted("w1").unwrap(), Some(false));
}

#[test]
fn encrypt_wallet_with_positional_params_is_rejected() {
    let (handler, contract) = handler();

    let response = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "encryptWallet", "params": ["w1", "pw"], "id": 1 }),
    );

    assert_eq!(response["error"]["code"], json!(400));
    assert_eq!(response["error"]["data"][0][0], json!("params"));
    assert_eq!(contract.engine().is_encrypted("w1").unwrap(), Some(false));
}

#[test]
fn encrypt_wallet_acknowledges_and_updates_listing() {
    let (handler, contract) = handler();

    let response = call(
        &handler,
        json!({
            "jsonrpc": "2.0",
            "method": "encryptWallet",
            "params": { "id": "w1", "password": "correct-horse", "caption": "Daily" },
            "id": 2
        }),
    );

    assert_eq!(response["result"], json!({ "id": "w1", "encrypted": true }));
    assert_eq!(contract.engine().is_encrypted("w1").unwrap(), Some(true));

    let listing = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "getWallets", "params": {}, "id": 3 }),
    );
    assert_eq!(listing["result"][0], json!({ "id": "w1", "caption": "Daily" }));
}

#[test]
fn engine_errors_keep_their_meaning() {
    let (handler, _) = handler();

    let unknown = call(
        &handler,
        json!({
            "jsonrpc": "2.0",
            "method": "encryptWallet",
            "params": { "id": "nope", "password": "pw" },
            "id": 1
        }),
    );
    assert_eq!(unknown["error"]["code"], json!(402));
    assert_eq!(unknown["error"]["data"]["wallet_id"], json!("nope"));

    let params = json!({ "id": "w2", "password": "pw" });
    call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "encryptWallet", "params": params, "id": 2 }),
    );
    let twice = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "encryptWallet", "params": params, "id": 3 }),
    );
    assert_eq!(twice["error"]["code"], json!(409));
    assert_eq!(twice["error"]["message"], json!("Conflict"));
}

#[test]
fn unknown_method_is_not_found() {
    let (handler, _) = handler();

    let response = call(
        &handler,
        json!({ "jsonrpc": "2.0", "method": "exportMasterKey", "params": {}, "id": 1 }),
    );

    assert_eq!(response["error"]["code"], json!(-32601));
}

#[test]
fn serve_answers_each_line() {
    let (handler, _) = handler();
    let input = [
        json!({ "jsonrpc": "2.0", "method": "getWallets", "id": 1 }).to_string(),
        json!({ "jsonrpc": "2.0", "method": "encryptWallet", "params": { "password": "x" }, "id": 2 })
            .to_string(),
    ]
    .join("\n");
    let mut output = Vec::new();

    let handled = server::serve(input.as_bytes(), &mut output, &handler).unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(handled, 2);
    assert!(responses[0]["result"].is_array());
    assert_eq!(
        responses[1]["error"]["data"],
        json!([["id", "missing required field"]])
    );
}
