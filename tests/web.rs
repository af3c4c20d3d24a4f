//! Browser tests for the JsValue-facing exports
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use wallet_extension::{configure, is_valid_extension_to_dapp_request};

wasm_bindgen_test_configure!(run_in_browser);

fn js(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn validates_switch_chain() {
    assert!(is_valid_extension_to_dapp_request(js(
        r#"{"type": "SwitchChain", "chainId": "0x1", "providerUrl": "https://mainnet.example.org"}"#
    )));
}

#[wasm_bindgen_test]
fn validates_update_connections() {
    assert!(is_valid_extension_to_dapp_request(js(
        r#"{"type": "UpdateConnections", "addresses": ["0x6B175474E89094C44Da98b954EedeAC495271d0F"]}"#
    )));
}

#[wasm_bindgen_test]
fn rejects_invalid_values() {
    assert!(!is_valid_extension_to_dapp_request(js("{}")));
    assert!(!is_valid_extension_to_dapp_request(js(r#"{"type": "SwitchChain"}"#)));
    assert!(!is_valid_extension_to_dapp_request(JsValue::UNDEFINED));
    assert!(!is_valid_extension_to_dapp_request(JsValue::from_f64(42.0)));
}

#[wasm_bindgen_test]
fn configure_rejects_bad_url() {
    assert!(configure(js(r#"{"webInterfaceUrl": "not a url"}"#)).is_err());
    assert!(configure(js(r#"{"webInterfaceUrl": "https://app.example.org"}"#)).is_ok());
}
