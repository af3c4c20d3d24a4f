/// Wallet Extension - navigation, message schemas and UI for the wallet's
/// browser extension and mobile app
/// Built with Rust + WASM + Yew

pub mod browser;
pub mod chrome;
pub mod config;
pub mod error;
pub mod linking;
pub mod messaging;
pub mod navigation;
pub mod routes;
pub mod ui;

#[cfg(test)]
mod testing;

use chrome::{ChromeBrowser, ChromeOnboardingChannel};
use config::ExtensionConfig;
use messaging::requests::ContentScriptUtilityMessage;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Install the extension config used by the exports below
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: ExtensionConfig = serde_wasm_bindgen::from_value(config)?;
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Extension configured for {}", config.web_interface_url);
    config::install(config);
    Ok(())
}

#[wasm_bindgen(js_name = focusOrCreateOnboardingTab)]
pub async fn focus_or_create_onboarding_tab(page: Option<String>) -> Result<(), JsValue> {
    let config = config::current();
    navigation::focus_or_create_onboarding_tab(
        &ChromeBrowser,
        &ChromeOnboardingChannel,
        &config,
        page.as_deref(),
    )
    .await?;
    Ok(())
}

#[wasm_bindgen(js_name = focusOrCreateTokensExploreTab)]
pub async fn focus_or_create_tokens_explore_tab(currency_id: String) -> Result<(), JsValue> {
    let config = config::current();
    navigation::focus_or_create_tokens_explore_tab(&ChromeBrowser, &config, &currency_id).await?;
    Ok(())
}

#[wasm_bindgen(js_name = focusOrCreateNftItemTab)]
pub async fn focus_or_create_nft_item_tab(address: String, token_id: String) -> Result<(), JsValue> {
    let config = config::current();
    navigation::focus_or_create_nft_item_tab(&ChromeBrowser, &config, &address, &token_id).await?;
    Ok(())
}

#[wasm_bindgen(js_name = getCurrentTabAndWindowId)]
pub async fn get_current_tab_and_window_id() -> Result<JsValue, JsValue> {
    let ids = navigation::get_current_tab_and_window_id(&ChromeBrowser).await?;
    Ok(serde_wasm_bindgen::to_value(&ids)?)
}

#[wasm_bindgen(js_name = isValidExtensionToDappRequest)]
pub fn is_valid_extension_to_dapp_request(request: JsValue) -> bool {
    serde_wasm_bindgen::from_value::<serde_json::Value>(request)
        .map(|value| messaging::is_valid_extension_to_dapp_request(&value))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = handleContentScriptMessage)]
pub async fn handle_content_script_message(message: JsValue) -> Result<(), JsValue> {
    let message: ContentScriptUtilityMessage = serde_wasm_bindgen::from_value(message)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse message: {:?}", e)))?;

    let config = config::current();
    messaging::handler::handle_content_script_message(
        &ChromeBrowser,
        &ChromeOnboardingChannel,
        &config,
        message,
    )
    .await?;
    Ok(())
}
