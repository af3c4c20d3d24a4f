/// Chrome implementations of the browser capabilities, via the JS bridge module
use crate::browser::{BrowserApi, ExtensionInfo, OnboardingChannel, Tab, TabQuery, TabUpdate};
use crate::error::NavigationError;
use crate::messaging::requests::OnboardingMessage;
use async_trait::async_trait;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getSelf() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryTabs(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTab(tab_id: i32, update: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn reloadTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn focusWindow(window_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendOnboardingMessage(message: JsValue) -> Result<(), JsValue>;
}

/// `chrome.tabs` / `chrome.windows` / `chrome.management`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeBrowser;

#[async_trait(?Send)]
impl BrowserApi for ChromeBrowser {
    async fn get_self(&self) -> Result<ExtensionInfo, NavigationError> {
        let info_js = getSelf().await.map_err(NavigationError::from_js)?;
        Ok(serde_wasm_bindgen::from_value(info_js)?)
    }

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<Tab>, NavigationError> {
        let query_js = serde_wasm_bindgen::to_value(&query)?;
        let tabs_js = queryTabs(query_js).await.map_err(NavigationError::from_js)?;
        Ok(serde_wasm_bindgen::from_value(tabs_js)?)
    }

    async fn create_tab(&self, url: &str) -> Result<(), NavigationError> {
        createTab(url).await.map_err(NavigationError::from_js)
    }

    async fn update_tab(&self, tab_id: i32, update: TabUpdate) -> Result<(), NavigationError> {
        let update_js = serde_wasm_bindgen::to_value(&update)?;
        updateTab(tab_id, update_js).await.map_err(NavigationError::from_js)
    }

    async fn reload_tab(&self, tab_id: i32) -> Result<(), NavigationError> {
        reloadTab(tab_id).await.map_err(NavigationError::from_js)
    }

    async fn focus_window(&self, window_id: i32) -> Result<(), NavigationError> {
        focusWindow(window_id).await.map_err(NavigationError::from_js)
    }
}

/// Onboarding message channel exposed by the bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeOnboardingChannel;

#[async_trait(?Send)]
impl OnboardingChannel for ChromeOnboardingChannel {
    async fn send_message(&self, message: OnboardingMessage) -> Result<(), NavigationError> {
        let message_js = serde_wasm_bindgen::to_value(&message)?;
        sendOnboardingMessage(message_js)
            .await
            .map_err(NavigationError::from_js)
    }
}
