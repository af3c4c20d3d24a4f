/// Browser capability seam: tab/window data and the calls the helpers make
use crate::error::NavigationError;
use crate::messaging::requests::OnboardingMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Information about a browser tab, as returned by `chrome.tabs.query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub window_id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl Tab {
    pub fn new(id: i32, window_id: i32, url: &str) -> Tab {
        Tab {
            id: Some(id),
            window_id: Some(window_id),
            url: Some(url.to_string()),
            fav_icon_url: None,
            active: true,
        }
    }
}

/// Filter passed to `chrome.tabs.query`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_window: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TabQuery {
    pub fn active_in_current_window() -> TabQuery {
        TabQuery {
            active: Some(true),
            current_window: Some(true),
            url: None,
        }
    }

    pub fn matching_url(pattern: impl Into<String>) -> TabQuery {
        TabQuery {
            url: Some(pattern.into()),
            ..TabQuery::default()
        }
    }
}

/// Properties passed to `chrome.tabs.update`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TabUpdate {
    /// Bring a tab to the front, optionally navigating it
    pub fn focus(url: Option<String>) -> TabUpdate {
        TabUpdate {
            active: Some(true),
            highlighted: Some(true),
            url,
        }
    }
}

/// The subset of `chrome.management.getSelf` the helpers need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub id: String,
}

/// Browser tab/window registry. Implemented by the Chrome bridge and by test fakes.
#[async_trait(?Send)]
pub trait BrowserApi {
    async fn get_self(&self) -> Result<ExtensionInfo, NavigationError>;

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<Tab>, NavigationError>;

    async fn create_tab(&self, url: &str) -> Result<(), NavigationError>;

    async fn update_tab(&self, tab_id: i32, update: TabUpdate) -> Result<(), NavigationError>;

    async fn reload_tab(&self, tab_id: i32) -> Result<(), NavigationError>;

    async fn focus_window(&self, window_id: i32) -> Result<(), NavigationError>;
}

/// Outgoing side of the onboarding message channel
#[async_trait(?Send)]
pub trait OnboardingChannel {
    async fn send_message(&self, message: OnboardingMessage) -> Result<(), NavigationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_chrome_json() {
        let tab: Tab = serde_json::from_str(
            r#"{"id": 7, "windowId": 2, "url": "chrome://newtab/", "active": true, "pinned": false}"#,
        )
        .unwrap();

        assert_eq!(tab.id, Some(7));
        assert_eq!(tab.window_id, Some(2));
        assert_eq!(tab.url.as_deref(), Some("chrome://newtab/"));
        assert_eq!(tab.fav_icon_url, None);
    }

    #[test]
    fn test_tab_without_ids() {
        let tab: Tab = serde_json::from_str(r#"{"active": true}"#).unwrap();

        assert_eq!(tab.id, None);
        assert_eq!(tab.window_id, None);
    }

    #[test]
    fn test_query_serialization_skips_unset_fields() {
        let json = serde_json::to_value(TabQuery::active_in_current_window()).unwrap();
        assert_eq!(json, serde_json::json!({"active": true, "currentWindow": true}));

        let json = serde_json::to_value(TabQuery::matching_url("chrome-extension://abc/*")).unwrap();
        assert_eq!(json, serde_json::json!({"url": "chrome-extension://abc/*"}));
    }

    #[test]
    fn test_focus_update_without_url() {
        let json = serde_json::to_value(TabUpdate::focus(None)).unwrap();
        assert_eq!(json, serde_json::json!({"active": true, "highlighted": true}));
    }
}
