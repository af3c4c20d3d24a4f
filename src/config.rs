/// Extension configuration: web interface location and browser sentinels
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use url::Url;

pub const DEFAULT_WEB_INTERFACE_URL: &str = "https://app.uniswap.org";
pub const DEFAULT_NEW_TAB_URL: &str = "chrome://newtab/";
pub const DEFAULT_EXTENSION_SCHEME: &str = "chrome-extension";
pub const DEFAULT_ONBOARDING_PAGE: &str = "onboarding.html";

const TOKENS_PATH: &str = "explore/tokens";
const NFT_ITEM_PATH: &str = "nfts/asset";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtensionConfig {
    pub web_interface_url: String,
    pub new_tab_url: String,
    pub extension_scheme: String,
    pub onboarding_page: String,
}

impl ExtensionConfig {
    /// Parse a JSON config, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<ExtensionConfig, ConfigError> {
        let config: ExtensionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.web_interface_url).map_err(|source| ConfigError::InvalidUrl {
            field: "webInterfaceUrl",
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme {
                field: "webInterfaceUrl",
                scheme: other.to_string(),
            }),
        }
    }

    /// Base URL of the token details pages
    pub fn web_interface_tokens_url(&self) -> String {
        self.interface_path(TOKENS_PATH)
    }

    /// Base URL of the NFT item pages
    pub fn web_interface_nft_item_url(&self) -> String {
        self.interface_path(NFT_ITEM_PATH)
    }

    /// Tab query pattern covering every page of this extension
    pub fn extension_tabs_pattern(&self, extension_id: &str) -> String {
        format!("{}://{}/*", self.extension_scheme, extension_id)
    }

    fn interface_path(&self, path: &str) -> String {
        format!("{}/{}", self.web_interface_url.trim_end_matches('/'), path)
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        ExtensionConfig {
            web_interface_url: DEFAULT_WEB_INTERFACE_URL.to_string(),
            new_tab_url: DEFAULT_NEW_TAB_URL.to_string(),
            extension_scheme: DEFAULT_EXTENSION_SCHEME.to_string(),
            onboarding_page: DEFAULT_ONBOARDING_PAGE.to_string(),
        }
    }
}

// The extension runtime is single threaded; exports read the installed config from here.
thread_local! {
    static ACTIVE_CONFIG: RefCell<ExtensionConfig> = RefCell::new(ExtensionConfig::default());
}

pub fn install(config: ExtensionConfig) {
    ACTIVE_CONFIG.with(|active| *active.borrow_mut() = config);
}

pub fn current() -> ExtensionConfig {
    ACTIVE_CONFIG.with(|active| active.borrow().clone())
}
