/// Message shapes exchanged between the content script, background script,
/// side panel and the injected dapp provider.
///
/// Every message is a closed union tagged by its `type` field. Field names and
/// tag values are the wire contract shared with the JavaScript side.
use crate::error::AddressError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const ADDRESS_HEX_LEN: usize = 40;

/// A hex-encoded account address (`0x` + 40 hex digits). Case is preserved;
/// the mixed-case checksum is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.starts_with("0x") {
            return Err(AddressError::MissingPrefix(value));
        }
        let hex = &value[2..];
        if hex.len() != ADDRESS_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::Malformed(value));
        }
        Ok(Address(value))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::try_from(s.to_string())
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional field that may be omitted but never sent as `null`.
/// Only called when the key is present; absence falls back to `default`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// Content script -> extension (non-dapp requests)

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentScriptUtilityMessage {
    FocusOnboardingTab,

    #[serde(rename = "Error", rename_all = "camelCase")]
    ErrorLog {
        message: String,
        file_name: String,
        function_name: String,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        tags: Option<HashMap<String, String>>,
    },

    #[serde(rename = "Info", rename_all = "camelCase")]
    InfoLog {
        file_name: String,
        function_name: String,
        message: String,
        tags: HashMap<String, String>,
    },
}

// Background script -> side panel

/// Tab that originated a dapp request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderTabInfo {
    pub id: i32,
    pub url: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

/// Dapp request payload, forwarded to the side panel as-is
pub type DappRequest = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BackgroundToSidePanelRequest {
    TabActivated,

    #[serde(rename_all = "camelCase")]
    DappRequestReceived {
        dapp_request: DappRequest,
        sender_tab_info: SenderTabInfo,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        is_sidebar_closed: Option<bool>,
    },
}

// Background script -> onboarding page

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OnboardingMessage {
    HighlightOnboardingTab,
}

// Extension -> injected script

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtensionToDappRequest {
    #[serde(rename_all = "camelCase")]
    SwitchChain { chain_id: String, provider_url: String },

    UpdateConnections { addresses: Vec<Address> },
}

impl ExtensionToDappRequest {
    pub fn type_name(&self) -> &'static str {
        match self {
            ExtensionToDappRequest::SwitchChain { .. } => "SwitchChain",
            ExtensionToDappRequest::UpdateConnections { .. } => "UpdateConnections",
        }
    }
}

/// Whether an arbitrary value is a well-formed extension -> dapp request.
/// Extra fields are ignored.
pub fn is_valid_extension_to_dapp_request(request: &serde_json::Value) -> bool {
    ExtensionToDappRequest::deserialize(request).is_ok()
}
