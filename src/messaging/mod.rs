/// Message passing between extension contexts
pub mod handler;
pub mod requests;

pub use requests::{
    is_valid_extension_to_dapp_request, Address, BackgroundToSidePanelRequest,
    ContentScriptUtilityMessage, ExtensionToDappRequest, OnboardingMessage,
};
