/// Background-side handling of content script utility messages
use crate::browser::{BrowserApi, OnboardingChannel};
use crate::config::ExtensionConfig;
use crate::error::NavigationError;
use crate::messaging::requests::ContentScriptUtilityMessage;
use crate::navigation::focus_or_create_onboarding_tab;
use std::collections::HashMap;

pub async fn handle_content_script_message<B, C>(
    browser: &B,
    channel: &C,
    config: &ExtensionConfig,
    message: ContentScriptUtilityMessage,
) -> Result<(), NavigationError>
where
    B: BrowserApi + ?Sized,
    C: OnboardingChannel + ?Sized,
{
    match message {
        ContentScriptUtilityMessage::FocusOnboardingTab => {
            focus_or_create_onboarding_tab(browser, channel, config, None).await
        }
        ContentScriptUtilityMessage::ErrorLog {
            message,
            file_name,
            function_name,
            tags,
        } => {
            log::error!(
                "{} file={} function={}{}",
                message,
                file_name,
                function_name,
                format_tags(tags.as_ref())
            );
            Ok(())
        }
        ContentScriptUtilityMessage::InfoLog {
            file_name,
            function_name,
            message,
            tags,
        } => {
            log::info!(
                "{} file={} function={}{}",
                message,
                file_name,
                function_name,
                format_tags(Some(&tags))
            );
            Ok(())
        }
    }
}

/// Render tags as ` key=value` pairs in key order
fn format_tags(tags: Option<&HashMap<String, String>>) -> String {
    let Some(tags) = tags else {
        return String::new();
    };

    let mut pairs: Vec<(&String, &String)> = tags.iter().collect();
    pairs.sort();

    pairs
        .into_iter()
        .map(|(key, value)| format!(" {}={}", key, value))
        .collect()
}
