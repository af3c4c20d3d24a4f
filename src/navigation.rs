/// Tab/window helpers: focus an existing tab for a destination or open a new one
use crate::browser::{BrowserApi, OnboardingChannel, TabQuery, TabUpdate};
use crate::config::ExtensionConfig;
use crate::error::NavigationError;
use crate::linking::{get_nft_item_url, get_token_url};
use crate::messaging::requests::OnboardingMessage;
use crate::routes::TopLevelRoute;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ids of the active tab and the window that holds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabAndWindowId {
    pub tab_id: i32,
    pub window_id: i32,
}

/// Anchored prefix pattern for everything under `base_url`
pub fn prefix_pattern(base_url: &str) -> Result<Regex, NavigationError> {
    Ok(Regex::new(&format!("^{}", regex::escape(base_url)))?)
}

/// Onboarding page URL, relative to the extension root
pub fn onboarding_url(config: &ExtensionConfig, page: Option<&str>) -> String {
    let route = page.unwrap_or(TopLevelRoute::Onboarding.as_str());
    format!("{}#/{}", config.onboarding_page, route)
}

/// Focus the extension's onboarding tab, creating it if none is open.
///
/// Without a `page` the existing tab keeps its current URL. With a `page` the
/// tab is navigated there and reloaded so the onboarding app starts from a
/// clean state.
pub async fn focus_or_create_onboarding_tab<B, C>(
    browser: &B,
    channel: &C,
    config: &ExtensionConfig,
    page: Option<&str>,
) -> Result<(), NavigationError>
where
    B: BrowserApi + ?Sized,
    C: OnboardingChannel + ?Sized,
{
    // An empty page name means "no page"
    let page = page.filter(|page| !page.is_empty());

    let extension = browser.get_self().await?;

    let tabs = browser
        .query_tabs(TabQuery::matching_url(config.extension_tabs_pattern(&extension.id)))
        .await?;

    let url = onboarding_url(config, page);

    let Some((tab_id, window_id)) = tabs.first().and_then(|tab| tab.id.map(|id| (id, tab.window_id))) else {
        log::debug!("No onboarding tab open, creating {}", url);
        browser.create_tab(&url).await?;
        return Ok(());
    };

    browser
        .update_tab(tab_id, TabUpdate::focus(page.map(|_| url.clone())))
        .await?;

    if page.is_some() {
        browser.reload_tab(tab_id).await?;
    }

    match window_id {
        Some(window_id) => browser.focus_window(window_id).await?,
        None => log::warn!("Onboarding tab {} has no window id, skipping window focus", tab_id),
    }

    channel
        .send_message(OnboardingMessage::HighlightOnboardingTab)
        .await
}

/// Navigate the active tab to `url` if it is a blank new tab page or already
/// matches `reuse_if_matches`; otherwise open `url` in a new tab.
pub async fn focus_or_create_interface_tab<B>(
    browser: &B,
    config: &ExtensionConfig,
    url: &str,
    reuse_if_matches: Option<&Regex>,
) -> Result<(), NavigationError>
where
    B: BrowserApi + ?Sized,
{
    let tabs = browser.query_tabs(TabQuery::active_in_current_window()).await?;

    let active_tab = tabs.first();
    let active_url = active_tab.and_then(|tab| tab.url.as_deref());

    let is_new_tab_page = active_url == Some(config.new_tab_url.as_str());
    let should_reuse = match (reuse_if_matches, active_url) {
        (Some(pattern), Some(active_url)) => pattern.is_match(active_url),
        _ => false,
    };

    if let Some(tab_id) = active_tab.and_then(|tab| tab.id) {
        if should_reuse || is_new_tab_page {
            return browser
                .update_tab(tab_id, TabUpdate::focus(Some(url.to_string())))
                .await;
        }
    }

    browser.create_tab(url).await
}

/// Open a token details page, reusing the active tab only if it already shows a token page
pub async fn focus_or_create_tokens_explore_tab<B>(
    browser: &B,
    config: &ExtensionConfig,
    currency_id: &str,
) -> Result<(), NavigationError>
where
    B: BrowserApi + ?Sized,
{
    let Some(url) = get_token_url(config, currency_id) else {
        log::error!(
            "Failed to get token URL file=navigation.rs function=focus_or_create_tokens_explore_tab currency_id={}",
            currency_id
        );
        return Ok(());
    };

    let pattern = prefix_pattern(&config.web_interface_tokens_url())?;
    focus_or_create_interface_tab(browser, config, &url, Some(&pattern)).await
}

/// Open an NFT item page, reusing the active tab only if it already shows an NFT item
pub async fn focus_or_create_nft_item_tab<B>(
    browser: &B,
    config: &ExtensionConfig,
    address: &str,
    token_id: &str,
) -> Result<(), NavigationError>
where
    B: BrowserApi + ?Sized,
{
    let url = get_nft_item_url(config, address, token_id);
    let pattern = prefix_pattern(&config.web_interface_nft_item_url())?;
    focus_or_create_interface_tab(browser, config, &url, Some(&pattern)).await
}

pub async fn get_current_tab_and_window_id<B>(browser: &B) -> Result<TabAndWindowId, NavigationError>
where
    B: BrowserApi + ?Sized,
{
    let tabs = browser.query_tabs(TabQuery::active_in_current_window()).await?;

    match tabs.first() {
        Some(tab) => match (tab.id, tab.window_id) {
            (Some(tab_id), Some(window_id)) => Ok(TabAndWindowId { tab_id, window_id }),
            _ => Err(NavigationError::NoActiveTab),
        },
        None => Err(NavigationError::NoActiveTab),
    }
}
