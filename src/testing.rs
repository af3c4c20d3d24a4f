/// In-memory browser used by the navigation tests
use crate::browser::{BrowserApi, ExtensionInfo, OnboardingChannel, Tab, TabQuery, TabUpdate};
use crate::error::NavigationError;
use crate::messaging::requests::OnboardingMessage;
use async_trait::async_trait;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserCall {
    GetSelf,
    Query(TabQuery),
    Create(String),
    Update(i32, TabUpdate),
    Reload(i32),
    FocusWindow(i32),
}

/// Records every call; queries return the tabs it was built with
pub struct FakeBrowser {
    pub extension_id: String,
    pub tabs: Vec<Tab>,
    pub calls: RefCell<Vec<BrowserCall>>,
    pub fail_updates: bool,
}

impl FakeBrowser {
    pub fn new(tabs: Vec<Tab>) -> FakeBrowser {
        FakeBrowser {
            extension_id: "abcdefghijklmnop".to_string(),
            tabs,
            calls: RefCell::new(Vec::new()),
            fail_updates: false,
        }
    }

    pub fn calls(&self) -> Vec<BrowserCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: BrowserCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl BrowserApi for FakeBrowser {
    async fn get_self(&self) -> Result<ExtensionInfo, NavigationError> {
        self.record(BrowserCall::GetSelf);
        Ok(ExtensionInfo {
            id: self.extension_id.clone(),
        })
    }

    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<Tab>, NavigationError> {
        self.record(BrowserCall::Query(query));
        Ok(self.tabs.clone())
    }

    async fn create_tab(&self, url: &str) -> Result<(), NavigationError> {
        self.record(BrowserCall::Create(url.to_string()));
        Ok(())
    }

    async fn update_tab(&self, tab_id: i32, update: TabUpdate) -> Result<(), NavigationError> {
        self.record(BrowserCall::Update(tab_id, update));
        if self.fail_updates {
            return Err(NavigationError::Browser("No tab with id".to_string()));
        }
        Ok(())
    }

    async fn reload_tab(&self, tab_id: i32) -> Result<(), NavigationError> {
        self.record(BrowserCall::Reload(tab_id));
        Ok(())
    }

    async fn focus_window(&self, window_id: i32) -> Result<(), NavigationError> {
        self.record(BrowserCall::FocusWindow(window_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeChannel {
    pub sent: RefCell<Vec<OnboardingMessage>>,
    pub fail_sends: bool,
}

impl FakeChannel {
    pub fn sent(&self) -> Vec<OnboardingMessage> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl OnboardingChannel for FakeChannel {
    async fn send_message(&self, message: OnboardingMessage) -> Result<(), NavigationError> {
        self.sent.borrow_mut().push(message);
        if self.fail_sends {
            return Err(NavigationError::Browser(
                "Could not establish connection. Receiving end does not exist.".to_string(),
            ));
        }
        Ok(())
    }
}
