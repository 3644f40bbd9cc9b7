//! Shared fixtures for unit tests.
//!
//! Builds the storefront markup on a [`MemoryPage`] and provides recording
//! fakes for the auth provider, the subscription API, and the notifier.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::auth::{AuthError, AuthListener, AuthProvider};
use crate::controllers::newsletter::SubscriptionApi;
use crate::controllers::notifications::{NotificationLevel, Notifier};
use crate::dom::memory::{MemoryNode, MemoryPage};
use crate::net::types::{AuthSnapshot, NewsletterError, SubscribeRequest, SubscribeResponse};

/// Handles to every node of the default storefront markup.
pub struct Storefront {
    pub page: Rc<MemoryPage>,
    pub trigger: MemoryNode,
    pub links: MemoryNode,
    pub link: MemoryNode,
    pub overlay: MemoryNode,
    pub account_button: MemoryNode,
    pub popup: MemoryNode,
    pub logged_out: MemoryNode,
    pub logged_in: MemoryNode,
    pub user_email: MemoryNode,
    pub sign_out: MemoryNode,
    pub form: MemoryNode,
    pub input: MemoryNode,
    pub submit: MemoryNode,
    pub content: MemoryNode,
}

/// Markup matching `StorefrontConfig::default()`.
pub fn storefront() -> Storefront {
    let page = Rc::new(MemoryPage::new());

    let trigger = MemoryNode::new("button").with_class("hamburger");
    let link = MemoryNode::new("a").with_attr("href", "/shop");
    let links = MemoryNode::new("ul").with_class("nav-links").with_child(&link);
    let account_button = MemoryNode::new("button").with_attr("aria-label", "User account");
    let header = MemoryNode::new("header")
        .with_child(&links)
        .with_child(&account_button)
        .with_child(&trigger);
    let overlay = MemoryNode::new("div").with_id("mobileOverlay");

    let logged_out = MemoryNode::new("div").with_id("loggedOutState");
    let user_email = MemoryNode::new("span").with_id("userEmail");
    let sign_out = MemoryNode::new("button").with_attr("data-action", "sign-out");
    let logged_in = MemoryNode::new("div")
        .with_id("loggedInState")
        .with_child(&user_email)
        .with_child(&sign_out);
    let popup = MemoryNode::new("div")
        .with_id("accountPopup")
        .with_class("account-popup")
        .with_child(&logged_out)
        .with_child(&logged_in);

    let input = MemoryNode::new("input").with_class("newsletter-input");
    let submit = MemoryNode::new("button")
        .with_class("newsletter-submit")
        .with_text("Subscribe");
    let form = MemoryNode::new("form")
        .with_class("newsletter-form")
        .with_child(&input)
        .with_child(&submit);

    let content = MemoryNode::new("main").with_text("Featured products");

    for node in [&header, &overlay, &popup, &content, &form] {
        page.mount(node);
    }

    Storefront {
        page,
        trigger,
        links,
        link,
        overlay,
        account_button,
        popup,
        logged_out,
        logged_in,
        user_email,
        sign_out,
        form,
        input,
        submit,
        content,
    }
}

/// Auth provider that records every call in order.
///
/// Like a real session, a successful sign-out notifies listeners.
#[derive(Default)]
pub struct FakeAuth {
    pub user: RefCell<Option<AuthSnapshot>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub listeners: RefCell<Vec<AuthListener>>,
    pub sign_out_error: RefCell<Option<AuthError>>,
}

impl FakeAuth {
    pub fn signed_in(email: &str) -> Rc<Self> {
        let auth = Self::default();
        *auth.user.borrow_mut() = Some(AuthSnapshot::new(email));
        Rc::new(auth)
    }

    pub fn signed_out() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Change the user and notify listeners, like a real sign-in.
    pub fn change_user(&self, user: Option<AuthSnapshot>) {
        *self.user.borrow_mut() = user;
        self.notify();
    }

    fn notify(&self) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

impl AuthProvider for FakeAuth {
    fn current_user(&self) -> Option<AuthSnapshot> {
        self.calls.borrow_mut().push("current_user");
        self.user.borrow().clone()
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.calls.borrow_mut().push("sign_out");
        if let Some(err) = self.sign_out_error.borrow().clone() {
            return Err(err);
        }
        let was_signed_in = self.user.borrow_mut().take().is_some();
        if was_signed_in {
            self.notify();
        }
        Ok(())
    }

    fn on_auth_state_change(&self, listener: AuthListener) {
        self.calls.borrow_mut().push("subscribe");
        self.listeners.borrow_mut().push(listener);
    }
}

/// Subscription API returning a canned result.
pub struct FakeSubscriptionApi {
    pub result: Result<SubscribeResponse, NewsletterError>,
    pub requests: RefCell<Vec<SubscribeRequest>>,
    /// Whether the submit button was disabled while the request was in flight.
    pub button_disabled_during_request: Cell<Option<bool>>,
    pub watch_button: RefCell<Option<MemoryNode>>,
}

impl FakeSubscriptionApi {
    pub fn returning(result: Result<SubscribeResponse, NewsletterError>) -> Rc<Self> {
        Rc::new(Self {
            result,
            requests: RefCell::new(Vec::new()),
            button_disabled_during_request: Cell::new(None),
            watch_button: RefCell::new(None),
        })
    }
}

#[async_trait(?Send)]
impl SubscriptionApi for FakeSubscriptionApi {
    async fn subscribe(&self, request: &SubscribeRequest) -> Result<SubscribeResponse, NewsletterError> {
        use crate::dom::Element;

        self.requests.borrow_mut().push(request.clone());
        if let Some(button) = self.watch_button.borrow().as_ref() {
            self.button_disabled_during_request.set(Some(button.is_disabled()));
        }
        self.result.clone()
    }
}

/// Notifier that keeps every message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, NotificationLevel)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: NotificationLevel) {
        self.messages.borrow_mut().push((message.to_owned(), level));
    }
}
