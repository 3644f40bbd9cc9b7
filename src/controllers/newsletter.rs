//! Footer newsletter subscription form.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::NewsletterConfig;
use crate::controllers::notifications::{NotificationLevel, Notifier};
use crate::dom::{Element, EventKind, Page, UiEvent};
use crate::net::types::{NewsletterError, SubscribeRequest, SubscribeResponse};

const SUBSCRIBED: &str = "Thank you for subscribing!";
const REJECTED: &str = "Subscription failed. Please try again.";
const FAILED: &str = "An error occurred. Please try again later.";

/// Transport for subscription requests.
#[async_trait(?Send)]
pub trait SubscriptionApi {
    async fn subscribe(&self, request: &SubscribeRequest) -> Result<SubscribeResponse, NewsletterError>;
}

/// [`SubscriptionApi`] over the storefront REST endpoint.
pub struct HttpSubscriptionApi {
    endpoint: String,
}

impl HttpSubscriptionApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl SubscriptionApi for HttpSubscriptionApi {
    async fn subscribe(&self, request: &SubscribeRequest) -> Result<SubscribeResponse, NewsletterError> {
        crate::net::api::subscribe(&self.endpoint, request).await
    }
}

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No input element or an empty address; nothing was sent.
    Skipped,
    Subscribed,
    /// The server refused the address.
    Rejected,
    /// The request did not complete.
    Failed,
}

pub struct NewsletterController<P: Page> {
    page: Rc<P>,
    form: Option<P::Node>,
    input: Option<P::Node>,
    button: Option<P::Node>,
    config: NewsletterConfig,
    api: Rc<dyn SubscriptionApi>,
    notifier: Rc<dyn Notifier>,
}

impl<P: Page> NewsletterController<P> {
    pub fn new(
        page: Rc<P>,
        config: &NewsletterConfig,
        api: Rc<dyn SubscriptionApi>,
        notifier: Rc<dyn Notifier>,
    ) -> Rc<Self> {
        let form = page.select(&config.form);
        let input = form.as_ref().and_then(|f| page.select_in(f, &config.input));
        let button = form.as_ref().and_then(|f| page.select_in(f, &config.submit));
        Rc::new(Self {
            page,
            form,
            input,
            button,
            config: config.clone(),
            api,
            notifier,
        })
    }

    /// Intercept form submission and run [`Self::submit`] on the event loop.
    pub fn initialize(self: &Rc<Self>) {
        let Some(form) = &self.form else {
            return;
        };
        let this = Rc::clone(self);
        self.page.listen(
            form,
            EventKind::Submit,
            Box::new(move |event| {
                event.prevent_default();
                let this = Rc::clone(&this);
                crate::util::task::spawn_local(async move {
                    this.submit().await;
                });
            }),
        );
    }

    /// Send the entered address and report the outcome as a toast.
    ///
    /// The submit button shows the busy label and stays disabled until the
    /// request settles, then gets its label and enabled state back.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(input) = &self.input else {
            return SubmitOutcome::Skipped;
        };
        let email = input.value().trim().to_owned();
        if email.is_empty() {
            return SubmitOutcome::Skipped;
        }

        let original_label = self.button.as_ref().map(|button| {
            let label = button.text();
            button.set_text(&self.config.busy_label);
            button.set_disabled(true);
            label
        });

        let request = SubscribeRequest {
            email,
            source: self.config.source.clone(),
        };
        let outcome = match self.api.subscribe(&request).await {
            Ok(response) => {
                let message = response.message.as_deref().unwrap_or(SUBSCRIBED);
                self.notifier.notify(message, NotificationLevel::Success);
                input.set_value("");
                SubmitOutcome::Subscribed
            }
            Err(NewsletterError::Rejected { message }) => {
                let message = message.as_deref().unwrap_or(REJECTED);
                self.notifier.notify(message, NotificationLevel::Error);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::warn!("newsletter subscription failed: {e}");
                self.notifier.notify(FAILED, NotificationLevel::Error);
                SubmitOutcome::Failed
            }
        };

        if let (Some(button), Some(label)) = (&self.button, original_label) {
            button.set_text(&label);
            button.set_disabled(false);
        }
        outcome
    }
}
