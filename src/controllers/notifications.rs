//! Toast notifications.
//!
//! Toasts live in a lazily created container under `<body>`. Each toast is
//! shown immediately, loses its `show` class after the configured duration,
//! and is detached once the fade delay has passed. The close button detaches
//! it at once.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::rc::Rc;

use crate::config::NotificationConfig;
use crate::dom::{Element, EventKind, Page};

/// Toast severity; selects the `toast-{level}` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Sink for user-facing status messages.
pub trait Notifier {
    fn notify(&self, message: &str, level: NotificationLevel);
}

pub struct ToastNotifier<P: Page> {
    page: Rc<P>,
    config: NotificationConfig,
}

impl<P: Page> ToastNotifier<P> {
    pub fn new(page: Rc<P>, config: &NotificationConfig) -> Self {
        Self {
            page,
            config: config.clone(),
        }
    }

    fn container(&self) -> Option<P::Node> {
        let selector = format!("#{}", self.config.container_id);
        if let Some(existing) = self.page.select(&selector) {
            return Some(existing);
        }
        let body = self.page.body()?;
        let container = self.page.create("div")?;
        container.set_attr("id", &self.config.container_id);
        self.page.append(&body, &container);
        Some(container)
    }
}

impl<P: Page> Notifier for ToastNotifier<P> {
    fn notify(&self, message: &str, level: NotificationLevel) {
        let Some(container) = self.container() else {
            return;
        };
        let (Some(toast), Some(text), Some(close)) =
            (self.page.create("div"), self.page.create("div"), self.page.create("button"))
        else {
            return;
        };

        toast.set_class("toast", true);
        toast.set_class(&format!("toast-{}", level.as_str()), true);
        text.set_class("toast-message", true);
        text.set_text(message);
        close.set_class("toast-close", true);
        close.set_attr("aria-label", "Dismiss");
        close.set_text("\u{00d7}");
        self.page.append(&toast, &text);
        self.page.append(&toast, &close);
        self.page.append(&container, &toast);

        let page = Rc::clone(&self.page);
        let target = toast.clone();
        self.page.listen(
            &close,
            EventKind::Click,
            Box::new(move |_| page.remove(&target)),
        );

        toast.set_class("show", true);

        let page = Rc::clone(&self.page);
        let fade_ms = self.config.fade_ms;
        self.page.set_timeout(
            self.config.duration_ms,
            Box::new(move || {
                toast.set_class("show", false);
                let remover = Rc::clone(&page);
                page.set_timeout(fade_ms, Box::new(move || remover.remove(&toast)));
            }),
        );
    }
}
