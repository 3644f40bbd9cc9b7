//! Mobile navigation drawer.
//!
//! The links container's open class is the source of truth for
//! [`NavState`]. Every toggle writes the same boolean to the links container,
//! the overlay, and the body scroll lock before returning, so the three
//! surfaces always agree.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::rc::Rc;

use crate::config::NavigationConfig;
use crate::dom::{Element, EventKind, Page};
use crate::state::ui::NavState;

/// Owns the open/closed state of the drawer and its overlay.
pub struct NavigationController<P: Page> {
    page: Rc<P>,
    trigger: Option<P::Node>,
    links: Option<P::Node>,
    overlay: Option<P::Node>,
    body: Option<P::Node>,
    config: NavigationConfig,
}

impl<P: Page> NavigationController<P> {
    /// Resolve the drawer's elements once. Missing elements disable the
    /// corresponding behavior for the lifetime of the controller.
    pub fn new(page: Rc<P>, config: &NavigationConfig) -> Rc<Self> {
        Rc::new(Self {
            trigger: page.select(&config.trigger),
            links: page.select(&config.links),
            overlay: page.select(&config.overlay),
            body: page.body(),
            config: config.clone(),
            page,
        })
    }

    /// Bind the trigger (flip) and overlay (close) click handlers.
    pub fn initialize(self: &Rc<Self>) {
        if let Some(trigger) = &self.trigger {
            let this = Rc::clone(self);
            self.page.listen(
                trigger,
                EventKind::Click,
                Box::new(move |_| {
                    this.toggle(None);
                }),
            );
        }
        if let Some(overlay) = &self.overlay {
            let this = Rc::clone(self);
            self.page.listen(
                overlay,
                EventKind::Click,
                Box::new(move |_| {
                    this.toggle(Some(false));
                }),
            );
        }
        log::debug!("navigation drawer bound (enabled={})", self.is_enabled());
    }

    /// Whether both the links container and overlay were found.
    pub fn is_enabled(&self) -> bool {
        self.links.is_some() && self.overlay.is_some()
    }

    /// Current state as reflected in the DOM.
    pub fn state(&self) -> NavState {
        let open = self
            .links
            .as_ref()
            .is_some_and(|links| links.has_class(&self.config.open_class));
        NavState::from_open(open)
    }

    /// Open, close, or (with `None`) flip the drawer.
    ///
    /// Returns the resulting state, or `None` without touching anything when
    /// the links container or overlay is missing.
    pub fn toggle(&self, force: Option<bool>) -> Option<NavState> {
        let (Some(links), Some(overlay)) = (&self.links, &self.overlay) else {
            return None;
        };

        let next = self.state().next(force);
        let open = next.is_open();
        links.set_class(&self.config.open_class, open);
        overlay.set_class(&self.config.shown_class, open);
        if let Some(body) = &self.body {
            let lock = open.then_some(self.config.scroll_lock_value.as_str());
            body.set_style(&self.config.scroll_lock_property, lock);
        }
        Some(next)
    }
}
