//! Account popup synchronized with the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The popup shows one of two views depending on whether a user is signed
//! in. It re-reads the provider's snapshot on every auth state change and on
//! every open, and writes it into the views before the popup becomes visible.
//!
//! DESIGN
//! ======
//! Subscription is two-phase ([`AuthBinding`]): bound at construction when
//! the [`AuthSlot`] already holds a provider, otherwise retried exactly once
//! when the page signals ready. The listener holds a `Weak` reference so the
//! provider does not keep the controller alive.

#[cfg(test)]
#[path = "account_popup_test.rs"]
mod account_popup_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::auth::{AuthProvider, AuthSlot};
use crate::config::AccountConfig;
use crate::controllers::notifications::{NotificationLevel, Notifier};
use crate::dom::{Element, EventKind, Page, UiEvent};
use crate::state::auth::AuthBinding;
use crate::state::ui::PopupVisibility;

const SIGN_OUT_FAILED: &str = "Failed to sign out. Please try again.";

/// Elements resolved once at construction.
struct PopupTargets<N> {
    popup: Option<N>,
    trigger: Option<N>,
    logged_out: Option<N>,
    logged_in: Option<N>,
    identifier: Option<N>,
    sign_out: Option<N>,
}

pub struct AccountPopupController<P: Page> {
    page: Rc<P>,
    targets: PopupTargets<P::Node>,
    shown_class: String,
    auth: AuthSlot,
    binding: RefCell<AuthBinding>,
    /// Set while `sign_out` runs; it refreshes once itself afterwards.
    signing_out: Cell<bool>,
    notifier: Option<Rc<dyn Notifier>>,
}

impl<P: Page> AccountPopupController<P> {
    /// Build the controller and subscribe to auth changes, deferring the
    /// subscription to the page ready signal when no provider is installed yet.
    pub fn new(
        page: Rc<P>,
        config: &AccountConfig,
        auth: AuthSlot,
        notifier: Option<Rc<dyn Notifier>>,
    ) -> Rc<Self> {
        let targets = PopupTargets {
            popup: page.select(&config.popup),
            trigger: page.select(&config.trigger),
            logged_out: page.select(&config.logged_out_view),
            logged_in: page.select(&config.logged_in_view),
            identifier: page.select(&config.user_identifier),
            sign_out: page.select(&config.sign_out),
        };
        let this = Rc::new(Self {
            page,
            targets,
            shown_class: config.shown_class.clone(),
            auth,
            binding: RefCell::new(AuthBinding::Unbound),
            signing_out: Cell::new(false),
            notifier,
        });

        if !this.bind_auth() {
            let weak = Rc::downgrade(&this);
            this.page.on_ready(Box::new(move || {
                if let Some(this) = weak.upgrade() {
                    if !this.bind_auth() {
                        log::debug!("no auth provider at ready; account popup refreshes on open only");
                    }
                }
            }));
        }
        this
    }

    /// Bind the account button, the sign-out button, and the document-level
    /// outside-click handler.
    pub fn initialize(self: &Rc<Self>) {
        if let Some(trigger) = &self.targets.trigger {
            let this = Rc::clone(self);
            self.page.listen(
                trigger,
                EventKind::Click,
                Box::new(move |event| {
                    this.open(Some(event));
                }),
            );
        }
        if let Some(sign_out) = &self.targets.sign_out {
            let this = Rc::clone(self);
            self.page.listen(
                sign_out,
                EventKind::Click,
                Box::new(move |_| {
                    this.sign_out();
                }),
            );
        }
        let this = Rc::clone(self);
        self.page.listen_document(
            EventKind::Click,
            Box::new(move |event| this.handle_outside_click(event)),
        );
    }

    /// Register the auth listener if a provider is available and we are not
    /// already bound. Returns whether the controller is bound afterwards.
    fn bind_auth(self: &Rc<Self>) -> bool {
        if self.binding.borrow().is_bound() {
            return true;
        }
        let Some(provider) = self.auth.get() else {
            return false;
        };

        let weak = Rc::downgrade(self);
        provider.on_auth_state_change(Rc::new(move || {
            if let Some(this) = weak.upgrade() {
                if !this.signing_out.get() {
                    this.refresh_display();
                }
            }
        }));
        *self.binding.borrow_mut() = AuthBinding::Bound(provider);
        log::debug!("account popup subscribed to auth state changes");
        true
    }

    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_bound()
    }

    fn provider(&self) -> Option<Rc<dyn AuthProvider>> {
        self.binding.borrow().provider().or_else(|| self.auth.get())
    }

    /// Re-read the auth snapshot and reflect it into the two views.
    pub fn refresh_display(&self) {
        let user = self.provider().and_then(|p| p.current_user());
        let signed_in = user.is_some();

        if let Some(view) = &self.targets.logged_out {
            view.set_style("display", Some(if signed_in { "none" } else { "block" }));
        }
        if let Some(view) = &self.targets.logged_in {
            view.set_style("display", Some(if signed_in { "block" } else { "none" }));
        }
        if let (Some(user), Some(node)) = (&user, &self.targets.identifier) {
            node.set_text(user.identifier());
        }
    }

    pub fn visibility(&self) -> PopupVisibility {
        let shown = self
            .targets
            .popup
            .as_ref()
            .is_some_and(|popup| popup.has_class(&self.shown_class));
        PopupVisibility::from_shown(shown)
    }

    /// Handle the account button: refresh the views, then flip visibility.
    ///
    /// Propagation is stopped so the same click never reaches the document
    /// outside-click handler.
    pub fn open(&self, event: Option<&P::Event>) -> PopupVisibility {
        if let Some(event) = event {
            event.stop_propagation();
        }
        self.refresh_display();
        match &self.targets.popup {
            Some(popup) => PopupVisibility::from_shown(popup.toggle_class(&self.shown_class)),
            None => PopupVisibility::Hidden,
        }
    }

    pub fn hide(&self) {
        if let Some(popup) = &self.targets.popup {
            popup.set_class(&self.shown_class, false);
        }
    }

    /// Sign out through the provider, refresh, hide, and reload the page.
    ///
    /// Providers usually notify listeners when the session ends. That
    /// notification is ignored here so the views are refreshed exactly once.
    ///
    /// When the provider rejects the sign-out the session is still live, so
    /// the reload is skipped and an error toast is shown instead.
    pub fn sign_out(&self) {
        self.signing_out.set(true);
        let result = match self.provider() {
            Some(provider) => provider.sign_out(),
            None => Ok(()),
        };
        self.signing_out.set(false);

        self.refresh_display();
        self.hide();

        match result {
            Ok(()) => self.page.reload(),
            Err(e) => {
                log::warn!("sign-out failed: {e}");
                if let Some(notifier) = &self.notifier {
                    notifier.notify(SIGN_OUT_FAILED, NotificationLevel::Error);
                }
            }
        }
    }

    /// Close the popup for clicks outside both the popup and its button.
    pub fn handle_outside_click(&self, event: &P::Event) {
        let Some(popup) = &self.targets.popup else {
            return;
        };
        if !popup.has_class(&self.shown_class) || self.page.contains_target(popup, event) {
            return;
        }
        if let Some(trigger) = &self.targets.trigger {
            if self.page.contains_target(trigger, event) {
                return;
            }
        }
        popup.set_class(&self.shown_class, false);
    }
}
