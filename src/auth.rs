//! Authentication provider seam and the session-backed provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The account popup only ever reads auth state through [`AuthProvider`].
//! The provider is handed to the popup as an [`AuthSlot`], a shared nullable
//! reference that may be filled after the popup is built (for example when
//! the auth bootstrap finishes after the storefront mounts).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::AuthEndpoints;
use crate::net::types::AuthSnapshot;

/// Listener invoked after every sign-in/sign-out transition.
pub type AuthListener = Rc<dyn Fn()>;

/// Errors reported by an [`AuthProvider`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("sign-out was rejected: {0}")]
    SignOutRejected(String),
}

/// External source of truth for the signed-in user.
pub trait AuthProvider {
    /// Snapshot of the current user, `None` when signed out.
    fn current_user(&self) -> Option<AuthSnapshot>;

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the session could not be ended.
    fn sign_out(&self) -> Result<(), AuthError>;

    /// Register `listener` for auth state transitions.
    fn on_auth_state_change(&self, listener: AuthListener);
}

/// Shared, possibly-empty reference to the page's auth provider.
#[derive(Clone, Default)]
pub struct AuthSlot(Rc<RefCell<Option<Rc<dyn AuthProvider>>>>);

impl AuthSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(provider: Rc<dyn AuthProvider>) -> Self {
        let slot = Self::default();
        slot.install(provider);
        slot
    }

    /// Fill (or replace) the provider. Every clone of the slot observes it.
    pub fn install(&self, provider: Rc<dyn AuthProvider>) {
        *self.0.borrow_mut() = Some(provider);
    }

    pub fn get(&self) -> Option<Rc<dyn AuthProvider>> {
        self.0.borrow().clone()
    }

    pub fn is_installed(&self) -> bool {
        self.0.borrow().is_some()
    }
}

impl fmt::Debug for AuthSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSlot")
            .field("installed", &self.is_installed())
            .finish()
    }
}

/// Provider backed by the storefront's cookie session.
///
/// Caches the last known user; [`SessionAuth::refresh`] re-reads it from the
/// `me` endpoint. Listeners fire only when the cached user actually changes.
pub struct SessionAuth {
    endpoints: AuthEndpoints,
    user: RefCell<Option<AuthSnapshot>>,
    listeners: RefCell<Vec<AuthListener>>,
}

impl SessionAuth {
    pub fn new(endpoints: AuthEndpoints) -> Self {
        Self {
            endpoints,
            user: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Replace the cached user, notifying listeners on change.
    pub fn set_user(&self, user: Option<AuthSnapshot>) {
        {
            let mut current = self.user.borrow_mut();
            if *current == user {
                return;
            }
            *current = user;
        }
        self.notify();
    }

    /// Re-read the signed-in user from the server.
    pub async fn refresh(&self) {
        let user = crate::net::api::fetch_current_user(&self.endpoints.me).await;
        log::debug!("session refreshed: signed_in={}", user.is_some());
        self.set_user(user);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Listeners may read `current_user`, so release the borrow first.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl AuthProvider for SessionAuth {
    fn current_user(&self) -> Option<AuthSnapshot> {
        self.user.borrow().clone()
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        crate::net::api::send_logout(&self.endpoints.logout)?;
        self.set_user(None);
        Ok(())
    }

    fn on_auth_state_change(&self, listener: AuthListener) {
        self.listeners.borrow_mut().push(listener);
    }
}
