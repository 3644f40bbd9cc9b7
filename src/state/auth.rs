//! Subscription state between the account popup and the auth provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::rc::Rc;

use crate::auth::AuthProvider;

/// Two-phase binding of a consumer to the auth provider.
///
/// Starts `Unbound`; moves to `Bound` exactly once, when a listener has been
/// registered with the provider. There is no transition back.
#[derive(Clone, Default)]
pub enum AuthBinding {
    #[default]
    Unbound,
    Bound(Rc<dyn AuthProvider>),
}

impl AuthBinding {
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    pub fn provider(&self) -> Option<Rc<dyn AuthProvider>> {
        match self {
            Self::Unbound => None,
            Self::Bound(provider) => Some(Rc::clone(provider)),
        }
    }
}

impl fmt::Debug for AuthBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbound => f.write_str("Unbound"),
            Self::Bound(_) => f.write_str("Bound"),
        }
    }
}
