//! Two-state toggles owned by the storefront controllers.
//!
//! Neither value is persisted. Both start in their closed/hidden state on
//! page load and are reflected into the DOM by the owning controller.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn from_open(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Closed }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Resolve a toggle request: a forced value wins, otherwise flip.
    #[must_use]
    pub fn next(self, force: Option<bool>) -> Self {
        match force {
            Some(open) => Self::from_open(open),
            None => Self::from_open(!self.is_open()),
        }
    }
}

/// Visibility of the account popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PopupVisibility {
    pub fn from_shown(is_shown: bool) -> Self {
        if is_shown { Self::Shown } else { Self::Hidden }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}
