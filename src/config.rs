//! Storefront configuration: selectors, class names, and endpoints.
//!
//! Defaults match the markup rendered by [`crate::components`]. A page may
//! override any subset by embedding JSON in
//! `<script id="storefront-config" type="application/json">`; missing keys
//! keep their defaults and unknown keys are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::dom::{Element, Page};

/// Selector of the element holding JSON overrides.
pub const CONFIG_ELEMENT: &str = "#storefront-config";

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_TOAST_FADE_MS: u32 = 300;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid storefront config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub navigation: NavigationConfig,
    pub account: AccountConfig,
    pub newsletter: NewsletterConfig,
    pub auth: AuthEndpoints,
    pub notifications: NotificationConfig,
}

/// Mobile navigation drawer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub trigger: String,
    pub links: String,
    pub overlay: String,
    /// Class set on the links container while open.
    pub open_class: String,
    /// Class set on the overlay while open.
    pub shown_class: String,
    pub scroll_lock_property: String,
    pub scroll_lock_value: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            trigger: ".hamburger".to_owned(),
            links: ".nav-links".to_owned(),
            overlay: "#mobileOverlay".to_owned(),
            open_class: "open".to_owned(),
            shown_class: "show".to_owned(),
            scroll_lock_property: "overflow".to_owned(),
            scroll_lock_value: "hidden".to_owned(),
        }
    }
}

/// Account popup and its two views.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub popup: String,
    pub trigger: String,
    pub logged_out_view: String,
    pub logged_in_view: String,
    pub user_identifier: String,
    pub sign_out: String,
    pub shown_class: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            popup: "#accountPopup".to_owned(),
            trigger: "[aria-label=\"User account\"]".to_owned(),
            logged_out_view: "#loggedOutState".to_owned(),
            logged_in_view: "#loggedInState".to_owned(),
            user_identifier: "#userEmail".to_owned(),
            sign_out: "[data-action=\"sign-out\"]".to_owned(),
            shown_class: "show".to_owned(),
        }
    }
}

/// Footer newsletter form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub form: String,
    /// Resolved inside `form`.
    pub input: String,
    /// Resolved inside `form`.
    pub submit: String,
    pub endpoint: String,
    pub source: String,
    pub busy_label: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            form: ".newsletter-form".to_owned(),
            input: ".newsletter-input".to_owned(),
            submit: ".newsletter-submit".to_owned(),
            endpoint: "/api/v1/subscriptions".to_owned(),
            source: "footer_form".to_owned(),
            busy_label: "Subscribing...".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthEndpoints {
    pub me: String,
    pub logout: String,
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            me: "/api/v1/auth/me".to_owned(),
            logout: "/api/v1/auth/logout".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub container_id: String,
    pub duration_ms: u32,
    pub fade_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            container_id: "notification-container".to_owned(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            fade_ms: DEFAULT_TOAST_FADE_MS,
        }
    }
}

impl StorefrontConfig {
    /// Parse JSON overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Empty`] when an override blanks a required field.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the page's [`CONFIG_ELEMENT`], if it has one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_json`].
    pub fn from_page<P: Page>(page: &P) -> Result<Self, ConfigError> {
        match page.select(CONFIG_ELEMENT) {
            Some(node) if !node.text().trim().is_empty() => Self::from_json(&node.text()),
            _ => Ok(Self::default()),
        }
    }

    /// Like [`Self::from_page`], falling back to defaults on error.
    pub fn from_page_or_default<P: Page>(page: &P) -> Self {
        Self::from_page(page).unwrap_or_else(|e| {
            log::warn!("ignoring storefront config: {e}");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("navigation.trigger", &self.navigation.trigger),
            ("navigation.links", &self.navigation.links),
            ("navigation.overlay", &self.navigation.overlay),
            ("navigation.open_class", &self.navigation.open_class),
            ("navigation.shown_class", &self.navigation.shown_class),
            ("navigation.scroll_lock_property", &self.navigation.scroll_lock_property),
            ("navigation.scroll_lock_value", &self.navigation.scroll_lock_value),
            ("account.popup", &self.account.popup),
            ("account.shown_class", &self.account.shown_class),
            ("newsletter.form", &self.newsletter.form),
            ("newsletter.endpoint", &self.newsletter.endpoint),
            ("auth.me", &self.auth.me),
            ("auth.logout", &self.auth.logout),
            ("notifications.container_id", &self.notifications.container_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        Ok(())
    }
}
