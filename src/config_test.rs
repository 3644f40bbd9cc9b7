use super::*;
use crate::dom::memory::{MemoryNode, MemoryPage};

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_storefront_markup() {
    let config = StorefrontConfig::default();
    assert_eq!(config.navigation.trigger, ".hamburger");
    assert_eq!(config.navigation.links, ".nav-links");
    assert_eq!(config.navigation.overlay, "#mobileOverlay");
    assert_eq!(config.navigation.open_class, "open");
    assert_eq!(config.navigation.shown_class, "show");
    assert_eq!(config.account.popup, "#accountPopup");
    assert_eq!(config.account.user_identifier, "#userEmail");
    assert_eq!(config.newsletter.source, "footer_form");
    assert_eq!(config.notifications.duration_ms, DEFAULT_TOAST_DURATION_MS);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = StorefrontConfig::from_json("{}").unwrap();
    assert_eq!(config, StorefrontConfig::default());
}

#[test]
fn partial_override_keeps_sibling_defaults() {
    let json = r#"{"navigation":{"open_class":"is-open"},"notifications":{"duration_ms":5000}}"#;
    let config = StorefrontConfig::from_json(json).unwrap();
    assert_eq!(config.navigation.open_class, "is-open");
    assert_eq!(config.navigation.links, ".nav-links");
    assert_eq!(config.notifications.duration_ms, 5000);
    assert_eq!(config.notifications.fade_ms, DEFAULT_TOAST_FADE_MS);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = StorefrontConfig::from_json(r#"{"theme":"dark","account":{"extra":1}}"#).unwrap();
    assert_eq!(config, StorefrontConfig::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = StorefrontConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn blank_required_field_is_rejected() {
    let err = StorefrontConfig::from_json(r#"{"account":{"popup":"  "}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "account.popup" }));
    assert_eq!(err.to_string(), "config field `account.popup` must not be empty");
}

#[test]
fn blank_scroll_lock_value_is_rejected() {
    // An empty value would clear the lock instead of setting it.
    let err = StorefrontConfig::from_json(r#"{"navigation":{"scroll_lock_value":""}}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Empty {
            field: "navigation.scroll_lock_value"
        }
    ));
}

// =============================================================
// Page loading
// =============================================================

#[test]
fn from_page_without_config_element_is_default() {
    let page = MemoryPage::new();
    assert_eq!(StorefrontConfig::from_page(&page).unwrap(), StorefrontConfig::default());
}

#[test]
fn from_page_reads_embedded_json() {
    let page = MemoryPage::new();
    page.mount(
        &MemoryNode::new("script")
            .with_id("storefront-config")
            .with_text(r#"{"newsletter":{"endpoint":"/api/v2/subscriptions"}}"#),
    );
    let config = StorefrontConfig::from_page(&page).unwrap();
    assert_eq!(config.newsletter.endpoint, "/api/v2/subscriptions");
}

#[test]
fn from_page_or_default_recovers_from_bad_json() {
    let page = MemoryPage::new();
    page.mount(&MemoryNode::new("script").with_id("storefront-config").with_text("[1, 2"));
    assert_eq!(StorefrontConfig::from_page_or_default(&page), StorefrontConfig::default());
}
