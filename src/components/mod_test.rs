use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::account_popup::AccountPopup;
use super::newsletter_form::NewsletterForm;
use super::site_header::SiteHeader;
use crate::config::StorefrontConfig;

/// Attribute text a simple selector should match in rendered HTML.
fn expected_attr(selector: &str) -> String {
    if let Some(id) = selector.strip_prefix('#') {
        format!("id=\"{id}\"")
    } else if let Some(class) = selector.strip_prefix('.') {
        format!("class=\"{class}\"")
    } else {
        selector.trim_start_matches('[').trim_end_matches(']').to_owned()
    }
}

fn assert_renders(html: &str, selectors: &[&String]) {
    for selector in selectors {
        let attr = expected_attr(selector);
        assert!(html.contains(&attr), "missing {attr} in {html}");
    }
}

#[test]
fn site_header_carries_navigation_hooks() {
    let html = Owner::new().with(|| view! { <SiteHeader/> }.to_html());
    let nav = StorefrontConfig::default().navigation;
    let account = StorefrontConfig::default().account;
    assert_renders(&html, &[&nav.trigger, &nav.links, &account.trigger]);
    assert!(html.contains("id=\"mobileOverlay\""));
}

#[test]
fn account_popup_carries_both_views() {
    let html = Owner::new().with(|| view! { <AccountPopup/> }.to_html());
    let account = StorefrontConfig::default().account;
    assert_renders(
        &html,
        &[
            &account.popup,
            &account.logged_out_view,
            &account.logged_in_view,
            &account.user_identifier,
            &account.sign_out,
        ],
    );
}

#[test]
fn newsletter_form_carries_form_input_and_submit() {
    let html = Owner::new().with(|| view! { <NewsletterForm/> }.to_html());
    let newsletter = StorefrontConfig::default().newsletter;
    assert_renders(&html, &[&newsletter.form, &newsletter.input, &newsletter.submit]);
}

#[test]
fn expected_attr_maps_selector_forms() {
    assert_eq!(expected_attr("#userEmail"), "id=\"userEmail\"");
    assert_eq!(expected_attr(".hamburger"), "class=\"hamburger\"");
    assert_eq!(expected_attr("[data-action=\"sign-out\"]"), "data-action=\"sign-out\"");
}
