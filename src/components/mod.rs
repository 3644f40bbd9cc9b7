//! Leptos components rendering the storefront chrome.
//!
//! The markup carries the ids, classes, and attributes the controllers look
//! up through [`crate::config::StorefrontConfig::default`]; keep the two in
//! step when renaming anything here.

pub mod account_popup;
pub mod newsletter_form;
pub mod site_header;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
