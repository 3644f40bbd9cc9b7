//! # storefront
//!
//! Client-side UI for the storefront pages: the mobile navigation drawer,
//! the account popup, and the footer newsletter form.
//!
//! Controllers are written against the [`dom::Page`] abstraction. Under the
//! `hydrate` feature they drive the live document through `web-sys`; in every
//! other build (including tests) they drive [`dom::memory::MemoryPage`].

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod net;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
