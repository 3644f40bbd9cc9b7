//! Network-facing types and REST helpers.
//!
//! DESIGN
//! ======
//! `types` holds the JSON shapes shared with the storefront API; `api` holds
//! the browser calls, with non-browser builds compiled to inert stubs.

pub mod api;
pub mod types;
