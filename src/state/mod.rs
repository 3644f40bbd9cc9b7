//! Client-side UI state.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` toggles, `auth` subscription binding) so
//! each controller depends on a small focused model.

pub mod auth;
pub mod ui;
