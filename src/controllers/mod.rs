//! Imperative page controllers.
//!
//! DESIGN
//! ======
//! Each controller resolves its elements once at construction and treats a
//! missing element as a disabled capability. `initialize` binds DOM events;
//! every other operation is a plain method so the composition root and tests
//! can drive it directly.

pub mod account_popup;
pub mod navigation;
pub mod newsletter;
pub mod notifications;
