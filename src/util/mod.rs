//! Utility helpers shared across storefront modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller
//! logic to improve reuse and testability.

pub mod task;
