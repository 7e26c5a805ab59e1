//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` wraps window scrolling, the body scroll lock and intersection
//! watches, with no-op fallbacks for the server build. `format` holds
//! display helpers.

pub mod dom;
pub mod format;
