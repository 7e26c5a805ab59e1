//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared site chrome (navbar, footer, scroll button)
//! and the building blocks pages compose. Each owns its own local state.

pub mod footer;
pub mod lightbox;
pub mod navbar;
pub mod page_header;
pub mod reveal;
pub mod scroll_to_top;
