//! Static site content: menu, gallery, and restaurant details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content is compiled into the binary as `'static` data so pages render the
//! same markup on the server and during hydration without any fetch.

pub mod gallery;
pub mod menu;
pub mod site;
