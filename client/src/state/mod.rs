//! UI state machines for the interactive parts of the site.
//!
//! ARCHITECTURE
//! ============
//! Each controller is a plain struct with synchronous transitions. The owning
//! component wraps it in an `RwSignal` and feeds it browser events; nothing
//! here touches the DOM, so every transition is unit-testable natively.

pub mod gallery;
pub mod menu_scroll;
pub mod nav;
pub mod reservation;
