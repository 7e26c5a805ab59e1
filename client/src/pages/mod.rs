//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates shared chrome to
//! `components`. Interactive pages keep their controller in a local
//! `RwSignal` built from a pure state type in `state`.

pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod menu;
pub mod not_found;
