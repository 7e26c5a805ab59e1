//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has a single outbound call: the reservation relay in `web3forms`.

pub mod web3forms;
