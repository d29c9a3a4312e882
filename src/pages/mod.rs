//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signal and wires DOM events to the flow drivers
//! in `state`; the flows themselves never touch the DOM.

pub mod login;
pub mod set_password;
