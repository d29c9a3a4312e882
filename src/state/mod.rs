//! Form state machines and validation.
//!
//! DESIGN
//! ======
//! Flow state is plain data so it can sit in a signal on the page and be
//! exercised directly in unit tests.

pub mod handle;
pub mod login;
pub mod set_password;
pub mod validation;
