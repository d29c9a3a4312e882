//! Networking modules for the auth form submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` turns form input into one request and one normalized outcome,
//! `transport` performs the HTTP exchange, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
