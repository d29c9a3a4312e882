//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ports for browser/environment concerns (routing, timers) so flow logic
//! can be driven without a DOM.

pub mod navigation;
pub mod timer;
