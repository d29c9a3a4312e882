//! Access from an in-flight submission back to its form state.
//!
//! DESIGN
//! ======
//! A submission outlives the event that started it. When the response lands
//! the form may already be gone, so drivers only ever reach the flow through
//! a handle that answers `None` once it has been disposed.

use std::cell::RefCell;
use std::rc::Weak;

use leptos::prelude::*;

pub trait FlowHandle<F> {
    /// Run `f` against the live flow, or return `None` if it was disposed.
    fn with_flow<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R>;
}

/// Page-owned flow state; disposed with the component's reactive owner.
impl<F> FlowHandle<F> for RwSignal<F>
where
    F: Send + Sync + 'static,
{
    fn with_flow<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<F> FlowHandle<F> for Weak<RefCell<F>> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        let cell = self.upgrade()?;
        let mut flow = cell.borrow_mut();
        Some(f(&mut flow))
    }
}
